use std::{thread::sleep, time::{Duration, Instant}};

use crate::{Coords, TermInt};
use crate::config::BodyConfig;
use crate::difficulty::Difficulty;
use crate::engine::{EngineState, Snapshot};
use crate::grid::Grid;
use crate::session::{Command, GameSession, SessionState};
use crate::term::{TermCoords, TermManager};

use anyhow::{bail, Result};
use crossterm::event::{KeyEvent, KeyModifiers, KeyCode};
use log::info;

const POLL_INTERVAL_MS: u64 = 5;

// Row 0 holds the score, the frame starts on row 1
const BOARD_TOP_LEFT: TermCoords = (0, 1);

const SNAKE_BODY_CHAR: char = '█';
const FOOD_CHAR: char = 'O';
const DEAD_SNAKE_CHAR: char = 'X';

enum Outcome {
    PlayAgain,
    Quit,
}

pub struct SnakeGame<'a> {
    term: &'a mut TermManager,
    grid: Grid,
    body: BodyConfig,
    selected: Difficulty,
    last_frame: Option<Snapshot>,
}

impl<'a> SnakeGame<'a> {
    pub fn new(term: &'a mut TermManager, grid: Grid, body: BodyConfig) -> Result<Self> {
        let (w, h) = term.get_terminal_size();
        let (need_w, need_h) = (grid.width() + 2, grid.height() + 3);

        if (w as i32) < need_w || (h as i32) < need_h {
            bail!("terminal is {}x{}, the board needs at least {}x{}", w, h, need_w, need_h);
        }

        Ok(SnakeGame { term, grid, body, selected: Difficulty::default(), last_frame: None })
    }

    /// Plays sessions back to back until the player quits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let mut session = GameSession::from_random(self.grid, self.body);
            info!("new session, seed {}", session.seed());

            match self.play_session(&mut session)? {
                Outcome::PlayAgain => {},
                Outcome::Quit => break,
            }
        }

        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn play_session(&mut self, session: &mut GameSession) -> Result<Outcome> {
        self.menu(session)?;
        if session.quit_requested() {
            return Ok(Outcome::Quit);
        }

        self.play(session)?;
        if session.quit_requested() {
            return Ok(Outcome::Quit);
        }

        self.game_over(session)
    }

    fn menu(&mut self, session: &mut GameSession) -> Result<()> {
        self.term.clear()?;

        while session.state() == SessionState::Menu && !session.quit_requested() {
            let options = Difficulty::ALL.iter()
                .map(|&d| if d == self.selected { format!("[{}]", d) } else { format!(" {} ", d) })
                .collect::<Vec<_>>()
                .join(" ");

            self.term.show_message(&[
                "CHOOSE THE DIFFICULTY",
                "",
                options.as_str(),
                "",
                "Left/Right to choose, Enter to start",
                "Esc to quit",
            ])?;

            let key_ev = self.term.read_key_blocking()?;
            match key_ev.code {
                _ if is_quit(&key_ev) => session.handle(Command::Quit)?,
                KeyCode::Left | KeyCode::Char('a') => self.selected = self.selected.previous(),
                KeyCode::Right | KeyCode::Char('d') => self.selected = self.selected.next(),
                KeyCode::Enter | KeyCode::Char(' ') => session.handle(Command::Start(self.selected))?,
                _ => {}
            }
        }

        Ok(())
    }

    fn play(&mut self, session: &mut GameSession) -> Result<()> {
        self.term.clear()?;
        let frame = (self.grid.width() as TermInt + 2, self.grid.height() as TermInt + 2);
        self.term.draw_borders(BOARD_TOP_LEFT, frame)?;

        self.last_frame = None;
        if let Some(snap) = session.snapshot() {
            self.draw_frame(&snap)?;
        }

        let interval = match session.tick_interval() {
            Some(interval) => interval,
            None => return Ok(()),
        };
        let mut last_tick = Instant::now();

        loop {
            sleep(Duration::from_millis(POLL_INTERVAL_MS));

            for key_ev in self.term.read_key_events_queue()? {
                if let Some(cmd) = play_command(&key_ev) {
                    session.handle(cmd)?;
                }
            }

            if session.quit_requested() {
                return Ok(());
            }

            if last_tick.elapsed() < interval {
                continue;
            }
            last_tick = Instant::now();

            match session.tick() {
                Some(snap) => {
                    self.draw_frame(&snap)?;
                    if snap.state != EngineState::Running {
                        return Ok(());
                    }
                },
                None => return Ok(()),
            }
        } // Game loop
    }

    fn game_over(&mut self, session: &mut GameSession) -> Result<Outcome> {
        let won = matches!(session.snapshot(), Some(Snapshot { state: EngineState::Filled, .. }));
        let score = format!("SCORE: {}", session.score());
        let difficulty = session.difficulty().map(|d| d.to_string()).unwrap_or_default();
        self.term.show_message(&[
            if won {"You won!"} else {"Game over!"},
            score.as_str(),
            difficulty.as_str(),
            "",
            "Enter to play again,",
            "or Esc to quit.",
        ])?;

        loop {
            let key_ev = self.term.read_key_blocking()?;
            if is_quit(&key_ev) {
                session.handle(Command::Quit)?;
                return Ok(Outcome::Quit);
            }
            if key_ev.code == KeyCode::Enter {
                return Ok(Outcome::PlayAgain);
            }
        }
    }

    fn draw_frame(&mut self, snap: &Snapshot) -> Result<()> {
        if let Some(prev) = self.last_frame.take() {
            for pos in prev.segments.iter().chain(std::iter::once(&prev.food)) {
                self.print_cell(*pos, ' ')?;
            }
        }

        self.print_cell(snap.food, FOOD_CHAR)?;

        for (i, pos) in snap.segments.iter().enumerate().rev() {
            let ch = match (snap.alive, i) {
                (false, _) => DEAD_SNAKE_CHAR,
                (true, 0) => snap.head_direction.head_char(),
                (true, _) => SNAKE_BODY_CHAR,
            };
            self.print_cell(*pos, ch)?;
        }

        self.term.print_str_at((1, 0), &format!("SCORE: {}", snap.score))?;
        self.term.flush()?;

        self.last_frame = Some(snap.clone());
        Ok(())
    }

    fn print_cell(&mut self, pos: Coords, ch: char) -> Result<()> {
        // A head that left the board is not drawn over the frame
        if self.grid.contains(pos) {
            let x = BOARD_TOP_LEFT.0 + 1 + pos.0 as TermInt;
            let y = BOARD_TOP_LEFT.1 + 1 + pos.1 as TermInt;
            self.term.print_at((x, y), ch)?;
        }
        Ok(())
    }
}

fn play_command(ev: &KeyEvent) -> Option<Command> {
    if is_quit(ev) {
        return Some(Command::Quit);
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Some(Command::SteerUp),
        KeyCode::Char('a') | KeyCode::Left => Some(Command::SteerLeft),
        KeyCode::Char('s') | KeyCode::Down => Some(Command::SteerDown),
        KeyCode::Char('d') | KeyCode::Right => Some(Command::SteerRight),
        _ => None,
    }
}

fn is_quit(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Esc, .. })
        || matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent { code, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn arrows_and_wasd_steer() {
        assert_eq!(play_command(&key(KeyCode::Up)), Some(Command::SteerUp));
        assert_eq!(play_command(&key(KeyCode::Char('a'))), Some(Command::SteerLeft));
        assert_eq!(play_command(&key(KeyCode::Down)), Some(Command::SteerDown));
        assert_eq!(play_command(&key(KeyCode::Char('d'))), Some(Command::SteerRight));
        assert_eq!(play_command(&key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        assert_eq!(play_command(&key(KeyCode::Esc)), Some(Command::Quit));

        let ctrl_c = KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL };
        assert_eq!(play_command(&ctrl_c), Some(Command::Quit));
        assert!(!is_quit(&key(KeyCode::Char('c'))));
    }
}
