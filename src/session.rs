use std::time::Duration;

use crate::config::BodyConfig;
use crate::difficulty::Difficulty;
use crate::engine::{EngineState, SimulationEngine, Snapshot};
use crate::error::ConfigResult;
use crate::grid::Grid;
use crate::snake::Direction;

use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Menu,
    Playing,
    GameOver,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    SteerLeft,
    SteerRight,
    SteerUp,
    SteerDown,
    Start(Difficulty),
    Quit,
}

impl Command {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Command::SteerLeft => Some(Direction::Left),
            Command::SteerRight => Some(Direction::Right),
            Command::SteerUp => Some(Direction::Up),
            Command::SteerDown => Some(Direction::Down),
            _ => None,
        }
    }
}

/// One run from the menu to game over. Playing again means building a new session.
pub struct GameSession {
    state: SessionState,
    grid: Grid,
    body: BodyConfig,
    seed: u64,
    difficulty: Option<Difficulty>,
    engine: Option<SimulationEngine>,
    quit: bool,
}

impl GameSession {
    pub fn new(grid: Grid, body: BodyConfig, seed: u64) -> Self {
        GameSession { state: SessionState::Menu, grid, body, seed, difficulty: None, engine: None, quit: false }
    }

    pub fn from_random(grid: Grid, body: BodyConfig) -> Self {
        Self::new(grid, body, rand::thread_rng().gen())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn score(&self) -> u32 {
        self.engine.as_ref().map_or(0, |e| e.score())
    }

    pub fn tick_interval(&self) -> Option<Duration> {
        self.difficulty.map(Difficulty::tick_interval)
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        self.engine.as_ref().map(|e| e.snapshot())
    }

    /// Applies one input command. Commands that make no sense in the current
    /// state are ignored; only a bad body layout on start is an error.
    pub fn handle(&mut self, command: Command) -> ConfigResult<()> {
        match (self.state, command) {
            (_, Command::Quit) => {
                info!("quit requested while in {:?}", self.state);
                self.quit = true;
            },
            (SessionState::Menu, Command::Start(difficulty)) => self.start(difficulty)?,
            (SessionState::Playing, cmd) => {
                if let (Some(direction), Some(engine)) = (cmd.direction(), self.engine.as_mut()) {
                    engine.steer(direction);
                }
            },
            (state, cmd) => debug!("ignoring {:?} while in {:?}", cmd, state),
        }

        Ok(())
    }

    /// Advances the game by one step. Returns `None` unless a game is running.
    pub fn tick(&mut self) -> Option<Snapshot> {
        if self.state != SessionState::Playing {
            return None;
        }

        let engine = self.engine.as_mut()?;
        let snap = engine.tick();

        if snap.state != EngineState::Running {
            info!("game over ({:?}) with score {}", snap.state, snap.score);
            self.state = SessionState::GameOver;
        }

        Some(snap)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn start(&mut self, difficulty: Difficulty) -> ConfigResult<()> {
        let engine = SimulationEngine::new(self.grid, self.body, StdRng::seed_from_u64(self.seed))?;

        info!("starting {} game on a {}x{} grid ({}px cells)",
              difficulty, self.grid.width(), self.grid.height(), self.grid.cell_size());

        self.engine = Some(engine);
        self.difficulty = Some(difficulty);
        self.state = SessionState::Playing;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction::*;

    fn session() -> GameSession {
        GameSession::new(Grid::default(), BodyConfig::default(), 42)
    }

    #[test]
    fn starts_in_menu() {
        let mut s = session();
        assert_eq!(s.state(), SessionState::Menu);
        assert_eq!(s.tick(), None);
        assert_eq!(s.tick_interval(), None);
        assert_eq!(s.score(), 0);

        s.handle(Command::SteerUp).unwrap();
        assert_eq!(s.state(), SessionState::Menu);
        assert!(s.snapshot().is_none());
    }

    #[test]
    fn start_enters_playing() {
        let mut s = session();
        s.handle(Command::Start(Difficulty::Hard)).unwrap();
        assert_eq!(s.state(), SessionState::Playing);
        assert_eq!(s.difficulty(), Some(Difficulty::Hard));
        assert_eq!(s.tick_interval(), Some(Duration::from_millis(60)));
        assert!(s.snapshot().unwrap().alive);
    }

    #[test]
    fn bad_layout_fails_to_start() {
        let body = BodyConfig { length: 0, ..BodyConfig::default() };
        let mut s = GameSession::new(Grid::default(), body, 1);
        assert!(s.handle(Command::Start(Difficulty::Easy)).is_err());
        assert_eq!(s.state(), SessionState::Menu);
    }

    #[test]
    fn steering_reaches_the_head() {
        let mut s = session();
        s.handle(Command::Start(Difficulty::Easy)).unwrap();
        s.handle(Command::SteerDown).unwrap();
        let snap = s.tick().unwrap();
        assert_eq!(snap.head_direction, Down);
        assert_eq!(snap.segments[0], (4, 6));
    }

    #[test]
    fn collision_ends_the_session() {
        let mut s = session();
        s.handle(Command::Start(Difficulty::Medium)).unwrap();
        s.handle(Command::SteerLeft).unwrap();

        let snap = s.tick().unwrap();
        assert!(!snap.alive);
        assert_eq!(s.state(), SessionState::GameOver);

        // terminal: no more ticks, no restart
        assert_eq!(s.tick(), None);
        s.handle(Command::Start(Difficulty::Easy)).unwrap();
        assert_eq!(s.state(), SessionState::GameOver);
        assert_eq!(s.difficulty(), Some(Difficulty::Medium));
    }

    #[test]
    fn full_board_ends_the_session() {
        let body = BodyConfig { length: 2, head: (1, 0), direction: Direction::Right };
        let mut s = GameSession::new(Grid::new(3, 1, 10).unwrap(), body, 3);
        s.handle(Command::Start(Difficulty::Easy)).unwrap();

        let snap = s.tick().unwrap();
        assert_eq!(snap.state, EngineState::Filled);
        assert_eq!(s.state(), SessionState::GameOver);
        assert_eq!(s.score(), 1);
        assert_eq!(s.tick(), None);
    }

    #[test]
    fn quit_from_any_state() {
        let mut menu = session();
        menu.handle(Command::Quit).unwrap();
        assert!(menu.quit_requested());

        let mut playing = session();
        playing.handle(Command::Start(Difficulty::Easy)).unwrap();
        playing.handle(Command::Quit).unwrap();
        assert!(playing.quit_requested());
        assert_eq!(playing.state(), SessionState::Playing);

        let mut over = session();
        over.handle(Command::Start(Difficulty::Easy)).unwrap();
        over.handle(Command::SteerLeft).unwrap();
        over.tick();
        over.handle(Command::Quit).unwrap();
        assert!(over.quit_requested());
    }

    #[test]
    fn same_seed_same_game() {
        let mut a = session();
        let mut b = session();
        a.handle(Command::Start(Difficulty::Easy)).unwrap();
        b.handle(Command::Start(Difficulty::Easy)).unwrap();
        assert_eq!(a.seed(), b.seed());
        assert_eq!(a.snapshot(), b.snapshot());
    }
}
