mod config;
mod difficulty;
mod engine;
mod error;
mod food;
mod game;
mod grid;
mod session;
mod snake;
mod term;

use std::fs::File;

use anyhow::{Context, Result};
use log::{error, info};
use simplelog::{Config, LevelFilter, WriteLogger};

use config::BodyConfig;
use game::SnakeGame;
use grid::Grid;
use term::TermManager;

pub type TermInt = u16;
pub type Coords = (i32, i32);

fn main() -> Result<()> {
    // The terminal is the game screen, so logs go to a file
    WriteLogger::init(LevelFilter::Info, Config::default(), File::create(config::LOG_FILE)?)?;
    info!("Starting snake");

    let mut term = TermManager::new().context("Error reading terminal size")?;
    term.setup().context("Error preparing terminal")?;

    let res = SnakeGame::new(&mut term, Grid::default(), BodyConfig::default())
        .and_then(|mut game| game.run());

    // Restore before reporting anything, whatever happened in the game
    term.restore().context("Error restoring terminal")?;

    if let Err(e) = &res {
        error!("{:#}", e);
    }
    info!("Exiting");
    res
}
