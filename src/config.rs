use crate::Coords;
use crate::snake::Direction;

pub const GRID_WIDTH: i32 = 40;
pub const GRID_HEIGHT: i32 = 20;
pub const CELL_SIZE: u32 = 10;

pub const INITIAL_SNAKE_LENGTH: usize = 4;
pub const INITIAL_HEAD: Coords = (4, 5);
pub const INITIAL_DIRECTION: Direction = Direction::Right;

pub const LOG_FILE: &str = "snake.log";

/// How the body is laid out when a session starts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BodyConfig {
    pub length: usize,
    pub head: Coords,
    pub direction: Direction,
}

impl Default for BodyConfig {
    fn default() -> Self {
        BodyConfig { length: INITIAL_SNAKE_LENGTH, head: INITIAL_HEAD, direction: INITIAL_DIRECTION }
    }
}
