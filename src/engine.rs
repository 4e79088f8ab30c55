use crate::Coords;
use crate::config::BodyConfig;
use crate::error::ConfigResult;
use crate::food::Food;
use crate::grid::Grid;
use crate::snake::{Direction, SnakeBody};

use log::{debug, info};
use rand::rngs::StdRng;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Body,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EngineState {
    Running,
    Collided(Collision),
    /// The body covers every cell, leaving nowhere for food.
    Filled,
}

/// What the presentation layer gets after every tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub segments: Vec<Coords>,
    pub head_direction: Direction,
    pub food: Coords,
    pub score: u32,
    pub alive: bool,
    pub state: EngineState,
}

pub struct SimulationEngine {
    grid: Grid,
    body: SnakeBody,
    food: Food,
    score: u32,
    state: EngineState,
    steering: Option<Direction>,
    rng: StdRng,
}

impl SimulationEngine {
    pub fn new(grid: Grid, config: BodyConfig, mut rng: StdRng) -> ConfigResult<Self> {
        let body = SnakeBody::initialize(config.length, config.head, config.direction, &grid)?;
        let occupied: Vec<Coords> = body.positions().collect();
        let food = Food::spawn(&occupied, &grid, &mut rng);

        Ok(SimulationEngine { grid, body, food, score: 0, state: EngineState::Running, steering: None, rng })
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Queues a head direction for the next tick. Only the latest one counts.
    pub fn steer(&mut self, direction: Direction) {
        self.steering = Some(direction);
    }

    pub fn tick(&mut self) -> Snapshot {
        if self.state != EngineState::Running {
            return self.snapshot();
        }

        if let Some(direction) = self.steering.take() {
            self.body.set_head_direction(direction);
        }

        self.body.move_step();

        if let Some(collision) = self.collision() {
            info!("snake hit {:?} at {:?}, final score {}", collision, self.body.head(), self.score);
            self.state = EngineState::Collided(collision);
            return self.snapshot();
        }

        if self.body.head() == self.food.position() {
            self.score += 1;
            self.body.grow_after_eat();

            if self.body.len() >= self.grid.cell_count() {
                info!("snake fills the board, final score {}", self.score);
                self.state = EngineState::Filled;
                return self.snapshot();
            }

            let occupied: Vec<Coords> = self.body.positions().collect();
            self.food.place_randomly(&occupied, &self.grid, &mut self.rng);
            debug!("ate food, score {}, length {}", self.score, self.body.len());
        }

        self.snapshot()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            segments: self.body.positions().collect(),
            head_direction: self.body.head_direction(),
            food: self.food.position(),
            score: self.score,
            alive: !matches!(self.state, EngineState::Collided(_)),
            state: self.state,
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn collision(&self) -> Option<Collision> {
        let head = self.body.head();

        if !self.grid.contains(head) {
            Some(Collision::Wall)
        } else if self.body.positions().skip(1).any(|pos| pos == head) {
            Some(Collision::Body)
        } else {
            None
        }
    }

    #[cfg(test)]
    pub(crate) fn place_food_at(&mut self, pos: Coords) {
        self.food = Food::at(pos);
    }
}
