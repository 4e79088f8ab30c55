use crate::Coords;
use crate::grid::Grid;
use crate::error::{ConfigError, ConfigResult};
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn offset(self) -> Coords {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    /// The cell one step away from `pos` in this direction.
    pub fn advance(self, pos: Coords) -> Coords {
        let diff = self.offset();
        (pos.0 + diff.0, pos.1 + diff.1)
    }

    pub fn head_char(self) -> char {
        match self {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}

/// One occupied cell of the body and the direction it will travel next.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub position: Coords,
    pub direction: Direction,
}

/// The snake itself. Index 0 is the head.
#[derive(Clone, Debug)]
pub struct SnakeBody {
    segments: Vec<Segment>,
    // Where the tail was before the last move, and the direction it took from there
    trail: Segment,
}

impl SnakeBody {
    /// Lays out `length` segments with the head at `head`, trailing away from `direction`.
    pub fn initialize(length: usize, head: Coords, direction: Direction, grid: &Grid) -> ConfigResult<Self> {
        if length < 1 {
            return Err(ConfigError::InvalidConfiguration("snake length must be at least 1".into()));
        }
        if grid.cell_count() < length + 1 {
            return Err(ConfigError::InvalidConfiguration(format!(
                "a {}x{} grid has no room for a snake of length {} and its food",
                grid.width(), grid.height(), length)));
        }

        let back = direction.opposite().offset();
        let segments: Vec<Segment> = (0..length as i32)
            .map(|i| (head.0 + back.0 * i, head.1 + back.1 * i))
            .map(|position| Segment { position, direction })
            .collect();

        if let Some(outside) = segments.iter().find(|s| !grid.contains(s.position)) {
            return Err(ConfigError::InvalidConfiguration(format!(
                "initial body leaves the grid at {:?}", outside.position)));
        }

        let tail = segments[segments.len() - 1];
        let trail = Segment { position: direction.opposite().advance(tail.position), direction };

        Ok(SnakeBody { segments, trail })
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn head(&self) -> Coords {
        self.segments[0].position
    }

    pub fn head_direction(&self) -> Direction {
        self.segments[0].direction
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.segments.iter()
    }

    pub fn positions(&self) -> impl Iterator<Item = Coords> + '_ {
        self.segments().map(|s| s.position)
    }

    /// Any direction is accepted, including a straight reversal.
    pub fn set_head_direction(&mut self, direction: Direction) {
        self.segments[0].direction = direction;
    }

    /// Advances every segment one cell along its own direction, then hands each
    /// segment the direction its predecessor had before the move.
    pub fn move_step(&mut self) {
        let previous: Vec<Direction> = self.segments.iter().map(|s| s.direction).collect();
        self.trail = *self.tail();

        for (i, segment) in self.segments.iter_mut().enumerate() {
            segment.position = segment.direction.advance(segment.position);
            if i > 0 {
                segment.direction = previous[i - 1];
            }
        }
    }

    /// Puts a new segment on the cell the tail just left, heading the way the tail went.
    pub fn grow_after_eat(&mut self) {
        let grown = self.trail;
        self.segments.push(grown);
        self.trail = Segment { position: grown.direction.opposite().advance(grown.position), ..grown };
    }

    ///////////////////////////////////////////////////////////////////////////

    fn tail(&self) -> &Segment {
        // Never empty: `initialize` rejects zero lengths and nothing removes segments
        &self.segments[self.segments.len() - 1]
    }
}
