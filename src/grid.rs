use crate::Coords;
use crate::config::{CELL_SIZE, GRID_HEIGHT, GRID_WIDTH};
use crate::error::{ConfigError, ConfigResult};

use rand::Rng;

/// Rectangular board measured in cells. Cell `(0, 0)` is the top left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cell_size: u32,
}

impl Grid {
    pub fn new(width: i32, height: i32, cell_size: u32) -> ConfigResult<Self> {
        if width < 1 || height < 1 {
            return Err(ConfigError::InvalidConfiguration(
                format!("grid must be at least 1x1 cells, got {}x{}", width, height)));
        }
        if cell_size == 0 {
            return Err(ConfigError::InvalidConfiguration("cell size must be positive".into()));
        }

        Ok(Grid { width, height, cell_size })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, pos: Coords) -> bool {
        pos.0 >= 0 && pos.1 >= 0 && pos.0 < self.width && pos.1 < self.height
    }

    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Coords {
        (rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid { width: GRID_WIDTH, height: GRID_HEIGHT, cell_size: CELL_SIZE }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn rejects_degenerate_grids() {
        assert!(Grid::new(0, 10, 10).is_err());
        assert!(Grid::new(10, -1, 10).is_err());
        assert!(Grid::new(10, 10, 0).is_err());
        assert!(Grid::new(1, 1, 1).is_ok());
    }

    #[test]
    fn default_board_is_40_by_20() {
        let grid = Grid::default();
        assert_eq!((grid.width(), grid.height(), grid.cell_size()), (40, 20, 10));
        assert_eq!(grid.cell_count(), 800);
    }

    #[test]
    fn bounds() {
        let grid = Grid::default();
        assert!(grid.contains((0, 0)));
        assert!(grid.contains((39, 19)));
        assert!(!grid.contains((40, 0)));
        assert!(!grid.contains((0, 20)));
        assert!(!grid.contains((-1, 5)));
        assert!(!grid.contains((5, -1)));
    }

    #[test]
    fn random_cells_stay_inside() {
        let grid = Grid::new(3, 2, 10).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            assert!(grid.contains(grid.random_cell(&mut rng)));
        }
    }
}
