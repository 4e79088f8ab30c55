use crate::Coords;
use crate::grid::Grid;

use log::debug;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Food {
    position: Coords,
}

impl Food {
    pub fn at(position: Coords) -> Self {
        Food { position }
    }

    /// A food cell placed somewhere not in `occupied`.
    pub fn spawn<R: Rng + ?Sized>(occupied: &[Coords], grid: &Grid, rng: &mut R) -> Self {
        let mut food = Food::at((0, 0));
        food.place_randomly(occupied, grid, rng);
        food
    }

    pub fn position(&self) -> Coords {
        self.position
    }

    /// Resamples uniformly until the cell is free. The grid must have at least
    /// one cell outside `occupied`, otherwise this never returns.
    pub fn place_randomly<R: Rng + ?Sized>(&mut self, occupied: &[Coords], grid: &Grid, rng: &mut R) {
        let mut attempts = 1;
        self.position = grid.random_cell(rng);

        while occupied.contains(&self.position) {
            self.position = grid.random_cell(rng);
            attempts += 1;
        }

        debug!("food placed at {:?} after {} attempt(s)", self.position, attempts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn finds_the_only_free_cell() {
        let grid = Grid::new(3, 3, 10).unwrap();
        let occupied: Vec<Coords> = (0..3)
            .flat_map(|y| (0..3).map(move |x| (x, y)))
            .filter(|&c| c != (2, 1))
            .collect();

        let mut rng = StdRng::seed_from_u64(1);
        let mut food = Food::at((0, 0));
        for _ in 0..20 {
            food.place_randomly(&occupied, &grid, &mut rng);
            assert_eq!(food.position(), (2, 1));
        }
    }

    #[test]
    fn spawn_avoids_occupied() {
        let grid = Grid::new(2, 1, 10).unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(Food::spawn(&[(0, 0)], &grid, &mut rng).position(), (1, 0));
        }
    }

    proptest! {
        #[test]
        fn never_lands_on_the_body(
            width in 1i32..8,
            height in 1i32..8,
            free_index in 0usize..64,
            seed in any::<u64>(),
        ) {
            let grid = Grid::new(width, height, 10).unwrap();
            let cells: Vec<Coords> = (0..height)
                .flat_map(|y| (0..width).map(move |x| (x, y)))
                .collect();
            let free = cells[free_index % cells.len()];
            // all but one cell taken, forcing the retry loop
            let occupied: Vec<Coords> = cells.into_iter().filter(|&c| c != free).collect();

            let mut rng = StdRng::seed_from_u64(seed);
            let food = Food::spawn(&occupied, &grid, &mut rng);
            prop_assert!(grid.contains(food.position()));
            prop_assert!(!occupied.contains(&food.position()));
            prop_assert_eq!(food.position(), free);
        }
    }
}
