use std::collections::VecDeque;

use crate::games::SessionRng;
use crate::log;
use super::types::GridCoordinate;

#[derive(Clone, Debug)]
pub struct Food {
    position: GridCoordinate,
}

impl Food {
    pub fn new(occupied: &VecDeque<GridCoordinate>, board_size: i32, rng: &mut SessionRng) -> Self {
        Self {
            position: Self::generate_random_position(occupied, board_size, rng),
        }
    }

    pub fn position(&self) -> GridCoordinate {
        self.position
    }

    pub fn relocate(&mut self, occupied: &VecDeque<GridCoordinate>, board_size: i32, rng: &mut SessionRng) {
        self.position = Self::generate_random_position(occupied, board_size, rng);
        log!("Food placed at ({}, {})", self.position.x, self.position.y);
    }

    pub fn generate_random_cell(board_size: i32, rng: &mut SessionRng) -> GridCoordinate {
        let x = rng.random_range(0..board_size);
        let y = rng.random_range(0..board_size);
        GridCoordinate::new(x, y)
    }

    /// Samples until it finds a free cell. Never returns on a board the snake
    /// covers completely.
    pub fn generate_random_position(
        occupied: &VecDeque<GridCoordinate>,
        board_size: i32,
        rng: &mut SessionRng,
    ) -> GridCoordinate {
        loop {
            let cell = Self::generate_random_cell(board_size, rng);
            if !occupied.contains(&cell) {
                return cell;
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn at(position: GridCoordinate) -> Self {
        Self { position }
    }
}
