use std::collections::VecDeque;

use super::types::{Direction, GridCoordinate};

pub const INITIAL_BODY: [GridCoordinate; 3] = [
    GridCoordinate::new(6, 9),
    GridCoordinate::new(5, 9),
    GridCoordinate::new(4, 9),
];
pub const INITIAL_DIRECTION: Direction = Direction::Right;

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<GridCoordinate>,
    direction: Direction,
    grow_pending: bool,
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

impl Snake {
    pub fn new() -> Self {
        Self {
            body: VecDeque::from(INITIAL_BODY),
            direction: INITIAL_DIRECTION,
            grow_pending: false,
        }
    }

    /// Moves one cell forward. A pending growth keeps the tail in place, so the
    /// snake gets longer one tick after it ate.
    pub fn advance(&mut self) {
        let new_head = self.head() + self.direction.delta();
        self.body.push_front(new_head);

        if self.grow_pending {
            self.grow_pending = false;
        } else {
            self.body.pop_back();
        }
    }

    pub fn reset(&mut self) {
        self.body = VecDeque::from(INITIAL_BODY);
        self.direction = INITIAL_DIRECTION;
        self.grow_pending = false;
    }

    /// Ignores a 180° turn relative to the current direction. Two quick turns
    /// between ticks are still able to reverse the snake.
    pub fn set_direction(&mut self, direction: Direction) {
        if !direction.is_opposite(&self.direction) {
            self.direction = direction;
        }
    }

    pub fn grow(&mut self) {
        self.grow_pending = true;
    }

    pub fn head(&self) -> GridCoordinate {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn body(&self) -> &VecDeque<GridCoordinate> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_grow_pending(&self) -> bool {
        self.grow_pending
    }

    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    #[cfg(test)]
    pub(crate) fn from_parts(body: Vec<GridCoordinate>, direction: Direction) -> Self {
        assert!(!body.is_empty());
        Self {
            body: VecDeque::from(body),
            direction,
            grow_pending: false,
        }
    }
}
