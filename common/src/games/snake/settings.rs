use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::entity::INITIAL_BODY;

pub const DEFAULT_BOARD_SIZE: i32 = 25;
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 200;
const MAX_BOARD_SIZE: i32 = 60;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnakeSettings {
    pub board_size: i32,
    pub tick_interval_ms: u32,
}

impl SnakeSettings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms as u64)
    }
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        let min_board_size = INITIAL_BODY
            .iter()
            .map(|cell| cell.x.max(cell.y) + 1)
            .max()
            .unwrap_or(1);
        if self.board_size < min_board_size {
            return Err(format!("board_size must be at least {}", min_board_size));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(format!("board_size must not exceed {}", MAX_BOARD_SIZE));
        }
        if self.tick_interval_ms < 50 {
            return Err("tick_interval_ms must be at least 50".to_string());
        }
        if self.tick_interval_ms > 1000 {
            return Err("tick_interval_ms must not exceed 1000".to_string());
        }
        Ok(())
    }
}
