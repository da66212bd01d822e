use common::config::Validate;
use serde::{Deserialize, Serialize};

/// Pixel geometry of the board. Only the renderer reads it.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct DisplayConfig {
    pub cell_size: u32,
    pub offset: u32,
}

impl DisplayConfig {
    pub fn window_side(&self, board_size: i32) -> f32 {
        (2 * self.offset + self.cell_size * board_size.max(0) as u32) as f32
    }
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.cell_size < 10 || self.cell_size > 60 {
            return Err("cell_size must be between 10 and 60".to_string());
        }
        if self.offset < 40 || self.offset > 200 {
            return Err("offset must be between 40 and 200".to_string());
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_size: 30,
            offset: 75,
        }
    }
}
