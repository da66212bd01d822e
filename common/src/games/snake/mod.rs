mod entity;
mod events;
mod food;
mod game_state;
mod settings;
mod types;

pub use entity::{INITIAL_BODY, INITIAL_DIRECTION, Snake};
pub use events::{GameEvents, NoopEvents};
pub use food::Food;
pub use game_state::GameState;
pub use settings::{DEFAULT_BOARD_SIZE, DEFAULT_TICK_INTERVAL_MS, SnakeSettings};
pub use types::{DeathReason, Direction, GameStatus, GridCoordinate};
