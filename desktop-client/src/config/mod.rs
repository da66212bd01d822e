mod display_config;
mod main_config;

pub use display_config::DisplayConfig;
pub use main_config::{Config, get_config_manager, load_config};
