mod board;
mod snake_app;

pub use snake_app::SnakeApp;
