use egui::Color32;

pub const BACKGROUND_COLOR: Color32 = Color32::from_rgb(40, 40, 50);
pub const GRID_COLOR: Color32 = Color32::from_rgb(90, 90, 100);
pub const SNAKE_COLOR: Color32 = Color32::from_rgb(0, 204, 102);
pub const FOOD_COLOR: Color32 = Color32::from_rgb(255, 82, 82);
pub const TEXT_COLOR: Color32 = Color32::WHITE;
pub const SCORE_COLOR: Color32 = Color32::from_rgb(255, 206, 84);
pub const HINT_COLOR: Color32 = Color32::from_rgb(170, 170, 180);
