use std::time::{Duration, Instant};

use common::games::snake::{GameState, GameStatus, GridCoordinate};

use crate::colors::{
    FOOD_COLOR, GRID_COLOR, HINT_COLOR, SCORE_COLOR, SNAKE_COLOR, TEXT_COLOR,
};
use crate::config::DisplayConfig;
use crate::state::SoundCue;

const FRAME_WIDTH: f32 = 5.0;
pub const CUE_FLASH: Duration = Duration::from_millis(150);

pub struct BoardGeometry {
    origin: egui::Pos2,
    cell_size: f32,
    board_size: i32,
}

impl BoardGeometry {
    pub fn new(canvas_min: egui::Pos2, display: &DisplayConfig, board_size: i32) -> Self {
        let offset = display.offset as f32;
        Self {
            origin: canvas_min + egui::vec2(offset, offset),
            cell_size: display.cell_size as f32,
            board_size,
        }
    }

    pub fn board_side(&self) -> f32 {
        self.cell_size * self.board_size as f32
    }

    pub fn cell_rect(&self, cell: GridCoordinate) -> egui::Rect {
        egui::Rect::from_min_size(
            self.origin + egui::vec2(cell.x as f32 * self.cell_size, cell.y as f32 * self.cell_size),
            egui::vec2(self.cell_size, self.cell_size),
        )
    }

    pub fn frame_rect(&self) -> egui::Rect {
        egui::Rect::from_min_size(
            self.origin - egui::vec2(FRAME_WIDTH, FRAME_WIDTH),
            egui::vec2(self.board_side() + 2.0 * FRAME_WIDTH, self.board_side() + 2.0 * FRAME_WIDTH),
        )
    }

    pub fn title_pos(&self, canvas_min: egui::Pos2) -> egui::Pos2 {
        egui::pos2(self.origin.x - FRAME_WIDTH, canvas_min.y + 20.0)
    }

    pub fn score_pos(&self) -> egui::Pos2 {
        self.origin + egui::vec2(-FRAME_WIDTH, self.board_side() + 10.0)
    }
}

/// The frame briefly takes the color of the last cue.
pub fn frame_color(last_cue: Option<(SoundCue, Instant)>, now: Instant) -> egui::Color32 {
    match last_cue {
        Some((cue, at)) if now.saturating_duration_since(at) < CUE_FLASH => match cue {
            SoundCue::Eat => SCORE_COLOR,
            SoundCue::Collision => FOOD_COLOR,
        },
        _ => GRID_COLOR,
    }
}

pub fn draw_board(
    painter: &egui::Painter,
    canvas_min: egui::Pos2,
    geometry: &BoardGeometry,
    game_state: &GameState,
    frame_color: egui::Color32,
) {
    painter.rect_stroke(
        geometry.frame_rect(),
        0.0,
        egui::Stroke::new(FRAME_WIDTH, frame_color),
        egui::StrokeKind::Inside,
    );

    painter.rect_filled(geometry.cell_rect(game_state.food().position()), 3.0, FOOD_COLOR);

    for segment in game_state.snake().body() {
        painter.rect_filled(geometry.cell_rect(*segment), 5.0, SNAKE_COLOR);
    }

    painter.text(
        geometry.title_pos(canvas_min),
        egui::Align2::LEFT_TOP,
        "Retro Snake",
        egui::FontId::proportional(40.0),
        TEXT_COLOR,
    );

    painter.text(
        geometry.score_pos(),
        egui::Align2::LEFT_TOP,
        game_state.score().to_string(),
        egui::FontId::proportional(28.0),
        SCORE_COLOR,
    );

    if game_state.status() == GameStatus::Stopped {
        painter.text(
            geometry.frame_rect().center(),
            egui::Align2::CENTER_CENTER,
            "Press an arrow key to play",
            egui::FontId::proportional(24.0),
            HINT_COLOR,
        );
    }
}
