use std::time::Instant;

use common::games::snake::Direction;
use common::log;
use tokio::sync::mpsc;

use crate::colors::BACKGROUND_COLOR;
use crate::config::DisplayConfig;
use crate::session::SessionCommand;
use crate::state::SharedState;
use super::board::{self, BoardGeometry, CUE_FLASH};

pub struct SnakeApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<SessionCommand>,
    display: DisplayConfig,
    board_size: i32,
}

impl SnakeApp {
    pub fn new(
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<SessionCommand>,
        display: DisplayConfig,
        board_size: i32,
    ) -> Self {
        Self {
            shared_state,
            command_tx,
            display,
            board_size,
        }
    }

    fn handle_input(&self, ctx: &egui::Context) {
        let directions: Vec<Direction> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key { key, pressed: true, repeat: false, .. } => direction_for_key(*key),
                    _ => None,
                })
                .collect()
        });

        for direction in directions {
            if self.command_tx.send(SessionCommand::Steer(direction)).is_err() {
                log!("Session is gone, dropping input {:?}", direction);
            }
        }
    }
}

pub fn direction_for_key(key: egui::Key) -> Option<Direction> {
    match key {
        egui::Key::ArrowUp | egui::Key::W => Some(Direction::Up),
        egui::Key::ArrowDown | egui::Key::S => Some(Direction::Down),
        egui::Key::ArrowLeft | egui::Key::A => Some(Direction::Left),
        egui::Key::ArrowRight | egui::Key::D => Some(Direction::Right),
        _ => None,
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        if ctx.input(|i| i.viewport().close_requested()) {
            let _ = self.command_tx.send(SessionCommand::Quit);
        }

        self.handle_input(ctx);

        let last_cue = self.shared_state.last_cue();
        let now = Instant::now();

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(BACKGROUND_COLOR))
            .show(ctx, |ui| {
                let Some(game_state) = self.shared_state.game_state() else {
                    ui.centered_and_justified(|ui| {
                        ui.spinner();
                    });
                    return;
                };

                let canvas_min = ui.max_rect().min;
                let geometry = BoardGeometry::new(canvas_min, &self.display, self.board_size);
                board::draw_board(
                    ui.painter(),
                    canvas_min,
                    &geometry,
                    &game_state,
                    board::frame_color(last_cue, now),
                );
            });

        if let Some((_, at)) = last_cue
            && now.saturating_duration_since(at) < CUE_FLASH
        {
            ctx.request_repaint_after(CUE_FLASH);
        }
    }
}
