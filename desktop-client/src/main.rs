mod colors;
mod config;
mod session;
mod sound_cues;
mod state;
mod ui;

use common::games::SessionRng;
use common::{log, logger};
use tokio::sync::mpsc;

use config::load_config;
use session::{SessionCommand, run_game_session};
use state::SharedState;
use ui::SnakeApp;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_logger(None);

    let config = load_config();
    let settings = config.snake;
    let display = config.display;

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let session_shared_state = shared_state.clone();
    let session_thread = std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread().enable_time().build() {
            Ok(runtime) => runtime,
            Err(e) => {
                log!("Failed to start session runtime: {}", e);
                return;
            }
        };
        runtime.block_on(run_game_session(
            settings,
            SessionRng::from_random(),
            session_shared_state,
            command_rx,
        ));
    });

    let side = display.window_side(settings.board_size);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([side, side])
            .with_resizable(false)
            .with_title("Retro Snake"),
        ..Default::default()
    };

    let quit_tx = command_tx.clone();
    let result = eframe::run_native(
        "Retro Snake",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(SnakeApp::new(
                shared_state,
                command_tx,
                display,
                settings.board_size,
            )))
        }),
    );

    let _ = quit_tx.send(SessionCommand::Quit);
    if session_thread.join().is_err() {
        log!("Session thread panicked");
    }

    result?;
    log!("Bye");
    Ok(())
}
