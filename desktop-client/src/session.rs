use common::games::SessionRng;
use common::games::snake::{Direction, GameState, SnakeSettings};
use common::log;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

use crate::sound_cues::SoundCues;
use crate::state::SharedState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Steer(Direction),
    Quit,
}

/// Owns the game for the lifetime of the window. Timer ticks and player input
/// are handled one at a time, and every handled event republishes the state.
pub async fn run_game_session(
    settings: SnakeSettings,
    mut rng: SessionRng,
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<SessionCommand>,
) {
    log!(
        "Session started: board {}x{}, tick {}ms, seed {}",
        settings.board_size,
        settings.board_size,
        settings.tick_interval_ms,
        rng.seed()
    );

    let mut game_state = GameState::new(&settings, &mut rng);
    let mut sound_cues = SoundCues::new(shared_state.clone());
    shared_state.publish(&game_state);

    let tick_interval = settings.tick_interval();
    let mut tick_timer = interval_at(Instant::now() + tick_interval, tick_interval);
    tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = tick_timer.tick() => {
                game_state.update(&mut rng, &mut sound_cues);
            }
            command = command_rx.recv() => {
                match command {
                    Some(SessionCommand::Steer(direction)) => {
                        game_state.apply_direction_input(direction);
                    }
                    Some(SessionCommand::Quit) | None => break,
                }
            }
        }

        shared_state.publish(&game_state);
    }

    log!("Session finished with score {}", game_state.score());
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::snake::{GameStatus, GridCoordinate};
    use std::time::Duration;

    fn start() -> (SharedState, mpsc::UnboundedSender<SessionCommand>, tokio::task::JoinHandle<()>) {
        let shared_state = SharedState::new();
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run_game_session(
            SnakeSettings::default(),
            SessionRng::new(42),
            shared_state.clone(),
            command_rx,
        ));
        (shared_state, command_tx, handle)
    }

    #[tokio::test(start_paused = true)]
    async fn test_state_is_published_before_first_tick() {
        let (shared_state, command_tx, handle) = start();
        tokio::time::sleep(Duration::from_millis(10)).await;

        let state = shared_state.game_state().unwrap();
        assert_eq!(state.snake().head(), GridCoordinate::new(6, 9));
        assert_eq!(state.status(), GameStatus::Running);

        command_tx.send(SessionCommand::Quit).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_follow_interval() {
        let (shared_state, command_tx, handle) = start();
        tokio::time::sleep(Duration::from_millis(650)).await;

        let state = shared_state.game_state().unwrap();
        assert_eq!(state.snake().head(), GridCoordinate::new(9, 9));

        command_tx.send(SessionCommand::Quit).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_steer_applies_before_next_tick() {
        let (shared_state, command_tx, handle) = start();
        command_tx.send(SessionCommand::Steer(Direction::Down)).unwrap();
        tokio::time::sleep(Duration::from_millis(250)).await;

        let state = shared_state.game_state().unwrap();
        assert_eq!(state.snake().direction(), Direction::Down);
        assert_eq!(state.snake().head(), GridCoordinate::new(6, 10));

        command_tx.send(SessionCommand::Quit).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_ends_when_sender_dropped() {
        let (_shared_state, command_tx, handle) = start();
        drop(command_tx);
        handle.await.unwrap();
    }
}
