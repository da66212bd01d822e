use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use common::games::snake::GameState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    Eat,
    Collision,
}

/// What the session thread hands over to the window: the latest published
/// game state and the most recent sound cue.
#[derive(Clone)]
pub struct SharedState {
    game_state: Arc<Mutex<Option<GameState>>>,
    last_cue: Arc<Mutex<Option<(SoundCue, Instant)>>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            game_state: Arc::new(Mutex::new(None)),
            last_cue: Arc::new(Mutex::new(None)),
            context: Arc::new(Mutex::new(None)),
        }
    }

    pub fn publish(&self, game_state: &GameState) {
        *lock(&self.game_state) = Some(game_state.clone());
        self.request_repaint();
    }

    pub fn game_state(&self) -> Option<GameState> {
        lock(&self.game_state).clone()
    }

    pub fn set_cue(&self, cue: SoundCue) {
        *lock(&self.last_cue) = Some((cue, Instant::now()));
    }

    pub fn last_cue(&self) -> Option<(SoundCue, Instant)> {
        *lock(&self.last_cue)
    }

    pub fn has_context(&self) -> bool {
        lock(&self.context).is_some()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *lock(&self.context) = Some(ctx);
    }

    fn request_repaint(&self) {
        if let Some(ctx) = lock(&self.context).as_ref() {
            ctx.request_repaint();
        }
    }
}
