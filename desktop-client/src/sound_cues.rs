use common::games::snake::{DeathReason, GameEvents};
use common::log;

use crate::state::{SharedState, SoundCue};

/// Stands in for the audio device: every cue is logged and remembered so the
/// board can flash.
pub struct SoundCues {
    shared_state: SharedState,
}

impl SoundCues {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl GameEvents for SoundCues {
    fn on_eat(&mut self) {
        log!("Cue: eat");
        self.shared_state.set_cue(SoundCue::Eat);
    }

    fn on_collision(&mut self, reason: DeathReason) {
        log!("Cue: collision ({:?})", reason);
        self.shared_state.set_cue(SoundCue::Collision);
    }
}
