use super::types::DeathReason;

/// Fire-and-forget notifications for whoever plays sounds. The simulation does
/// not wait on them and does not care whether they succeed.
pub trait GameEvents {
    fn on_eat(&mut self);
    fn on_collision(&mut self, reason: DeathReason);
}

pub struct NoopEvents;

impl GameEvents for NoopEvents {
    fn on_eat(&mut self) {}

    fn on_collision(&mut self, _reason: DeathReason) {}
}
