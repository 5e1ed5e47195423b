//! The boundary to the simulation engine.

use skirmish_core::commands::AgentCommand;
use skirmish_core::constants::MAX_TURN_RATE;
use skirmish_core::rules;
use skirmish_core::types::{BodyStatus, FieldBounds};

/// What the agent needs from the engine hosting it.
///
/// Queries are read freely during a tick. `commit` is the tick barrier: the
/// whole batch takes effect together and the engine advances one tick.
pub trait Engine {
    fn body(&self) -> BodyStatus;

    fn field(&self) -> FieldBounds;

    fn max_turn_rate(&self) -> f64 {
        MAX_TURN_RATE
    }

    fn bullet_speed(&self, power: f64) -> f64 {
        rules::bullet_speed(power)
    }

    fn commit(&mut self, commands: &[AgentCommand]);
}
