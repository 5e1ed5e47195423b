//! Per-agent control state.

use serde::{Deserialize, Serialize};

use skirmish_ai::firing::BulletPower;
use skirmish_ai::movement::ReversalSchedule;
use skirmish_core::config::AgentConfig;
use skirmish_core::types::PolarVector;

/// Everything the tick pipeline mutates. Owned by one agent, never shared.
#[derive(Debug, Clone)]
pub struct AgentState {
    /// Body heading as of the last tick.
    pub heading: f64,
    /// Where we want the body pointed.
    pub desired_heading: f64,
    /// Direction and countdown to the next reversal.
    pub movement: ReversalSchedule,
    pub bullet_power: BulletPower,
    /// Current aiming solution; `None` while no target is tracked.
    pub target_vector: Option<PolarVector>,
}

impl AgentState {
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            heading: 0.0,
            desired_heading: 0.0,
            movement: ReversalSchedule::new(config),
            bullet_power: BulletPower::Three,
            target_vector: None,
        }
    }

    pub fn reverse(&self) -> bool {
        self.movement.reverse
    }

    pub fn turns_until_flip(&self) -> i32 {
        self.movement.turns_until_flip
    }
}

/// Running counters, readable by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentStats {
    pub ticks: u64,
    pub shots_fired: u32,
    pub wall_hits: u32,
    pub targets_acquired: u32,
    pub targets_forgotten: u32,
    pub reversals: u32,
}
