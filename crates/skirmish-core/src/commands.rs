//! Commands the agent sends to the engine.
//!
//! Commands are collected for a whole tick and committed together.

use serde::{Deserialize, Serialize};

/// All actuation requests. Angles are radians, clockwise positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AgentCommand {
    TurnRadarBy { radians: f64 },
    TurnGunBy { radians: f64 },
    /// Body turn, already clamped to the engine's per-tick limit.
    TurnBodyBy { radians: f64 },
    /// Signed distance to travel; the engine caps the speed.
    SetThrottle { magnitude: f64 },
    Fire { power: f64 },
}

impl AgentCommand {
    pub fn is_fire(&self) -> bool {
        matches!(self, AgentCommand::Fire { .. })
    }
}
