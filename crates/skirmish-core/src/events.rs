//! Events delivered by the engine to the agent.

use serde::{Deserialize, Serialize};

/// Sensor and lifecycle notifications. The engine delivers `Status` first
/// each tick, then the rest in the order they happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EngineEvent {
    /// Once per tick, before any other event.
    Status,
    /// Radar swept over another robot.
    Scanned {
        name: String,
        distance: f64,
        /// Angle from our body heading to the scanned robot.
        bearing: f64,
        /// Signed speed of the scanned robot.
        velocity: f64,
        /// Absolute heading of the scanned robot.
        heading: f64,
        energy: f64,
    },
    /// Another robot was destroyed.
    Destroyed { name: String },
    /// We drove into a wall.
    WallHit {
        /// Angle from our body heading to the wall.
        bearing: f64,
    },
}

impl EngineEvent {
    /// Status events sort ahead of everything else in a tick's batch.
    pub fn is_status(&self) -> bool {
        matches!(self, EngineEvent::Status)
    }
}
