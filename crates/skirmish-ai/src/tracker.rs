//! Single-target tracker state machine.
//!
//! Holds our belief about the nearest opponent. A belief is replaced on a
//! fresh scan of the same robot or of a closer one, and dropped when it goes
//! stale or its robot is destroyed. No ECS dependency, operates on plain data.

use log::{debug, info};

use skirmish_core::constants::FORGET_THRESHOLD;
use skirmish_core::types::PolarVector;

/// A scan, already converted into our absolute frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub name: String,
    /// Target relative to us: distance and absolute line-of-sight angle.
    pub position: PolarVector,
    /// Target speed and absolute heading.
    pub velocity: PolarVector,
    pub energy: f64,
}

/// What we believe about the tracked opponent.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetBelief {
    pub name: String,
    pub position: PolarVector,
    pub velocity: PolarVector,
    pub energy: f64,
    pub ticks_unseen: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum TrackerState {
    #[default]
    Unknown,
    Tracking(TargetBelief),
}

/// Outcome of feeding an observation to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerUpdate {
    /// The belief was overwritten by this observation.
    pub replaced: bool,
    /// The tracked identity changed (including Unknown -> Tracking).
    pub acquired: bool,
}

#[derive(Debug, Clone)]
pub struct TargetTracker {
    state: TrackerState,
    forget_threshold: u32,
}

impl Default for TargetTracker {
    fn default() -> Self {
        Self::new(FORGET_THRESHOLD)
    }
}

impl TargetTracker {
    pub fn new(forget_threshold: u32) -> Self {
        Self {
            state: TrackerState::Unknown,
            forget_threshold,
        }
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn belief(&self) -> Option<&TargetBelief> {
        match &self.state {
            TrackerState::Tracking(belief) => Some(belief),
            TrackerState::Unknown => None,
        }
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.state, TrackerState::Tracking(_))
    }

    pub fn identity(&self) -> Option<&str> {
        self.belief().map(|b| b.name.as_str())
    }

    /// Distance to the believed target; infinite when there is none.
    pub fn distance(&self) -> f64 {
        self.belief()
            .map(|b| b.position.radius())
            .unwrap_or(f64::INFINITY)
    }

    /// Feed a scan. Replaces the belief if it is news on our target or a
    /// closer robot.
    pub fn observe(&mut self, observation: Observation) -> TrackerUpdate {
        let same_target = self.identity() == Some(observation.name.as_str());
        let closer = observation.position.radius() < self.distance();

        if !same_target && !closer {
            return TrackerUpdate {
                replaced: false,
                acquired: false,
            };
        }

        if !same_target {
            debug!(
                "Acquired {} at distance {:.1} (was {:?})",
                observation.name,
                observation.position.radius(),
                self.identity()
            );
        }

        self.state = TrackerState::Tracking(TargetBelief {
            name: observation.name,
            position: observation.position,
            velocity: observation.velocity,
            energy: observation.energy,
            ticks_unseen: 0,
        });

        TrackerUpdate {
            replaced: true,
            acquired: !same_target,
        }
    }

    /// Called once per tick. Returns true if the target was just forgotten.
    pub fn on_status(&mut self) -> bool {
        let TrackerState::Tracking(belief) = &mut self.state else {
            return false;
        };
        belief.ticks_unseen += 1;
        if belief.ticks_unseen > self.forget_threshold {
            info!(
                "Lost {} after {} ticks unseen",
                belief.name, belief.ticks_unseen
            );
            self.state = TrackerState::Unknown;
            return true;
        }
        false
    }

    /// Returns true if the destroyed robot was our target.
    pub fn on_destroyed(&mut self, name: &str) -> bool {
        if self.identity() == Some(name) {
            info!("Target {name} destroyed");
            self.state = TrackerState::Unknown;
            true
        } else {
            false
        }
    }
}
