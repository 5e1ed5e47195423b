//! Agent tuning, loadable from JSON.
//!
//! Every field has a default equal to the matching constant, so a partial
//! JSON document only overrides what it names.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

/// Tuning parameters for one agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// RNG seed for the reversal schedule. Same seed = same decisions.
    pub seed: u64,
    /// Ticks unseen before the target is forgotten.
    pub forget_threshold: u32,
    pub stand_off_distance: f64,
    pub stand_off_nudge: f64,
    /// Longest time-to-impact (ticks) worth firing at.
    pub max_time_to_impact: f64,
    pub aim_tolerance: f64,
    /// Radar rotation per tick while searching.
    pub radar_sweep: f64,
    pub wall_probe_step: f64,
    pub wall_margin: f64,
    pub initial_flip_countdown: i32,
    pub flip_countdown_min: i32,
    pub flip_countdown_max: i32,
    pub throttle: f64,
    pub one_power_distance: f64,
    pub two_power_distance: f64,
    pub one_power_energy: f64,
    pub two_power_energy: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            forget_threshold: FORGET_THRESHOLD,
            stand_off_distance: STAND_OFF_DISTANCE,
            stand_off_nudge: STAND_OFF_NUDGE,
            max_time_to_impact: MAX_TIME_TO_IMPACT,
            aim_tolerance: AIM_TOLERANCE,
            radar_sweep: RADAR_SWEEP,
            wall_probe_step: WALL_PROBE_STEP,
            wall_margin: WALL_MARGIN,
            initial_flip_countdown: INITIAL_FLIP_COUNTDOWN,
            flip_countdown_min: FLIP_COUNTDOWN_MIN,
            flip_countdown_max: FLIP_COUNTDOWN_MAX,
            throttle: THROTTLE,
            one_power_distance: ONE_POWER_DISTANCE,
            two_power_distance: TWO_POWER_DISTANCE,
            one_power_energy: ONE_POWER_ENERGY,
            two_power_energy: TWO_POWER_ENERGY,
        }
    }
}

impl AgentConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AgentConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("stand_off_distance", self.stand_off_distance),
            ("max_time_to_impact", self.max_time_to_impact),
            ("aim_tolerance", self.aim_tolerance),
            ("radar_sweep", self.radar_sweep),
            ("wall_probe_step", self.wall_probe_step),
            ("wall_margin", self.wall_margin),
            ("throttle", self.throttle),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.flip_countdown_min < 1 || self.flip_countdown_min >= self.flip_countdown_max {
            return Err(ConfigError::EmptyFlipRange {
                min: self.flip_countdown_min,
                max: self.flip_countdown_max,
            });
        }
        if self.two_power_distance > self.one_power_distance {
            return Err(ConfigError::PowerThresholds {
                two: self.two_power_distance,
                one: self.one_power_distance,
            });
        }
        Ok(())
    }
}
