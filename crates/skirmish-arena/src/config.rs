//! Arena setup, loadable from JSON.

use serde::{Deserialize, Serialize};

use skirmish_core::constants::START_ENERGY;
use skirmish_core::types::FieldBounds;

use crate::error::ArenaError;

/// Where and how a robot starts. Missing position or heading are rolled
/// from the arena seed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spawn {
    pub position: Option<[f64; 2]>,
    pub heading: Option<f64>,
}

impl Spawn {
    pub fn at(x: f64, y: f64, heading: f64) -> Self {
        Self {
            position: Some([x, y]),
            heading: Some(heading),
        }
    }
}

/// A scripted opponent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpponentSpec {
    pub name: String,
    #[serde(default)]
    pub spawn: Spawn,
    /// Patrol speed; 0 for a sitting duck.
    #[serde(default)]
    pub speed: f64,
    #[serde(default = "default_energy")]
    pub energy: f64,
}

impl OpponentSpec {
    pub fn sitting_duck(name: &str, x: f64, y: f64) -> Self {
        Self {
            name: name.to_string(),
            spawn: Spawn::at(x, y, 0.0),
            speed: 0.0,
            energy: START_ENERGY,
        }
    }

    pub fn patrol(name: &str, x: f64, y: f64, heading: f64, speed: f64) -> Self {
        Self {
            name: name.to_string(),
            spawn: Spawn::at(x, y, heading),
            speed,
            energy: START_ENERGY,
        }
    }
}

fn default_energy() -> f64 {
    START_ENERGY
}

/// Configuration for starting a new arena.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// RNG seed for determinism. Same seed = same battle.
    pub seed: u64,
    pub field: FieldBounds,
    /// Battle ends after this many ticks even if nobody won.
    pub max_ticks: u64,
    pub agent_name: String,
    pub agent_spawn: Spawn,
    pub opponents: Vec<OpponentSpec>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            field: FieldBounds::default(),
            max_ticks: 5_000,
            agent_name: "agent".to_string(),
            agent_spawn: Spawn::default(),
            opponents: vec![OpponentSpec {
                name: "sitting-duck".to_string(),
                spawn: Spawn::default(),
                speed: 0.0,
                energy: START_ENERGY,
            }],
        }
    }
}

impl ArenaConfig {
    pub fn from_json(json: &str) -> Result<Self, ArenaError> {
        let config: ArenaConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ArenaError> {
        let field = self.field;
        if !(field.width > 0.0 && field.height > 0.0) {
            return Err(ArenaError::InvalidField {
                width: field.width,
                height: field.height,
            });
        }

        let mut names = vec![self.agent_name.as_str()];
        for opponent in &self.opponents {
            if names.contains(&opponent.name.as_str()) {
                return Err(ArenaError::DuplicateName(opponent.name.clone()));
            }
            names.push(opponent.name.as_str());
        }

        let spawns = std::iter::once((&self.agent_name, &self.agent_spawn))
            .chain(self.opponents.iter().map(|o| (&o.name, &o.spawn)));
        for (name, spawn) in spawns {
            if let Some([x, y]) = spawn.position {
                if !field.contains(glam::DVec2::new(x, y)) {
                    return Err(ArenaError::SpawnOutOfBounds {
                        name: name.clone(),
                        x,
                        y,
                    });
                }
            }
        }
        Ok(())
    }
}
