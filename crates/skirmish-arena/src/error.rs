use thiserror::Error;

use skirmish_core::error::ConfigError;

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("Malformed arena config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid agent config: {0}")]
    Config(#[from] ConfigError),

    #[error("Field must have positive size, got {width}x{height}")]
    InvalidField { width: f64, height: f64 },

    #[error("Robot name used twice: {0}")]
    DuplicateName(String),

    #[error("{name} spawns outside the field at ({x}, {y})")]
    SpawnOutOfBounds { name: String, x: f64, y: f64 },
}
