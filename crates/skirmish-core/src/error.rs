use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("Flip countdown range [{min}, {max}) is empty")]
    EmptyFlipRange { min: i32, max: i32 },

    #[error("Power thresholds out of order: two-power {two} must not exceed one-power {one}")]
    PowerThresholds { two: f64, one: f64 },
}
