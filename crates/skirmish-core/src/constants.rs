//! Agent constants and tuning parameters.
//!
//! These are the defaults behind [`crate::config::AgentConfig`].

use std::f64::consts::PI;

/// Tolerance for [`crate::types::PolarVector`] equality.
pub const POLAR_EPSILON: f64 = 0.001;

// --- Tracking ---

/// Ticks without a fresh sighting after which the target is dropped.
pub const FORGET_THRESHOLD: u32 = 3;

// --- Firing ---

/// Longest acceptable time to impact (ticks).
pub const MAX_TIME_TO_IMPACT: f64 = 30.0;

/// Gun must point within this many radians of the solution to fire.
pub const AIM_TOLERANCE: f64 = 0.1;

/// Beyond this distance, power drops to 1.
pub const ONE_POWER_DISTANCE: f64 = 300.0;

/// Beyond this distance, power drops to 2.
pub const TWO_POWER_DISTANCE: f64 = 150.0;

/// Below this target energy, power drops to 1.
pub const ONE_POWER_ENERGY: f64 = 6.0;

/// Below this target energy, power drops to 2.
pub const TWO_POWER_ENERGY: f64 = 9.0;

/// Denominators smaller than this in the intercept formula mean no solution.
pub const SOLVER_MIN_DENOMINATOR: f64 = 1e-9;

// --- Radar ---

/// Radar rotation per tick while searching.
pub const RADAR_SWEEP: f64 = PI;

// --- Movement ---

/// Preferred orbiting radius around the target.
pub const STAND_OFF_DISTANCE: f64 = 100.0;

/// Heading nudge toward the stand-off ring (radians).
pub const STAND_OFF_NUDGE: f64 = 0.5;

/// How far ahead the wall heuristic projects our position.
pub const WALL_PROBE_STEP: f64 = 40.0;

/// Distance from a wall that counts as "about to hit it". A bit bigger
/// than a robot.
pub const WALL_MARGIN: f64 = 40.0;

/// Ticks before the first direction reversal.
pub const INITIAL_FLIP_COUNTDOWN: i32 = 10;

/// Reversal countdown is reseeded uniformly in [min, max).
pub const FLIP_COUNTDOWN_MIN: i32 = 10;
pub const FLIP_COUNTDOWN_MAX: i32 = 50;

/// Throttle magnitude; well past the engine's top speed so the engine cap
/// is what we actually get.
pub const THROTTLE: f64 = 1000.0;

// --- Engine rules ---

/// Maximum body turn per tick (10 degrees).
pub const MAX_TURN_RATE: f64 = 10.0 * PI / 180.0;

/// Maximum gun turn per tick (20 degrees).
pub const GUN_TURN_RATE: f64 = 20.0 * PI / 180.0;

/// Maximum radar turn per tick (45 degrees).
pub const RADAR_TURN_RATE: f64 = 45.0 * PI / 180.0;

/// Top speed (units per tick).
pub const MAX_VELOCITY: f64 = 8.0;

/// Speed gained per tick while accelerating.
pub const ACCELERATION: f64 = 1.0;

/// Speed lost per tick while braking.
pub const DECELERATION: f64 = 2.0;

pub const MIN_BULLET_POWER: f64 = 0.1;
pub const MAX_BULLET_POWER: f64 = 3.0;

/// Robots are squares of this side length.
pub const ROBOT_SIZE: f64 = 36.0;

/// Radar scan distance.
pub const RADAR_RANGE: f64 = 1200.0;

/// Gun heat at round start.
pub const INITIAL_GUN_HEAT: f64 = 3.0;

/// Gun heat shed per tick.
pub const GUN_COOLING_RATE: f64 = 0.1;

pub const START_ENERGY: f64 = 100.0;
