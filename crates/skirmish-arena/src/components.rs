//! ECS components for arena entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::DVec2;

/// A robot taking part in the battle.
#[derive(Debug, Clone)]
pub struct Robot {
    pub name: String,
}

/// Marks the robot driven through the `Engine` trait.
#[derive(Debug, Clone, Copy)]
pub struct AgentControlled;

/// Centre of a robot or bullet, field coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position(pub DVec2);

/// Hull state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hull {
    /// Radians, 0 = north, clockwise.
    pub heading: f64,
    /// Signed speed along the heading.
    pub velocity: f64,
}

/// Gun and radar, both turning independently of the hull.
#[derive(Debug, Clone, Copy, Default)]
pub struct Turret {
    pub gun_heading: f64,
    pub radar_heading: f64,
    /// Radar heading at the start of the current tick; the scan arc runs
    /// from here to `radar_heading`.
    pub previous_radar_heading: f64,
    pub gun_heat: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct Energy(pub f64);

/// Outstanding orders. Turns and distance are "remaining" amounts consumed
/// a tick at a time, overwritten by each commit.
#[derive(Debug, Clone, Copy, Default)]
pub struct Orders {
    pub body_turn: f64,
    pub gun_turn: f64,
    pub radar_turn: f64,
    pub distance: f64,
    pub fire: Option<f64>,
}

/// How a non-agent robot moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pilot {
    /// Constant speed in a straight line, turning around at walls. Zero
    /// speed is a sitting duck.
    Patrol { speed: f64 },
}

/// A bullet in flight.
#[derive(Debug, Clone)]
pub struct Bullet {
    pub owner: hecs::Entity,
    pub power: f64,
    pub heading: f64,
    pub speed: f64,
}
