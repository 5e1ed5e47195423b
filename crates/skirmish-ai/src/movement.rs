//! Circle-strafe movement.
//!
//! We orbit the target perpendicular to the line of sight, nudging the
//! heading in or out toward a preferred stand-off ring, and reverse
//! direction on a random schedule or when a wall is coming up.

use std::f64::consts::FRAC_PI_2;

use glam::DVec2;
use log::trace;
use rand::Rng;

use skirmish_core::config::AgentConfig;
use skirmish_core::types::{normalize_angle, shortest_turn, FieldBounds, PolarVector};

/// Heading that circles the target, nudged toward the stand-off ring.
///
/// `target` is the target's position relative to us. With no target we
/// take the line of sight as north at infinite range.
pub fn desired_heading(target: Option<PolarVector>, reverse: bool, config: &AgentConfig) -> f64 {
    let target = target.unwrap_or(PolarVector::unreachable(0.0));
    let nudge = config.stand_off_nudge;

    let mut heading = target.angle() + FRAC_PI_2;
    if target.radius() > config.stand_off_distance {
        // in
        heading += if reverse { nudge } else { -nudge };
    } else {
        // out
        heading += if reverse { -nudge } else { nudge };
    }
    normalize_angle(heading)
}

/// Body turn for this tick: shortest way round, clamped to the turn limit.
pub fn heading_turn(current: f64, desired: f64, max_turn_rate: f64) -> f64 {
    shortest_turn(current, desired).clamp(-max_turn_rate, max_turn_rate)
}

/// Full ahead or full astern.
pub fn throttle(reverse: bool, config: &AgentConfig) -> f64 {
    if reverse {
        -config.throttle
    } else {
        config.throttle
    }
}

/// Rough guess at where we will be shortly if we keep going.
pub fn projected_position(position: DVec2, heading: f64, reverse: bool, step: f64) -> DVec2 {
    let travel = if reverse { -step } else { step };
    (PolarVector::from_dvec2(position) + PolarVector::new(travel, heading)).to_cartesian()
}

/// True if `projected` is within `margin` of a wall and further toward it
/// than `current`, so we don't flag while already pulling away.
pub fn will_hit_wall(current: DVec2, projected: DVec2, field: FieldBounds, margin: f64) -> bool {
    (projected.x < margin && projected.x < current.x)
        || (projected.x > field.width - margin && projected.x > current.x)
        || (projected.y < margin && projected.y < current.y)
        || (projected.y > field.height - margin && projected.y > current.y)
}

/// Countdown to the next direction reversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReversalSchedule {
    pub reverse: bool,
    pub turns_until_flip: i32,
    min: i32,
    max: i32,
}

impl ReversalSchedule {
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            reverse: false,
            turns_until_flip: config.initial_flip_countdown,
            min: config.flip_countdown_min,
            max: config.flip_countdown_max,
        }
    }

    /// Advance one tick. Flips direction when the countdown runs out or a
    /// collision is predicted; returns true on a flip.
    pub fn tick<R: Rng + ?Sized>(&mut self, collision_predicted: bool, rng: &mut R) -> bool {
        self.turns_until_flip -= 1;
        if self.turns_until_flip > 0 && !collision_predicted {
            return false;
        }
        self.reverse = !self.reverse;
        self.turns_until_flip = rng.gen_range(self.min..self.max);
        trace!(
            "Reversing (reverse={}, wall={}), next flip in {}",
            self.reverse,
            collision_predicted,
            self.turns_until_flip
        );
        true
    }
}
