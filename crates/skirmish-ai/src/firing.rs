//! Linear firing solutions and bullet power selection.
//!
//! The solver works in a local frame where the target sits straight ahead
//! at distance `d`, then rotates the answer back into the absolute frame:
//!
//! ```text
//!   |
//!   | alpha
//!   |\
//!   | \ t . ve
//! d |  \ collision
//!   |  /
//!   | / t . vb
//!   |/
//!  beta
//! ```

use skirmish_core::config::AgentConfig;
use skirmish_core::constants::SOLVER_MIN_DENOMINATOR;
use skirmish_core::types::PolarVector;

/// Discrete firing power.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BulletPower {
    One,
    Two,
    #[default]
    Three,
}

impl BulletPower {
    pub fn value(self) -> f64 {
        match self {
            BulletPower::One => 1.0,
            BulletPower::Two => 2.0,
            BulletPower::Three => 3.0,
        }
    }
}

/// Solve the intercept triangle in the local frame.
///
/// `d` is the distance to the target, `alpha` the target's heading relative
/// to our line of sight, `ve` the target speed and `vb` the bullet speed.
/// Returns `(beta, t)`: the firing angle relative to the line of sight and
/// the time to impact in ticks.
///
/// Law of sines gives `vb sin(beta) = ve sin(alpha)`, which has the two
/// roots `beta` and `PI - beta`. The along-sight distance gives
/// `t = d / (vb cos(beta) - ve cos(alpha))`. A viable intercept is the root
/// with positive finite `t`.
pub fn resolve_relative(d: f64, alpha: f64, ve: f64, vb: f64) -> Option<(f64, f64)> {
    if !(vb > 0.0) || !d.is_finite() {
        return None;
    }

    let sine = ve * alpha.sin() / vb;
    let beta1 = sine.asin();
    if beta1.is_nan() {
        // Target outruns the bullet sideways.
        return None;
    }
    let beta2 = std::f64::consts::PI - beta1;

    [beta1, beta2].into_iter().find_map(|beta| {
        let denominator = vb * beta.cos() - ve * alpha.cos();
        if denominator.abs() < SOLVER_MIN_DENOMINATOR {
            return None;
        }
        let t = d / denominator;
        (t.is_finite() && t > 0.0).then_some((beta, t))
    })
}

/// Firing solution for a target at `position` (relative to us, absolute
/// angle) moving along `velocity`.
///
/// The result's angle is the absolute heading to fire along and its radius
/// the time to impact. With no viable intercept the radius is infinite and
/// the angle stays on the line of sight.
pub fn firing_solution(position: PolarVector, velocity: PolarVector, bullet_speed: f64) -> PolarVector {
    let line_of_sight = position.angle();
    let alpha = velocity.angle() - line_of_sight;

    match resolve_relative(position.radius(), alpha, velocity.radius(), bullet_speed) {
        Some((beta, t)) => PolarVector::new(t, beta + line_of_sight),
        None => PolarVector::unreachable(line_of_sight),
    }
}

/// Whether a solution is close enough in time to be worth a shot.
pub fn is_viable(solution: &PolarVector, max_time_to_impact: f64) -> bool {
    let t = solution.radius();
    t > 0.0 && t < max_time_to_impact
}

/// Pick a bullet power: weaker (faster) shots at long range, and don't
/// overkill a target that is nearly dead.
pub fn select_bullet_power(distance: f64, energy: f64, config: &AgentConfig) -> BulletPower {
    if distance > config.one_power_distance || energy < config.one_power_energy {
        BulletPower::One
    } else if distance > config.two_power_distance || energy < config.two_power_energy {
        BulletPower::Two
    } else {
        BulletPower::Three
    }
}
