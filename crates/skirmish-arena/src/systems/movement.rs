//! Hull, gun and radar kinematics.
//!
//! Turns are consumed from `Orders` at the per-tick limits, then speed is
//! stepped toward the ordered distance and positions are integrated and
//! clamped to the field.

use glam::DVec2;
use hecs::World;

use skirmish_core::constants::*;
use skirmish_core::events::EngineEvent;
use skirmish_core::rules;
use skirmish_core::types::{normalize_angle, FieldBounds};

use crate::components::{AgentControlled, Hull, Orders, Pilot, Position, Turret};
use crate::engine::ArenaStats;

/// Scripted robots hold their patrol speed.
pub fn pilots(world: &mut World) {
    for (_entity, (hull, pilot)) in world.query_mut::<(&mut Hull, &Pilot)>() {
        match *pilot {
            Pilot::Patrol { speed } => hull.velocity = speed,
        }
    }
}

/// Apply this tick's share of the outstanding turn orders.
pub fn turns(world: &mut World) {
    for (_entity, (hull, turret, orders)) in
        world.query_mut::<(&mut Hull, &mut Turret, &mut Orders)>()
    {
        let body = take_turn(&mut orders.body_turn, rules::turn_rate(hull.velocity));
        hull.heading = normalize_angle(hull.heading + body);

        // Gun and radar are decoupled from the hull and from each other.
        let gun = take_turn(&mut orders.gun_turn, GUN_TURN_RATE);
        turret.gun_heading = normalize_angle(turret.gun_heading + gun);

        turret.previous_radar_heading = turret.radar_heading;
        let radar = take_turn(&mut orders.radar_turn, RADAR_TURN_RATE);
        turret.radar_heading = normalize_angle(turret.radar_heading + radar);
    }
}

/// Take at most `limit` out of `remaining`, returning the amount taken.
fn take_turn(remaining: &mut f64, limit: f64) -> f64 {
    let step = remaining.clamp(-limit, limit);
    *remaining -= step;
    step
}

/// Speed after one tick of driving toward `distance` from `velocity`.
///
/// Speeds up by `ACCELERATION`, brakes by `DECELERATION` when slowing down
/// or changing direction, never exceeding `MAX_VELOCITY`.
pub fn next_velocity(velocity: f64, distance: f64) -> f64 {
    let goal = distance.clamp(-MAX_VELOCITY, MAX_VELOCITY);
    let braking =
        velocity != 0.0 && (goal.signum() != velocity.signum() || goal.abs() < velocity.abs());
    let step = if braking { DECELERATION } else { ACCELERATION };
    if goal > velocity {
        (velocity + step).min(goal)
    } else {
        (velocity - step).max(goal)
    }
}

/// Unit vector along a heading.
pub fn heading_vector(heading: f64) -> DVec2 {
    DVec2::new(heading.sin(), heading.cos())
}

/// Integrate robot positions and stop them at the walls.
pub fn run(
    world: &mut World,
    field: FieldBounds,
    events: &mut Vec<EngineEvent>,
    stats: &mut ArenaStats,
) {
    let half = ROBOT_SIZE / 2.0;
    let min = DVec2::splat(half);
    let max = DVec2::new(field.width - half, field.height - half);

    for (_entity, (pos, hull, orders, pilot, agent)) in world.query_mut::<(
        &mut Position,
        &mut Hull,
        Option<&mut Orders>,
        Option<&mut Pilot>,
        Option<&AgentControlled>,
    )>() {
        if let Some(orders) = orders {
            hull.velocity = next_velocity(hull.velocity, orders.distance);
            orders.distance -= hull.velocity;
        }

        let moved = pos.0 + heading_vector(hull.heading) * hull.velocity;
        let clamped = moved.clamp(min, max);
        pos.0 = clamped;
        if clamped == moved {
            continue;
        }

        hull.velocity = 0.0;
        stats.wall_hits += 1;
        if let Some(Pilot::Patrol { speed }) = pilot {
            *speed = -*speed;
        }
        if agent.is_some() {
            let wall = wall_direction(moved, min, max);
            events.push(EngineEvent::WallHit {
                bearing: normalize_angle(wall - hull.heading),
            });
        }
    }
}

/// Absolute direction of the wall a robot at `moved` ran into.
fn wall_direction(moved: DVec2, min: DVec2, max: DVec2) -> f64 {
    use std::f64::consts::{FRAC_PI_2, PI};

    if moved.y > max.y {
        0.0
    } else if moved.x > max.x {
        FRAC_PI_2
    } else if moved.y < min.y {
        PI
    } else {
        -FRAC_PI_2
    }
}
