//! Radar scanning.
//!
//! The agent's radar sweeps an arc each tick, from where it pointed at the
//! start of the tick to where it points now. Any robot whose body overlaps
//! that arc within `RADAR_RANGE` produces a `Scanned` event.

use hecs::World;

use skirmish_core::constants::{RADAR_RANGE, ROBOT_SIZE};
use skirmish_core::events::EngineEvent;
use skirmish_core::types::{normalize_angle, shortest_turn, PolarVector};

use crate::components::{AgentControlled, Energy, Hull, Position, Robot, Turret};

pub fn run(world: &World, events: &mut Vec<EngineEvent>) {
    let scanner = {
        let mut query = world.query::<(&AgentControlled, &Position, &Hull, &Turret)>();
        query
            .iter()
            .next()
            .map(|(entity, (_, pos, hull, turret))| (entity, pos.0, *hull, *turret))
    };
    let Some((scanner, origin, hull, turret)) = scanner else {
        return;
    };
    let sweep = shortest_turn(turret.previous_radar_heading, turret.radar_heading);

    let mut query = world.query::<(&Robot, &Position, &Hull, &Energy)>();
    for (entity, (robot, pos, target_hull, energy)) in query.iter() {
        if entity == scanner {
            continue;
        }
        let offset = PolarVector::from_dvec2(pos.0 - origin);
        let distance = offset.radius();
        if distance <= 0.0 || distance > RADAR_RANGE {
            continue;
        }
        let half_width = (ROBOT_SIZE / 2.0 / distance).atan();
        if !in_arc(turret.previous_radar_heading, sweep, offset.angle(), half_width) {
            continue;
        }
        events.push(EngineEvent::Scanned {
            name: robot.name.clone(),
            distance,
            bearing: normalize_angle(offset.angle() - hull.heading),
            velocity: target_hull.velocity,
            heading: target_hull.heading,
            energy: energy.0,
        });
    }
}

/// Whether `angle`, widened by `half_width`, falls in the arc that starts at
/// `start` and turns by `sweep`.
pub fn in_arc(start: f64, sweep: f64, angle: f64, half_width: f64) -> bool {
    let relative = shortest_turn(start, angle);
    let (low, high) = if sweep >= 0.0 { (0.0, sweep) } else { (sweep, 0.0) };
    relative >= low - half_width && relative <= high + half_width
}
