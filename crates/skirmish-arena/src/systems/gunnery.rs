//! Guns and bullets: firing, cooling, flight and hit resolution.

use glam::DVec2;
use hecs::{Entity, World};
use log::debug;

use skirmish_core::constants::{GUN_COOLING_RATE, ROBOT_SIZE};
use skirmish_core::rules;
use skirmish_core::types::FieldBounds;

use crate::components::{Bullet, Energy, Orders, Position, Robot, Turret};
use crate::engine::ArenaStats;
use crate::systems::movement::heading_vector;

/// Fire every ordered shot the gun and energy allow. Bullets leave along the
/// gun heading as it was before this tick's turn.
pub fn fire(world: &mut World, stats: &mut ArenaStats) {
    let mut shots = Vec::new();

    for (entity, (pos, turret, energy, orders)) in
        world.query_mut::<(&Position, &mut Turret, &mut Energy, &mut Orders)>()
    {
        let Some(power) = orders.fire.take() else {
            continue;
        };
        let power = rules::clamp_power(power);
        if turret.gun_heat > 0.0 || energy.0 <= power {
            continue;
        }
        turret.gun_heat = rules::gun_heat(power);
        energy.0 -= power;
        shots.push((
            pos.0,
            Bullet {
                owner: entity,
                power,
                heading: turret.gun_heading,
                speed: rules::bullet_speed(power),
            },
        ));
    }

    for (origin, bullet) in shots {
        stats.bullets_fired += 1;
        world.spawn((Position(origin), bullet));
    }
}

pub fn cool(world: &mut World) {
    for (_entity, turret) in world.query_mut::<&mut Turret>() {
        turret.gun_heat = (turret.gun_heat - GUN_COOLING_RATE).max(0.0);
    }
}

/// Move bullets, resolve hits and drop bullets that hit or left the field.
pub fn run(
    world: &mut World,
    field: FieldBounds,
    despawn_buffer: &mut Vec<Entity>,
    stats: &mut ArenaStats,
) {
    despawn_buffer.clear();

    let robots: Vec<(Entity, DVec2)> = world
        .query::<(&Robot, &Position)>()
        .iter()
        .map(|(entity, (_, pos))| (entity, pos.0))
        .collect();

    let mut hits = Vec::new();
    for (entity, (pos, bullet)) in world.query_mut::<(&mut Position, &Bullet)>() {
        let start = pos.0;
        let end = start + heading_vector(bullet.heading) * bullet.speed;
        pos.0 = end;

        let victim = robots.iter().find(|(robot, centre)| {
            *robot != bullet.owner && distance_to_segment(*centre, start, end) < ROBOT_SIZE / 2.0
        });
        if let Some((victim, _)) = victim {
            hits.push((*victim, bullet.owner, bullet.power));
            despawn_buffer.push(entity);
        } else if !field.contains(end) {
            despawn_buffer.push(entity);
        }
    }

    for (victim, owner, power) in hits {
        stats.bullets_hit += 1;
        if let Ok(mut energy) = world.get::<&mut Energy>(victim) {
            energy.0 -= rules::bullet_damage(power);
            debug!("Hit for {:.1}, {:.1} energy left", rules::bullet_damage(power), energy.0);
        }
        if let Ok(mut energy) = world.get::<&mut Energy>(owner) {
            energy.0 += rules::bullet_hit_bonus(power);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Shortest distance from `point` to the segment `a`-`b`.
pub fn distance_to_segment(point: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}
