//! Entity spawn factories for setting up the arena world.

use std::f64::consts::PI;

use glam::DVec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::constants::{INITIAL_GUN_HEAT, ROBOT_SIZE, START_ENERGY};
use skirmish_core::types::FieldBounds;

use crate::components::*;
use crate::config::{ArenaConfig, OpponentSpec, Spawn};

/// Populate the world from the config. Returns the agent's entity.
pub fn setup_arena(world: &mut World, config: &ArenaConfig, rng: &mut ChaCha8Rng) -> Entity {
    let agent = spawn_agent(world, config, rng);
    for opponent in &config.opponents {
        spawn_opponent(world, opponent, config.field, rng);
    }
    agent
}

pub fn spawn_agent(world: &mut World, config: &ArenaConfig, rng: &mut ChaCha8Rng) -> Entity {
    let (position, heading) = resolve_spawn(&config.agent_spawn, config.field, rng);
    world.spawn((
        Robot {
            name: config.agent_name.clone(),
        },
        AgentControlled,
        Position(position),
        Hull {
            heading,
            velocity: 0.0,
        },
        Turret {
            gun_heading: heading,
            radar_heading: heading,
            previous_radar_heading: heading,
            gun_heat: INITIAL_GUN_HEAT,
        },
        Energy(START_ENERGY),
        Orders::default(),
    ))
}

pub fn spawn_opponent(
    world: &mut World,
    opponent: &OpponentSpec,
    field: FieldBounds,
    rng: &mut ChaCha8Rng,
) -> Entity {
    let (position, heading) = resolve_spawn(&opponent.spawn, field, rng);
    world.spawn((
        Robot {
            name: opponent.name.clone(),
        },
        Position(position),
        Hull {
            heading,
            velocity: opponent.speed,
        },
        Energy(opponent.energy),
        Pilot::Patrol { speed: opponent.speed },
    ))
}

/// Fill in whatever the spawn leaves open, keeping robots clear of the walls.
fn resolve_spawn(spawn: &Spawn, field: FieldBounds, rng: &mut ChaCha8Rng) -> (DVec2, f64) {
    let position = match spawn.position {
        Some([x, y]) => DVec2::new(x, y),
        None => DVec2::new(roll(rng, field.width), roll(rng, field.height)),
    };
    let heading = spawn.heading.unwrap_or_else(|| rng.gen_range(-PI..PI));
    (position, heading)
}

fn roll(rng: &mut ChaCha8Rng, extent: f64) -> f64 {
    let half = ROBOT_SIZE / 2.0;
    if extent > ROBOT_SIZE {
        rng.gen_range(half..extent - half)
    } else {
        extent / 2.0
    }
}
