//! Cleanup system: removes robots that ran out of energy.

use hecs::{Entity, World};
use log::info;

use skirmish_core::events::EngineEvent;

use crate::components::{AgentControlled, Energy, Robot};
use crate::engine::ArenaStats;

/// Despawn dead robots. The agent hears about every death but its own.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<EngineEvent>,
    stats: &mut ArenaStats,
) {
    despawn_buffer.clear();

    for (entity, (robot, energy, agent)) in
        world.query_mut::<(&Robot, &Energy, Option<&AgentControlled>)>()
    {
        if energy.0 > 0.0 {
            continue;
        }
        info!("{} destroyed", robot.name);
        stats.robots_destroyed += 1;
        despawn_buffer.push(entity);
        if agent.is_none() {
            events.push(EngineEvent::Destroyed {
                name: robot.name.clone(),
            });
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
