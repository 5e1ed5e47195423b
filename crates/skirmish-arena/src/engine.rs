//! Arena engine: the reference host for the agent.
//!
//! `Arena` owns the hecs ECS world, applies committed command batches, runs
//! all systems once per commit, and collects the events the agent will see
//! next tick. Completely headless, enabling deterministic testing.

use hecs::{Entity, World};
use log::trace;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use skirmish_agent::Engine;
use skirmish_core::commands::AgentCommand;
use skirmish_core::events::EngineEvent;
use skirmish_core::rules;
use skirmish_core::types::{BodyStatus, FieldBounds};

use crate::components::{AgentControlled, Energy, Hull, Orders, Position, Robot, Turret};
use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::systems;
use crate::world_setup;

/// Running totals for a battle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArenaStats {
    pub bullets_fired: u32,
    pub bullets_hit: u32,
    pub wall_hits: u32,
    pub robots_destroyed: u32,
}

/// What one robot looks like from outside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotSnapshot {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub heading: f64,
    pub velocity: f64,
    pub energy: f64,
}

pub struct Arena {
    world: World,
    config: ArenaConfig,
    time: u64,
    agent: Entity,
    /// Events for the agent's next tick, `Status` first.
    pending_events: Vec<EngineEvent>,
    despawn_buffer: Vec<Entity>,
    /// Last known state of the agent's robot; survives its destruction.
    agent_status: BodyStatus,
    stats: ArenaStats,
}

impl Arena {
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;

        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let agent = world_setup::setup_arena(&mut world, &config, &mut rng);

        let mut arena = Self {
            world,
            config,
            time: 0,
            agent,
            pending_events: vec![EngineEvent::Status],
            despawn_buffer: Vec::new(),
            agent_status: BodyStatus::default(),
            stats: ArenaStats::default(),
        };
        arena.refresh_agent_status();
        Ok(arena)
    }

    /// Hand over the events gathered since the last drain.
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn time(&self) -> u64 {
        self.time
    }

    pub fn stats(&self) -> &ArenaStats {
        &self.stats
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn agent_alive(&self) -> bool {
        self.world.contains(self.agent)
    }

    pub fn opponents_alive(&self) -> usize {
        let mut query = self.world.query::<(&Robot, Option<&AgentControlled>)>();
        query.iter().filter(|(_, (_, agent))| agent.is_none()).count()
    }

    /// The battle is over once one side is gone or time runs out.
    pub fn is_over(&self) -> bool {
        self.time >= self.config.max_ticks || !self.agent_alive() || self.opponents_alive() == 0
    }

    /// All robots still in the arena.
    pub fn robots(&self) -> Vec<RobotSnapshot> {
        let mut query = self.world.query::<(&Robot, &Position, &Hull, &Energy)>();
        query
            .iter()
            .map(|(_, (robot, pos, hull, energy))| RobotSnapshot {
                name: robot.name.clone(),
                x: pos.0.x,
                y: pos.0.y,
                heading: hull.heading,
                velocity: hull.velocity,
                energy: energy.0,
            })
            .collect()
    }

    pub fn robot(&self, name: &str) -> Option<RobotSnapshot> {
        self.robots().into_iter().find(|r| r.name == name)
    }

    /// Handle a single agent command.
    fn handle_command(&mut self, command: AgentCommand) {
        let Ok(mut orders) = self.world.get::<&mut Orders>(self.agent) else {
            return;
        };
        match command {
            AgentCommand::TurnRadarBy { radians } => orders.radar_turn = radians,
            AgentCommand::TurnGunBy { radians } => orders.gun_turn = radians,
            AgentCommand::TurnBodyBy { radians } => orders.body_turn = radians,
            AgentCommand::SetThrottle { magnitude } => orders.distance = magnitude,
            AgentCommand::Fire { power } => orders.fire = Some(power),
        }
    }

    /// Run all systems in order and advance one tick.
    fn step(&mut self) {
        let mut events = Vec::new();
        let field = self.config.field;

        // 1. Scripted pilots
        systems::movement::pilots(&mut self.world);
        // 2. Fire (gun heading before this tick's turn)
        systems::gunnery::fire(&mut self.world, &mut self.stats);
        // 3. Hull, gun and radar turns
        systems::movement::turns(&mut self.world);
        // 4. Gun cooling
        systems::gunnery::cool(&mut self.world);
        // 5. Movement integration and walls
        systems::movement::run(&mut self.world, field, &mut events, &mut self.stats);
        // 6. Bullet flight and hits
        systems::gunnery::run(
            &mut self.world,
            field,
            &mut self.despawn_buffer,
            &mut self.stats,
        );
        // 7. Radar scan
        systems::radar::run(&self.world, &mut events);
        // 8. Cleanup (dead robots)
        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut events,
            &mut self.stats,
        );

        self.time += 1;
        self.refresh_agent_status();

        self.pending_events.clear();
        self.pending_events.push(EngineEvent::Status);
        self.pending_events.extend(events);
        trace!("arena tick {}: {} events", self.time, self.pending_events.len());
    }

    fn refresh_agent_status(&mut self) {
        let Ok(mut query) = self
            .world
            .query_one::<(&Position, &Hull, &Turret, &Energy)>(self.agent)
        else {
            return;
        };
        if let Some((pos, hull, turret, energy)) = query.get() {
            self.agent_status = BodyStatus {
                x: pos.0.x,
                y: pos.0.y,
                heading: hull.heading,
                gun_heading: turret.gun_heading,
                radar_heading: turret.radar_heading,
                velocity: hull.velocity,
                energy: energy.0,
            };
        }
    }
}

impl Engine for Arena {
    fn body(&self) -> BodyStatus {
        self.agent_status
    }

    fn field(&self) -> FieldBounds {
        self.config.field
    }

    /// Turning slows down with speed.
    fn max_turn_rate(&self) -> f64 {
        rules::turn_rate(self.agent_status.velocity)
    }

    fn commit(&mut self, commands: &[AgentCommand]) {
        for command in commands {
            self.handle_command(*command);
        }
        self.step();
    }
}
