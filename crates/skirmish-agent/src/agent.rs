//! The agent: event handling plus the fixed per-tick pipeline.
//!
//! `Agent` owns all decision state. Engine events are queued between ticks
//! and drained at the start of the next one, so nothing mutates the state
//! while the pipeline runs. Each tick builds one command batch and hands it
//! to the engine's commit barrier in a single call.

use std::collections::VecDeque;

use log::{debug, trace, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skirmish_ai::firing::{firing_solution, is_viable, select_bullet_power};
use skirmish_ai::movement::{
    desired_heading, heading_turn, projected_position, throttle, will_hit_wall,
};
use skirmish_ai::tracker::{Observation, TargetBelief, TargetTracker};
use skirmish_core::commands::AgentCommand;
use skirmish_core::config::AgentConfig;
use skirmish_core::error::ConfigError;
use skirmish_core::events::EngineEvent;
use skirmish_core::types::{shortest_turn, BodyStatus, FieldBounds, PolarVector};

use crate::engine::Engine;
use crate::state::{AgentState, AgentStats};

pub struct Agent {
    config: AgentConfig,
    state: AgentState,
    tracker: TargetTracker,
    rng: ChaCha8Rng,
    event_queue: VecDeque<EngineEvent>,
    stats: AgentStats,
}

impl Agent {
    /// Build an agent, rejecting configs that fail validation.
    pub fn new(config: AgentConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: AgentState::new(&config),
            tracker: TargetTracker::new(config.forget_threshold),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            event_queue: VecDeque::new(),
            stats: AgentStats::default(),
            config,
        })
    }

    /// Queue an engine event for processing at the next tick boundary.
    pub fn queue_event(&mut self, event: EngineEvent) {
        self.event_queue.push_back(event);
    }

    /// Queue multiple events.
    pub fn queue_events(&mut self, events: impl IntoIterator<Item = EngineEvent>) {
        self.event_queue.extend(events);
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn state(&self) -> &AgentState {
        &self.state
    }

    pub fn belief(&self) -> Option<&TargetBelief> {
        self.tracker.belief()
    }

    pub fn stats(&self) -> &AgentStats {
        &self.stats
    }

    /// Run one tick: drain queued events, decide, commit. Returns the batch
    /// handed to the engine.
    pub fn tick<E: Engine + ?Sized>(&mut self, engine: &mut E) -> Vec<AgentCommand> {
        let body = engine.body();
        let field = engine.field();
        self.process_events(&body, field);

        let commands = self.decide(engine, &body);
        trace!("tick {}: {:?}", self.stats.ticks, commands);
        engine.commit(&commands);
        self.stats.ticks += 1;
        commands
    }

    /// Handle all queued events, status first.
    fn process_events(&mut self, body: &BodyStatus, field: FieldBounds) {
        let (status, rest): (Vec<_>, Vec<_>) =
            self.event_queue.drain(..).partition(EngineEvent::is_status);
        for event in status.into_iter().chain(rest) {
            self.handle_event(event, body, field);
        }
    }

    fn handle_event(&mut self, event: EngineEvent, body: &BodyStatus, field: FieldBounds) {
        match event {
            EngineEvent::Status => self.on_status(body, field),
            EngineEvent::Scanned {
                name,
                distance,
                bearing,
                velocity,
                heading,
                energy,
            } => {
                let observation = Observation {
                    name,
                    position: PolarVector::new(distance, bearing + body.heading),
                    velocity: PolarVector::new(velocity, heading),
                    energy,
                };
                let update = self.tracker.observe(observation);
                if update.acquired {
                    self.stats.targets_acquired += 1;
                }
                if update.replaced {
                    self.update_desired_heading();
                }
            }
            EngineEvent::Destroyed { name } => {
                self.tracker.on_destroyed(&name);
            }
            EngineEvent::WallHit { bearing } => {
                self.stats.wall_hits += 1;
                let (projected, predicted) = self.wall_check(body, field);
                warn!(
                    "Bump! wall at bearing {:.2}, projected position was ({:.1}, {:.1}), predicted: {}",
                    bearing, projected.x, projected.y, predicted
                );
            }
        }
    }

    /// Once per tick: age the belief and maybe reverse direction.
    fn on_status(&mut self, body: &BodyStatus, field: FieldBounds) {
        if self.tracker.on_status() {
            self.stats.targets_forgotten += 1;
        }

        let (_, collision) = self.wall_check(body, field);
        if self.state.movement.tick(collision, &mut self.rng) {
            self.stats.reversals += 1;
            self.update_desired_heading();
        }
    }

    fn wall_check(&self, body: &BodyStatus, field: FieldBounds) -> (glam::DVec2, bool) {
        let here = body.position();
        let projected = projected_position(
            here,
            body.heading,
            self.state.reverse(),
            self.config.wall_probe_step,
        );
        let hit = will_hit_wall(here, projected, field, self.config.wall_margin);
        (projected, hit)
    }

    fn update_desired_heading(&mut self) {
        let target = self.tracker.belief().map(|b| b.position);
        self.state.desired_heading = desired_heading(target, self.state.reverse(), &self.config);
    }

    /// The fixed pipeline. Order matters: firing checks the gun heading as
    /// it was before this tick's gun turn.
    fn decide<E: Engine + ?Sized>(&mut self, engine: &E, body: &BodyStatus) -> Vec<AgentCommand> {
        let mut commands = Vec::with_capacity(6);
        self.state.heading = body.heading;

        // 1. Bullet power and firing solution
        self.update_target(engine);

        // 2. Gun
        if let Some(solution) = self.state.target_vector {
            commands.push(AgentCommand::TurnGunBy {
                radians: shortest_turn(body.gun_heading, solution.angle()),
            });
        }

        // 3. Radar
        let radar_turn = match self.tracker.belief() {
            Some(belief) => shortest_turn(body.radar_heading, belief.position.angle()),
            None => self.config.radar_sweep,
        };
        commands.push(AgentCommand::TurnRadarBy {
            radians: radar_turn,
        });

        // 4. Heading
        commands.push(AgentCommand::TurnBodyBy {
            radians: heading_turn(body.heading, self.state.desired_heading, engine.max_turn_rate()),
        });

        // 5. Throttle
        commands.push(AgentCommand::SetThrottle {
            magnitude: throttle(self.state.reverse(), &self.config),
        });

        // 6. Fire
        if let Some(power) = self.firing_power(body) {
            self.stats.shots_fired += 1;
            commands.push(AgentCommand::Fire { power });
        }

        commands
    }

    fn update_target<E: Engine + ?Sized>(&mut self, engine: &E) {
        let energy = self
            .tracker
            .belief()
            .map(|b| b.energy)
            .unwrap_or(f64::INFINITY);
        self.state.bullet_power = select_bullet_power(self.tracker.distance(), energy, &self.config);

        let bullet_speed = engine.bullet_speed(self.state.bullet_power.value());
        self.state.target_vector = self
            .tracker
            .belief()
            .map(|b| firing_solution(b.position, b.velocity, bullet_speed));
    }

    /// Fire only when the shot lands soon enough and the gun is on it.
    fn firing_power(&self, body: &BodyStatus) -> Option<f64> {
        let solution = self.state.target_vector?;
        if !is_viable(&solution, self.config.max_time_to_impact) {
            return None;
        }
        let error = shortest_turn(body.gun_heading, solution.angle());
        if error.abs() >= self.config.aim_tolerance {
            return None;
        }
        debug!(
            "Firing power {} at {:.2} rad, impact in {:.1} ticks",
            self.state.bullet_power.value(),
            solution.angle(),
            solution.radius()
        );
        Some(self.state.bullet_power.value())
    }
}
