#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;
    use test_log::test;

    use skirmish_ai::firing::BulletPower;
    use skirmish_core::commands::AgentCommand;
    use skirmish_core::config::AgentConfig;
    use skirmish_core::error::ConfigError;
    use skirmish_core::events::EngineEvent;
    use skirmish_core::types::{BodyStatus, FieldBounds};

    use crate::agent::Agent;
    use crate::engine::Engine;

    /// Engine stand-in that records every committed batch.
    struct MockEngine {
        body: BodyStatus,
        field: FieldBounds,
        commits: Vec<Vec<AgentCommand>>,
    }

    impl MockEngine {
        fn at(x: f64, y: f64, heading: f64) -> Self {
            Self {
                body: BodyStatus {
                    x,
                    y,
                    heading,
                    gun_heading: heading,
                    radar_heading: heading,
                    velocity: 0.0,
                    energy: 100.0,
                },
                field: FieldBounds::new(800.0, 600.0),
                commits: Vec::new(),
            }
        }

        fn last(&self) -> &[AgentCommand] {
            self.commits.last().map(Vec::as_slice).unwrap_or(&[])
        }
    }

    impl Engine for MockEngine {
        fn body(&self) -> BodyStatus {
            self.body
        }

        fn field(&self) -> FieldBounds {
            self.field
        }

        fn commit(&mut self, commands: &[AgentCommand]) {
            self.commits.push(commands.to_vec());
        }
    }

    fn scan(name: &str, distance: f64, bearing: f64, velocity: f64, heading: f64, energy: f64) -> EngineEvent {
        EngineEvent::Scanned {
            name: name.to_string(),
            distance,
            bearing,
            velocity,
            heading,
            energy,
        }
    }

    fn fire_power(commands: &[AgentCommand]) -> Option<f64> {
        commands.iter().find_map(|c| match c {
            AgentCommand::Fire { power } => Some(*power),
            _ => None,
        })
    }

    fn radar_turn(commands: &[AgentCommand]) -> Option<f64> {
        commands.iter().find_map(|c| match c {
            AgentCommand::TurnRadarBy { radians } => Some(*radians),
            _ => None,
        })
    }

    fn gun_turn(commands: &[AgentCommand]) -> Option<f64> {
        commands.iter().find_map(|c| match c {
            AgentCommand::TurnGunBy { radians } => Some(*radians),
            _ => None,
        })
    }

    fn body_turn(commands: &[AgentCommand]) -> Option<f64> {
        commands.iter().find_map(|c| match c {
            AgentCommand::TurnBodyBy { radians } => Some(*radians),
            _ => None,
        })
    }

    fn throttle(commands: &[AgentCommand]) -> Option<f64> {
        commands.iter().find_map(|c| match c {
            AgentCommand::SetThrottle { magnitude } => Some(*magnitude),
            _ => None,
        })
    }

    // ---- Firing ----

    #[test]
    fn test_fires_full_power_at_point_blank_target() {
        let mut engine = MockEngine::at(400.0, 300.0, 0.0);
        let mut agent = Agent::new(AgentConfig::default()).unwrap();

        agent.queue_event(scan("test-robot", 2.0, 0.0, 0.0, 0.0, 10.0));
        agent.tick(&mut engine);

        assert_eq!(engine.commits.len(), 1);
        assert_eq!(fire_power(engine.last()), Some(3.0));
        assert_eq!(agent.stats().shots_fired, 1);
    }

    #[test]
    fn test_scenario_stationary_target_at_fifty() {
        let mut engine = MockEngine::at(400.0, 300.0, 0.0);
        let mut agent = Agent::new(AgentConfig::default()).unwrap();

        agent.queue_event(scan("duck", 50.0, 0.0, 0.0, 0.0, 10.0));
        agent.tick(&mut engine);

        let solution = agent.state().target_vector.expect("solution while tracking");
        assert_abs_diff_eq!(solution.angle(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(solution.radius(), 50.0 / 11.0, epsilon = 1e-9);
        assert_eq!(agent.state().bullet_power, BulletPower::Three);
        assert_eq!(fire_power(engine.last()), Some(3.0));
    }

    #[test]
    fn test_distant_target_gets_power_one() {
        let mut engine = MockEngine::at(400.0, 300.0, 0.0);
        let mut agent = Agent::new(AgentConfig::default()).unwrap();

        agent.queue_event(scan("far", 400.0, 0.0, 0.0, 0.0, 10.0));
        agent.tick(&mut engine);

        assert_eq!(agent.state().bullet_power, BulletPower::One);
        // 400 / 17 is under 30 ticks, gun is on target.
        assert_eq!(fire_power(engine.last()), Some(1.0));
    }

    #[test]
    fn test_holds_fire_when_gun_off_target() {
        let mut engine = MockEngine::at(400.0, 300.0, 0.0);
        let mut agent = Agent::new(AgentConfig::default()).unwrap();

        // Target off to the east; gun still pointing north.
        agent.queue_event(scan("duck", 50.0, FRAC_PI_2, 0.0, 0.0, 50.0));
        agent.tick(&mut engine);

        assert_eq!(fire_power(engine.last()), None);
        assert_abs_diff_eq!(gun_turn(engine.last()).unwrap(), FRAC_PI_2, epsilon = 1e-9);
    }

    #[test]
    fn test_holds_fire_when_impact_too_slow() {
        let mut engine = MockEngine::at(400.0, 300.0, 0.0);
        let mut agent = Agent::new(AgentConfig::default()).unwrap();

        // 600 / 17 > 30 ticks.
        agent.queue_event(scan("far", 600.0, 0.0, 0.0, 0.0, 50.0));
        agent.tick(&mut engine);

        assert_eq!(fire_power(engine.last()), None);
    }

    #[test]
    fn test_holds_fire_without_solution() {
        let mut engine = MockEngine::at(400.0, 300.0, 0.0);
        let mut agent = Agent::new(AgentConfig::default()).unwrap();

        // Running straight away faster than any bullet.
        agent.queue_event(scan("runner", 100.0, 0.0, 20.0, 0.0, 50.0));
        agent.tick(&mut engine);

        let solution = agent.state().target_vector.expect("tracking");
        assert!(solution.radius().is_infinite());
        assert_eq!(fire_power(engine.last()), None);
        // Gun still follows the line of sight.
        assert_abs_diff_eq!(gun_turn(engine.last()).unwrap(), 0.0, epsilon = 1e-9);
    }

    // ---- Radar & gun without a target ----

    #[test]
    fn test_searches_without_target() {
        let mut engine = MockEngine::at(400.0, 300.0, 0.0);
        let mut agent = Agent::new(AgentConfig::default()).unwrap();

        agent.tick(&mut engine);

        let commands = engine.last();
        assert_eq!(radar_turn(commands), Some(PI));
        assert_eq!(gun_turn(commands), None);
        assert_eq!(fire_power(commands), None);
        assert!(agent.state().target_vector.is_none());
    }

    #[test]
    fn test_radar_locks_onto_target() {
        let mut engine = MockEngine::at(400.0, 300.0, 0.0);
        engine.body.radar_heading = 2.0;
        let mut agent = Agent::new(AgentConfig::default()).unwrap();

        agent.queue_event(scan("duck", 200.0, -1.0, 0.0, 0.0, 50.0));
        agent.tick(&mut engine);

        // Absolute bearing is -1.0; shortest turn from 2.0 is -3.0.
        assert_abs_diff_eq!(radar_turn(engine.last()).unwrap(), -3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_scan_bearing_is_relative_to_body() {
        let mut engine = MockEngine::at(400.0, 300.0, 1.0);
        let mut agent = Agent::new(AgentConfig::default()).unwrap();

        agent.queue_event(scan("duck", 200.0, 0.5, 0.0, 0.0, 50.0));
        agent.tick(&mut engine);

        let belief = agent.belief().expect("tracking");
        assert_abs_diff_eq!(belief.position.angle(), 1.5, epsilon = 1e-12);
    }

    // ---- Tracker lifecycle through events ----

    #[test]
    fn test_forgets_target_after_four_silent_ticks() {
        let mut engine = MockEngine::at(400.0, 300.0, 0.0);
        let mut agent = Agent::new(AgentConfig::default()).unwrap();

        agent.queue_event(scan("duck", 200.0, 0.0, 0.0, 0.0, 50.0));
        agent.tick(&mut engine);

        for _ in 0..3 {
            agent.queue_event(EngineEvent::Status);
            agent.tick(&mut engine);
            assert!(agent.belief().is_some());
        }
        agent.queue_event(EngineEvent::Status);
        agent.tick(&mut engine);

        assert!(agent.belief().is_none());
        assert_eq!(radar_turn(engine.last()), Some(PI));
        assert_eq!(agent.stats().targets_forgotten, 1);
    }

    #[test]
    fn test_destroyed_target_is_dropped_immediately() {
        let mut engine = MockEngine::at(400.0, 300.0, 0.0);
        let mut agent = Agent::new(AgentConfig::default()).unwrap();

        agent.queue_event(scan("duck", 200.0, 0.0, 0.0, 0.0, 50.0));
        agent.tick(&mut engine);
        agent.queue_events([
            EngineEvent::Destroyed {
                name: "someone-else".to_string(),
            },
            EngineEvent::Destroyed {
                name: "duck".to_string(),
            },
        ]);
        agent.tick(&mut engine);

        assert!(agent.belief().is_none());
        assert_eq!(fire_power(engine.last()), None);
    }

    #[test]
    fn test_status_processed_before_scan() {
        let mut engine = MockEngine::at(400.0, 300.0, 0.0);
        let mut agent = Agent::new(AgentConfig::default()).unwrap();

        agent.queue_event(scan("duck", 200.0, 0.0, 0.0, 0.0, 50.0));
        agent.tick(&mut engine);
        for _ in 0..3 {
            agent.queue_event(EngineEvent::Status);
            agent.tick(&mut engine);
        }

        // The scan is queued ahead of the status, but status is handled first:
        // the stale target is dropped, then the scan reacquires it fresh.
        agent.queue_events([scan("duck", 190.0, 0.0, 0.0, 0.0, 50.0), EngineEvent::Status]);
        agent.tick(&mut engine);

        let belief = agent.belief().expect("still tracking");
        assert_eq!(belief.ticks_unseen, 0);
    }

    // ---- Movement ----

    #[test]
    fn test_body_turn_is_clamped() {
        let mut engine = MockEngine::at(400.0, 300.0, 0.0);
        let mut agent = Agent::new(AgentConfig::default()).unwrap();

        // Target due north and far: desired heading is PI/2 - 0.5.
        agent.queue_event(scan("duck", 300.0, 0.0, 0.0, 0.0, 50.0));
        agent.tick(&mut engine);

        assert_abs_diff_eq!(agent.state().desired_heading, FRAC_PI_2 - 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(
            body_turn(engine.last()).unwrap(),
            engine.max_turn_rate(),
            epsilon = 1e-12
        );
        assert_eq!(throttle(engine.last()), Some(1000.0));
    }

    #[test]
    fn test_reverses_on_schedule() {
        let mut engine = MockEngine::at(400.0, 300.0, 0.0);
        let mut agent = Agent::new(AgentConfig::default()).unwrap();

        for _ in 0..9 {
            agent.queue_event(EngineEvent::Status);
            agent.tick(&mut engine);
            assert!(!agent.state().reverse());
        }
        agent.queue_event(EngineEvent::Status);
        agent.tick(&mut engine);

        assert!(agent.state().reverse());
        assert_eq!(throttle(engine.last()), Some(-1000.0));
        assert!((10..50).contains(&agent.state().turns_until_flip()));
        assert_eq!(agent.stats().reversals, 1);
    }

    #[test]
    fn test_reverses_before_wall() {
        // Near the west wall, heading west.
        let mut engine = MockEngine::at(60.0, 300.0, -FRAC_PI_2);
        let mut agent = Agent::new(AgentConfig::default()).unwrap();

        agent.queue_event(EngineEvent::Status);
        agent.tick(&mut engine);

        assert!(agent.state().reverse());
        assert_eq!(throttle(engine.last()), Some(-1000.0));
    }

    #[test]
    fn test_wall_hit_is_counted() {
        let mut engine = MockEngine::at(20.0, 300.0, -FRAC_PI_2);
        let mut agent = Agent::new(AgentConfig::default()).unwrap();

        agent.queue_event(EngineEvent::WallHit { bearing: 0.0 });
        agent.tick(&mut engine);

        assert_eq!(agent.stats().wall_hits, 1);
    }

    // ---- Commit barrier ----

    #[test]
    fn test_one_commit_per_tick() {
        let mut engine = MockEngine::at(400.0, 300.0, 0.0);
        let mut agent = Agent::new(AgentConfig::default()).unwrap();

        agent.queue_event(scan("duck", 50.0, 0.0, 0.0, 0.0, 10.0));
        for _ in 0..5 {
            agent.queue_event(EngineEvent::Status);
            let batch = agent.tick(&mut engine);
            assert_eq!(engine.last(), batch.as_slice());
        }
        assert_eq!(engine.commits.len(), 5);
        assert_eq!(agent.stats().ticks, 5);
    }

    #[test]
    fn test_same_seed_same_decisions() {
        let run = |seed: u64| {
            let mut engine = MockEngine::at(400.0, 300.0, 0.0);
            let mut agent = Agent::new(AgentConfig {
                seed,
                ..Default::default()
            })
            .unwrap();
            for i in 0..200 {
                agent.queue_event(EngineEvent::Status);
                if i % 5 == 0 {
                    agent.queue_event(scan("duck", 150.0, 0.3, 4.0, 1.0, 40.0));
                }
                agent.tick(&mut engine);
            }
            serde_json::to_string(&engine.commits).unwrap()
        };

        assert_eq!(run(99), run(99));
        assert_ne!(run(99), run(100));
    }

    #[test]
    fn test_inverted_flip_range_rejected_at_construction() {
        let config = AgentConfig {
            flip_countdown_min: 50,
            flip_countdown_max: 10,
            ..Default::default()
        };
        assert!(matches!(
            Agent::new(config),
            Err(ConfigError::EmptyFlipRange { min: 50, max: 10 })
        ));
    }

    #[test]
    fn test_narrowest_flip_range_keeps_reversing() {
        let config = AgentConfig {
            initial_flip_countdown: 1,
            flip_countdown_min: 1,
            flip_countdown_max: 2,
            ..Default::default()
        };
        let mut agent = Agent::new(config).unwrap();
        let mut engine = MockEngine::at(400.0, 300.0, 0.0);
        for _ in 0..10 {
            agent.queue_event(EngineEvent::Status);
            agent.tick(&mut engine);
        }
        assert_eq!(agent.stats().reversals, 10);
    }
}
