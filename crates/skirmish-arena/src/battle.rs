//! A full battle: one agent driving one robot in an arena.

use log::info;
use serde::{Deserialize, Serialize};

use skirmish_agent::state::AgentStats;
use skirmish_agent::Agent;
use skirmish_core::config::AgentConfig;

use crate::config::ArenaConfig;
use crate::engine::{Arena, ArenaStats, RobotSnapshot};
use crate::error::ArenaError;

/// How a battle ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleOutcome {
    pub ticks: u64,
    pub agent_survived: bool,
    pub opponents_left: usize,
    pub arena: ArenaStats,
    pub agent: AgentStats,
    pub survivors: Vec<RobotSnapshot>,
}

impl BattleOutcome {
    pub fn agent_won(&self) -> bool {
        self.agent_survived && self.opponents_left == 0
    }
}

pub struct Battle {
    arena: Arena,
    agent: Agent,
}

impl Battle {
    pub fn new(arena_config: ArenaConfig, agent_config: AgentConfig) -> Result<Self, ArenaError> {
        Ok(Self {
            arena: Arena::new(arena_config)?,
            agent: Agent::new(agent_config)?,
        })
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    /// Deliver the arena's events and run one agent tick. Returns false once
    /// the battle is over.
    pub fn step(&mut self) -> bool {
        if self.arena.is_over() {
            return false;
        }
        self.agent.queue_events(self.arena.drain_events());
        self.agent.tick(&mut self.arena);
        true
    }

    pub fn run(mut self) -> BattleOutcome {
        while self.step() {}
        let outcome = self.outcome();
        info!(
            "Battle over after {} ticks: agent {}, {} opponent(s) left",
            outcome.ticks,
            if outcome.agent_survived { "alive" } else { "destroyed" },
            outcome.opponents_left
        );
        outcome
    }

    pub fn outcome(&self) -> BattleOutcome {
        BattleOutcome {
            ticks: self.arena.time(),
            agent_survived: self.arena.agent_alive(),
            opponents_left: self.arena.opponents_alive(),
            arena: self.arena.stats().clone(),
            agent: self.agent.stats().clone(),
            survivors: self.arena.robots(),
        }
    }
}
