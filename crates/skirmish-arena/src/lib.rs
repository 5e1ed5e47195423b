//! Reference arena for SKIRMISH.
//!
//! Owns the hecs ECS world, runs the battle rules one tick per agent commit,
//! and reports sensor events back to the agent through the `Engine` seam.

pub mod battle;
pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod systems;
pub mod world_setup;

pub use battle::{Battle, BattleOutcome};
pub use engine::Arena;
pub use skirmish_agent as agent;
