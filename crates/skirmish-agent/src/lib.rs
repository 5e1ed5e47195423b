//! The SKIRMISH combat agent.
//!
//! Wires the tracker, firing solver and movement controller into a fixed
//! per-tick pipeline that talks to the engine only through the [`Engine`]
//! trait. Completely headless, enabling deterministic testing against a
//! recording engine.

pub mod agent;
pub mod engine;
pub mod state;

pub use agent::Agent;
pub use engine::Engine;
pub use skirmish_core as core;

#[cfg(test)]
mod tests;
