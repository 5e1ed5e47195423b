//! Decision logic for the SKIRMISH agent.
//!
//! Implements the linear firing solver, bullet power selection, the
//! single-target tracker state machine and the circle-strafe movement
//! controller. Everything here is plain data and pure-ish functions; the
//! agent crate wires them into the per-tick pipeline.

pub mod firing;
pub mod movement;
pub mod tracker;

pub use skirmish_core as core;
