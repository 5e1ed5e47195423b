//! Core types and definitions for the SKIRMISH combat agent.
//!
//! This crate defines the vocabulary shared across all other crates:
//! polar vectors, engine events and commands, rules, configuration and
//! constants. It has no dependency on any engine or runtime.

pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod rules;
pub mod types;
