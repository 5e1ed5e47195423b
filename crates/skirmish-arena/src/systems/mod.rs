//! ECS systems that operate on the arena world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components.

pub mod cleanup;
pub mod gunnery;
pub mod movement;
pub mod radar;
