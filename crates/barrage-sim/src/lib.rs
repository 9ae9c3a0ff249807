//! Simulation engine for BARRAGE.
//!
//! Owns the terrain, the combatants, and the field objects; advances the
//! in-flight projectile at a fixed tick rate; and produces complete match
//! snapshots for a frontend. The engine is fully headless, enabling
//! deterministic testing of every match mechanic.

pub mod ballistics;
pub mod combatant;
pub mod engine;
pub mod field_object;
pub mod machine;
pub mod setup;
pub mod snapshot;

pub use barrage_core as core;
pub use engine::MatchEngine;

#[cfg(test)]
mod tests;
