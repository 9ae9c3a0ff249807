//! Terrain system for BARRAGE.
//!
//! Destructible landscape silhouette: procedural generation,
//! interpolated height queries, solidity tests, and crater deformation.

pub use barrage_core as core;

pub mod generate;
pub mod profile;

// Re-export key types for convenience.
pub use generate::generate;
pub use profile::TerrainProfile;
