//! Match configuration consumed at setup.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_NAME_LEN;
use crate::enums::{GravityStrength, LandscapeKind, WindDirection, WindStrength};

/// Options for a match, normally filled in from the options screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Seed for every random draw in the match.
    pub seed: u64,
    pub wind_strength: WindStrength,
    pub wind_direction: WindDirection,
    pub gravity: GravityStrength,
    pub landscape: LandscapeKind,
    pub enable_targets: bool,
    pub enable_fans: bool,
    pub enable_pushers: bool,
    pub enable_pullers: bool,
    /// Display names; anything past `MAX_NAME_LEN` characters is dropped.
    pub player_names: [String; 2],
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            wind_strength: WindStrength::default(),
            wind_direction: WindDirection::default(),
            gravity: GravityStrength::default(),
            landscape: LandscapeKind::default(),
            enable_targets: false,
            enable_fans: false,
            enable_pushers: false,
            enable_pullers: false,
            player_names: ["P1_".to_string(), "P2_".to_string()],
        }
    }
}

impl MatchConfig {
    /// Clamp free-form fields to their legal bounds.
    pub fn normalize(&mut self) {
        for name in &mut self.player_names {
            if name.chars().count() > MAX_NAME_LEN {
                *name = name.chars().take(MAX_NAME_LEN).collect();
            }
        }
    }
}
