//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and drained at the next tick boundary. Commands that
//! are invalid for the current phase are ignored, never errors.

use serde::{Deserialize, Serialize};

use crate::enums::MoveDirection;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Aiming ---
    /// Set the active combatant's aim angle (degrees, clamped).
    SetAngle { degrees: f64 },
    /// Set the active combatant's launch power (clamped).
    SetPower { power: f64 },
    /// Nudge the aim angle by a delta (degrees, clamped).
    AdjustAngle { delta: f64 },
    /// Nudge the launch power by a delta (clamped).
    AdjustPower { delta: f64 },

    // --- Movement ---
    /// Walk the active combatant along locally flat ground.
    Move {
        direction: MoveDirection,
        distance: f64,
    },

    // --- Match control ---
    /// Launch the active combatant's shot.
    Fire,
    /// Tear down the current match without declaring a winner.
    Quit,
    /// Assemble a fresh match with the stored configuration.
    StartMatch,
}
