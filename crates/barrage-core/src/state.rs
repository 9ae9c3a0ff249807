//! Match state snapshot: the complete visible state sent to the frontend
//! each tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{FieldObjectKind, TerminalCause, TurnPhase};
use crate::types::SimTime;

/// Complete match state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub time: SimTime,
    pub phase: TurnPhase,
    /// Index of the player whose turn it is (0 or 1).
    pub current_player: usize,
    /// Session score per player, accumulated across matches.
    pub scores: [u32; 2],
    pub in_progress: bool,
    /// An extra same-player shot is owed after a destroyed target.
    pub pending_bonus: bool,
    /// Winner of a decided match.
    pub winner: Option<usize>,
    pub environment: Environment,
    pub combatants: [CombatantView; 2],
    pub field_objects: Vec<FieldObjectView>,
    /// The projectile currently in flight, if any.
    pub projectile: Option<ProjectileView>,
    /// Terminal record of the most recent shot.
    pub last_shot: Option<ShotOutcome>,
    /// Terrain silhouette samples, anchors included, for mesh rebuilds.
    pub terrain: Vec<DVec2>,
}

/// Gravity and wind in effect for the current shot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Downward acceleration (units/s^2).
    pub gravity: f64,
    /// Wind acceleration (units/s^2, horizontal).
    pub wind: DVec2,
    /// Discretized wind strength for display (0-9).
    pub wind_display: u8,
}

/// One combatant as visible to presentation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombatantView {
    pub player: usize,
    pub name: String,
    pub position: DVec2,
    /// Aim angle (degrees).
    pub angle: f64,
    /// Launch power.
    pub power: f64,
    pub can_move_left: bool,
    pub can_move_right: bool,
}

/// One live field object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldObjectView {
    pub id: u32,
    pub kind: FieldObjectKind,
    pub position: DVec2,
    /// Effect (or trigger) radius.
    pub radius: f64,
    /// Blow direction, fans only.
    pub direction: Option<DVec2>,
}

/// The projectile in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: DVec2,
    pub velocity: DVec2,
    /// Index of the player who fired it.
    pub owner: usize,
}

/// Terminal record of one shot, the sole channel from ballistics to the
/// turn state machine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotOutcome {
    pub cause: TerminalCause,
    pub final_position: DVec2,
    /// Combatant caught in the hit circle, if any.
    pub hit_combatant: Option<usize>,
    /// Target whose trigger area was entered, if any.
    pub hit_target: Option<u32>,
}
