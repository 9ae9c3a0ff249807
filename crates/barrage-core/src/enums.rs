//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Wind strength option for a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindStrength {
    /// No wind at all.
    #[default]
    None,
    Light,
    Medium,
    Strong,
    /// Re-rolled from light/medium/strong before every shot.
    Random,
}

/// How the wind direction behaves across turns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindDirection {
    /// Sign rolled once at match setup and kept for the whole match.
    #[default]
    Fixed,
    /// Sign re-rolled before every shot.
    RandomPerTurn,
}

/// Gravity strength option for a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GravityStrength {
    Light,
    #[default]
    Medium,
    Strong,
    /// One of the three, rolled at match setup.
    Random,
}

/// Landscape generation policy.
///
/// `Random` doubles as two things: as a config value it means "mountains or
/// foot hills, resolved uniformly at match setup"; passed directly to the
/// generator it produces the unconstrained noise profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LandscapeKind {
    /// Steep profile with forced peaks every fifth sample.
    Mountains,
    /// Shallow rolling profile.
    #[default]
    FootHills,
    Random,
}

/// Field object category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldObjectKind {
    /// Destroyed on hit, grants a bonus shot.
    Target,
    /// Blows projectiles sideways with linear falloff.
    Fan,
    /// Pushes projectiles straight up, no falloff.
    Pusher,
    /// Pulls projectiles straight down, no falloff.
    Puller,
}

/// Turn state machine phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// The active player is aiming; fire is accepted.
    #[default]
    AwaitingShot,
    /// A projectile is live; ballistics advances it each tick.
    ShotInFlight,
    /// A terminal outcome is being applied (transient within one tick).
    TurnResolved,
    /// The match is decided or torn down.
    MatchOver,
}

/// Why a projectile's flight ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminalCause {
    /// Entered a combatant's hit circle.
    DirectHit,
    /// Entered a target's trigger area.
    TargetHit,
    /// Met solid terrain.
    TerrainImpact,
    /// Left the extended landscape bounds.
    OutOfBounds,
}

/// Walking direction for combatant movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDirection {
    Left,
    Right,
}
