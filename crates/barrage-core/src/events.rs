//! Events emitted by the simulation for presentation feedback.

use serde::{Deserialize, Serialize};

/// Fire-and-forget notifications buffered until the frontend drains them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchEvent {
    /// A new match is assembled and awaiting its first shot.
    MatchStarted,
    /// A player's turn has begun.
    TurnStarted { player: usize },
    /// The match ended, by win or by quit.
    MatchEnded,
    /// A player scored the round-winning hit.
    PlayerWon { player: usize },
    /// The terrain profile changed; mesh/collider consumers must rebuild.
    TerrainChanged,
}
