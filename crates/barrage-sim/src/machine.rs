//! Turn sequencing: whose shot is live, bonus shots, win detection, scores.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use barrage_core::enums::{TerminalCause, TurnPhase};
use barrage_core::events::MatchEvent;
use barrage_core::state::ShotOutcome;
use barrage_core::types::opponent;

use crate::field_object::FieldObjectSet;

/// Match progression state. Owned by the engine, mutated only here.
///
/// One machine lives for the whole session so the scores survive match
/// restarts; `reset_for_match` rewinds everything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnMachine {
    pub phase: TurnPhase,
    pub current_player: usize,
    /// Session scores, accumulated across matches.
    pub scores: [u32; 2],
    pub in_progress: bool,
    /// An unconsumed extra shot earned by destroying a target.
    pub pending_bonus: bool,
    pub winner: Option<usize>,
}

impl Default for TurnMachine {
    fn default() -> Self {
        Self {
            phase: TurnPhase::MatchOver,
            current_player: 0,
            scores: [0, 0],
            in_progress: false,
            pending_bonus: false,
            winner: None,
        }
    }
}

impl TurnMachine {
    /// Rewind everything except the session scores for a fresh match.
    pub fn reset_for_match(&mut self, starting_player: usize, events: &mut Vec<MatchEvent>) {
        self.phase = TurnPhase::AwaitingShot;
        self.current_player = starting_player;
        self.in_progress = true;
        self.pending_bonus = false;
        self.winner = None;
        events.push(MatchEvent::MatchStarted);
        events.push(MatchEvent::TurnStarted {
            player: starting_player,
        });
        info!(starting_player, "match started");
    }

    /// Accept a fire request. Returns whether a shot may launch.
    pub fn try_fire(&mut self) -> bool {
        if !self.in_progress || self.phase != TurnPhase::AwaitingShot {
            return false;
        }
        self.phase = TurnPhase::ShotInFlight;
        true
    }

    /// Apply a terminal shot outcome.
    ///
    /// Direct hits decide the match for the non-hit player. Target hits
    /// consume the target, flag a bonus, and keep the turn. Anything else
    /// keeps the turn once if a bonus was pending, otherwise passes it.
    pub fn resolve(
        &mut self,
        outcome: &ShotOutcome,
        objects: &mut FieldObjectSet,
        events: &mut Vec<MatchEvent>,
    ) {
        self.phase = TurnPhase::TurnResolved;
        debug!(cause = ?outcome.cause, "shot resolved");

        if let (TerminalCause::DirectHit, Some(hit)) = (outcome.cause, outcome.hit_combatant) {
            let winner = opponent(hit);
            self.scores[winner] += 1;
            self.winner = Some(winner);
            self.in_progress = false;
            self.phase = TurnPhase::MatchOver;
            events.push(MatchEvent::PlayerWon { player: winner });
            events.push(MatchEvent::MatchEnded);
            info!(winner, scores = ?self.scores, "match decided by direct hit");
            return;
        }

        if let (TerminalCause::TargetHit, Some(target_id)) = (outcome.cause, outcome.hit_target) {
            objects.remove(target_id);
            self.pending_bonus = true;
            self.phase = TurnPhase::AwaitingShot;
            events.push(MatchEvent::TurnStarted {
                player: self.current_player,
            });
            debug!(
                player = self.current_player,
                target_id, "target destroyed, shooting again"
            );
            return;
        }

        // Terrain impact or out of bounds.
        if self.pending_bonus {
            self.pending_bonus = false;
        } else {
            self.current_player = opponent(self.current_player);
        }
        self.phase = TurnPhase::AwaitingShot;
        events.push(MatchEvent::TurnStarted {
            player: self.current_player,
        });
    }

    /// Tear the match down without declaring a winner. Valid from any
    /// state; scores and the rest of the world stay frozen where they are.
    pub fn quit(&mut self, events: &mut Vec<MatchEvent>) {
        if self.in_progress {
            info!("match quit");
        }
        self.phase = TurnPhase::MatchOver;
        self.in_progress = false;
        self.pending_bonus = false;
        events.push(MatchEvent::MatchEnded);
    }
}
