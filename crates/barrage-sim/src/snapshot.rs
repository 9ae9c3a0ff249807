//! Read-only snapshot assembly for frontends.

use barrage_core::state::{Environment, MatchSnapshot, ShotOutcome};
use barrage_core::types::SimTime;
use barrage_terrain::TerrainProfile;

use crate::ballistics::Projectile;
use crate::combatant::Combatant;
use crate::field_object::FieldObjectSet;
use crate::machine::TurnMachine;

/// Assemble the complete visible state of the match. Pure read; the caller
/// decides when a frame is worth building.
#[allow(clippy::too_many_arguments)]
pub fn build(
    time: SimTime,
    machine: &TurnMachine,
    environment: Environment,
    combatants: &[Combatant; 2],
    objects: &FieldObjectSet,
    projectile: Option<&Projectile>,
    last_shot: Option<ShotOutcome>,
    terrain: &TerrainProfile,
) -> MatchSnapshot {
    MatchSnapshot {
        time,
        phase: machine.phase,
        current_player: machine.current_player,
        scores: machine.scores,
        in_progress: machine.in_progress,
        pending_bonus: machine.pending_bonus,
        winner: machine.winner,
        environment,
        combatants: [combatants[0].view(), combatants[1].view()],
        field_objects: objects.views(),
        projectile: projectile.map(Projectile::view),
        last_shot,
        terrain: terrain.points().to_vec(),
    }
}
