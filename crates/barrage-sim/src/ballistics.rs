//! Projectile flight: explicit Euler integration and terminal resolution.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use barrage_core::constants::{COMBATANT_HIT_RADIUS, EXPLOSION_RADIUS, OUT_OF_BOUNDS_MARGIN};
use barrage_core::enums::TerminalCause;
use barrage_core::state::{ProjectileView, ShotOutcome};
use barrage_terrain::TerrainProfile;

use crate::field_object::FieldObjectSet;

/// The single projectile allowed in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub position: DVec2,
    pub velocity: DVec2,
    /// Player index that fired it.
    pub owner: usize,
    /// Downward acceleration captured at launch (units/s^2).
    gravity: f64,
    /// Wind acceleration captured at launch (units/s^2).
    wind: DVec2,
    /// The shot cannot hit its owner until it has left the owner's hit
    /// circle once. Launches start inside that circle.
    armed_against_owner: bool,
}

impl Projectile {
    /// Convert an angle (degrees) and a power into an initial velocity and
    /// go live at `origin`.
    pub fn launch(
        origin: DVec2,
        angle_degrees: f64,
        power: f64,
        gravity: f64,
        wind: DVec2,
        owner: usize,
    ) -> Self {
        let angle = angle_degrees.to_radians();
        Self {
            position: origin,
            velocity: DVec2::new(power * angle.cos(), power * angle.sin()),
            owner,
            gravity,
            wind,
            armed_against_owner: false,
        }
    }

    /// Advance one fixed step. The integration order never changes:
    /// gravity, then wind, then field forces, then position.
    ///
    /// Returns the terminal outcome once the flight ends. Terrain
    /// deformation for impacts and direct hits has already been applied
    /// when it does.
    pub fn step(
        &mut self,
        dt: f64,
        terrain: &mut TerrainProfile,
        objects: &FieldObjectSet,
        combatant_positions: [DVec2; 2],
    ) -> Option<ShotOutcome> {
        self.velocity.y -= self.gravity * dt;
        self.velocity += self.wind * dt;
        self.velocity += objects.force_on(self.position) * dt;
        self.position += self.velocity * dt;

        self.check_terminal(terrain, objects, combatant_positions)
    }

    /// Terminal checks in priority order: direct hit, target hit, terrain
    /// impact, out of bounds.
    fn check_terminal(
        &mut self,
        terrain: &mut TerrainProfile,
        objects: &FieldObjectSet,
        combatant_positions: [DVec2; 2],
    ) -> Option<ShotOutcome> {
        let owner_distance = combatant_positions[self.owner].distance(self.position);
        if !self.armed_against_owner && owner_distance >= COMBATANT_HIT_RADIUS {
            self.armed_against_owner = true;
        }

        for (player, combatant_position) in combatant_positions.iter().enumerate() {
            if player == self.owner && !self.armed_against_owner {
                continue;
            }
            if combatant_position.distance(self.position) < COMBATANT_HIT_RADIUS {
                terrain.deform(self.position, EXPLOSION_RADIUS);
                return Some(ShotOutcome {
                    cause: TerminalCause::DirectHit,
                    final_position: self.position,
                    hit_combatant: Some(player),
                    hit_target: None,
                });
            }
        }

        if let Some(target_id) = objects.target_hit_by(self.position) {
            return Some(ShotOutcome {
                cause: TerminalCause::TargetHit,
                final_position: self.position,
                hit_combatant: None,
                hit_target: Some(target_id),
            });
        }

        if terrain.is_solid_at(self.position) {
            terrain.deform(self.position, EXPLOSION_RADIUS);
            return Some(ShotOutcome {
                cause: TerminalCause::TerrainImpact,
                final_position: self.position,
                hit_combatant: None,
                hit_target: None,
            });
        }

        if self.position.x < -OUT_OF_BOUNDS_MARGIN
            || self.position.x > terrain.width() + OUT_OF_BOUNDS_MARGIN
            || self.position.y < terrain.floor_y()
        {
            return Some(ShotOutcome {
                cause: TerminalCause::OutOfBounds,
                final_position: self.position,
                hit_combatant: None,
                hit_target: None,
            });
        }

        None
    }

    pub fn view(&self) -> ProjectileView {
        ProjectileView {
            position: self.position,
            velocity: self.velocity,
            owner: self.owner,
        }
    }
}
