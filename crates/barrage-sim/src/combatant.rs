//! Combatant state: aiming, terrain following, and walkable-span movement.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use barrage_core::constants::{
    COMBATANT_BODY_SIZE, DEFAULT_ANGLE, DEFAULT_POWER, MAX_ANGLE, MAX_POWER, MIN_ANGLE, MIN_POWER,
    MOVE_SCAN_STEP, MOVE_TOLERANCE,
};
use barrage_core::enums::MoveDirection;
use barrage_core::state::CombatantView;
use barrage_terrain::TerrainProfile;

/// One dug-in combatant. Aim state persists across turns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    /// Player index (0 or 1).
    pub player: usize,
    pub name: String,
    pub position: DVec2,
    angle: f64,
    power: f64,
    /// Walkable span around the current position, from the flatness scan.
    min_x: f64,
    max_x: f64,
    pub can_move_left: bool,
    pub can_move_right: bool,
}

impl Combatant {
    /// Place a combatant at `x`, settled onto the terrain with its movement
    /// span computed.
    pub fn spawn(player: usize, name: &str, x: f64, terrain: &TerrainProfile) -> Self {
        let mut combatant = Self {
            player,
            name: name.to_string(),
            position: DVec2::new(x, 0.0),
            angle: DEFAULT_ANGLE,
            power: DEFAULT_POWER,
            min_x: x,
            max_x: x,
            can_move_left: false,
            can_move_right: false,
        };
        combatant.stick_to_terrain(terrain);
        combatant.find_movement_boundaries(terrain);
        combatant
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    /// Set the aim angle in degrees, clamped to the legal range.
    pub fn set_angle(&mut self, degrees: f64) {
        self.angle = degrees.clamp(MIN_ANGLE, MAX_ANGLE);
    }

    /// Set the launch power, clamped to the legal range.
    pub fn set_power(&mut self, power: f64) {
        self.power = power.clamp(MIN_POWER, MAX_POWER);
    }

    pub fn adjust_angle(&mut self, delta: f64) {
        self.set_angle(self.angle + delta);
    }

    pub fn adjust_power(&mut self, delta: f64) {
        self.set_power(self.power + delta);
    }

    /// Settle onto the surface below the current x, hull center half a body
    /// above it. Craters pull the combatant down with them.
    pub fn stick_to_terrain(&mut self, terrain: &TerrainProfile) {
        self.position.y = terrain.height_at(self.position.x) + COMBATANT_BODY_SIZE * 0.5;
    }

    /// Scan outward for the walkable span: ground within MOVE_TOLERANCE of
    /// the surface height beneath the combatant counts as flat. The flags
    /// keep a body's width of margin inside the span.
    pub fn find_movement_boundaries(&mut self, terrain: &TerrainProfile) {
        let base_y = terrain.height_at(self.position.x);

        self.min_x = self.position.x;
        let mut x = self.position.x - MOVE_SCAN_STEP;
        while x >= 0.0 {
            if (terrain.height_at(x) - base_y).abs() > MOVE_TOLERANCE {
                break;
            }
            self.min_x = x;
            x -= MOVE_SCAN_STEP;
        }

        self.max_x = self.position.x;
        let mut x = self.position.x + MOVE_SCAN_STEP;
        while x <= terrain.width() {
            if (terrain.height_at(x) - base_y).abs() > MOVE_TOLERANCE {
                break;
            }
            self.max_x = x;
            x += MOVE_SCAN_STEP;
        }

        self.can_move_left = self.position.x > self.min_x + COMBATANT_BODY_SIZE;
        self.can_move_right = self.position.x < self.max_x - COMBATANT_BODY_SIZE;
    }

    /// Walk along the flat span. Ignored when the capability flag is down
    /// or the destination leaves the span.
    pub fn move_by(&mut self, direction: MoveDirection, distance: f64, terrain: &TerrainProfile) {
        let distance = distance.max(0.0);
        let new_x = match direction {
            MoveDirection::Left => {
                if !self.can_move_left {
                    return;
                }
                self.position.x - distance
            }
            MoveDirection::Right => {
                if !self.can_move_right {
                    return;
                }
                self.position.x + distance
            }
        };
        if new_x < self.min_x || new_x > self.max_x {
            return;
        }
        self.position.x = new_x;
        self.stick_to_terrain(terrain);
        self.find_movement_boundaries(terrain);
    }

    /// Direct-hit test against a blast point.
    pub fn is_hit(&self, point: DVec2, radius: f64) -> bool {
        self.position.distance(point) < radius
    }

    pub fn view(&self) -> CombatantView {
        CombatantView {
            player: self.player,
            name: self.name.clone(),
            position: self.position,
            angle: self.angle,
            power: self.power,
            can_move_left: self.can_move_left,
            can_move_right: self.can_move_right,
        }
    }
}
