//! Field objects: targets, fans, pushers, and pullers.
//!
//! Every force law lives in one dispatch so adding a kind means adding a
//! variant, never a new subsystem.

use glam::DVec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use barrage_core::constants::{
    FAN_RADIUS, FAN_STRENGTH_MAX, FAN_STRENGTH_MIN, PLACEMENT_ATTEMPTS_PER_OBJECT,
    PLACEMENT_CLEARANCE, PLACEMENT_EDGE_MARGIN, PLACEMENT_MIN_SEPARATION, PULLER_RADIUS,
    PULLER_STRENGTH, PUSHER_RADIUS, PUSHER_STRENGTH, TARGET_TRIGGER_RADIUS,
};
use barrage_core::enums::FieldObjectKind;
use barrage_core::state::FieldObjectView;
use barrage_terrain::TerrainProfile;

/// Kind-specific effect parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum FieldEffect {
    /// Exerts no force; consumed on hit for a bonus shot.
    Target { trigger_radius: f64 },
    /// Sideways blow, linear falloff from full strength at the center to
    /// zero at the rim.
    Fan {
        strength: f64,
        radius: f64,
        direction: DVec2,
    },
    /// Constant upward shove anywhere inside the radius.
    Pusher { strength: f64, radius: f64 },
    /// Constant downward drag anywhere inside the radius.
    Puller { strength: f64, radius: f64 },
}

impl FieldEffect {
    pub fn kind(&self) -> FieldObjectKind {
        match self {
            FieldEffect::Target { .. } => FieldObjectKind::Target,
            FieldEffect::Fan { .. } => FieldObjectKind::Fan,
            FieldEffect::Pusher { .. } => FieldObjectKind::Pusher,
            FieldEffect::Puller { .. } => FieldObjectKind::Puller,
        }
    }

    /// Effect radius (trigger radius for targets).
    pub fn radius(&self) -> f64 {
        match self {
            FieldEffect::Target { trigger_radius } => *trigger_radius,
            FieldEffect::Fan { radius, .. }
            | FieldEffect::Pusher { radius, .. }
            | FieldEffect::Puller { radius, .. } => *radius,
        }
    }
}

/// One placed object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldObject {
    pub id: u32,
    pub position: DVec2,
    pub effect: FieldEffect,
}

impl FieldObject {
    /// Acceleration this object applies to a probe at `position`. Zero
    /// outside the effect radius.
    fn force_at(&self, position: DVec2) -> DVec2 {
        let distance = self.position.distance(position);
        match self.effect {
            FieldEffect::Target { .. } => DVec2::ZERO,
            FieldEffect::Fan {
                strength,
                radius,
                direction,
            } => {
                if distance < radius {
                    direction * (strength * (1.0 - distance / radius))
                } else {
                    DVec2::ZERO
                }
            }
            FieldEffect::Pusher { strength, radius } => {
                if distance < radius {
                    DVec2::new(0.0, strength)
                } else {
                    DVec2::ZERO
                }
            }
            FieldEffect::Puller { strength, radius } => {
                if distance < radius {
                    DVec2::new(0.0, -strength)
                } else {
                    DVec2::ZERO
                }
            }
        }
    }

    pub fn view(&self) -> FieldObjectView {
        FieldObjectView {
            id: self.id,
            kind: self.effect.kind(),
            position: self.position,
            radius: self.effect.radius(),
            direction: match self.effect {
                FieldEffect::Fan { direction, .. } => Some(direction),
                _ => None,
            },
        }
    }
}

/// The live set of placed objects for one match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldObjectSet {
    objects: Vec<FieldObject>,
    next_id: u32,
}

impl FieldObjectSet {
    /// Sum of every force contribution at `position`. Overlapping fields
    /// add; nothing clamps the total.
    pub fn force_on(&self, position: DVec2) -> DVec2 {
        self.objects
            .iter()
            .fold(DVec2::ZERO, |total, object| total + object.force_at(position))
    }

    /// First live target whose trigger area contains `position`.
    pub fn target_hit_by(&self, position: DVec2) -> Option<u32> {
        self.objects.iter().find_map(|object| match object.effect {
            FieldEffect::Target { trigger_radius }
                if object.position.distance(position) <= trigger_radius =>
            {
                Some(object.id)
            }
            _ => None,
        })
    }

    /// Remove one object by id. Returns whether anything was removed.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.objects.len();
        self.objects.retain(|object| object.id != id);
        self.objects.len() != before
    }

    /// Place an object at an exact position. Scenario tooling; normal
    /// matches go through `place_batch`.
    pub fn insert(&mut self, position: DVec2, effect: FieldEffect) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.objects.push(FieldObject {
            id,
            position,
            effect,
        });
        id
    }

    /// Rejection-sample spawn positions for `count` objects of `kind`.
    ///
    /// Candidates draw x inside the edge margins and sit just above the
    /// surface. A candidate is kept only when it clears every position in
    /// `keep_clear` and every already placed object by the minimum
    /// separation. Placement is best effort: once the shared attempt budget
    /// is spent the remainder is skipped.
    pub fn place_batch(
        &mut self,
        kind: FieldObjectKind,
        count: u32,
        terrain: &TerrainProfile,
        keep_clear: &[DVec2],
        rng: &mut ChaCha8Rng,
    ) -> u32 {
        let budget = count * PLACEMENT_ATTEMPTS_PER_OBJECT;
        let mut attempts = 0;
        let mut placed = 0;

        while placed < count && attempts < budget {
            attempts += 1;

            let x = rng.gen_range(PLACEMENT_EDGE_MARGIN..terrain.width() - PLACEMENT_EDGE_MARGIN);
            let position = DVec2::new(x, terrain.height_at(x) + PLACEMENT_CLEARANCE);

            let blocked = keep_clear
                .iter()
                .chain(self.objects.iter().map(|object| &object.position))
                .any(|occupied| occupied.distance(position) < PLACEMENT_MIN_SEPARATION);
            if blocked {
                continue;
            }

            self.insert(position, roll_effect(kind, rng));
            placed += 1;
        }

        if placed < count {
            warn!(?kind, requested = count, placed, "object placement gave up early");
        }
        placed
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldObject> {
        self.objects.iter()
    }

    pub fn views(&self) -> Vec<FieldObjectView> {
        self.objects.iter().map(FieldObject::view).collect()
    }
}

/// Kind-specific parameters rolled at spawn time.
fn roll_effect(kind: FieldObjectKind, rng: &mut ChaCha8Rng) -> FieldEffect {
    match kind {
        FieldObjectKind::Target => FieldEffect::Target {
            trigger_radius: TARGET_TRIGGER_RADIUS,
        },
        FieldObjectKind::Fan => FieldEffect::Fan {
            strength: rng.gen_range(FAN_STRENGTH_MIN..FAN_STRENGTH_MAX),
            radius: FAN_RADIUS,
            direction: if rng.gen_bool(0.5) { DVec2::X } else { DVec2::NEG_X },
        },
        FieldObjectKind::Pusher => FieldEffect::Pusher {
            strength: PUSHER_STRENGTH,
            radius: PUSHER_RADIUS,
        },
        FieldObjectKind::Puller => FieldEffect::Puller {
            strength: PULLER_STRENGTH,
            radius: PULLER_RADIUS,
        },
    }
}
