//! TerrainProfile: destructible landscape silhouette with height queries.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use barrage_core::constants::TERRAIN_SOLID_EPSILON;
use barrage_core::error::{BarrageError, Result};

/// Ordered silhouette of the landscape: a low anchor corner at each edge plus
/// the interior surface samples, x strictly increasing.
///
/// The anchors close the collision polygon below the visible range and are
/// never moved by deformation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainProfile {
    /// Sample points, anchors included.
    points: Vec<DVec2>,
}

impl TerrainProfile {
    /// Build a profile from explicit samples.
    ///
    /// Requires at least two points (the anchors) and strictly increasing x.
    pub fn from_points(points: Vec<DVec2>) -> Result<Self> {
        if points.len() < 2 {
            return Err(BarrageError::DegenerateTerrain {
                min: 2,
                got: points.len(),
            });
        }
        for i in 1..points.len() {
            if points[i].x <= points[i - 1].x {
                return Err(BarrageError::UnorderedProfile { index: i });
            }
        }
        Ok(Self { points })
    }

    /// All samples, anchors included.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// X position of the right anchor corner.
    pub fn width(&self) -> f64 {
        self.points[self.points.len() - 1].x
    }

    /// Y of the left anchor corner (the silhouette floor).
    pub fn floor_y(&self) -> f64 {
        self.points[0].y
    }

    /// Surface height at `x`, linearly interpolated between the bracketing
    /// samples. Outside the profile's x-range the contract is 0.
    pub fn height_at(&self, x: f64) -> f64 {
        for pair in self.points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if x >= a.x && x <= b.x {
                let t = (x - a.x) / (b.x - a.x);
                // Symmetric form so heights at sample points are exact.
                return a.y * (1.0 - t) + b.y * t;
            }
        }
        0.0
    }

    /// Terrain collision predicate: at or below the surface, with a small
    /// tolerance above it.
    pub fn is_solid_at(&self, position: DVec2) -> bool {
        position.y <= self.height_at(position.x) + TERRAIN_SOLID_EPSILON
    }

    /// Carve a crater: every interior sample within `radius` of `center`
    /// drops by `radius * (1 - distance/radius) * 0.5` (linear falloff,
    /// strongest at the center). The anchor corners never move.
    ///
    /// Returns whether any sample moved.
    pub fn deform(&mut self, center: DVec2, radius: f64) -> bool {
        let mut modified = false;

        let last = self.points.len() - 1;
        for point in &mut self.points[1..last] {
            let distance = point.distance(center);
            if distance < radius {
                let falloff = 1.0 - distance / radius;
                point.y -= radius * falloff * 0.5;
                modified = true;
            }
        }

        if modified {
            tracing::trace!(
                center_x = center.x,
                center_y = center.y,
                radius,
                "terrain deformed"
            );
        }
        modified
    }
}
