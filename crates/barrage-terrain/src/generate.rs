//! Procedural landscape generation policies.

use glam::DVec2;
use rand::Rng;

use barrage_core::enums::LandscapeKind;
use barrage_core::error::{BarrageError, Result};

use crate::profile::TerrainProfile;

/// Build a fresh profile: `point_count` interior samples at evenly spaced x
/// positions strictly inside (0, width), plus a low anchor corner at x = 0
/// and x = width pinned at y = -height.
///
/// Match setup resolves the `Random` config option to mountains or foot
/// hills before calling; passed here directly it produces the unconstrained
/// noise profile.
pub fn generate<R: Rng>(
    kind: LandscapeKind,
    width: f64,
    height: f64,
    point_count: usize,
    rng: &mut R,
) -> Result<TerrainProfile> {
    if point_count == 0 {
        return Err(BarrageError::DegenerateTerrain { min: 1, got: 0 });
    }
    if width <= 0.0 || height <= 0.0 {
        return Err(BarrageError::InvalidDimensions { width, height });
    }

    let segment = width / (point_count + 1) as f64;
    let mut points = Vec::with_capacity(point_count + 2);

    points.push(DVec2::new(0.0, -height));
    for i in 0..point_count {
        let x = (i + 1) as f64 * segment;
        let y = match kind {
            LandscapeKind::Mountains => {
                // Every fifth sample is forced into the peak band.
                if i % 5 == 0 {
                    rng.gen_range(height * 0.4..height * 0.7)
                } else {
                    rng.gen_range(height * 0.1..height * 0.6)
                }
            }
            LandscapeKind::FootHills => rng.gen_range(height * 0.2..height * 0.4),
            LandscapeKind::Random => rng.gen_range(-height * 0.2..height * 0.8),
        };
        points.push(DVec2::new(x, y));
    }
    points.push(DVec2::new(width, -height));

    tracing::debug!(?kind, point_count, "terrain profile generated");
    TerrainProfile::from_points(points)
}
