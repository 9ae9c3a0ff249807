//! Match assembly: terrain roll, combatant spawn, object placement, and
//! environment rolls. Everything draws from the engine's single RNG in a
//! fixed order so a seed reproduces the whole match.

use glam::DVec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use barrage_core::config::MatchConfig;
use barrage_core::constants::{
    LANDSCAPE_HEIGHT, LANDSCAPE_WIDTH, LIGHT_GRAVITY, LIGHT_WIND, MEDIUM_GRAVITY, MEDIUM_WIND,
    OBSTACLE_COUNT_MAX, OBSTACLE_COUNT_MIN, P1_SPAWN_BAND_MAX, P1_SPAWN_BAND_MIN,
    P2_SPAWN_BAND_MAX, P2_SPAWN_BAND_MIN, STRONG_GRAVITY, STRONG_WIND, TARGET_COUNT_MAX,
    TARGET_COUNT_MIN, TERRAIN_POINTS,
};
use barrage_core::enums::{
    FieldObjectKind, GravityStrength, LandscapeKind, WindDirection, WindStrength,
};
use barrage_core::error::Result;
use barrage_core::state::Environment;
use barrage_terrain::{generate, TerrainProfile};

use crate::combatant::Combatant;
use crate::field_object::FieldObjectSet;

/// Everything a fresh match needs, rolled in one pass.
pub struct MatchSetup {
    pub terrain: TerrainProfile,
    pub combatants: [Combatant; 2],
    pub objects: FieldObjectSet,
    pub environment: Environment,
    pub wind_sign: f64,
    pub starting_player: usize,
}

/// Roll a complete match. The order of draws is part of the engine's
/// determinism contract: terrain, combatants, objects, gravity, wind sign,
/// wind, starting player.
pub fn assemble(config: &MatchConfig, rng: &mut ChaCha8Rng) -> Result<MatchSetup> {
    let terrain = build_terrain(config.landscape, rng)?;
    let combatants = spawn_combatants(config, &terrain, rng);
    let objects = spawn_field_objects(config, &terrain, &combatants, rng);

    let gravity = roll_gravity(config.gravity, rng);
    let wind_sign = roll_wind_sign(rng);
    let (wind, wind_display) = roll_wind(
        config.wind_strength,
        config.wind_direction,
        wind_sign,
        rng,
    );
    let starting_player = rng.gen_range(0..2);

    debug!(
        gravity,
        wind = ?wind,
        starting_player,
        objects = objects.len(),
        "match assembled"
    );

    Ok(MatchSetup {
        terrain,
        combatants,
        objects,
        environment: Environment {
            gravity,
            wind,
            wind_display,
        },
        wind_sign,
        starting_player,
    })
}

/// Generate the match terrain at the standard dimensions, resolving the
/// `Random` landscape option first.
pub fn build_terrain(kind: LandscapeKind, rng: &mut ChaCha8Rng) -> Result<TerrainProfile> {
    let resolved = resolve_landscape(kind, rng);
    generate(
        resolved,
        LANDSCAPE_WIDTH,
        LANDSCAPE_HEIGHT,
        TERRAIN_POINTS,
        rng,
    )
}

/// Resolve the `Random` landscape option into a concrete shape.
pub fn resolve_landscape(kind: LandscapeKind, rng: &mut ChaCha8Rng) -> LandscapeKind {
    if kind == LandscapeKind::Random {
        if rng.gen_bool(0.5) {
            LandscapeKind::Mountains
        } else {
            LandscapeKind::FootHills
        }
    } else {
        kind
    }
}

/// Spawn both combatants inside their bands, settled onto the surface.
pub fn spawn_combatants(
    config: &MatchConfig,
    terrain: &TerrainProfile,
    rng: &mut ChaCha8Rng,
) -> [Combatant; 2] {
    let width = terrain.width();
    let x1 = rng.gen_range(width * P1_SPAWN_BAND_MIN..width * P1_SPAWN_BAND_MAX);
    let x2 = rng.gen_range(width * P2_SPAWN_BAND_MIN..width * P2_SPAWN_BAND_MAX);
    [
        Combatant::spawn(0, &config.player_names[0], x1, terrain),
        Combatant::spawn(1, &config.player_names[1], x2, terrain),
    ]
}

/// Place every enabled object kind, best effort.
pub fn spawn_field_objects(
    config: &MatchConfig,
    terrain: &TerrainProfile,
    combatants: &[Combatant; 2],
    rng: &mut ChaCha8Rng,
) -> FieldObjectSet {
    let keep_clear = [combatants[0].position, combatants[1].position];
    let mut objects = FieldObjectSet::default();

    if config.enable_targets {
        let count = rng.gen_range(TARGET_COUNT_MIN..=TARGET_COUNT_MAX);
        objects.place_batch(FieldObjectKind::Target, count, terrain, &keep_clear, rng);
    }
    if config.enable_fans {
        let count = rng.gen_range(OBSTACLE_COUNT_MIN..=OBSTACLE_COUNT_MAX);
        objects.place_batch(FieldObjectKind::Fan, count, terrain, &keep_clear, rng);
    }
    if config.enable_pushers {
        let count = rng.gen_range(OBSTACLE_COUNT_MIN..=OBSTACLE_COUNT_MAX);
        objects.place_batch(FieldObjectKind::Pusher, count, terrain, &keep_clear, rng);
    }
    if config.enable_pullers {
        let count = rng.gen_range(OBSTACLE_COUNT_MIN..=OBSTACLE_COUNT_MAX);
        objects.place_batch(FieldObjectKind::Puller, count, terrain, &keep_clear, rng);
    }

    objects
}

/// Resolve the configured gravity into an acceleration, rolling `Random`
/// uniformly across the three strengths.
pub fn roll_gravity(kind: GravityStrength, rng: &mut ChaCha8Rng) -> f64 {
    match kind {
        GravityStrength::Light => LIGHT_GRAVITY,
        GravityStrength::Medium => MEDIUM_GRAVITY,
        GravityStrength::Strong => STRONG_GRAVITY,
        GravityStrength::Random => match rng.gen_range(0..3) {
            0 => LIGHT_GRAVITY,
            1 => MEDIUM_GRAVITY,
            _ => STRONG_GRAVITY,
        },
    }
}

/// Roll the per-match wind sign. Kept for the whole match unless the
/// direction mode re-rolls per shot.
pub fn roll_wind_sign(rng: &mut ChaCha8Rng) -> f64 {
    if rng.gen_bool(0.5) {
        1.0
    } else {
        -1.0
    }
}

/// Roll the wind vector and its display value (a strength-band integer the
/// frontend can show without exposing the raw acceleration).
pub fn roll_wind(
    strength: WindStrength,
    direction: WindDirection,
    match_sign: f64,
    rng: &mut ChaCha8Rng,
) -> (DVec2, u8) {
    if strength == WindStrength::None {
        return (DVec2::ZERO, 0);
    }

    let resolved = if strength == WindStrength::Random {
        match rng.gen_range(0..3) {
            0 => WindStrength::Light,
            1 => WindStrength::Medium,
            _ => WindStrength::Strong,
        }
    } else {
        strength
    };

    let (magnitude, display) = match resolved {
        WindStrength::Light => (LIGHT_WIND, rng.gen_range(1..=3)),
        WindStrength::Medium => (MEDIUM_WIND, rng.gen_range(4..=6)),
        WindStrength::Strong => (STRONG_WIND, rng.gen_range(7..=9)),
        // Resolved above.
        WindStrength::None | WindStrength::Random => (0.0, 0),
    };

    let sign = if direction == WindDirection::RandomPerTurn {
        if rng.gen_bool(0.5) {
            1.0
        } else {
            -1.0
        }
    } else {
        match_sign
    };

    (DVec2::new(sign * magnitude, 0.0), display)
}
