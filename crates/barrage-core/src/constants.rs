//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 50;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Landscape ---

/// Landscape width in world units (two screens at 960 each).
pub const LANDSCAPE_WIDTH: f64 = 1920.0;

/// Landscape height in world units.
pub const LANDSCAPE_HEIGHT: f64 = 600.0;

/// Interior samples generated per terrain profile.
pub const TERRAIN_POINTS: usize = 50;

/// Tolerance above the interpolated surface still counted as solid.
pub const TERRAIN_SOLID_EPSILON: f64 = 0.5;

/// Projectiles are lost beyond this margin past either landscape edge.
pub const OUT_OF_BOUNDS_MARGIN: f64 = 100.0;

// --- Combatants ---

/// Combatant body size (world units); the body sits half this above terrain.
pub const COMBATANT_BODY_SIZE: f64 = 20.0;

/// Radius of the direct-hit circle around a combatant.
pub const COMBATANT_HIT_RADIUS: f64 = 30.0;

/// Minimum aim angle (degrees).
pub const MIN_ANGLE: f64 = -90.0;

/// Maximum aim angle (degrees).
pub const MAX_ANGLE: f64 = 150.0;

/// Minimum launch power.
pub const MIN_POWER: f64 = 0.0;

/// Maximum launch power.
pub const MAX_POWER: f64 = 199.0;

/// Aim angle of a freshly spawned combatant (degrees).
pub const DEFAULT_ANGLE: f64 = 45.0;

/// Launch power of a freshly spawned combatant.
pub const DEFAULT_POWER: f64 = 100.0;

/// Height difference still treated as walkable when scanning for
/// movement boundaries.
pub const MOVE_TOLERANCE: f64 = 2.0;

/// X step used when scanning for movement boundaries.
pub const MOVE_SCAN_STEP: f64 = 1.0;

/// Player 1 spawns inside this fraction band of the landscape width.
pub const P1_SPAWN_BAND_MIN: f64 = 0.1;
pub const P1_SPAWN_BAND_MAX: f64 = 0.3;

/// Player 2 spawns inside this fraction band of the landscape width.
pub const P2_SPAWN_BAND_MIN: f64 = 0.7;
pub const P2_SPAWN_BAND_MAX: f64 = 0.9;

/// Longest accepted player name (characters); longer input is truncated.
pub const MAX_NAME_LEN: usize = 3;

// --- Ballistics ---

/// Explosion radius. Terrain deformation and the direct-hit circle share it.
pub const EXPLOSION_RADIUS: f64 = 30.0;

// --- Gravity (units/s^2, downward) ---

pub const LIGHT_GRAVITY: f64 = 4.9;
pub const MEDIUM_GRAVITY: f64 = 9.8;
pub const STRONG_GRAVITY: f64 = 19.6;

// --- Wind (units/s^2, horizontal) ---

pub const LIGHT_WIND: f64 = 2.0;
pub const MEDIUM_WIND: f64 = 5.0;
pub const STRONG_WIND: f64 = 10.0;

// --- Field objects ---

/// Target trigger radius.
pub const TARGET_TRIGGER_RADIUS: f64 = 20.0;

/// Fan strength is rolled uniformly from this range at spawn.
pub const FAN_STRENGTH_MIN: f64 = 10.0;
pub const FAN_STRENGTH_MAX: f64 = 20.0;

/// Fan effect radius.
pub const FAN_RADIUS: f64 = 50.0;

/// Pusher force magnitude (straight up).
pub const PUSHER_STRENGTH: f64 = 25.0;

/// Pusher effect radius.
pub const PUSHER_RADIUS: f64 = 40.0;

/// Puller force magnitude (straight down).
pub const PULLER_STRENGTH: f64 = 25.0;

/// Puller effect radius.
pub const PULLER_RADIUS: f64 = 40.0;

// --- Placement ---

/// Margin from either landscape edge when drawing object spawn positions.
pub const PLACEMENT_EDGE_MARGIN: f64 = 100.0;

/// Vertical clearance above the terrain surface at spawn.
pub const PLACEMENT_CLEARANCE: f64 = 20.0;

/// Minimum separation from combatants and already placed objects.
pub const PLACEMENT_MIN_SEPARATION: f64 = 100.0;

/// Placement attempts budgeted per requested object.
pub const PLACEMENT_ATTEMPTS_PER_OBJECT: u32 = 100;

/// Targets spawned per match when enabled (inclusive range).
pub const TARGET_COUNT_MIN: u32 = 2;
pub const TARGET_COUNT_MAX: u32 = 4;

/// Fans, pushers, or pullers spawned per match when enabled
/// (inclusive range, rolled independently per kind).
pub const OBSTACLE_COUNT_MIN: u32 = 1;
pub const OBSTACLE_COUNT_MAX: u32 = 2;
