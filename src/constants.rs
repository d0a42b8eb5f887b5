//! Centralised gameplay constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! `config::GameConfig` mirrors the runtime-tunable subset; this module
//! remains the **authoritative default** source used by
//! `GameConfig::default()`.

// ── Grid ─────────────────────────────────────────────────────────────────────

/// Width of the play field in character cells.
///
/// The field is toroidal for ships: leaving one edge re-enters the opposite
/// edge. Bullets instead die at the edge. The classic 80-column terminal
/// width is the default.
pub const GRID_WIDTH: u16 = 80;

/// Height of the play field in character cells.
pub const GRID_HEIGHT: u16 = 24;

// ── Physics ──────────────────────────────────────────────────────────────────

/// Velocity gained per tick toward the central star (grid units per tick²).
///
/// Higher values tighten orbits and shorten the time a drifting ship takes to
/// fall into the well region. Values near the per-tick speed of a bullet make
/// unpowered flight unplayable.
pub const GRAVITY_CONST: f32 = 0.05;

/// Distance (grid units) at or below which a bullet registers a hit on a ship.
///
/// The comparison is inclusive: a bullet exactly on the radius hits.
pub const HIT_RADIUS: f32 = 1.0;

/// Bullet speed in grid units per tick, fixed at the moment of firing.
///
/// Must stay below both grid extents: position integration corrects each axis
/// at most once per tick.
pub const BULLET_SPEED: f32 = 1.5;

// ── Input steps ──────────────────────────────────────────────────────────────

/// Vertical velocity change per thrust key press (grid units per tick).
pub const THRUST_STEP: f32 = 0.1;

/// Facing-angle change per rotation key press (radians).
pub const ANGLE_STEP: f32 = 0.1;

// ── Pacing ───────────────────────────────────────────────────────────────────

/// Fixed sleep between ticks (milliseconds). Bounds the tick rate; 50 ms is
/// twenty ticks per second.
pub const TICK_SLEEP_MS: u64 = 50;

// ── Starting state ───────────────────────────────────────────────────────────

/// Ship 1 spawn position, left of the star on the horizontal midline.
pub const SHIP_ONE_START: (f32, f32) = (10.0, 12.0);

/// Ship 1 spawn facing (radians). Zero points along +x, toward ship 2.
pub const SHIP_ONE_START_ANGLE: f32 = 0.0;

/// Ship 2 spawn position, mirrored right of the star.
pub const SHIP_TWO_START: (f32, f32) = (70.0, 12.0);

/// Ship 2 spawn facing (radians). Pi points along −x, toward ship 1.
pub const SHIP_TWO_START_ANGLE: f32 = std::f32::consts::PI;

// ── Symbols ──────────────────────────────────────────────────────────────────

/// Glyph for ship 1 (spawns facing right).
pub const SHIP_ONE_SYMBOL: char = '>';

/// Glyph for ship 2 (spawns facing left).
pub const SHIP_TWO_SYMBOL: char = '<';

/// Glyph for a bullet in flight.
pub const BULLET_SYMBOL: char = '*';

/// Glyph for the central star. Drawn last each frame so the well stays
/// visible even when an entity occupies the midpoint cell.
pub const STAR_SYMBOL: char = '*';

// ── Default key bindings ─────────────────────────────────────────────────────
//
// Ship 1 plays on the left hand, ship 2 on the right. The two sets plus the
// quit key must be pairwise distinct; `error::validate_bindings` enforces
// that for configured overrides at startup.

/// Ship 1: accelerate upward.
pub const SHIP_ONE_THRUST_UP: char = 'w';
/// Ship 1: accelerate downward.
pub const SHIP_ONE_THRUST_DOWN: char = 's';
/// Ship 1: rotate counter-clockwise on screen.
pub const SHIP_ONE_ROTATE_LEFT: char = 'a';
/// Ship 1: rotate clockwise on screen.
pub const SHIP_ONE_ROTATE_RIGHT: char = 'd';
/// Ship 1: fire.
pub const SHIP_ONE_FIRE: char = ' ';

/// Ship 2: accelerate upward.
pub const SHIP_TWO_THRUST_UP: char = 'i';
/// Ship 2: accelerate downward.
pub const SHIP_TWO_THRUST_DOWN: char = 'k';
/// Ship 2: rotate counter-clockwise on screen.
pub const SHIP_TWO_ROTATE_LEFT: char = 'j';
/// Ship 2: rotate clockwise on screen.
pub const SHIP_TWO_ROTATE_RIGHT: char = 'l';
/// Ship 2: fire.
pub const SHIP_TWO_FIRE: char = 'm';

/// Ends the game immediately with no winner.
pub const QUIT_KEY: char = 'q';
