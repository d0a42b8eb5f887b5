//! Runtime game configuration loaded from `assets/gravwell.toml`.
//!
//! [`GameConfig`] mirrors the tunable constants in [`crate::constants`]. At
//! startup, [`load_config`] reads `assets/gravwell.toml` and overwrites the
//! defaults with any values present in the file. Missing keys fall back to
//! the compile-time defaults, so a minimal TOML can override just the values
//! you care about. Key bindings are single-character strings, e.g.:
//!
//! ```toml
//! gravity_const = 0.08
//!
//! [ship_one_keys]
//! thrust_up = "w"
//! thrust_down = "s"
//! rotate_left = "a"
//! rotate_right = "d"
//! fire = " "
//! ```
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `GameConfig::default()`. Loaded values are checked by
//! `error::validate_config` before the terminal enters raw mode.

use serde::Deserialize;

use crate::constants::*;
use crate::ship::ShipId;

/// One ship's key set. Overriding a set in TOML replaces all five keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ShipBindings {
    /// Decrease vertical velocity (screen up).
    pub thrust_up: char,
    /// Increase vertical velocity (screen down).
    pub thrust_down: char,
    /// Decrease the facing angle.
    pub rotate_left: char,
    /// Increase the facing angle.
    pub rotate_right: char,
    /// Launch the ship's bullet, if the slot is free.
    pub fire: char,
}

impl ShipBindings {
    /// The five keys in a fixed order, for disjointness checks.
    pub fn keys(&self) -> [char; 5] {
        [
            self.thrust_up,
            self.thrust_down,
            self.rotate_left,
            self.rotate_right,
            self.fire,
        ]
    }
}

/// Runtime-tunable game configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`. Override any subset in `assets/gravwell.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Grid ─────────────────────────────────────────────────────────────────
    pub grid_width: u16,
    pub grid_height: u16,

    // ── Physics ──────────────────────────────────────────────────────────────
    pub gravity_const: f32,
    pub hit_radius: f32,
    pub bullet_speed: f32,

    // ── Input steps ──────────────────────────────────────────────────────────
    pub thrust_step: f32,
    pub angle_step: f32,

    // ── Pacing ───────────────────────────────────────────────────────────────
    pub tick_sleep_ms: u64,

    // ── Key bindings ─────────────────────────────────────────────────────────
    pub ship_one_keys: ShipBindings,
    pub ship_two_keys: ShipBindings,
    pub quit_key: char,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // Grid
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            // Physics
            gravity_const: GRAVITY_CONST,
            hit_radius: HIT_RADIUS,
            bullet_speed: BULLET_SPEED,
            // Input steps
            thrust_step: THRUST_STEP,
            angle_step: ANGLE_STEP,
            // Pacing
            tick_sleep_ms: TICK_SLEEP_MS,
            // Key bindings
            ship_one_keys: ShipBindings {
                thrust_up: SHIP_ONE_THRUST_UP,
                thrust_down: SHIP_ONE_THRUST_DOWN,
                rotate_left: SHIP_ONE_ROTATE_LEFT,
                rotate_right: SHIP_ONE_ROTATE_RIGHT,
                fire: SHIP_ONE_FIRE,
            },
            ship_two_keys: ShipBindings {
                thrust_up: SHIP_TWO_THRUST_UP,
                thrust_down: SHIP_TWO_THRUST_DOWN,
                rotate_left: SHIP_TWO_ROTATE_LEFT,
                rotate_right: SHIP_TWO_ROTATE_RIGHT,
                fire: SHIP_TWO_FIRE,
            },
            quit_key: QUIT_KEY,
        }
    }
}

impl GameConfig {
    /// The key set addressing `id`'s ship.
    #[inline]
    pub fn ship_keys(&self, id: ShipId) -> &ShipBindings {
        match id {
            ShipId::One => &self.ship_one_keys,
            ShipId::Two => &self.ship_two_keys,
        }
    }

    /// Grid width as a physics extent.
    #[inline]
    pub fn width(&self) -> f32 {
        f32::from(self.grid_width)
    }

    /// Grid height as a physics extent.
    #[inline]
    pub fn height(&self) -> f32 {
        f32::from(self.grid_height)
    }
}

/// Attempt to load `assets/gravwell.toml`, falling back to compiled defaults.
///
/// Missing keys retain their defaults. TOML parse errors are printed to
/// stderr but do not abort the game. A missing file is silently fine.
/// Runs before raw mode, so the status lines land on the normal screen.
pub fn load_config() -> GameConfig {
    let path = "assets/gravwell.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<GameConfig>(&contents) {
            Ok(loaded) => {
                println!("✓ Loaded game config from {path}");
                loaded
            }
            Err(e) => {
                eprintln!("⚠ Failed to parse {path}: {e}; using defaults");
                GameConfig::default()
            }
        },
        Err(_) => {
            // File not present; defaults are already in place, not an error.
            GameConfig::default()
        }
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
