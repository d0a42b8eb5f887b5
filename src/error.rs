//! Game error types and configuration validation.
//!
//! Normal play has no recoverable errors: every numeric operation is defined
//! for all reachable inputs, and the one guarded case (a ship exactly on the
//! gravity well) is a silent no-op. What remains is startup validation of a
//! loaded configuration and terminal setup/teardown, both fatal because the
//! game cannot run without a sane grid and a controllable input stream.

use std::fmt;
use std::io;

use crate::config::GameConfig;

/// Top-level error enum for the duel.
#[derive(Debug)]
pub enum GameError {
    /// A configured value is outside its safe operating range.
    UnsafeConstant {
        /// Name of the value (for the startup message).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the safe range.
        safe_range: String,
    },

    /// Two input actions share the same key, so one of them could never fire.
    DuplicateBinding {
        /// The key bound more than once across both ships and quit.
        key: char,
    },

    /// A terminal platform call failed during setup, polling, or painting.
    Terminal {
        /// Where the call was made.
        context: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::UnsafeConstant {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "config value '{}' = {} is outside safe range {}",
                name, value, safe_range
            ),
            GameError::DuplicateBinding { key } => write!(
                f,
                "key {:?} is bound to more than one action; ship and quit keys must not overlap",
                key
            ),
            GameError::Terminal { context, source } => {
                write!(f, "terminal failure during '{}': {}", context, source)
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Terminal { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;

// ── Validation helpers ───────────────────────────────────────────────────────

/// Returns an error unless `gravity_const` is a small positive pull.
///
/// At or above 1.0 a ship gains a full grid unit of speed every tick and
/// free flight degenerates into oscillation across the well.
pub fn validate_gravity_const(value: f32) -> GameResult<()> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(GameError::UnsafeConstant {
            name: "gravity_const",
            value,
            safe_range: "(0.0, 1.0)".into(),
        })
    }
}

/// Returns an error unless `hit_radius` is strictly positive.
pub fn validate_hit_radius(value: f32) -> GameResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(GameError::UnsafeConstant {
            name: "hit_radius",
            value,
            safe_range: "(0.0, ∞)".into(),
        })
    }
}

/// Returns an error unless `bullet_speed` is positive and below the smaller
/// grid extent.
///
/// Wraparound applies a single correction per axis per tick, which is only
/// total while no per-tick displacement reaches one extent.
pub fn validate_bullet_speed(value: f32, config: &GameConfig) -> GameResult<()> {
    let limit = config.width().min(config.height());
    if value > 0.0 && value < limit {
        Ok(())
    } else {
        Err(GameError::UnsafeConstant {
            name: "bullet_speed",
            value,
            safe_range: format!("(0.0, {limit}) for this grid"),
        })
    }
}

/// Returns an error unless both grid extents can hold the duel.
///
/// Eight cells per axis leaves room for the two spawn points and the star;
/// anything smaller is degenerate.
pub fn validate_grid_extents(config: &GameConfig) -> GameResult<()> {
    for (name, value) in [
        ("grid_width", config.grid_width),
        ("grid_height", config.grid_height),
    ] {
        if value < 8 {
            return Err(GameError::UnsafeConstant {
                name,
                value: f32::from(value),
                safe_range: "[8, ∞)".into(),
            });
        }
    }
    Ok(())
}

/// Returns an error unless the tick sleep is non-zero.
pub fn validate_tick_sleep(value: u64) -> GameResult<()> {
    if value > 0 {
        Ok(())
    } else {
        Err(GameError::UnsafeConstant {
            name: "tick_sleep_ms",
            value: 0.0,
            safe_range: "[1, ∞)".into(),
        })
    }
}

/// Returns an error if any key is bound to more than one action.
///
/// The eleven bindings (five per ship plus quit) must be pairwise distinct
/// so a single key press maps to exactly one mutation.
pub fn validate_bindings(config: &GameConfig) -> GameResult<()> {
    let mut seen: Vec<char> = Vec::with_capacity(11);
    let all = config
        .ship_one_keys
        .keys()
        .into_iter()
        .chain(config.ship_two_keys.keys())
        .chain([config.quit_key]);
    for key in all {
        if seen.contains(&key) {
            return Err(GameError::DuplicateBinding { key });
        }
        seen.push(key);
    }
    Ok(())
}

/// Run every validation over a loaded configuration.
///
/// Called once at startup, before the terminal enters raw mode, so a
/// rejected config is reported on a usable screen.
pub fn validate_config(config: &GameConfig) -> GameResult<()> {
    validate_grid_extents(config)?;
    validate_gravity_const(config.gravity_const)?;
    validate_hit_radius(config.hit_radius)?;
    validate_bullet_speed(config.bullet_speed, config)?;
    validate_tick_sleep(config.tick_sleep_ms)?;
    validate_bindings(config)?;
    Ok(())
}

// ── Unit tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_passes_validation() {
        assert!(validate_config(&GameConfig::default()).is_ok());
    }

    #[test]
    fn overlapping_bindings_are_rejected() {
        let mut config = GameConfig::default();
        config.ship_two_keys.fire = config.ship_one_keys.fire;
        let err = validate_config(&config).unwrap_err();
        assert!(
            matches!(err, GameError::DuplicateBinding { key } if key == config.ship_one_keys.fire),
            "expected the shared key to be reported, got: {err}"
        );
    }

    #[test]
    fn quit_key_counts_toward_disjointness() {
        let mut config = GameConfig::default();
        config.quit_key = config.ship_one_keys.thrust_up;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn bullet_speed_must_stay_below_one_grid_extent() {
        let mut config = GameConfig::default();
        config.bullet_speed = config.height();
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(
            err,
            GameError::UnsafeConstant {
                name: "bullet_speed",
                ..
            }
        ));
    }

    #[test]
    fn non_positive_gravity_is_rejected() {
        assert!(validate_gravity_const(0.0).is_err());
        assert!(validate_gravity_const(-0.05).is_err());
        assert!(validate_gravity_const(0.05).is_ok());
    }

    #[test]
    fn degenerate_grids_are_rejected() {
        let mut config = GameConfig::default();
        config.grid_height = 4;
        assert!(validate_grid_extents(&config).is_err());
    }
}
