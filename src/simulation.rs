//! Per-tick physics.
//!
//! One tick advances the world in a fixed order: gravity pulls both ships
//! toward the central star, ships integrate and wrap around the toroidal
//! field, bullets integrate and die at the field edge, then each ship is
//! hit-tested against its opponent's bullet. [`crate::game::Game::tick`]
//! sequences these; the functions here are free of input and rendering so
//! they can be exercised directly.
//!
//! Ships wrap; bullets do not. A shot that leaves the grid is spent and
//! re-arms its owner's slot, which is the only way a bullet disappears short
//! of ending the game.

use glam::Vec2;

use crate::ship::{Bullet, Ship};

/// Position of the gravity well: the exact midpoint of the grid.
#[inline]
pub fn well_center(width: f32, height: f32) -> Vec2 {
    Vec2::new(width / 2.0, height / 2.0)
}

/// Accelerate `ship` toward `center` by `gravity_const` along the unit
/// direction.
///
/// A ship sitting exactly on the center gains nothing: the direction is
/// undefined there and the pull is skipped.
pub fn apply_gravity(ship: &mut Ship, center: Vec2, gravity_const: f32) {
    let to_center = center - ship.pos;
    let distance = to_center.length();
    if distance > 0.0 {
        ship.vel += gravity_const * to_center / distance;
    }
}

/// Remap one coordinate into `[0, extent)` after a single integration step.
///
/// One correction per axis suffices: per-tick speeds never reach one grid
/// extent, so a coordinate can overshoot the range by less than `extent`.
#[inline]
pub fn wrap_coordinate(value: f32, extent: f32) -> f32 {
    let mut v = value;
    if v < 0.0 {
        v += extent;
    }
    if v >= extent {
        v -= extent;
    }
    v
}

/// Euler-integrate `ship` one tick and wrap both axes onto the torus.
pub fn move_ship(ship: &mut Ship, width: f32, height: f32) {
    ship.pos += ship.vel;
    ship.pos.x = wrap_coordinate(ship.pos.x, width);
    ship.pos.y = wrap_coordinate(ship.pos.y, height);
}

/// Euler-integrate an in-flight bullet one tick.
///
/// Unlike ships, bullets do not wrap: leaving `[0, width) × [0, height)`
/// deactivates the bullet on the spot, before this tick's hit test runs.
pub fn move_bullet(bullet: &mut Bullet, width: f32, height: f32) {
    if !bullet.active {
        return;
    }
    bullet.pos += bullet.vel;
    let out = bullet.pos.x < 0.0
        || bullet.pos.x >= width
        || bullet.pos.y < 0.0
        || bullet.pos.y >= height;
    if out {
        bullet.active = false;
    }
}

/// Whether `bullet` registers a hit on `ship` this tick.
///
/// Inclusive at exactly `hit_radius`. Inactive bullets never hit.
pub fn bullet_hits_ship(ship: &Ship, bullet: &Bullet, hit_radius: f32) -> bool {
    bullet.active && ship.pos.distance(bullet.pos) <= hit_radius
}

// ── Unit tests ───────────────────────────────────────────────────────────────
