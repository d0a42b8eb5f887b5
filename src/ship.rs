//! Ship and bullet entity state.
//!
//! Two symmetric ship/bullet pairs exist per game, addressed by [`ShipId`].
//! Each ship owns exactly one bullet slot; the slot is reused across shots
//! rather than allocated per shot. Systems that mutate this state are in the
//! sibling modules:
//! - [`crate::simulation`] — gravity, motion, wraparound, hit testing
//! - [`crate::input`] — key decoding and thrust/rotation/fire application

use std::fmt;

use glam::Vec2;

// ── Ship identity ────────────────────────────────────────────────────────────

/// Identifies one of the two players' ship/bullet pairs.
///
/// All per-ship logic runs once per id over [`ShipId::BOTH`] so the two
/// players' state machines stay symmetric by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipId {
    One,
    Two,
}

impl ShipId {
    /// Both ids, in evaluation order.
    pub const BOTH: [ShipId; 2] = [ShipId::One, ShipId::Two];

    /// Index into the per-ship state arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            ShipId::One => 0,
            ShipId::Two => 1,
        }
    }

    /// The other player. Each ship is only ever hit-tested against its
    /// opponent's bullet, never its own.
    #[inline]
    pub fn opponent(self) -> ShipId {
        match self {
            ShipId::One => ShipId::Two,
            ShipId::Two => ShipId::One,
        }
    }

    /// Human-facing player number (1-indexed).
    #[inline]
    pub fn number(self) -> u8 {
        match self {
            ShipId::One => 1,
            ShipId::Two => 2,
        }
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ship {}", self.number())
    }
}

// ── Ship ─────────────────────────────────────────────────────────────────────

/// One player's ship.
///
/// Created once at game start and mutated every tick; never destroyed before
/// process exit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ship {
    /// Position in grid coordinates. Remapped into `[0, width) × [0, height)`
    /// after every move (toroidal field).
    pub pos: Vec2,
    /// Velocity in grid units per tick.
    pub vel: Vec2,
    /// Facing angle in radians. Grows without bound under held rotation;
    /// only `cos`/`sin` of it are ever taken, so it is never normalized.
    pub angle: f32,
}

impl Ship {
    /// A stationary ship at `pos` facing `angle`.
    pub fn new(pos: Vec2, angle: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            angle,
        }
    }

    /// Unit vector along the current facing.
    #[inline]
    pub fn heading(&self) -> Vec2 {
        Vec2::new(self.angle.cos(), self.angle.sin())
    }
}

// ── Bullet ───────────────────────────────────────────────────────────────────

/// One ship's single bullet slot.
///
/// At most one bullet per ship is in flight at a time. The slot starts
/// inactive and is re-armed only when the previous shot leaves the grid;
/// a hit ends the game outright, so a bullet is never deactivated by impact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Whether the bullet is in flight. Inactive bullets are skipped by
    /// motion, hit testing, and drawing.
    pub active: bool,
}

impl Bullet {
    /// An inactive slot, ready to fire.
    pub const fn idle() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            active: false,
        }
    }

    /// Launch from `ship`'s current position along its current facing.
    ///
    /// A no-op while a previous shot is still in flight. The position and
    /// velocity are snapshots taken here; the bullet does not track the ship
    /// afterward.
    pub fn fire(&mut self, ship: &Ship, speed: f32) {
        if self.active {
            return;
        }
        self.pos = ship.pos;
        self.vel = ship.heading() * speed;
        self.active = true;
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn opponent_is_symmetric() {
        assert_eq!(ShipId::One.opponent(), ShipId::Two);
        assert_eq!(ShipId::Two.opponent(), ShipId::One);
        for id in ShipId::BOTH {
            assert_eq!(id.opponent().opponent(), id);
        }
    }

    #[test]
    fn display_is_player_facing() {
        assert_eq!(ShipId::One.to_string(), "Ship 1");
        assert_eq!(ShipId::Two.to_string(), "Ship 2");
    }

    #[test]
    fn fire_snapshots_position_and_heading() {
        let ship = Ship::new(Vec2::new(10.0, 12.0), 0.0);
        let mut bullet = Bullet::idle();

        bullet.fire(&ship, 1.5);

        assert!(bullet.active, "expected bullet in flight after fire");
        assert_eq!(bullet.pos, ship.pos, "bullet must launch from the ship");
        assert!(
            (bullet.vel.x - 1.5).abs() < 1e-6 && bullet.vel.y.abs() < 1e-6,
            "angle 0 should launch along +x at full speed, got {:?}",
            bullet.vel
        );
    }

    #[test]
    fn fire_respects_facing_angle() {
        let ship = Ship::new(Vec2::new(40.0, 12.0), FRAC_PI_2);
        let mut bullet = Bullet::idle();

        bullet.fire(&ship, 2.0);

        assert!(
            bullet.vel.x.abs() < 1e-6 && (bullet.vel.y - 2.0).abs() < 1e-6,
            "angle pi/2 should launch along +y, got {:?}",
            bullet.vel
        );
    }

    #[test]
    fn second_fire_is_a_no_op_while_in_flight() {
        let mut ship = Ship::new(Vec2::new(10.0, 12.0), 0.0);
        let mut bullet = Bullet::idle();
        bullet.fire(&ship, 1.5);
        let first = bullet;

        // The ship keeps flying and turning; the shot must not follow.
        ship.pos = Vec2::new(30.0, 5.0);
        ship.angle = PI;
        bullet.fire(&ship, 1.5);

        assert_eq!(
            bullet, first,
            "firing while a shot is in flight must leave it untouched"
        );
    }

    #[test]
    fn slot_rearms_after_deactivation() {
        let ship = Ship::new(Vec2::new(10.0, 12.0), 0.0);
        let mut bullet = Bullet::idle();
        bullet.fire(&ship, 1.5);
        bullet.active = false; // left the grid

        let rearmed = Ship::new(Vec2::new(20.0, 8.0), PI);
        bullet.fire(&rearmed, 1.5);

        assert!(bullet.active);
        assert_eq!(bullet.pos, rearmed.pos);
        assert!(
            bullet.vel.x < 0.0,
            "re-fire must take the new facing, got {:?}",
            bullet.vel
        );
    }
}
