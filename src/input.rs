//! Keyboard decoding.
//!
//! One buffered key becomes at most one mutation of one ship/bullet pair,
//! applied directly in the tick that consumed the key. Decoding is driven by
//! the configured bindings rather than hard-coded keys, so both players'
//! controls stay symmetric and remappable.

use crate::config::{GameConfig, ShipBindings};
use crate::ship::{Bullet, Ship, ShipId};

/// What a single key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// End the game immediately with no winner.
    Quit,
    /// Mutate one ship/bullet pair.
    Ship(ShipId, ShipAction),
}

/// The five per-ship controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipAction {
    /// Vertical velocity decreases by the thrust step (screen up).
    ThrustUp,
    /// Vertical velocity increases by the thrust step (screen down).
    ThrustDown,
    /// Facing angle decreases by the angle step.
    RotateLeft,
    /// Facing angle increases by the angle step.
    RotateRight,
    /// Launch the bullet if the slot is free.
    Fire,
}

/// Map a key to its command, if any. Unbound keys decode to `None` and are
/// ignored by the caller.
pub fn decode(key: char, config: &GameConfig) -> Option<Command> {
    if key == config.quit_key {
        return Some(Command::Quit);
    }
    for id in ShipId::BOTH {
        if let Some(action) = decode_ship(key, config.ship_keys(id)) {
            return Some(Command::Ship(id, action));
        }
    }
    None
}

fn decode_ship(key: char, keys: &ShipBindings) -> Option<ShipAction> {
    if key == keys.thrust_up {
        Some(ShipAction::ThrustUp)
    } else if key == keys.thrust_down {
        Some(ShipAction::ThrustDown)
    } else if key == keys.rotate_left {
        Some(ShipAction::RotateLeft)
    } else if key == keys.rotate_right {
        Some(ShipAction::RotateRight)
    } else if key == keys.fire {
        Some(ShipAction::Fire)
    } else {
        None
    }
}

/// Apply one decoded action to its ship/bullet pair.
pub fn apply(action: ShipAction, ship: &mut Ship, bullet: &mut Bullet, config: &GameConfig) {
    match action {
        ShipAction::ThrustUp => ship.vel.y -= config.thrust_step,
        ShipAction::ThrustDown => ship.vel.y += config.thrust_step,
        ShipAction::RotateLeft => ship.angle -= config.angle_step,
        ShipAction::RotateRight => ship.angle += config.angle_step,
        ShipAction::Fire => bullet.fire(ship, config.bullet_speed),
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn pair() -> (Ship, Bullet) {
        (Ship::new(Vec2::new(10.0, 12.0), 0.0), Bullet::idle())
    }

    #[test]
    fn default_bindings_address_the_right_ship() {
        let config = GameConfig::default();
        assert_eq!(
            decode('w', &config),
            Some(Command::Ship(ShipId::One, ShipAction::ThrustUp))
        );
        assert_eq!(
            decode(' ', &config),
            Some(Command::Ship(ShipId::One, ShipAction::Fire))
        );
        assert_eq!(
            decode('j', &config),
            Some(Command::Ship(ShipId::Two, ShipAction::RotateLeft))
        );
        assert_eq!(
            decode('m', &config),
            Some(Command::Ship(ShipId::Two, ShipAction::Fire))
        );
        assert_eq!(decode('q', &config), Some(Command::Quit));
    }

    #[test]
    fn unbound_keys_decode_to_none() {
        let config = GameConfig::default();
        for key in ['x', 'Q', '1', '\n'] {
            assert_eq!(decode(key, &config), None, "{key:?} should be ignored");
        }
    }

    #[test]
    fn decode_follows_remapped_bindings() {
        let mut config = GameConfig::default();
        config.ship_one_keys.fire = 'f';
        assert_eq!(
            decode('f', &config),
            Some(Command::Ship(ShipId::One, ShipAction::Fire))
        );
        assert_eq!(decode(' ', &config), None, "the old key no longer fires");
    }

    #[test]
    fn thrust_adjusts_vertical_velocity_by_one_step() {
        let config = GameConfig::default();
        let (mut ship, mut bullet) = pair();

        apply(ShipAction::ThrustUp, &mut ship, &mut bullet, &config);
        assert!(
            (ship.vel.y + config.thrust_step).abs() < 1e-6,
            "thrust up subtracts one step, got dy = {}",
            ship.vel.y
        );

        apply(ShipAction::ThrustDown, &mut ship, &mut bullet, &config);
        apply(ShipAction::ThrustDown, &mut ship, &mut bullet, &config);
        assert!(
            (ship.vel.y - config.thrust_step).abs() < 1e-6,
            "two downs after one up net one step down, got dy = {}",
            ship.vel.y
        );
    }

    #[test]
    fn rotation_adjusts_angle_by_one_step() {
        let config = GameConfig::default();
        let (mut ship, mut bullet) = pair();
        apply(ShipAction::RotateRight, &mut ship, &mut bullet, &config);
        assert!((ship.angle - config.angle_step).abs() < 1e-6);
        apply(ShipAction::RotateLeft, &mut ship, &mut bullet, &config);
        assert!(ship.angle.abs() < 1e-6);
    }

    #[test]
    fn fire_action_launches_the_pair_bullet() {
        let config = GameConfig::default();
        let (mut ship, mut bullet) = pair();
        apply(ShipAction::Fire, &mut ship, &mut bullet, &config);
        assert!(bullet.active);
        assert_eq!(bullet.pos, ship.pos);
    }
}
