//! Game state machine and the fixed-tick loop driver.
//!
//! ## Tick sequence (only while running)
//!
//! 1. clear the screen buffer
//! 2. poll at most one buffered key and apply its single mutation
//!    (quit ends the game here, before any physics)
//! 3. gravity on both ships
//! 4. move both ships (wraparound) and both bullets (edge deactivation)
//! 5. hit-test both (ship, opposing bullet) pairs; a hit ends the game
//!    and skips drawing
//! 6. draw ships, in-flight bullets, then the star
//! 7. present the full frame
//! 8. sleep the fixed tick duration
//!
//! [`Game::tick`] covers steps 2–5 and takes the polled key as a parameter,
//! so the whole state machine runs in tests without a terminal;
//! [`run`] wraps it with the real polling, painting, and pacing.

use std::io::Write;
use std::thread;
use std::time::Duration;

use glam::Vec2;

use crate::config::GameConfig;
use crate::constants::{
    SHIP_ONE_START, SHIP_ONE_START_ANGLE, SHIP_ONE_SYMBOL, SHIP_TWO_START, SHIP_TWO_START_ANGLE,
    SHIP_TWO_SYMBOL, STAR_SYMBOL,
};
use crate::error::{GameError, GameResult};
use crate::input::{self, Command};
use crate::render::{self, Screen};
use crate::ship::{Bullet, Ship, ShipId};
use crate::simulation;
use crate::terminal;

// ── State machine ────────────────────────────────────────────────────────────

/// The two phases of a duel. `Ended` is terminal; `None` means quit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Running,
    Ended(Option<ShipId>),
}

/// The full duel state: two symmetric ship/bullet pairs and the phase.
pub struct Game {
    ships: [Ship; 2],
    bullets: [Bullet; 2],
    state: GameState,
    config: GameConfig,
}

impl Game {
    /// A fresh duel: ships at their spawn points facing each other, both
    /// bullet slots inactive.
    pub fn new(config: GameConfig) -> Self {
        let (x1, y1) = SHIP_ONE_START;
        let (x2, y2) = SHIP_TWO_START;
        Self {
            ships: [
                Ship::new(Vec2::new(x1, y1), SHIP_ONE_START_ANGLE),
                Ship::new(Vec2::new(x2, y2), SHIP_TWO_START_ANGLE),
            ],
            bullets: [Bullet::idle(), Bullet::idle()],
            state: GameState::Running,
            config,
        }
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn ship(&self, id: ShipId) -> &Ship {
        &self.ships[id.index()]
    }

    #[inline]
    pub fn bullet(&self, id: ShipId) -> &Bullet {
        &self.bullets[id.index()]
    }

    /// Advance one tick, consuming the key polled for this tick (if any).
    ///
    /// Ticking an ended game changes nothing. The quit key ends the game
    /// before gravity or motion run, so no state from the quitting tick
    /// leaks into the final positions.
    pub fn tick(&mut self, key: Option<char>) -> GameState {
        if self.state != GameState::Running {
            return self.state;
        }

        if let Some(key) = key {
            match input::decode(key, &self.config) {
                Some(Command::Quit) => {
                    self.state = GameState::Ended(None);
                    return self.state;
                }
                Some(Command::Ship(id, action)) => {
                    let i = id.index();
                    input::apply(action, &mut self.ships[i], &mut self.bullets[i], &self.config);
                }
                None => {}
            }
        }

        let (width, height) = (self.config.width(), self.config.height());
        let center = simulation::well_center(width, height);

        for id in ShipId::BOTH {
            simulation::apply_gravity(&mut self.ships[id.index()], center, self.config.gravity_const);
        }
        for id in ShipId::BOTH {
            simulation::move_ship(&mut self.ships[id.index()], width, height);
        }
        for id in ShipId::BOTH {
            simulation::move_bullet(&mut self.bullets[id.index()], width, height);
        }

        for defender in ShipId::BOTH {
            let attacker = defender.opponent();
            if simulation::bullet_hits_ship(
                self.ship(defender),
                self.bullet(attacker),
                self.config.hit_radius,
            ) {
                self.state = GameState::Ended(Some(attacker));
                return self.state;
            }
        }

        GameState::Running
    }

    /// Paint the current state onto `screen`. The star goes last so the well
    /// marker survives an entity crossing the midpoint cell.
    pub fn draw(&self, screen: &mut Screen) {
        render::draw_ship(screen, self.ship(ShipId::One), SHIP_ONE_SYMBOL);
        render::draw_ship(screen, self.ship(ShipId::Two), SHIP_TWO_SYMBOL);
        for id in ShipId::BOTH {
            render::draw_bullet(screen, self.bullet(id));
        }
        render::draw_star(screen, STAR_SYMBOL);
    }
}

/// The single line announcing a decided duel.
pub fn victory_line(winner: ShipId) -> String {
    format!("{} wins! {} was hit.", winner, winner.opponent())
}

// ── Loop driver ──────────────────────────────────────────────────────────────

/// Run the duel to completion against the real terminal.
///
/// Expects raw mode to already be held by the caller's guard. Returns the
/// winner, or `None` when a player quit.
pub fn run(game: &mut Game, out: &mut impl Write) -> GameResult<Option<ShipId>> {
    let mut screen = Screen::new(game.config().grid_width, game.config().grid_height);
    let tick_sleep = Duration::from_millis(game.config().tick_sleep_ms);

    loop {
        screen.clear();
        let key = terminal::poll_key()?;
        match game.tick(key) {
            GameState::Ended(winner) => return Ok(winner),
            GameState::Running => {
                game.draw(&mut screen);
                screen.present(out).map_err(|source| GameError::Terminal {
                    context: "present frame",
                    source,
                })?;
                thread::sleep(tick_sleep);
            }
        }
    }
}

// ── Scenario tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Tick with no input until the game ends or `limit` ticks pass.
    fn run_idle(game: &mut Game, limit: u32) -> GameState {
        for _ in 0..limit {
            if let GameState::Ended(winner) = game.tick(None) {
                return GameState::Ended(winner);
            }
        }
        GameState::Running
    }

    #[test]
    fn duel_opening_shot_decides_the_game() {
        // Ship 1 fires straight at ship 2 on the first tick. Gravity drags
        // the defender toward the star and into the shot's path; the duel
        // must end with ship 1 the winner well inside 200 ticks.
        let mut game = Game::new(GameConfig::default());
        assert_eq!(game.tick(Some(' ')), GameState::Running);
        assert!(game.bullet(ShipId::One).active, "the opening shot is in flight");

        let end = run_idle(&mut game, 200);
        assert_eq!(
            end,
            GameState::Ended(Some(ShipId::One)),
            "the undisturbed opening shot should win for ship 1"
        );
    }

    #[test]
    fn victory_line_names_winner_and_victim() {
        assert_eq!(victory_line(ShipId::One), "Ship 1 wins! Ship 2 was hit.");
        assert_eq!(victory_line(ShipId::Two), "Ship 2 wins! Ship 1 was hit.");
    }

    #[test]
    fn quit_ends_before_any_physics() {
        let mut game = Game::new(GameConfig::default());
        let before = (*game.ship(ShipId::One), *game.ship(ShipId::Two));

        assert_eq!(game.tick(Some('q')), GameState::Ended(None));
        assert_eq!(
            (*game.ship(ShipId::One), *game.ship(ShipId::Two)),
            before,
            "the quitting tick must not run gravity or motion"
        );
    }

    #[test]
    fn ended_game_ignores_further_ticks() {
        let mut game = Game::new(GameConfig::default());
        game.tick(Some('q'));
        let frozen = *game.ship(ShipId::One);

        assert_eq!(game.tick(None), GameState::Ended(None));
        assert_eq!(game.tick(Some(' ')), GameState::Ended(None));
        assert_eq!(
            *game.ship(ShipId::One),
            frozen,
            "an ended game is terminal; nothing mutates"
        );
    }

    #[test]
    fn unrecognized_keys_act_like_no_input() {
        let mut with_noise = Game::new(GameConfig::default());
        let mut silent = Game::new(GameConfig::default());

        with_noise.tick(Some('x'));
        silent.tick(None);

        assert_eq!(*with_noise.ship(ShipId::One), *silent.ship(ShipId::One));
        assert_eq!(*with_noise.ship(ShipId::Two), *silent.ship(ShipId::Two));
    }

    #[test]
    fn firing_twice_keeps_the_first_flight() {
        let mut game = Game::new(GameConfig::default());
        game.tick(Some(' '));
        let first = *game.bullet(ShipId::One);

        // The slot is occupied; a second press changes nothing about the
        // shot beyond its ordinary per-tick motion.
        game.tick(Some(' '));
        let second = *game.bullet(ShipId::One);
        assert_eq!(
            second.vel, first.vel,
            "the in-flight velocity is frozen at the first press"
        );
        assert_eq!(second.pos, first.pos + first.vel);
    }

    #[test]
    fn each_ship_answers_only_to_its_own_keys() {
        let mut game = Game::new(GameConfig::default());
        game.tick(Some('i')); // ship 2 thrust up
        assert!(
            !game.bullet(ShipId::One).active,
            "ship 1's slot stays idle on ship 2 input"
        );
        assert!(
            game.ship(ShipId::Two).vel.y < 0.0,
            "ship 2 gained upward velocity, got dy = {}",
            game.ship(ShipId::Two).vel.y
        );
    }

    #[test]
    fn gravity_alone_never_ends_the_duel_early() {
        // With no shots fired there is nothing to hit; a long idle run must
        // still be in progress.
        let mut game = Game::new(GameConfig::default());
        assert_eq!(run_idle(&mut game, 500), GameState::Running);
    }
}
