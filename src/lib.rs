//! Gravwell — a two-player orbital duel fought on a terminal character grid.
//!
//! Two ships orbit a central star that pulls them in every tick. Each player
//! can thrust vertically, rotate, and keep a single bullet in flight; the
//! first hit ends the game. The whole program is one fixed-tick loop over
//! keyboard polling, physics, and a full-frame repaint.

pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod input;
pub mod render;
pub mod ship;
pub mod simulation;
pub mod terminal;
