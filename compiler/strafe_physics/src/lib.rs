//! Tick-exact horizontal movement simulation.
//!
//! [`Player`] reproduces the per-tick update of the reference game engine:
//! Euler integration, drag from the previous tick's slipperiness, sprint
//! jump boosts, environmental modifiers and a 65536-entry sine table for
//! angle quantization. Every named movement verb is a fixed
//! parameterization of [`Player::travel`].
//!
//! Coordinates are horizontal only. Vectors are `glam` 2D vectors whose
//! `y` component holds the world z axis.

mod config;
mod flags;
mod player;
pub mod strat;
mod trig;
mod verbs;

pub use config::PlayerConfig;
pub use flags::{Inputs, Modifiers};
pub use player::{MoveArgs, MoveState, Player};
pub use strat::{StratError, StratFinder, Strategy};
pub use trig::SinTable;
pub use verbs::Stride;
