//! Snake - Terminal Snake Library
//!
//! This module exposes the game logic for testing and external use.

pub mod app;
pub mod build_info;
pub mod constants;
pub mod game;
pub mod input;
pub mod logging;
pub mod ui;

pub use constants::*;
pub use game::{Direction, GameOverCause, Position, SnakeGame, TickOutcome};
