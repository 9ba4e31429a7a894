//! Snake game core.
//!
//! The snake crawls across a fixed grid one cell per tick, grows when its head
//! lands on the apple, and the game ends for good when the head hits a wall
//! or the snake's own body.

pub mod driver;
pub mod logic;
pub mod types;

pub use driver::TickDriver;
pub use logic::*;
pub use types::*;
