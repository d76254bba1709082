//! Three tanks, one keyboard, random walls: a local last-tank-standing arena.
//!
//! The simulation lives in [`game::Game`]; a frame driver feeds it held keys
//! once per tick and reads [`game::Snapshot`]s back for drawing. The raylib
//! window is behind the `frontend` feature.

pub mod clock;
pub mod config;
pub mod entities;
pub mod error;
pub mod game;
pub mod math;
pub mod world;

#[cfg(feature = "frontend")]
pub mod frontend;

pub use config::GameConfig;
pub use error::ConfigError;
pub use game::{Game, GameState, Snapshot};
