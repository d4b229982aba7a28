//! Core game logic
//!
//! Everything in here is deterministic apart from food placement and has no
//! rendering or terminal dependencies.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, TickOutcome};
pub use state::{GameState, Position, Snake};
