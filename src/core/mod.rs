//! Core module - pure game logic with no I/O dependencies
//!
//! This module contains the game rules and state management. It knows
//! nothing about terminals, key events or timing sources.

pub mod board;
pub mod catalog;
pub mod game_state;
pub mod piece;
pub mod rng;

// Re-export commonly used types
pub use board::Board;
pub use catalog::{PieceCatalog, PieceDescriptor, PieceQueue};
pub use game_state::GameState;
pub use piece::{Piece, ShapeGrid};
pub use rng::SimpleRng;
