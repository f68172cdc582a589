//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management. It has
//! **no dependencies** on UI, terminals or clocks, making it:
//!
//! - **Deterministic**: the same piece source produces identical games
//! - **Testable**: every rule can be exercised headless
//! - **Portable**: hosts drive it with frame timestamps and actions
//!
//! # Module Structure
//!
//! - [`pieces`]: shape catalog, clockwise rotation, collision and wall kicks
//! - [`board`]: 10x20 board with merge and line clearing
//! - [`scoring`]: line-clear points and the level/gravity curve
//! - [`rng`]: injectable piece sources (seeded uniform, scripted)
//! - [`game_state`]: the falling piece lifecycle and game-over handling
//! - [`snapshot`]: serializable read-only view for renderers
//!
//! # Game Rules
//!
//! - **Random pieces**: each kind equally likely, drawn from the game's own source
//! - **Rotation**: clockwise only; a blocked rotation tries one column right,
//!   then one column left, and is refused otherwise
//! - **Locking**: a piece locks as soon as a downward move fails (no lock delay)
//! - **Scoring**: 100/300/500/800 for 1/2/3/4 lines, times the level
//! - **Levels**: one per 10 lines; gravity 700ms at level 1, 60ms faster per
//!   level, never under 120ms
//!
//! # Example
//!
//! ```
//! use flatris_core::GameState;
//! use flatris_core::types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.pieces_locked(), 1);
//! assert_eq!(game.score(), 0); // nothing to clear yet
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! current time in milliseconds. Gravity moves the piece once more than the
//! drop interval has passed since the previous gravity step.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use flatris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, LockEvent};
pub use pieces::{canonical_shape, collides, rotate, try_rotate, Piece, Shape, KICK_OFFSETS};
pub use rng::{PieceSequence, PieceSource, RandomPieces, SimpleRng};
pub use scoring::{drop_interval_ms, level_for_lines, line_clear_score, Progress};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
