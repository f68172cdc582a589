//! Terminal input.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. There is no
//! key repeat handling here: the terminal's own auto-repeat is taken as is.

pub mod map;

pub use flatris_types as types;

pub use map::{handle_key_event, is_press, should_quit};
