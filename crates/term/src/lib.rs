//! Terminal rendering.
//!
//! [`GameView`] draws a [`crate::core::GameSnapshot`] into a [`FrameBuffer`]
//! without touching the terminal, and [`TerminalRenderer`] flushes framebuffers
//! to stdout, sending only the cells that changed since the previous frame.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use flatris_core as core;
pub use flatris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
