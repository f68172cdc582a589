//! Flatris (workspace facade crate).
//!
//! Re-exports the member crates under short names and holds what the two
//! binaries share: command-line [`config`] and [`logging`] setup.
//!
//! ```
//! use flatris::core::{GameState, PieceSequence};
//! use flatris::engine::{simulate, Autopilot, Session};
//! use flatris::types::PieceKind;
//!
//! let state = GameState::with_source(PieceSequence::repeat(PieceKind::I));
//! let mut session = Session::new(state, 0);
//! let report = simulate(&mut session, 600, 16, |s, _| Autopilot::Drop.next_action(s));
//! assert!(report.pieces_locked > 0);
//! ```

pub mod config;
pub mod logging;

pub use flatris_core as core;
pub use flatris_engine as engine;
pub use flatris_input as input;
pub use flatris_term as term;
pub use flatris_types as types;

pub use config::{Config, SimArgs, TuiArgs};
pub use logging::LogTarget;
