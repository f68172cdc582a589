//! Host-loop side of the game.
//!
//! `flatris-core` only knows about timestamps and actions. This crate owns the
//! clock bookkeeping a host loop needs ([`Session`], [`FixedStep`]) and a
//! headless runner ([`simulate`]) for tests, benches and the `flatris-sim` binary.

pub mod autopilot;
pub mod session;
pub mod simulate;
pub mod step;

pub use flatris_core as core;
pub use flatris_types as types;

pub use autopilot::Autopilot;
pub use session::Session;
pub use simulate::{simulate, SimulationReport};
pub use step::FixedStep;
