//! Command-line and environment configuration.
//!
//! Every option can be given as a flag or through a `FLATRIS_*` environment
//! variable; flags win.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::{Args, Parser};

use crate::engine::Autopilot;
use crate::types::FRAME_MS;

/// Options shared by every binary.
#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Piece-source seed. Defaults to one derived from the clock.
    #[arg(long, env = "FLATRIS_SEED")]
    pub seed: Option<u32>,

    /// Length of one host frame in milliseconds.
    #[arg(
        long,
        env = "FLATRIS_FRAME_MS",
        default_value_t = FRAME_MS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub frame_ms: u32,

    /// Append log lines to this file.
    #[arg(long, env = "FLATRIS_LOG_PATH")]
    pub log_path: Option<PathBuf>,
}

impl Config {
    /// The configured seed, or one taken from the system clock.
    ///
    /// Call once and keep the result; clock seeds differ between calls.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.frame_ms))
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// `flatris`: play in the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "flatris", version, about = "Falling-block puzzle game for the terminal")]
pub struct TuiArgs {
    #[command(flatten)]
    pub config: Config,
}

/// `flatris-sim`: run games headless and print a JSON report.
#[derive(Debug, Clone, Parser)]
#[command(name = "flatris-sim", version, about = "Headless flatris runs")]
pub struct SimArgs {
    #[command(flatten)]
    pub config: Config,

    /// Maximum frames to run; the run also stops at game over.
    #[arg(long, env = "FLATRIS_SIM_FRAMES", default_value_t = 10_000)]
    pub frames: u64,

    /// Scripted player: `idle` or `drop`.
    #[arg(
        long,
        env = "FLATRIS_SIM_POLICY",
        default_value = "drop",
        value_parser = parse_policy
    )]
    pub policy: Autopilot,
}

fn parse_policy(s: &str) -> Result<Autopilot, String> {
    Autopilot::from_str(s).ok_or_else(|| format!("unknown policy `{s}` (expected idle or drop)"))
}
