//! Headless flatris: plays with a scripted policy and prints a JSON report.
//!
//! ```text
//! flatris-sim --seed 7 --frames 20000 --policy drop
//! ```

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use flatris::core::GameState;
use flatris::engine::{simulate, Autopilot, Session, SimulationReport};
use flatris::logging::{self, LogTarget};
use flatris::SimArgs;

#[derive(Debug, Serialize)]
struct Output {
    seed: u32,
    policy: Autopilot,
    frame_ms: u32,
    report: SimulationReport,
}

fn main() -> Result<()> {
    let args = SimArgs::parse();
    logging::init(LogTarget::from_path(
        args.config.log_path.clone(),
        LogTarget::Stderr,
    ))?;

    let seed = args.config.seed_or_clock();
    let policy = args.policy;
    info!(seed, policy = policy.as_str(), frames = args.frames, "simulating");

    let mut session = Session::new(GameState::new(seed), 0);
    let report = simulate(
        &mut session,
        args.frames,
        u64::from(args.config.frame_ms),
        |state, _| policy.next_action(state),
    );
    info!(
        frames = report.frames,
        score = report.score,
        lines = report.lines,
        game_over = report.game_over,
        "done"
    );

    let output = Output {
        seed,
        policy,
        frame_ms: args.config.frame_ms,
        report,
    };
    let json = serde_json::to_string_pretty(&output).context("encode report")?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}").context("write report")?;
    Ok(())
}
