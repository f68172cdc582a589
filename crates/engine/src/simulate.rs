//! Headless runs: fixed frames, scripted input, no terminal.

use serde::Serialize;
use tracing::debug;

use crate::core::{GameSnapshot, GameState, PieceSource};
use crate::session::Session;
use crate::step::FixedStep;
use crate::types::GameAction;

/// Summary of a headless run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub frames: u64,
    /// Game time of the last frame, measured from the latest (re)start.
    pub game_time_ms: u64,
    pub actions: u64,
    pub pieces_locked: u32,
    pub lines: u32,
    pub score: u32,
    pub level: u32,
    pub game_over: bool,
    pub final_state: GameSnapshot,
}

/// Run `session` for up to `frames` frames of `frame_ms` each.
///
/// Host time continues from [`Session::now_ms`]. Before every frame `script`
/// sees the state and the frame number and may return one action to apply.
/// The run stops early when the game is over.
pub fn simulate<S, F>(
    session: &mut Session<S>,
    frames: u64,
    frame_ms: u64,
    mut script: F,
) -> SimulationReport
where
    S: PieceSource,
    F: FnMut(&GameState<S>, u64) -> Option<GameAction>,
{
    let start_ms = session.now_ms();
    let mut step = FixedStep::new(frame_ms);
    let mut actions = 0u64;
    let mut frames_run = 0u64;

    while frames_run < frames && !session.state().game_over() {
        let delta = step.step_ms();
        let Some(offset) = step.advance(delta).next() else {
            break;
        };
        let now_ms = start_ms.saturating_add(offset);

        if let Some(action) = script(session.state(), frames_run) {
            session.handle(action, now_ms);
            actions += 1;
        }
        session.frame(now_ms);
        frames_run += 1;
    }

    let state = session.state();
    debug!(
        frames = frames_run,
        pieces = state.pieces_locked(),
        score = state.score(),
        game_over = state.game_over(),
        "simulation finished"
    );

    SimulationReport {
        frames: frames_run,
        game_time_ms: session.game_time_ms(session.now_ms()),
        actions,
        pieces_locked: state.pieces_locked(),
        lines: state.lines(),
        score: state.score(),
        level: state.level(),
        game_over: state.game_over(),
        final_state: state.snapshot(),
    }
}
