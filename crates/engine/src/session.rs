//! A running game plus the clock it is measured against.

use tracing::debug;

use crate::core::{GameState, PieceSource, RandomPieces};
use crate::types::GameAction;

/// Owns one [`GameState`] and translates host time into game time.
///
/// Game time starts at 0 when the session starts and again after every
/// restart, so a new game never inherits the previous game's drop timer.
#[derive(Debug, Clone)]
pub struct Session<S = RandomPieces> {
    state: GameState<S>,
    /// Host time at which the current game started.
    origin_ms: u64,
    /// Latest host time seen.
    now_ms: u64,
    frames: u64,
}

impl<S: PieceSource> Session<S> {
    /// Start a session at host time `now_ms`.
    pub fn new(state: GameState<S>, now_ms: u64) -> Self {
        Self {
            state,
            origin_ms: now_ms,
            now_ms,
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState<S> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState<S> {
        &mut self.state
    }

    pub fn into_state(self) -> GameState<S> {
        self.state
    }

    /// Frames run since the session started.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Latest host time passed to `new`, `frame` or `handle`.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Milliseconds of game time at host time `now_ms`.
    pub fn game_time_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.origin_ms)
    }

    /// Per-frame update. Returns true if gravity moved or locked the piece.
    pub fn frame(&mut self, now_ms: u64) -> bool {
        self.frames += 1;
        self.now_ms = now_ms;
        let game_time = self.game_time_ms(now_ms);
        self.state.tick(game_time)
    }

    /// Apply one input action at host time `now_ms`.
    pub fn handle(&mut self, action: GameAction, now_ms: u64) -> bool {
        self.now_ms = now_ms;
        let changed = self.state.apply_action(action);
        if action == GameAction::Restart {
            self.origin_ms = now_ms;
            debug!(
                episode_id = self.state.episode_id(),
                origin_ms = now_ms,
                "session clock reset"
            );
        }
        changed
    }
}
