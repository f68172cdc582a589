//! Game state module - manages the complete game state
//!
//! This module ties together the board, the active piece, the piece source and
//! scoring. It has no clock of its own: hosts pass frame timestamps to
//! [`GameState::tick`] and input commands to [`GameState::apply_action`].

use serde::Serialize;
use tracing::{debug, info};

use crate::board::Board;
use crate::pieces::{collides, try_rotate, Piece};
use crate::rng::{PieceSource, RandomPieces};
use crate::scoring::Progress;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, PieceKind};

/// What happened when the last piece locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub points: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = RandomPieces> {
    board: Board,
    active: Piece,
    source: S,
    progress: Progress,
    /// Frame time of the last gravity step.
    last_drop_ms: u64,
    game_over: bool,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    pieces_locked: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState<RandomPieces> {
    /// Create a new game with uniformly random pieces from `seed`
    pub fn new(seed: u32) -> Self {
        Self::with_source(RandomPieces::new(seed))
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a new game on an empty board
    pub fn with_source(source: S) -> Self {
        Self::with_board(Board::new(), source)
    }

    /// Create a new game on a prepared board.
    ///
    /// If the first piece already collides the game starts over.
    pub fn with_board(board: Board, mut source: S) -> Self {
        let active = Piece::spawn(source.next_kind());
        let game_over = collides(&board, &active);
        Self {
            board,
            active,
            source,
            progress: Progress::new(),
            last_drop_ms: 0,
            game_over,
            episode_id: 0,
            pieces_locked: 0,
            last_event: None,
        }
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn score(&self) -> u32 {
        self.progress.score
    }

    pub fn level(&self) -> u32 {
        self.progress.level
    }

    pub fn lines(&self) -> u32 {
        self.progress.lines
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.progress.drop_interval_ms
    }

    pub fn last_drop_ms(&self) -> u64 {
        self.last_drop_ms
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// The falling piece. Still assigned after game over, but not meant to be drawn.
    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = Some(ActiveSnapshot::from(self.active));
        out.score = self.progress.score;
        out.lines = self.progress.lines;
        out.level = self.progress.level;
        out.drop_interval_ms = self.progress.drop_interval_ms;
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
        out.pieces_locked = self.pieces_locked;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Shift the active piece sideways by `dx`.
    ///
    /// Returns false (and leaves the piece alone) if the move collides.
    /// Never locks.
    pub fn move_piece(&mut self, dx: i8) -> bool {
        if self.game_over {
            return false;
        }
        self.try_shift(dx, 0)
    }

    /// Move the active piece down one row, locking it if it cannot move.
    ///
    /// Returns true if the piece moved.
    pub fn soft_drop(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        if self.try_shift(0, 1) {
            return true;
        }
        self.lock_piece();
        false
    }

    /// Drop the active piece as far as it goes and lock it.
    ///
    /// Returns the number of rows the piece fell.
    pub fn hard_drop(&mut self) -> u32 {
        if self.game_over {
            return 0;
        }

        let mut rows = 0;
        // Bounded by the board height: every step moves one row closer to the floor.
        while self.try_shift(0, 1) {
            rows += 1;
        }
        self.lock_piece();
        rows
    }

    /// Rotate the active piece clockwise with the `{0, +1, -1}` kick search.
    ///
    /// Returns false if every kick collides; the piece is then unchanged.
    pub fn rotate_piece(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        match try_rotate(&self.board, &self.active) {
            Some(rotated) => {
                self.active = rotated;
                true
            }
            None => false,
        }
    }

    /// Frame update: one gravity step once more than the drop interval has
    /// passed since the last one.
    ///
    /// Returns true if a gravity step ran.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.game_over {
            return false;
        }
        if now_ms.saturating_sub(self.last_drop_ms) <= self.progress.drop_interval_ms as u64 {
            return false;
        }

        self.soft_drop();
        self.last_drop_ms = now_ms;
        true
    }

    /// Replace the whole game with a fresh one.
    ///
    /// The piece source carries on, so a seeded game does not replay its
    /// first sequence.
    pub fn restart(&mut self) {
        self.board.clear();
        self.progress = Progress::new();
        self.last_drop_ms = 0;
        self.pieces_locked = 0;
        self.last_event = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.active = Piece::spawn(self.source.next_kind());
        self.game_over = collides(&self.board, &self.active);
        info!(episode_id = self.episode_id, "game restarted");
    }

    /// Apply a game action
    ///
    /// Returns whether the action changed anything. After game over only
    /// `Restart` does.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_piece(-1),
            GameAction::MoveRight => self.move_piece(1),
            GameAction::SoftDrop => {
                if self.game_over {
                    return false;
                }
                self.soft_drop();
                true
            }
            GameAction::HardDrop => {
                if self.game_over {
                    return false;
                }
                self.hard_drop();
                true
            }
            GameAction::Rotate => self.rotate_piece(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Check if the active piece could move by `(dx, dy)`
    pub fn can_move(&self, dx: i8, dy: i8) -> bool {
        !collides(&self.board, &self.active.shifted(dx, dy))
    }

    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        let moved = self.active.shifted(dx, dy);
        if collides(&self.board, &moved) {
            return false;
        }
        self.active = moved;
        true
    }

    /// Lock the active piece, clear lines, score, and spawn the next piece.
    fn lock_piece(&mut self) {
        let kind = self.active.kind;
        self.board.merge(&self.active);

        let cleared = self.board.clear_lines();
        let points = self.progress.record_clear(cleared);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);
        self.last_event = Some(LockEvent {
            kind,
            lines_cleared: cleared as u32,
            points,
        });

        if cleared > 0 {
            debug!(
                lines = cleared,
                points,
                score = self.progress.score,
                level = self.progress.level,
                "lines cleared"
            );
        }

        self.active = Piece::spawn(self.source.next_kind());
        if collides(&self.board, &self.active) {
            self.game_over = true;
            info!(
                score = self.progress.score,
                lines = self.progress.lines,
                level = self.progress.level,
                pieces = self.pieces_locked,
                "game over"
            );
        }
    }
}

impl Default for GameState<RandomPieces> {
    fn default() -> Self {
        Self::new(1)
    }
}
