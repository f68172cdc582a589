//! Plain-data copy of a game for renderers and reports.

use serde::Serialize;

use crate::pieces::{Piece, PieceCells, Shape};
use crate::types::{PieceKind, BASE_DROP_INTERVAL_MS, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Board coordinates of the piece's filled cells.
    pub fn cells(&self) -> PieceCells {
        Piece::from(*self).cells()
    }
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

impl From<ActiveSnapshot> for Piece {
    fn from(value: ActiveSnapshot) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    /// Piece codes per cell, row 0 at the top (0 = empty).
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
    pub game_over: bool,
    pub episode_id: u32,
    pub pieces_locked: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Active piece, unless the game is over and it should not be drawn.
    pub fn visible_active(&self) -> Option<&ActiveSnapshot> {
        if self.game_over {
            return None;
        }
        self.active.as_ref()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            score: 0,
            lines: 0,
            level: 1,
            drop_interval_ms: BASE_DROP_INTERVAL_MS,
            game_over: false,
            episode_id: 0,
            pieces_locked: 0,
        }
    }
}
