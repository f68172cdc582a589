//! Scripted players for headless runs.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, PieceSource};
use crate::types::{GameAction, BOARD_WIDTH};

/// How a headless run plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Autopilot {
    /// Never touches the controls; gravity alone stacks the pieces.
    Idle,
    /// Walks each piece to a column that moves three to the right per piece,
    /// then hard-drops it.
    Drop,
}

impl Autopilot {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "idle" => Some(Autopilot::Idle),
            "drop" => Some(Autopilot::Drop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Autopilot::Idle => "idle",
            Autopilot::Drop => "drop",
        }
    }

    /// Action to take this frame, if any.
    pub fn next_action<S: PieceSource>(&self, state: &GameState<S>) -> Option<GameAction> {
        match self {
            Autopilot::Idle => None,
            Autopilot::Drop => {
                if state.game_over() {
                    return None;
                }
                let piece = state.active();
                let span = (BOARD_WIDTH - piece.shape.cols()) as u32 + 1;
                let target = ((state.pieces_locked() * 3) % span) as i8;
                if piece.x > target && state.can_move(-1, 0) {
                    Some(GameAction::MoveLeft)
                } else if piece.x < target && state.can_move(1, 0) {
                    Some(GameAction::MoveRight)
                } else {
                    Some(GameAction::HardDrop)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PieceSequence;
    use crate::types::PieceKind;

    #[test]
    fn idle_does_nothing() {
        let state = GameState::new(1);
        assert_eq!(Autopilot::Idle.next_action(&state), None);
    }

    #[test]
    fn drop_walks_to_target_then_drops() {
        let mut state = GameState::with_source(PieceSequence::repeat(PieceKind::O));

        // First target is column 0; O spawns at 4.
        for _ in 0..4 {
            let action = Autopilot::Drop.next_action(&state).unwrap();
            assert_eq!(action, GameAction::MoveLeft);
            state.apply_action(action);
        }
        assert_eq!(Autopilot::Drop.next_action(&state), Some(GameAction::HardDrop));
    }

    #[test]
    fn parses_names() {
        assert_eq!(Autopilot::from_str("DROP"), Some(Autopilot::Drop));
        assert_eq!(Autopilot::from_str(Autopilot::Idle.as_str()), Some(Autopilot::Idle));
        assert_eq!(Autopilot::from_str("smart"), None);
    }
}
