//! Game state scenarios

use flatris::core::{Board, GameState, LockEvent, PieceSequence};
use flatris::types::{GameAction, PieceKind, BOARD_WIDTH};

/// Board with rows `from..=19` filled except column 0.
fn board_with_left_well(from: i16) -> Board {
    let mut board = Board::new();
    for y in from..20 {
        for x in 1..BOARD_WIDTH as i16 {
            board.set(x, y, Some(PieceKind::J));
        }
    }
    board
}

/// Stand the active I piece up, walk it to column 0 and hard-drop it.
fn drop_vertical_i_left(state: &mut GameState<PieceSequence>) {
    assert_eq!(state.active().kind, PieceKind::I);
    assert!(state.rotate_piece());
    while state.move_piece(-1) {}
    assert_eq!(state.active().x, 0);
    state.hard_drop();
}

#[test]
fn test_new_game_defaults() {
    let state = GameState::new(7);
    assert_eq!(state.score(), 0);
    assert_eq!(state.lines(), 0);
    assert_eq!(state.level(), 1);
    assert_eq!(state.drop_interval_ms(), 700);
    assert_eq!(state.last_drop_ms(), 0);
    assert_eq!(state.episode_id(), 0);
    assert!(!state.game_over());
    assert!(state.board().cells().iter().all(Option::is_none));
}

#[test]
fn test_same_seed_same_pieces() {
    let mut a = GameState::new(99);
    let mut b = GameState::new(99);
    for _ in 0..20 {
        assert_eq!(a.active().kind, b.active().kind);
        a.hard_drop();
        b.hard_drop();
    }
}

#[test]
fn test_single_gap_line_clear() {
    let mut board = board_with_left_well(19);
    board.set(5, 18, Some(PieceKind::T));
    let mut state = GameState::with_board(board, PieceSequence::repeat(PieceKind::I));

    drop_vertical_i_left(&mut state);

    assert_eq!(
        state.take_last_event(),
        Some(LockEvent {
            kind: PieceKind::I,
            lines_cleared: 1,
            points: 100,
        })
    );
    assert_eq!(state.lines(), 1);
    assert_eq!(state.score(), 100);

    // Everything above the cleared row moved down by one.
    let board = state.board();
    assert_eq!(board.get(5, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.get(5, 18), Some(None));
    for y in 17..=19 {
        assert_eq!(board.get(0, y), Some(Some(PieceKind::I)));
    }
    assert_eq!(board.get(0, 16), Some(None));
    assert!(!board.is_row_full(19));
}

#[test]
fn test_four_lines_at_level_one_score_800() {
    let board = board_with_left_well(16);
    let mut state = GameState::with_board(board, PieceSequence::repeat(PieceKind::I));

    drop_vertical_i_left(&mut state);

    assert_eq!(state.lines(), 4);
    assert_eq!(state.score(), 800);
    assert!(state.board().cells().iter().all(Option::is_none));
}

#[test]
fn test_level_up_after_ten_lines() {
    let board = board_with_left_well(10);
    let mut state = GameState::with_board(board, PieceSequence::repeat(PieceKind::I));

    drop_vertical_i_left(&mut state);
    drop_vertical_i_left(&mut state);
    assert_eq!((state.lines(), state.level()), (8, 1));

    drop_vertical_i_left(&mut state);
    assert_eq!(state.lines(), 10);
    assert_eq!(state.level(), 2);
    assert_eq!(state.drop_interval_ms(), 640);
    // Both clears of four and the final clear of two paid at level 1.
    assert_eq!(state.score(), 800 + 800 + 300);
}

#[test]
fn test_soft_drop_locks_on_floor() {
    let mut state = GameState::with_source(PieceSequence::new([PieceKind::O, PieceKind::T]).unwrap());
    for _ in 0..18 {
        assert!(state.soft_drop());
    }
    assert!(!state.soft_drop());

    assert_eq!(state.pieces_locked(), 1);
    assert_eq!(state.active().kind, PieceKind::T);
    assert_eq!(state.board().get(4, 19), Some(Some(PieceKind::O)));
}

#[test]
fn test_hard_drop_returns_rows_fallen() {
    let mut state = GameState::with_source(PieceSequence::repeat(PieceKind::O));
    assert_eq!(state.hard_drop(), 18);
    assert_eq!(state.hard_drop(), 16);
}

#[test]
fn test_move_never_locks() {
    let mut state = GameState::with_source(PieceSequence::repeat(PieceKind::O));
    for _ in 0..20 {
        state.move_piece(-1);
    }
    assert_eq!(state.active().x, 0);
    assert_eq!(state.pieces_locked(), 0);
}

#[test]
fn test_tick_uses_strict_interval() {
    let mut state = GameState::with_source(PieceSequence::repeat(PieceKind::T));

    assert!(!state.tick(700));
    assert_eq!(state.active().y, 0);
    assert!(state.tick(701));
    assert_eq!(state.active().y, 1);
    assert_eq!(state.last_drop_ms(), 701);

    assert!(!state.tick(1401));
    assert!(state.tick(1402));
    assert_eq!(state.active().y, 2);
}

#[test]
fn test_game_over_freezes_everything_but_restart() {
    // Columns 4 and 5 filled from row 2 down: the first O locks on rows 0-1
    // and the next O cannot spawn.
    let mut board = Board::new();
    for y in 2..20 {
        board.set(4, y, Some(PieceKind::S));
        board.set(5, y, Some(PieceKind::S));
    }
    let mut state = GameState::with_board(board, PieceSequence::repeat(PieceKind::O));
    assert!(!state.game_over());

    assert_eq!(state.hard_drop(), 0);
    assert!(state.game_over());

    let board_before = state.board().clone();
    let piece_before = *state.active();
    let score_before = state.score();

    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::Rotate,
        GameAction::HardDrop,
    ] {
        assert!(!state.apply_action(action), "{action:?}");
    }
    assert!(!state.tick(1_000_000));

    assert_eq!(state.board(), &board_before);
    assert_eq!(*state.active(), piece_before);
    assert_eq!(state.score(), score_before);
    assert!(state.snapshot().visible_active().is_none());

    assert!(state.apply_action(GameAction::Restart));
    assert!(!state.game_over());
    assert!(state.board().cells().iter().all(Option::is_none));
}

#[test]
fn test_restart_resets_counters_and_continues_sequence() {
    let sequence = PieceSequence::new([PieceKind::I, PieceKind::O, PieceKind::T]).unwrap();
    let mut state = GameState::with_source(sequence);
    state.hard_drop();
    assert!(state.tick(5_000));
    assert_eq!(state.active().kind, PieceKind::O);

    state.restart();

    assert_eq!(state.episode_id(), 1);
    assert_eq!(state.score(), 0);
    assert_eq!(state.lines(), 0);
    assert_eq!(state.level(), 1);
    assert_eq!(state.pieces_locked(), 0);
    assert_eq!(state.last_drop_ms(), 0);
    assert_eq!(state.take_last_event(), None);
    assert!(state.board().cells().iter().all(Option::is_none));
    assert_eq!(state.active().kind, PieceKind::T);
    assert_eq!(state.active().y, 0);
}

#[test]
fn test_apply_action_dispatch() {
    let mut state = GameState::with_source(PieceSequence::repeat(PieceKind::T));
    let x = state.active().x;

    assert!(state.apply_action(GameAction::MoveRight));
    assert_eq!(state.active().x, x + 1);
    assert!(state.apply_action(GameAction::MoveLeft));
    assert_eq!(state.active().x, x);
    assert!(state.apply_action(GameAction::SoftDrop));
    assert_eq!(state.active().y, 1);
    assert!(state.apply_action(GameAction::Rotate));
    assert_eq!(state.active().shape.rows(), 3);
    assert!(state.apply_action(GameAction::HardDrop));
    assert_eq!(state.pieces_locked(), 1);
}

#[test]
fn test_snapshot_mirrors_state() {
    let mut state = GameState::with_source(PieceSequence::repeat(PieceKind::L));
    state.hard_drop();
    let snap = state.snapshot();

    assert_eq!(snap.pieces_locked, 1);
    assert_eq!(snap.board[19][3], PieceKind::L.code());
    let active = snap.visible_active().unwrap();
    assert_eq!(active.kind, PieceKind::L);
    assert_eq!((active.x, active.y), (3, 0));

    let json = serde_json::to_value(snap).unwrap();
    assert_eq!(json["level"], 1);
    assert_eq!(json["game_over"], false);
}
