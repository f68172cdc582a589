//! Pieces module - shape catalog, rotation and collision
//!
//! Shapes are small occupancy matrices (at most 4x4). Rotation is a plain
//! transpose + column reversal, and a failed rotation gets a fixed three-step
//! wall-kick search: in place, one column right, one column left.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Largest side of any shape matrix.
pub const MAX_SHAPE_SIDE: usize = 4;

/// Column offsets tried, in order, after a rotation.
pub const KICK_OFFSETS: [i8; 3] = [0, 1, -1];

/// Absolute board coordinates of the filled cells of a piece.
pub type PieceCells = ArrayVec<(i16, i16), { MAX_SHAPE_SIDE * MAX_SHAPE_SIDE }>;

/// Occupancy matrix of a piece, `rows` x `cols` inside a fixed 4x4 store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

impl Shape {
    const fn from_mask(rows: u8, cols: u8, mask: [[u8; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE]) -> Self {
        let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        let mut y = 0;
        while y < MAX_SHAPE_SIDE {
            let mut x = 0;
            while x < MAX_SHAPE_SIDE {
                cells[y][x] = mask[y][x] != 0;
                x += 1;
            }
            y += 1;
        }
        Self { rows, cols, cells }
    }

    /// Build a shape from rows of 0/1 values.
    ///
    /// Returns `None` for empty, ragged or oversized input.
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height > MAX_SHAPE_SIDE || width == 0 || width > MAX_SHAPE_SIDE {
            return None;
        }
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }
        Some(Self {
            rows: height as u8,
            cols: width as u8,
            cells,
        })
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the matrix cell at column `x`, row `y` is set.
    ///
    /// Cells outside the matrix are never set.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.cols as usize && y < self.rows as usize && self.cells[y][x]
    }

    /// Offsets `(dx, dy)` of every set cell, row by row.
    pub fn filled(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (0..self.rows).flat_map(move |y| {
            (0..self.cols)
                .filter(move |&x| self.cells[y as usize][x as usize])
                .map(move |x| (x, y))
        })
    }

    /// Rows of the matrix as 0/1 vectors (debugging and tests).
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows as usize)
            .map(|y| {
                (0..self.cols as usize)
                    .map(|x| u8::from(self.cells[y][x]))
                    .collect()
            })
            .collect()
    }
}

const SHAPE_I: Shape = Shape::from_mask(1, 4, [[1, 1, 1, 1], [0; 4], [0; 4], [0; 4]]);
const SHAPE_J: Shape = Shape::from_mask(2, 3, [[1, 0, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);
const SHAPE_L: Shape = Shape::from_mask(2, 3, [[0, 0, 1, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);
const SHAPE_O: Shape = Shape::from_mask(2, 2, [[1, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);
const SHAPE_S: Shape = Shape::from_mask(2, 3, [[0, 1, 1, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);
const SHAPE_T: Shape = Shape::from_mask(2, 3, [[0, 1, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);
const SHAPE_Z: Shape = Shape::from_mask(2, 3, [[1, 1, 0, 0], [0, 1, 1, 0], [0; 4], [0; 4]]);

/// Spawn orientation of a piece kind.
///
/// `Shape` is `Copy`, so callers always get their own matrix.
pub fn canonical_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => SHAPE_I,
        PieceKind::J => SHAPE_J,
        PieceKind::L => SHAPE_L,
        PieceKind::O => SHAPE_O,
        PieceKind::S => SHAPE_S,
        PieceKind::T => SHAPE_T,
        PieceKind::Z => SHAPE_Z,
    }
}

/// Rotate a shape 90° clockwise.
///
/// The result has swapped dimensions: cell `(x, y)` moves to `(rows - 1 - y, x)`.
pub fn rotate(shape: &Shape) -> Shape {
    let rows = shape.rows as usize;
    let cols = shape.cols as usize;
    let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
    for y in 0..rows {
        for x in 0..cols {
            cells[x][rows - 1 - y] = shape.cells[y][x];
        }
    }
    Shape {
        rows: shape.cols,
        cols: shape.rows,
        cells,
    }
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece in spawn orientation, centred over the board on row 0.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = canonical_shape(kind);
        Self {
            kind,
            shape,
            x: ((BOARD_WIDTH - shape.cols) / 2) as i8,
            y: 0,
        }
    }

    /// Same piece moved by `(dx, dy)`.
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    /// Board coordinates of every filled cell.
    pub fn cells(&self) -> PieceCells {
        self.shape
            .filled()
            .map(|(dx, dy)| (self.x as i16 + dx as i16, self.y as i16 + dy as i16))
            .collect()
    }
}

/// Check whether a piece overlaps a wall, the floor, or a locked cell.
///
/// Cells above the board (negative rows) are only checked against the side
/// walls, since the board has nothing stored there.
pub fn collides(board: &Board, piece: &Piece) -> bool {
    piece.cells().iter().any(|&(x, y)| {
        if x < 0 || x >= BOARD_WIDTH as i16 || y >= BOARD_HEIGHT as i16 {
            return true;
        }
        y >= 0 && board.is_occupied(x, y)
    })
}

/// Rotate a piece clockwise, trying each of [`KICK_OFFSETS`].
///
/// Returns the rotated piece at the first offset that fits, or `None` when
/// every offset collides (the caller keeps the original piece).
pub fn try_rotate(board: &Board, piece: &Piece) -> Option<Piece> {
    let rotated = Piece {
        shape: rotate(&piece.shape),
        ..*piece
    };

    KICK_OFFSETS
        .iter()
        .map(|&dx| rotated.shifted(dx, 0))
        .find(|candidate| !collides(board, candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_matches_reference_rows() {
        assert_eq!(canonical_shape(PieceKind::I).to_rows(), vec![vec![1, 1, 1, 1]]);
        assert_eq!(
            canonical_shape(PieceKind::J).to_rows(),
            vec![vec![1, 0, 0], vec![1, 1, 1]]
        );
        assert_eq!(
            canonical_shape(PieceKind::L).to_rows(),
            vec![vec![0, 0, 1], vec![1, 1, 1]]
        );
        assert_eq!(canonical_shape(PieceKind::O).to_rows(), vec![vec![1, 1], vec![1, 1]]);
        assert_eq!(
            canonical_shape(PieceKind::S).to_rows(),
            vec![vec![0, 1, 1], vec![1, 1, 0]]
        );
        assert_eq!(
            canonical_shape(PieceKind::T).to_rows(),
            vec![vec![0, 1, 0], vec![1, 1, 1]]
        );
        assert_eq!(
            canonical_shape(PieceKind::Z).to_rows(),
            vec![vec![1, 1, 0], vec![0, 1, 1]]
        );
    }

    #[test]
    fn every_piece_has_four_cells_and_a_filled_first_row() {
        for kind in PieceKind::ALL {
            let shape = canonical_shape(kind);
            assert_eq!(shape.filled().count(), 4, "{:?}", kind);
            assert!((0..shape.cols() as usize).any(|x| shape.is_filled(x, 0)));
        }
    }

    #[test]
    fn from_rows_rejects_bad_input() {
        assert!(Shape::from_rows(&[]).is_none());
        assert!(Shape::from_rows(&[&[]]).is_none());
        assert!(Shape::from_rows(&[&[1, 0], &[1]]).is_none());
        assert!(Shape::from_rows(&[&[1, 1, 1, 1, 1]]).is_none());
        assert_eq!(
            Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
            Some(canonical_shape(PieceKind::T))
        );
    }

    #[test]
    fn rotate_t_clockwise() {
        let rotated = rotate(&canonical_shape(PieceKind::T));
        assert_eq!(rotated.rows(), 3);
        assert_eq!(rotated.cols(), 2);
        assert_eq!(rotated.to_rows(), vec![vec![1, 0], vec![1, 1], vec![1, 0]]);
    }

    #[test]
    fn rotate_does_not_touch_input() {
        let shape = canonical_shape(PieceKind::L);
        let _ = rotate(&shape);
        assert_eq!(shape, canonical_shape(PieceKind::L));
    }

    #[test]
    fn spawn_is_centred() {
        assert_eq!(Piece::spawn(PieceKind::I).x, 3);
        assert_eq!(Piece::spawn(PieceKind::O).x, 4);
        assert_eq!(Piece::spawn(PieceKind::T).x, 3);
        for kind in PieceKind::ALL {
            assert_eq!(Piece::spawn(kind).y, 0);
        }
    }

    #[test]
    fn cells_are_absolute() {
        let piece = Piece::spawn(PieceKind::O).shifted(-2, 5);
        let cells = piece.cells();
        assert_eq!(cells.as_slice(), &[(2, 5), (3, 5), (2, 6), (3, 6)]);
    }

    #[test]
    fn collides_ignores_board_above_row_zero() {
        let board = Board::new();
        let piece = Piece::spawn(PieceKind::T).shifted(0, -1);
        assert!(!collides(&board, &piece));

        // Still walled in horizontally up there.
        let piece = Piece::spawn(PieceKind::T).shifted(-10, -1);
        assert!(collides(&board, &piece));
    }

    #[test]
    fn vertical_i_against_right_wall_kicks_left() {
        let board = Board::new();
        // Vertical I in the last column.
        let vertical = Piece {
            kind: PieceKind::I,
            shape: rotate(&canonical_shape(PieceKind::I)),
            x: 9,
            y: 5,
        };
        assert!(!collides(&board, &vertical));

        // Rotating back to horizontal overflows the wall at +0 and +1, and -1 is
        // still 2 cells too far right, so the rotation is refused.
        assert!(try_rotate(&board, &vertical).is_none());

        // One column further in, the -1 kick is enough.
        let inner = vertical.shifted(-2, 0);
        let rotated = try_rotate(&board, &inner).expect("kick should fit");
        assert_eq!(rotated.x, inner.x - 1);
        assert_eq!(rotated.shape.rows(), 1);
    }

    #[test]
    fn kick_prefers_plus_one_over_minus_one() {
        let mut board = Board::new();
        // T at x=3 rotated is 3 rows x 2 cols occupying (3,5),(3,6),(4,6),(3,7).
        // Block (3,6) so in-place fails; +1 column is free.
        board.set(3, 6, Some(PieceKind::O));
        let piece = Piece::spawn(PieceKind::T).shifted(0, 5);
        let rotated = try_rotate(&board, &piece).expect("kick should fit");
        assert_eq!(rotated.x, piece.x + 1);
    }
}
