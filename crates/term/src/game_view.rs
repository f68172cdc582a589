//! GameView: draws a `GameSnapshot` into a framebuffer.
//!
//! Pure; no terminal I/O happens here, so every layout rule is unit-testable.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const WELL_BG: Rgb = Rgb::new(17, 24, 39);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Narrowest panel that still fits the labels and a 7-digit score.
const MIN_PANEL_W: u16 = 8;

pub const GAME_OVER_TEXT: &str = "GAME OVER";
pub const RESTART_HINT: &str = "Press R to restart";

/// Lays out the well, the side panel and the game-over overlay.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Terminal columns per board cell.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps cells roughly square in most fonts.
        Self { cell_w: 2 }
    }
}

/// Screen position of the bordered well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WellRect {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Outer size of the bordered well.
    pub fn well_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 + 2,
        )
    }

    /// Convenience wrapper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Draw into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).cell(' '));

        let (w, h) = self.well_size();
        let well = WellRect {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        fb.fill_rect(
            well.x + 1,
            well.y + 1,
            w - 2,
            h - 2,
            ' ',
            CellStyle::new(WELL_BG, WELL_BG),
        );
        draw_border(fb, well, CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG));

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                match PieceKind::from_code(code) {
                    Some(kind) => self.draw_block(fb, well, x as i16, y as i16, kind),
                    None => self.draw_empty(fb, well, x as u16, y as u16),
                }
            }
        }

        if let Some(active) = snap.visible_active() {
            for (x, y) in active.cells() {
                self.draw_block(fb, well, x, y, active.kind);
            }
        }

        draw_side_panel(fb, snap, viewport, well);

        if snap.game_over {
            draw_game_over(fb, well);
        }
    }

    /// Cells above the board (negative rows) and outside it are not drawn.
    fn draw_block(&self, fb: &mut FrameBuffer, well: WellRect, x: i16, y: i16, kind: PieceKind) {
        if !(0..BOARD_WIDTH as i16).contains(&x) || !(0..BOARD_HEIGHT as i16).contains(&y) {
            return;
        }
        let style = CellStyle::new(Rgb::from(kind.color()), WELL_BG).bold();
        self.fill_cell(fb, well, x as u16, y as u16, '█', style);
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, well: WellRect, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(75, 85, 99), WELL_BG).dim();
        let px = well.x + 1 + x * self.cell_w;
        fb.fill_rect(px, well.y + 1 + y, self.cell_w, 1, ' ', style);
        fb.put_char(px, well.y + 1 + y, '·', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        well: WellRect,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = well.x + 1 + x * self.cell_w;
        let py = well.y + 1 + y;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }
}

fn draw_border(fb: &mut FrameBuffer, r: WellRect, style: CellStyle) {
    let (right, bottom) = (r.x + r.w - 1, r.y + r.h - 1);

    fb.put_char(r.x, r.y, '┌', style);
    fb.put_char(right, r.y, '┐', style);
    fb.put_char(r.x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
    for x in r.x + 1..right {
        fb.put_char(x, r.y, '─', style);
        fb.put_char(x, bottom, '─', style);
    }
    for y in r.y + 1..bottom {
        fb.put_char(r.x, y, '│', style);
        fb.put_char(right, y, '│', style);
    }
}

fn draw_side_panel(fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, well: WellRect) {
    let panel_x = well.x.saturating_add(well.w).saturating_add(2);
    if viewport.width.saturating_sub(panel_x) < MIN_PANEL_W {
        return;
    }

    let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
    let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

    let mut y = well.y;
    for (name, n) in [
        ("SCORE", snap.score),
        ("LINES", snap.lines),
        ("LEVEL", snap.level),
    ] {
        fb.put_str(panel_x, y, name, label);
        fb.put_u32(panel_x, y.saturating_add(1), n, value);
        y = y.saturating_add(3);
    }
}

fn draw_game_over(fb: &mut FrameBuffer, well: WellRect) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    let mid_y = well.y + well.h / 2 - 1;

    for (dy, text) in [GAME_OVER_TEXT, RESTART_HINT].into_iter().enumerate() {
        let text_w = text.chars().count() as u16;
        let x = well.x + well.w.saturating_sub(text_w) / 2;
        fb.put_str(x, mid_y + dy as u16, text, style);
    }
}
