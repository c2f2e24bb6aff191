//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{get_shape, get_spawn_shape, GameSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, PieceKind, GRID_HEIGHT, GRID_WIDTH};

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Key hints shown under the stats.
const CONTROLS: [&str; 6] = [
    "←→ move",
    "↑  rotate",
    "↓  soft drop",
    "SPC hard drop",
    "P  pause",
    "Q  quit",
];

/// Terminal viewport dimensions.
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Screen position of the playfield frame.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the Tetris game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_best(snap, None, viewport, fb);
    }

    /// Same as [`GameView::render_into`], with the persisted best score shown
    /// in the sidebar and the start menu.
    pub fn render_into_with_best(
        &self,
        snap: &GameSnapshot,
        best: Option<u32>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_px_w = (GRID_WIDTH as u16) * self.cell_w;
        let board_px_h = (GRID_HEIGHT as u16) * self.cell_h;
        let frame = Frame {
            x: viewport.width.saturating_sub(board_px_w + 2 + self.sidebar_width()) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(board_px_h + 2) / 2,
                AnchorY::Top => 0,
            },
            w: board_px_w + 2,
            h: board_px_h + 2,
        };

        let bg = CellStyle::new(Rgb::new(80, 80, 90), PLAYFIELD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        // Background for play area.
        fb.fill_rect(frame.x + 1, frame.y + 1, board_px_w, board_px_h, ' ', bg);

        // Border.
        self.draw_border(fb, frame, border);

        // Locked board cells, with rows awaiting removal flashing.
        let flash_on = flash_phase(snap);
        for y in 0..GRID_HEIGHT as u16 {
            let clearing = snap.clearing[y as usize];
            for x in 0..GRID_WIDTH as u16 {
                if clearing {
                    if flash_on {
                        let style = CellStyle::new(Rgb::new(255, 255, 255), PLAYFIELD_BG).bold();
                        self.fill_cell_rect(fb, frame, x, y, '█', style);
                    } else {
                        self.draw_empty_cell(fb, frame, x, y);
                    }
                    continue;
                }
                match piece_from_cell(snap.board[y as usize][x as usize]) {
                    Some(kind) => self.draw_board_cell(fb, frame, x, y, kind),
                    None => self.draw_empty_cell(fb, frame, x, y),
                }
            }
        }

        // Ghost piece.
        if let (Some(active), Some(ghost_y)) = (snap.active, snap.ghost_y) {
            if ghost_y != active.y {
                let ghost_style = CellStyle::new(Rgb::new(140, 140, 140), PLAYFIELD_BG).dim();
                for &(dx, dy) in get_shape(active.kind, active.rotation).cells.iter() {
                    if let Some((x, y)) = on_board(active.x + dx, ghost_y + dy) {
                        self.fill_cell_rect(fb, frame, x, y, '░', ghost_style);
                    }
                }
            }
        }

        // Active piece.
        if let Some(active) = snap.active {
            for &(dx, dy) in get_shape(active.kind, active.rotation).cells.iter() {
                if let Some((x, y)) = on_board(active.x + dx, active.y + dy) {
                    self.draw_board_cell(fb, frame, x, y, active.kind);
                }
            }
        }

        self.draw_side_panel(fb, snap, best, viewport, frame);

        match snap.phase {
            Phase::StartMenu => {
                self.draw_overlay(fb, frame, "TETRIS", "Press ENTER to start");
                if let Some(best) = best {
                    self.draw_overlay_value(fb, frame, 2, "BEST ", best);
                }
            }
            Phase::Paused => self.draw_overlay(fb, frame, "PAUSED", "Press P to resume"),
            Phase::GameOver => {
                self.draw_overlay(fb, frame, "GAME OVER", "Press ENTER");
                self.draw_overlay_value(fb, frame, 2, "SCORE ", snap.score);
            }
            Phase::Active => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        self.render_with_best(snap, None, viewport)
    }

    pub fn render_with_best(
        &self,
        snap: &GameSnapshot,
        best: Option<u32>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_best(snap, best, viewport, &mut fb);
        fb
    }

    fn sidebar_width(&self) -> u16 {
        2 + (4 * self.cell_w).max(14)
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), PLAYFIELD_BG).dim();
        self.fill_cell_rect(fb, frame, x, y, '·', style);
    }

    fn draw_board_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, kind: PieceKind) {
        let style = CellStyle::new(piece_color(kind), PLAYFIELD_BG).bold();
        self.fill_cell_rect(fb, frame, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + cell_x * self.cell_w;
        let py = frame.y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        best: Option<u32>,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = frame.y;
        fb.put_str(panel_x, y, "NEXT", label);
        fb.put_str(panel_x + 5, y, snap.next.as_str(), value.dim());
        y = y.saturating_add(1);
        let preview = get_spawn_shape(snap.next);
        let style = CellStyle::new(piece_color(snap.next), SCREEN_BG).bold();
        for &(dx, dy) in preview.cells.iter() {
            fb.fill_rect(
                panel_x + dx as u16 * self.cell_w,
                y + dy as u16 * self.cell_h,
                self.cell_w,
                self.cell_h,
                '█',
                style,
            );
        }
        y = y.saturating_add(2 * self.cell_h + 1);

        let stats = [
            ("SCORE", Some(snap.score)),
            ("LEVEL", Some(snap.level)),
            ("LINES", Some(snap.lines)),
            ("BEST", best),
        ];
        for (name, stat) in stats {
            fb.put_str(panel_x, y, name, label);
            y = y.saturating_add(1);
            match stat {
                Some(v) => {
                    fb.put_u32(panel_x, y, v, value);
                }
                None => fb.put_str(panel_x, y, "-", value),
            }
            y = y.saturating_add(2);
        }

        let hint = value.dim();
        for line in CONTROLS {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    /// Centered title and hint over a blanked band in the middle of the board.
    fn draw_overlay(&self, fb: &mut FrameBuffer, frame: Frame, title: &str, hint: &str) {
        let inner_x = frame.x + 1;
        let inner_w = frame.w.saturating_sub(2);
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let band = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG);
        fb.fill_rect(inner_x, mid_y.saturating_sub(2), inner_w, 5, ' ', band);

        fb.put_str_centered(inner_x, mid_y.saturating_sub(1), inner_w, title, band.bold());
        fb.put_str_centered(
            inner_x,
            mid_y.saturating_add(1),
            inner_w,
            hint,
            CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG),
        );
    }

    fn draw_overlay_value(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        row_offset: u16,
        label: &str,
        value: u32,
    ) {
        let inner_x = frame.x + 1;
        let inner_w = frame.w.saturating_sub(2);
        let y = frame.y.saturating_add(frame.h / 2).saturating_add(row_offset);
        let style = CellStyle::new(Rgb::new(240, 220, 80), SCREEN_BG).bold();

        let text_w = label.chars().count() as u16 + digit_count(value);
        let x = inner_x.saturating_add(inner_w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, label, style);
        fb.put_u32(x + label.chars().count() as u16, y, value, style);
    }
}

/// Pending rows blink on and off ten times over the clear delay.
fn flash_phase(snap: &GameSnapshot) -> bool {
    let delay = snap.clear_delay_ms.max(1) as u64;
    (snap.clear_elapsed_ms as u64 * 10 / delay) % 2 == 0
}

fn on_board(x: i8, y: i8) -> Option<(u16, u16)> {
    if x >= 0 && x < GRID_WIDTH as i8 && y >= 0 && y < GRID_HEIGHT as i8 {
        Some((x as u16, y as u16))
    } else {
        None
    }
}

fn digit_count(mut v: u32) -> u16 {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
    }
}

/// Snapshot grid values are colour index + 1.
fn piece_from_cell(v: u8) -> Option<PieceKind> {
    match v {
        0 => None,
        v => PieceKind::from_index(v as usize - 1),
    }
}
