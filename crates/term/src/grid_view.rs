//! GridView: maps a core `Grid` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{CellLayout, Grid, Piece};
use crate::fb::{FrameBuffer, Style};
use crate::types::{GameStatus, Rgb, BORDER_COLOR, EMPTY_COLOR, SCORE_DIGITS};

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

/// Side panel contents for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelInfo {
    pub title: &'static str,
    pub score: u32,
    pub paused: bool,
    pub status: GameStatus,
    /// Next piece, drawn in the orientation it will spawn with.
    pub preview: Option<Piece>,
}

const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Renders a grid with a border, a side panel and overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GridView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GridView {
    /// Cell sides are clamped to at least one column/row.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    fn frame_size(&self, (gw, gh): (u16, u16)) -> (u16, u16) {
        (
            gw.saturating_mul(self.cell_w).saturating_add(2),
            gh.saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Top-left corner of the border.
    fn frame_origin(&self, grid_size: (u16, u16), viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size(grid_size);
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = viewport.height.saturating_sub(frame_h) / 2;
        (x, y)
    }

    /// Where cells of a `grid_size` grid land in terminal coordinates.
    ///
    /// Give this to [`Grid::set_layout`] to map mouse positions to cells.
    pub fn layout_for(&self, grid_size: (u16, u16), viewport: Viewport) -> CellLayout {
        let (x, y) = self.frame_origin(grid_size, viewport);
        CellLayout {
            cell_w: self.cell_w,
            cell_h: self.cell_h,
            gap: 0,
            origin: (x as i32 + 1, y as i32 + 1),
        }
    }

    /// Render `grid` and its panel into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(
        &self,
        grid: &Grid,
        panel: &PanelInfo,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::default().glyph(' '));

        let (frame_w, frame_h) = self.frame_size(grid.size());
        let (start_x, start_y) = self.frame_origin(grid.size(), viewport);

        self.draw_border(fb, start_x, start_y, frame_w, frame_h, Style::new(BORDER_COLOR, PANEL_BG));

        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let color = grid.get((x as i16, y as i16)).unwrap_or(EMPTY_COLOR);
                self.fill_cell_rect(fb, start_x, start_y, x, y, Style::new(color, color));
            }
        }

        self.draw_side_panel(fb, panel, viewport, start_x, start_y, frame_w);

        if panel.paused {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        } else if panel.status == GameStatus::GameOver {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, grid: &Grid, panel: &PanelInfo, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(grid, panel, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
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

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        style: Style,
    ) {
        let px = start_x
            .saturating_add(1)
            .saturating_add(cell_x.saturating_mul(self.cell_w));
        let py = start_y
            .saturating_add(1)
            .saturating_add(cell_y.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        panel: &PanelInfo,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        if viewport.width - panel_x < SCORE_DIGITS as u16 {
            return;
        }

        let label = Style::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = Style::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        fb.put_str(panel_x, y, panel.title, label);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, panel.score, SCORE_DIGITS, value);
        y = y.saturating_add(2);

        if let Some(piece) = panel.preview {
            fb.put_str(panel_x, y, "NEXT", label);
            y = y.saturating_add(1);
            let color = piece.kind.color();
            for (dx, dy) in piece.shape.cells() {
                let px = panel_x.saturating_add(dx as u16 * self.cell_w);
                let py = y.saturating_add(dy as u16);
                fb.fill_rect(px, py, self.cell_w, 1, ' ', Style::new(color, color));
            }
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = Style::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
