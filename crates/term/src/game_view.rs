//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: one HUD line, the bordered playfield, one hint
//! line. Inside the field each lane is one terminal row with the furthest
//! lane at the top; one grid column is `cell_w` terminal columns wide.

use crate::core::{GameSnapshot, LaneSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Terrain, GRID_UNIT, HOP_AMPLITUDE, LATERAL_BOUND};

/// Visual length of a car in world units.
const CAR_LENGTH: f32 = 50.0;
/// Visual length of a log in world units.
const LOG_LENGTH: f32 = 70.0;

const CAR_COLORS: [Rgb; 4] = [
    Rgb::new(230, 60, 60),
    Rgb::new(240, 220, 70),
    Rgb::new(235, 235, 235),
    Rgb::new(90, 220, 90),
];

const GRASS: CellStyle = CellStyle::new(Rgb::new(60, 140, 40), Rgb::new(20, 70, 20));
const ROAD: CellStyle = CellStyle::new(Rgb::new(120, 120, 120), Rgb::new(45, 45, 50));
const RIVER: CellStyle = CellStyle::new(Rgb::new(90, 150, 255), Rgb::new(10, 50, 140));
const LOG: CellStyle = CellStyle::new(Rgb::new(200, 150, 90), Rgb::new(110, 65, 25));
const PLAYER: Rgb = Rgb::new(255, 230, 80);
const TEXT: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0));
const BORDER: CellStyle = CellStyle::new(Rgb::new(170, 170, 170), Rgb::new(0, 0, 0));

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

/// Lightweight terminal renderer for the crossing game.
pub struct GameView {
    /// Terminal columns per grid column.
    cell_w: u16,
    /// Grid columns shown on each side of the center column.
    half_cols: u16,
    /// Lanes kept visible behind the player.
    rows_behind: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Seven columns each side keeps the out-of-bounds edge (6.25) on screen.
        Self {
            cell_w: 3,
            half_cols: 7,
            rows_behind: 3,
        }
    }
}

/// Screen placement of the playfield for one frame.
#[derive(Debug, Clone, Copy)]
struct FieldRect {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
    /// Lane index drawn on the bottom field row.
    bottom_lane: u32,
}

impl FieldRect {
    /// Screen row of a lane, if it is inside the field.
    fn lane_y(&self, index: u32) -> Option<u16> {
        let above = index.checked_sub(self.bottom_lane)?;
        if above >= self.h as u32 {
            return None;
        }
        Some(self.y + self.h - 1 - above as u16)
    }
}

impl GameView {
    /// Inner field width in terminal columns.
    pub fn field_width(&self) -> u16 {
        (2 * self.half_cols + 1) * self.cell_w
    }

    /// Field column of a world x (may be off the field).
    fn column(&self, x: f32) -> i32 {
        ((x / GRID_UNIT + self.half_cols as f32 + 0.5) * self.cell_w as f32).floor() as i32
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(TEXT.cell(' '));

        self.draw_hud(fb, snap);

        let frame_w = self.field_width() + 2;
        // HUD line, two border rows, hint line.
        let Some(inner_h) = viewport.height.checked_sub(4).filter(|h| *h > 0) else {
            return;
        };
        if viewport.width < frame_w {
            fb.put_str(0, 1, "terminal too narrow", TEXT);
            return;
        }

        let behind = self.rows_behind.min(inner_h.saturating_sub(1));
        let field = FieldRect {
            x: (viewport.width - frame_w) / 2 + 1,
            y: 2,
            w: self.field_width(),
            h: inner_h,
            bottom_lane: snap.player.physical_row.saturating_sub(behind as u32),
        };

        self.draw_border(fb, field.x - 1, field.y - 1, frame_w, inner_h + 2);
        for lane in &snap.lanes {
            if let Some(y) = field.lane_y(lane.index) {
                self.draw_lane(fb, &field, y, lane);
            }
        }
        self.draw_player(fb, &field, snap);

        fb.put_str(
            field.x - 1,
            field.y + inner_h + 1,
            "arrows/wasd hop  r restart  q quit",
            TEXT,
        );

        if snap.game_over {
            self.draw_game_over(fb, &field, snap);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, snap: &GameSnapshot) {
        let label = TEXT.bold();
        let mut x = 1;
        fb.put_str(x, 0, "SCORE ", label);
        x += 6;
        x += fb.put_u32(x, 0, snap.score, TEXT) + 3;
        fb.put_str(x, 0, "BEST ", label);
        x += 5;
        x += fb.put_u32(x, 0, snap.best_score.max(snap.score), TEXT) + 3;
        fb.put_str(x, 0, "TIME ", label);
        x += 5;
        x += fb.put_u32(x, 0, (snap.elapsed_ms / 1000) as u32, TEXT);
        fb.put_char(x, 0, 's', TEXT);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    fn draw_lane(&self, fb: &mut FrameBuffer, field: &FieldRect, y: u16, lane: &LaneSnapshot) {
        let (ground, ch) = match lane.terrain {
            Terrain::Safe => (GRASS, '"'),
            Terrain::Road => (ROAD, '-'),
            Terrain::River => (RIVER, '~'),
        };
        // Columns past the lateral bound are shaded.
        let playable = self.column(-(LATERAL_BOUND as f32 + 0.5) * GRID_UNIT)
            ..self.column((LATERAL_BOUND as f32 + 0.5) * GRID_UNIT);
        for cx in 0..field.w {
            let style = if playable.contains(&(cx as i32)) {
                ground
            } else {
                shaded(ground)
            };
            let mark = if (cx as u32 + lane.index) % 4 == 0 { ch } else { ' ' };
            fb.put_char(field.x + cx, y, mark, style);
        }

        let (length, style, glyph) = match lane.terrain {
            Terrain::Safe => return,
            Terrain::Road => {
                let color = CAR_COLORS[lane.index as usize % CAR_COLORS.len()];
                (CAR_LENGTH, ROAD.with_fg(color).bold(), '█')
            }
            Terrain::River => (LOG_LENGTH, LOG, '='),
        };
        for &x in &lane.obstacles {
            let from = self.column(x - length / 2.0).max(0);
            let to = self.column(x + length / 2.0).min(field.w as i32 - 1);
            for cx in from..=to {
                fb.put_char(field.x + cx as u16, y, glyph, style);
            }
            // Nose points along travel direction.
            let nose = if lane.direction > 0 { to } else { from };
            if lane.terrain == Terrain::Road && (0..field.w as i32).contains(&nose) && from <= to {
                let arrow = if lane.direction > 0 { '▶' } else { '◀' };
                fb.put_char(field.x + nose as u16, y, arrow, style);
            }
        }
    }

    fn draw_player(&self, fb: &mut FrameBuffer, field: &FieldRect, snap: &GameSnapshot) {
        let Some(y) = field.lane_y(snap.player.physical_row) else {
            return;
        };
        let cx = self.column(snap.player.world.x);
        if !(0..field.w as i32).contains(&cx) {
            return;
        }
        let x = field.x + cx as u16;
        let under = fb.get(x, y).map(|c| c.style.bg).unwrap_or_default();
        let glyph = if snap.game_over {
            'X'
        } else if snap.player.hop_height > HOP_AMPLITUDE / 2.0 {
            '^'
        } else {
            '@'
        };
        fb.put_char(x, y, glyph, CellStyle::new(PLAYER, under).bold());
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, field: &FieldRect, snap: &GameSnapshot) {
        let cause = snap.death_cause.map(|c| c.describe()).unwrap_or("");
        let lines = ["GAME OVER", cause, "r to restart, q to quit"];
        let mid = field.y + field.h / 2;
        let top = mid.saturating_sub(1);
        let style = TEXT.bold();
        fb.fill_rect(field.x, top.saturating_sub(1), field.w, lines.len() as u16 + 2, ' ', TEXT);
        for (i, text) in lines.iter().enumerate() {
            let w = text.chars().count() as u16;
            let x = field.x + field.w.saturating_sub(w) / 2;
            fb.put_str(x, top + i as u16, text, style);
        }
    }
}

fn shaded(style: CellStyle) -> CellStyle {
    let dim = |c: Rgb| Rgb::new(c.r / 2, c.g / 2, c.b / 2);
    CellStyle::new(dim(style.fg), dim(style.bg))
}
