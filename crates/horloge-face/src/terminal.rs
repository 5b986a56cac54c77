//! Ratatui braille-canvas backend for the face renderer.

use horloge_core::{HandAngles, TimeFormat};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        Widget,
        canvas::{Canvas, Context, Line as CanvasLine, Points},
    },
};

use crate::renderer::{FaceStyle, render_face};
use crate::surface::{LineCap, Point, Rotation, Surface, apply_stack};

/// [`Surface`] implementation painting onto a ratatui canvas context.
///
/// Logical coordinates run 0..side on both axes, y up, which matches the
/// canvas bounds the [`ClockFace`] widget sets. Filled shapes are
/// rasterized as braille dots and short line batches at the dot pitch of
/// the underlying cell grid.
pub struct TerminalSurface<'a, 'b> {
    ctx: &'a mut Context<'b>,
    transforms: Vec<Rotation>,
    /// Braille dot pitch in logical units.
    step: f64,
    /// Logical width of one terminal cell, for centering text.
    cell_width: f64,
}

impl<'a, 'b> TerminalSurface<'a, 'b> {
    /// Wrap a canvas context covering `side`-by-`side` logical units
    /// rendered into `cols` terminal columns.
    pub fn new(ctx: &'a mut Context<'b>, side: f64, cols: u16) -> Self {
        let cols = f64::from(cols.max(1));
        Self {
            ctx,
            transforms: Vec::new(),
            // Braille packs two dots per column.
            step: side / (cols * 2.0),
            cell_width: side / cols,
        }
    }

    fn map(&self, p: Point) -> Point {
        apply_stack(&self.transforms, p)
    }
}

impl Surface for TerminalSurface<'_, '_> {
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        let center = self.map(center);
        if radius <= 0.0 {
            return;
        }
        // Scanline fill at dot pitch.
        let mut coords = Vec::new();
        let rows = (2.0 * radius / self.step).ceil() as u32;
        for row in 0..=rows {
            let dy = -radius + f64::from(row) * self.step;
            let half = (radius * radius - dy * dy).max(0.0).sqrt();
            let dots = (2.0 * half / self.step).ceil() as u32;
            for dot in 0..=dots {
                let dx = -half + f64::from(dot) * self.step;
                coords.push((center.x + dx, center.y + dy));
            }
        }
        self.ctx.draw(&Points {
            coords: &coords,
            color,
        });
    }

    fn fill_rect(&mut self, center: Point, width: f64, height: f64, color: Color) {
        // Slice along the short axis into parallel segments one dot
        // apart, mapping only the endpoints through the transform.
        let slices = (width / self.step).ceil().max(1.0) as u32;
        for slice in 0..=slices {
            let frac = f64::from(slice) / f64::from(slices);
            let x = center.x - width / 2.0 + frac * width;
            let from = self.map(Point::new(x, center.y - height / 2.0));
            let to = self.map(Point::new(x, center.y + height / 2.0));
            self.ctx.draw(&CanvasLine {
                x1: from.x,
                y1: from.y,
                x2: to.x,
                y2: to.y,
                color,
            });
        }
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, cap: LineCap, color: Color) {
        let length = (to.x - from.x).hypot(to.y - from.y);
        if length <= 0.0 {
            return;
        }
        let dir = ((to.x - from.x) / length, (to.y - from.y) / length);
        let normal = (-dir.1, dir.0);

        let (from, to) = match cap {
            // A square cap extends the stroke past the endpoints.
            LineCap::Square => (
                Point::new(from.x - dir.0 * width / 2.0, from.y - dir.1 * width / 2.0),
                Point::new(to.x + dir.0 * width / 2.0, to.y + dir.1 * width / 2.0),
            ),
            LineCap::Butt | LineCap::Round => (from, to),
        };

        let slices = (width / self.step).ceil().max(1.0) as u32;
        for slice in 0..=slices {
            let offset = -width / 2.0 + f64::from(slice) / f64::from(slices) * width;
            let a = self.map(Point::new(
                from.x + normal.0 * offset,
                from.y + normal.1 * offset,
            ));
            let b = self.map(Point::new(to.x + normal.0 * offset, to.y + normal.1 * offset));
            self.ctx.draw(&CanvasLine {
                x1: a.x,
                y1: a.y,
                x2: b.x,
                y2: b.y,
                color,
            });
        }

        if cap == LineCap::Round {
            self.fill_circle(to, width / 2.0, color);
        }
    }

    fn draw_text(&mut self, center: Point, text: &str, style: Style) {
        let center = self.map(center);
        // Context::print anchors at the left edge of the first cell.
        let x = center.x - text.chars().count() as f64 / 2.0 * self.cell_width;
        self.ctx
            .print(x, center.y, Line::styled(text.to_string(), style));
    }

    fn push_rotation(&mut self, pivot: Point, angle: f64) {
        self.transforms.push(Rotation::new(pivot, angle));
    }

    fn pop_transform(&mut self) {
        self.transforms.pop();
    }
}

/// Ratatui widget painting the analog clock face.
///
/// Picks the largest centered square inside the area, counting a terminal
/// cell as twice as tall as it is wide, and repaints the whole face from
/// this frame's angles.
#[derive(Debug, Clone, Copy)]
pub struct ClockFace {
    pub angles: HandAngles,
    pub format: TimeFormat,
    pub style: FaceStyle,
}

impl Widget for ClockFace {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Largest centered square, cell aspect corrected 2:1. An even
        // column count keeps the braille dot grid square too.
        let cols = area.width.min(area.height.saturating_mul(2)) & !1;
        let rows = cols / 2;
        if cols < 4 || rows < 2 {
            // Transient degenerate layout pass; paint nothing.
            return;
        }
        let face_area = Rect {
            x: area.x + (area.width - cols) / 2,
            y: area.y + (area.height - rows) / 2,
            width: cols,
            height: rows,
        };

        let side = f64::from(cols);
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, side])
            .y_bounds([0.0, side])
            .paint(move |ctx| {
                let mut surface = TerminalSurface::new(ctx, side, cols);
                // The region is square by construction, so the paint
                // cannot fail.
                let _ = render_face(
                    &mut surface,
                    side,
                    side,
                    self.angles,
                    self.format,
                    &self.style,
                );
            })
            .render(face_area, buf);
    }
}
