//! Hard-edged shape algorithms
//!
//! Lines are Bresenham with dedicated fast paths for horizontal, vertical
//! and 45-degree runs. Circles and rounded corners come from the shared
//! midpoint stepping state; filled interiors are horizontal span fills.

use crate::fixed::{circle_spans, CircleStep};
use crate::painter::{clamp_corner_radius, Fill, Painter};
use crate::state::ArrowDirection;
use crate::surface::Surface;

impl Painter {
    // ========================================================================
    // Line
    // ========================================================================

    pub(crate) fn line(&self, surface: &mut Surface<'_>, x0: i32, y0: i32, x1: i32, y1: i32) {
        let width = self.state.stroke_width();
        let px = self.state.foreground();

        // Degenerate line writes exactly its one pixel
        if x0 == x1 && y0 == y1 {
            surface.put(x0, y0, px);
            return;
        }

        if width <= 1 {
            self.line_single(surface, x0, y0, x1, y1, px);
            return;
        }

        // Stroke > 1: ribbon of parallel runs centered on the ideal path
        if y0 == y1 {
            let half = (width - 1) / 2;
            for i in 0..width {
                surface.fill_span(x0, x1, y0 - half + i, px);
            }
            return;
        }
        if x0 == x1 {
            let half = (width - 1) / 2;
            for i in 0..width {
                surface.fill_vspan(x0 - half + i, y0, y1, px);
            }
            return;
        }

        // Perpendicular unit vector for the general slope
        let dx = (x1 - x0) as f32;
        let dy = (y1 - y0) as f32;
        let len = (dx * dx + dy * dy).sqrt();
        let nx = -dy / len;
        let ny = dx / len;
        let half = (width - 1) as f32 / 2.0;
        for i in 0..width {
            let offset = i as f32 - half;
            let ox = (nx * offset).round() as i32;
            let oy = (ny * offset).round() as i32;
            self.line_single(surface, x0 + ox, y0 + oy, x1 + ox, y1 + oy, px);
        }
    }

    /// One-pixel line with the classic fast paths
    pub(crate) fn line_single(
        &self,
        surface: &mut Surface<'_>,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        px: u32,
    ) {
        if y0 == y1 {
            surface.fill_span(x0, x1, y0, px);
            return;
        }
        if x0 == x1 {
            surface.fill_vspan(x0, y0, y1, px);
            return;
        }

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };

        if dx == dy {
            // 45-degree diagonal: fixed stepping, no error term needed
            let mut x = x0;
            let mut y = y0;
            for _ in 0..=dx {
                surface.put(x, y, px);
                x += sx;
                y += sy;
            }
            return;
        }

        // General slope: integer error accumulator along the major axis
        let mut err = dx - dy;
        let mut x = x0;
        let mut y = y0;
        loop {
            surface.put(x, y, px);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    // ========================================================================
    // Circle
    // ========================================================================

    pub(crate) fn circle(&self, surface: &mut Surface<'_>, cx: i32, cy: i32, radius: i32) {
        if radius == 0 {
            // Single pixel: the outline wins when stroked, otherwise the
            // fill color lands, same layering as the full-size shape
            if self.state.stroke_width() > 0 {
                surface.put(cx, cy, self.state.foreground());
            } else if let Some(fill) = self.resolve_fill() {
                let px = match fill {
                    Fill::Solid(c) => c,
                    Fill::Gradient => self.state.gradient_at(0, 1),
                };
                surface.put(cx, cy, px);
            }
            return;
        }

        if let Some(fill) = self.resolve_fill() {
            let half = circle_spans(radius);
            let extent = 2 * radius + 1;
            for (dy, &w) in half.iter().enumerate() {
                let dy = dy as i32;
                self.fill_row(surface, cx - w, cx + w, cy + dy, radius + dy, extent, fill);
                if dy != 0 {
                    self.fill_row(surface, cx - w, cx + w, cy - dy, radius - dy, extent, fill);
                }
            }
        }

        // Outline: one midpoint sweep per concentric radius
        let px = self.state.foreground();
        for i in 0..self.state.stroke_width().min(radius) {
            circle_ring(surface, cx, cy, radius - i, px);
        }
    }

    // ========================================================================
    // Rounded rectangle
    // ========================================================================

    pub(crate) fn rounded_rect(
        &self,
        surface: &mut Surface<'_>,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        radius: i32,
    ) {
        if let Some(fill) = self.resolve_fill() {
            let half = circle_spans(radius);
            for j in 0..h {
                let inset = row_inset(j, h, radius, &half);
                self.fill_row(surface, x + inset, x + w - 1 - inset, y + j, j, h, fill);
            }
        }

        let px = self.state.foreground();
        for i in 0..self.state.stroke_width() {
            let (rx, ry, rw, rh) = (x + i, y + i, w - 2 * i, h - 2 * i);
            if rw <= 0 || rh <= 0 {
                break;
            }
            rect_ring(surface, rx, ry, rw, rh, clamp_corner_radius(radius - i, rw, rh), px);
        }
    }

    // ========================================================================
    // Tab
    // ========================================================================

    pub(crate) fn tab(
        &self,
        surface: &mut Surface<'_>,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        radius: i32,
        extend_left: i32,
        extend_right: i32,
    ) {
        let ext_l = extend_left.max(0);
        let ext_r = extend_right.max(0);

        if let Some(fill) = self.resolve_fill() {
            let half = circle_spans(radius);
            for j in 0..h {
                let inset = if j < radius {
                    radius - half[(radius - j) as usize]
                } else {
                    0
                };
                // The base row picks up the merge extensions
                let (l, r) = if j == h - 1 { (ext_l, ext_r) } else { (0, 0) };
                self.fill_row(surface, x + inset - l, x + w - 1 - inset + r, y + j, j, h, fill);
            }
        }

        let px = self.state.foreground();
        for i in 0..self.state.stroke_width() {
            let (rx, ry, rw) = (x + i, y + i, w - 2 * i);
            if rw <= 0 || y + h - 1 - i <= ry {
                break;
            }
            let r = clamp_corner_radius(radius - i, rw, h - i);
            tab_ring(surface, rx, ry, rw, h - i, r, px);
        }
        // Base line with extensions sits on the outermost ring only
        if self.state.stroke_width() > 0 && (ext_l > 0 || ext_r > 0) {
            surface.fill_span(x - ext_l, x + w - 1 + ext_r, y + h - 1, px);
        }
    }

    // ========================================================================
    // Arrow triangle
    // ========================================================================

    /// Staircase rasterizer for cardinal isosceles right triangles: the
    /// filled span grows one pixel every two scanlines from the apex at
    /// (x, y).
    pub(crate) fn arrow(
        &self,
        surface: &mut Surface<'_>,
        x: i32,
        y: i32,
        size: i32,
        dir: ArrowDirection,
    ) {
        let fill = self.resolve_fill();
        let outline = self.state.stroke_width() > 0;
        let px = self.state.foreground();

        for i in 0..size {
            let half = i / 2;
            match dir {
                ArrowDirection::Up | ArrowDirection::Down => {
                    let row = if dir == ArrowDirection::Up { y + i } else { y - i };
                    if let Some(f) = fill {
                        self.fill_row(surface, x - half, x + half, row, i, size, f);
                    }
                    // Slanted edges keep the foreground border over the fill
                    if outline {
                        surface.put(x - half, row, px);
                        surface.put(x + half, row, px);
                    }
                },
                ArrowDirection::Left | ArrowDirection::Right => {
                    let col = if dir == ArrowDirection::Left { x + i } else { x - i };
                    if let Some(f) = fill {
                        match f {
                            Fill::Solid(c) => surface.fill_vspan(col, y - half, y + half, c),
                            Fill::Gradient => surface.fill_vspan(
                                col,
                                y - half,
                                y + half,
                                self.state.gradient_at(i, size),
                            ),
                        }
                    }
                    if outline {
                        surface.put(col, y - half, px);
                        surface.put(col, y + half, px);
                    }
                },
            }
        }

        // The border closes across the base
        if outline {
            let half = (size - 1) / 2;
            match dir {
                ArrowDirection::Up => surface.fill_span(x - half, x + half, y + size - 1, px),
                ArrowDirection::Down => surface.fill_span(x - half, x + half, y - size + 1, px),
                ArrowDirection::Left => surface.fill_vspan(x + size - 1, y - half, y + half, px),
                ArrowDirection::Right => surface.fill_vspan(x - size + 1, y - half, y + half, px),
            }
        }
    }
}

// ============================================================================
// Shared ring helpers
// ============================================================================

/// One-pixel midpoint circle outline, eight symmetric points per step
pub(crate) fn circle_ring(surface: &mut Surface<'_>, cx: i32, cy: i32, r: i32, px: u32) {
    if r <= 0 {
        surface.put(cx, cy, px);
        return;
    }
    let mut step = CircleStep::new(r);
    while !step.done() {
        let (dx, dy) = (step.x, step.y);
        surface.put(cx + dx, cy + dy, px);
        surface.put(cx + dy, cy + dx, px);
        surface.put(cx - dy, cy + dx, px);
        surface.put(cx - dx, cy + dy, px);
        surface.put(cx - dx, cy - dy, px);
        surface.put(cx - dy, cy - dx, px);
        surface.put(cx + dy, cy - dx, px);
        surface.put(cx + dx, cy - dy, px);
        step.advance();
    }
}

/// Interior inset of row `j` in a rounded rectangle of height `h`
pub(crate) fn row_inset(j: i32, h: i32, radius: i32, half: &[i32]) -> i32 {
    if j < radius {
        radius - half[(radius - j) as usize]
    } else if j >= h - radius {
        radius - half[(radius - (h - 1 - j)) as usize]
    } else {
        0
    }
}

/// Rounded rectangle outline: straight edges as spans, corners from one
/// midpoint sweep mirrored into the four corner centers
pub(crate) fn rect_ring(
    surface: &mut Surface<'_>,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    r: i32,
    px: u32,
) {
    let x2 = x + w - 1;
    let y2 = y + h - 1;

    surface.fill_span(x + r, x2 - r, y, px);
    surface.fill_span(x + r, x2 - r, y2, px);
    surface.fill_vspan(x, y + r, y2 - r, px);
    surface.fill_vspan(x2, y + r, y2 - r, px);

    if r > 0 {
        corner_arcs(surface, x + r, y + r, x2 - r, y2 - r, r, px, true);
    }
}

/// Tab outline: rounded top corners, square base
fn tab_ring(surface: &mut Surface<'_>, x: i32, y: i32, w: i32, h: i32, r: i32, px: u32) {
    let x2 = x + w - 1;
    let y2 = y + h - 1;

    surface.fill_span(x + r, x2 - r, y, px);
    surface.fill_span(x, x2, y2, px);
    surface.fill_vspan(x, y + r, y2, px);
    surface.fill_vspan(x2, y + r, y2, px);

    if r > 0 {
        corner_arcs(surface, x + r, y + r, x2 - r, y2, r, px, false);
    }
}

/// Quarter-circle arcs written through the corner centers. `bottom` selects
/// whether the lower pair is drawn.
fn corner_arcs(
    surface: &mut Surface<'_>,
    cxl: i32,
    cyt: i32,
    cxr: i32,
    cyb: i32,
    r: i32,
    px: u32,
    bottom: bool,
) {
    let mut step = CircleStep::new(r);
    while !step.done() {
        let (a, b) = (step.x, step.y);
        // Top-left and top-right, both octant mirrors
        surface.put(cxl - a, cyt - b, px);
        surface.put(cxl - b, cyt - a, px);
        surface.put(cxr + a, cyt - b, px);
        surface.put(cxr + b, cyt - a, px);
        if bottom {
            surface.put(cxl - a, cyb + b, px);
            surface.put(cxl - b, cyb + a, px);
            surface.put(cxr + a, cyb + b, px);
            surface.put(cxr + b, cyb + a, px);
        }
        step.advance();
    }
}
