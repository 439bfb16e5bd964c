//! Fractional-coverage edge algorithms
//!
//! Same shape set as the aliased rasterizer with the edge generation
//! swapped: circular boundaries are evaluated per scanned row with the
//! fixed-point square root and the fractional byte becomes the coverage of
//! the boundary pixel; lines blend two adjacent minor-axis pixels with
//! complementary weights (Wu). Interiors fill exactly like the aliased
//! flavor.

use crate::fixed::sqroot;
use crate::painter::{clamp_corner_radius, Painter};
use crate::surface::Surface;

/// Evaluate the circle boundary `sqrt(r^2 - d^2)` at offset `d`, returning
/// the integer pixel coordinate and the 8-bit fractional coverage.
#[inline]
pub(crate) fn edge_at(r: i32, d: i32) -> (i32, u8) {
    let sq = sqroot((r * r - d * d) as u32);
    ((sq >> 8) as i32, (sq & 0xFF) as u8)
}

impl Painter {
    // ========================================================================
    // Line (Wu)
    // ========================================================================

    pub(crate) fn line_aa(&self, surface: &mut Surface<'_>, x0: i32, y0: i32, x1: i32, y1: i32) {
        let px = self.state.foreground();
        if x0 == x1 && y0 == y1 {
            surface.put(x0, y0, px);
            return;
        }

        let width = self.state.stroke_width();
        if width <= 1 {
            self.line_aa_single(surface, x0, y0, x1, y1, px);
            return;
        }

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
            self.line_aa_single(surface, x0 + ox, y0 + oy, x1 + ox, y1 + oy, px);
        }
    }

    fn line_aa_single(
        &self,
        surface: &mut Surface<'_>,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        px: u32,
    ) {
        // Axis-aligned and 45-degree lines have no fractional edge; the
        // hard-edged fast paths are already exact
        if x0 == x1 || y0 == y1 || (x1 - x0).abs() == (y1 - y0).abs() {
            self.line_single(surface, x0, y0, x1, y1, px);
            return;
        }

        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        let (mut ax, mut ay, mut bx, mut by) = if steep {
            (y0, x0, y1, x1)
        } else {
            (x0, y0, x1, y1)
        };
        if ax > bx {
            std::mem::swap(&mut ax, &mut bx);
            std::mem::swap(&mut ay, &mut by);
        }

        let dx = i64::from(bx - ax);
        let dy = i64::from(by - ay);
        // Minor-axis position in 16.16, stepped once per major-axis pixel
        let grad = (dy << 16) / dx;
        let mut minor = (i64::from(ay) << 16) + grad;

        // Integer endpoints carry full coverage
        plot(surface, steep, ax, ay, px, 255);
        plot(surface, steep, bx, by, px, 255);

        for x in (ax + 1)..bx {
            let yi = (minor >> 16) as i32;
            let frac = ((minor >> 8) & 0xFF) as u8;
            plot(surface, steep, x, yi, px, 255 - frac);
            plot(surface, steep, x, yi + 1, px, frac);
            minor += grad;
        }
    }

    // ========================================================================
    // Circle (Wu specialized to circles)
    // ========================================================================

    pub(crate) fn circle_aa(&self, surface: &mut Surface<'_>, cx: i32, cy: i32, radius: i32) {
        if radius == 0 {
            // Single pixel: the outline wins when stroked, otherwise the
            // fill color lands, same layering as the full-size shape
            if self.state.stroke_width() > 0 {
                surface.put(cx, cy, self.state.foreground());
            } else if let Some(fill) = self.resolve_fill() {
                let px = match fill {
                    crate::painter::Fill::Solid(c) => c,
                    crate::painter::Fill::Gradient => self.state.gradient_at(0, 1),
                };
                surface.put(cx, cy, px);
            }
            return;
        }

        if let Some(fill) = self.resolve_fill() {
            let extent = 2 * radius + 1;
            let fill_px = |p: &Painter, pos: i32| match fill {
                crate::painter::Fill::Solid(c) => c,
                crate::painter::Fill::Gradient => p.state.gradient_at(pos, extent),
            };

            // Row pass: solid interior through the boundary column, plus one
            // blended pixel carrying the fractional coverage
            for dy in 0..=radius {
                let (xi, frac) = edge_at(radius, dy);
                let lo = fill_px(self, radius + dy);
                surface.fill_span(cx - xi, cx + xi, cy + dy, lo);
                if frac > 0 {
                    surface.blend_px(cx - xi - 1, cy + dy, lo, frac);
                    surface.blend_px(cx + xi + 1, cy + dy, lo, frac);
                }
                if dy != 0 {
                    let hi = fill_px(self, radius - dy);
                    surface.fill_span(cx - xi, cx + xi, cy - dy, hi);
                    if frac > 0 {
                        surface.blend_px(cx - xi - 1, cy - dy, hi, frac);
                        surface.blend_px(cx + xi + 1, cy - dy, hi, frac);
                    }
                }
            }

            // Column pass: where the arc runs nearly horizontal the row pass
            // skips boundary pixels; pick them up from the transposed
            // evaluation, excluding everything a row already touched
            for dx in 1..=radius {
                let (yi, frac) = edge_at(radius, dx);
                if frac == 0 {
                    continue;
                }
                let (row_xi, _) = edge_at(radius, yi + 1);
                if dx > row_xi + 1 {
                    let lo = fill_px(self, radius + yi + 1);
                    let hi = fill_px(self, radius - yi - 1);
                    surface.blend_px(cx - dx, cy + yi + 1, lo, frac);
                    surface.blend_px(cx + dx, cy + yi + 1, lo, frac);
                    surface.blend_px(cx - dx, cy - yi - 1, hi, frac);
                    surface.blend_px(cx + dx, cy - yi - 1, hi, frac);
                }
            }
        }

        let px = self.state.foreground();
        for i in 0..self.state.stroke_width().min(radius) {
            wu_ring(surface, cx, cy, radius - i, px);
        }
    }

    // ========================================================================
    // Rounded rectangle
    // ========================================================================

    pub(crate) fn rounded_rect_aa(
        &self,
        surface: &mut Surface<'_>,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        radius: i32,
    ) {
        let x2 = x + w - 1;
        let y2 = y + h - 1;
        let r = radius;

        if let Some(fill) = self.resolve_fill() {
            for j in 0..h {
                let dyc = if j < r {
                    r - j
                } else if j > h - 1 - r {
                    r - (h - 1 - j)
                } else {
                    0
                };
                let row = y + j;
                let px = match fill {
                    crate::painter::Fill::Solid(c) => c,
                    crate::painter::Fill::Gradient => self.state.gradient_at(j, h),
                };
                if dyc == 0 {
                    surface.fill_span(x, x2, row, px);
                } else {
                    let (xi, frac) = edge_at(r, dyc);
                    let inset = r - xi;
                    surface.fill_span(x + inset, x2 - inset, row, px);
                    if frac > 0 {
                        surface.blend_px(x + inset - 1, row, px, frac);
                        surface.blend_px(x2 - inset + 1, row, px, frac);
                    }
                }
            }

            // Column pass over each corner quadrant for the shallow arc part,
            // excluding everything a row already touched
            for dx in 1..=r {
                let (yi, frac) = edge_at(r, dx);
                if frac == 0 {
                    continue;
                }
                let (row_xi, _) = edge_at(r, yi + 1);
                if dx > row_xi + 1 {
                    let top = y + r - yi - 1;
                    let bot = y2 - r + yi + 1;
                    let px_top = match fill {
                        crate::painter::Fill::Solid(c) => c,
                        crate::painter::Fill::Gradient => self.state.gradient_at(r - yi - 1, h),
                    };
                    let px_bot = match fill {
                        crate::painter::Fill::Solid(c) => c,
                        crate::painter::Fill::Gradient => self.state.gradient_at(h - r + yi, h),
                    };
                    surface.blend_px(x + r - dx, top, px_top, frac);
                    surface.blend_px(x2 - r + dx, top, px_top, frac);
                    surface.blend_px(x + r - dx, bot, px_bot, frac);
                    surface.blend_px(x2 - r + dx, bot, px_bot, frac);
                }
            }
        }

        let px = self.state.foreground();
        for i in 0..self.state.stroke_width() {
            let (rx, ry, rw, rh) = (x + i, y + i, w - 2 * i, h - 2 * i);
            if rw <= 0 || rh <= 0 {
                break;
            }
            wu_rect_ring(surface, rx, ry, rw, rh, clamp_corner_radius(radius - i, rw, rh), px);
        }
    }
}

/// Blend the eight symmetric positions of an octant point, skipping the
/// duplicates on the axes and the diagonal
fn blend8(surface: &mut Surface<'_>, cx: i32, cy: i32, a: i32, b: i32, px: u32, alpha: u8) {
    surface.blend_px(cx + a, cy + b, px, alpha);
    surface.blend_px(cx - a, cy + b, px, alpha);
    if b != 0 {
        surface.blend_px(cx + a, cy - b, px, alpha);
        surface.blend_px(cx - a, cy - b, px, alpha);
    }
    if a != b {
        surface.blend_px(cx + b, cy + a, px, alpha);
        surface.blend_px(cx - b, cy + a, px, alpha);
        if b != 0 {
            surface.blend_px(cx + b, cy - a, px, alpha);
            surface.blend_px(cx - b, cy - a, px, alpha);
        }
    }
}

/// Antialiased circle outline: per octant row the boundary straddles two
/// pixels which split the coverage between them
pub(crate) fn wu_ring(surface: &mut Surface<'_>, cx: i32, cy: i32, r: i32, px: u32) {
    if r <= 0 {
        surface.put(cx, cy, px);
        return;
    }
    let mut dy = 0;
    loop {
        let (xi, frac) = edge_at(r, dy);
        if xi < dy {
            break;
        }
        blend8(surface, cx, cy, xi, dy, px, 255 - frac);
        if frac > 0 {
            blend8(surface, cx, cy, xi + 1, dy, px, frac);
        }
        dy += 1;
    }
}

/// Blend one quadrant of a Wu arc. `sx`/`sy` select the quadrant (+1/-1).
pub(crate) fn wu_arc(
    surface: &mut Surface<'_>,
    cx: i32,
    cy: i32,
    r: i32,
    sx: i32,
    sy: i32,
    px: u32,
) {
    let mut dy = 0;
    loop {
        let (xi, frac) = edge_at(r, dy);
        if xi < dy {
            break;
        }
        surface.blend_px(cx + sx * xi, cy + sy * dy, px, 255 - frac);
        if frac > 0 {
            surface.blend_px(cx + sx * (xi + 1), cy + sy * dy, px, frac);
        }
        // Mirrored octant; on the diagonal only the integer point repeats
        if xi != dy {
            surface.blend_px(cx + sx * dy, cy + sy * xi, px, 255 - frac);
        }
        if frac > 0 {
            surface.blend_px(cx + sx * dy, cy + sy * (xi + 1), px, frac);
        }
        dy += 1;
    }
}

/// Rounded rectangle outline with Wu corner arcs and exact straight edges
fn wu_rect_ring(surface: &mut Surface<'_>, x: i32, y: i32, w: i32, h: i32, r: i32, px: u32) {
    let x2 = x + w - 1;
    let y2 = y + h - 1;

    surface.fill_span(x + r, x2 - r, y, px);
    surface.fill_span(x + r, x2 - r, y2, px);
    surface.fill_vspan(x, y + r, y2 - r, px);
    surface.fill_vspan(x2, y + r, y2 - r, px);

    if r > 0 {
        wu_arc(surface, x + r, y + r, r, -1, -1, px);
        wu_arc(surface, x2 - r, y + r, r, 1, -1, px);
        wu_arc(surface, x + r, y2 - r, r, -1, 1, px);
        wu_arc(surface, x2 - r, y2 - r, r, 1, 1, px);
    }
}

#[inline]
fn plot(surface: &mut Surface<'_>, steep: bool, major: i32, minor: i32, px: u32, alpha: u8) {
    if steep {
        surface.blend_px(minor, major, px, alpha);
    } else {
        surface.blend_px(major, minor, px, alpha);
    }
}
