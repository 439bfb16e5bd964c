//! Drop shadows and fake bevels
//!
//! Both effects are cheap fakes built from the drawing primitives rather
//! than real lighting: the shadow blends black with a separable falloff
//! along the right and bottom edges, and the bevel is an inset rounded
//! outline whose corners use the antialiased arc evaluation regardless of
//! the painter's edge flavor.

use crate::painter::antialiased::wu_arc;
use crate::painter::{clamp_corner_radius, Painter};
use crate::surface::Surface;

/// Peak shadow alpha at zero distance from the edge
const SHADOW_ALPHA: i32 = 160;

impl Painter {
    /// Cast a drop shadow along the right and bottom edges of the rectangle
    /// at (x, y, w, h). Alpha falls off linearly with distance from the edge
    /// out to the configured shadow offset; in the corner square the two
    /// falloffs multiply instead of forming a true radial ramp.
    pub fn draw_shadow(&self, surface: &mut Surface<'_>, x: i32, y: i32, w: i32, h: i32) {
        let s = self.state.shadow_offset();
        if s <= 0 || w <= 0 || h <= 0 {
            return;
        }
        let black = self.state.format().pack(0, 0, 0);
        let falloff = |i: i32| SHADOW_ALPHA * (s - i) / s;

        // Right band, inset from the top by the offset so the shadow reads
        // as displaced rather than hugging the shape
        for i in 0..s {
            let a = falloff(i) as u8;
            let col = x + w + i;
            for row in (y + s)..(y + h) {
                surface.blend_px(col, row, black, a);
            }
        }

        // Bottom band
        for j in 0..s {
            let a = falloff(j) as u8;
            surface.blend_span(x + s, x + w - 1, y + h + j, black, a);
        }

        // Corner square: separable product of the two edge falloffs
        for j in 0..s {
            for i in 0..s {
                let a = (falloff(i) * falloff(j) / SHADOW_ALPHA) as u8;
                surface.blend_px(x + w + i, y + h + j, black, a);
            }
        }
    }

    /// Draw the bevel outline for the rectangle at (x, y, w, h): a rounded
    /// outline in the bevel color inset by the bevel width, corner radius
    /// twice the width. Zero-radius tabs land here.
    pub fn draw_bevel(&self, surface: &mut Surface<'_>, x: i32, y: i32, w: i32, h: i32) {
        let bw = self.state.bevel_width();
        if bw <= 0 || w <= 0 || h <= 0 {
            return;
        }
        let iw = w - 2 * bw;
        let ih = h - 2 * bw;
        if iw <= 0 || ih <= 0 {
            return;
        }
        let px = self.state.bevel_color();
        let bx = x + bw;
        let by = y + bw;
        let x2 = bx + iw - 1;
        let y2 = by + ih - 1;
        let r = clamp_corner_radius(2 * bw, iw, ih);

        surface.fill_span(bx + r, x2 - r, by, px);
        surface.fill_span(bx + r, x2 - r, y2, px);
        surface.fill_vspan(bx, by + r, y2 - r, px);
        surface.fill_vspan(x2, by + r, y2 - r, px);

        if r > 0 {
            wu_arc(surface, bx + r, by + r, r, -1, -1, px);
            wu_arc(surface, x2 - r, by + r, r, 1, -1, px);
            wu_arc(surface, bx + r, y2 - r, r, -1, 1, px);
            wu_arc(surface, x2 - r, y2 - r, r, 1, 1, px);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::PixelFormat;
    use crate::painter::EdgeStyle;
    use crate::state::DrawState;
    use crate::surface::OwnedSurface;

    const FMT: PixelFormat = PixelFormat::Rgba8888;

    fn painter() -> Painter {
        Painter::new(DrawState::new(FMT), EdgeStyle::Aliased)
    }

    fn white_canvas(w: u32, h: u32) -> OwnedSurface {
        let mut owned = OwnedSurface::new(w, h, FMT);
        let px = FMT.pack(255, 255, 255);
        let hh = h as i32;
        let ww = w as i32;
        {
            let mut s = owned.view();
            for y in 0..hh {
                s.fill_span(0, ww - 1, y, px);
            }
        }
        owned
    }

    fn red_at(s: &crate::surface::Surface<'_>, x: i32, y: i32) -> u8 {
        FMT.unpack(s.get(x, y).unwrap()).0
    }

    #[test]
    fn test_shadow_zero_offset_is_noop() {
        let p = painter();
        let mut owned = white_canvas(16, 16);
        p.draw_shadow(&mut owned.view(), 2, 2, 8, 8);
        let s = owned.view();
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(s.get(x, y), Some(FMT.pack(255, 255, 255)));
            }
        }
    }

    #[test]
    fn test_shadow_falloff_monotone() {
        let mut p = painter();
        p.state.set_shadow_offset(4);
        let mut owned = white_canvas(32, 32);
        p.draw_shadow(&mut owned.view(), 2, 2, 10, 10);
        let s = owned.view();
        // Right band: columns 12..=15 darken less with distance from the edge
        let mut prev = 0u8;
        for col in 12..=15 {
            let v = red_at(&s, col, 8);
            assert!(v > prev, "column {} not lighter than its left neighbor", col);
            assert!(v < 255);
            prev = v;
        }
        // Bottom band mirrors the same ramp
        let mut prev = 0u8;
        for row in 12..=15 {
            let v = red_at(&s, 8, row);
            assert!(v > prev);
            prev = v;
        }
        // Beyond the offset nothing is touched
        assert_eq!(red_at(&s, 16, 8), 255);
        assert_eq!(red_at(&s, 8, 16), 255);
        // Above the vertical inset the right band is absent
        assert_eq!(red_at(&s, 12, 4), 255);
    }

    #[test]
    fn test_shadow_corner_uses_product_falloff() {
        let mut p = painter();
        p.state.set_shadow_offset(4);
        let mut owned = white_canvas(32, 32);
        p.draw_shadow(&mut owned.view(), 2, 2, 10, 10);
        let s = owned.view();
        // The far corner carries the product of two weak falloffs, so it is
        // lighter than either adjacent edge pixel at the same distance
        let corner = red_at(&s, 15, 15);
        assert!(corner > red_at(&s, 15, 8));
        assert!(corner > red_at(&s, 8, 15));
        assert!(corner < 255);
    }

    #[test]
    fn test_bevel_inset_outline() {
        let mut p = painter();
        p.state.set_bevel(1, 200, 10, 10);
        let mut owned = OwnedSurface::new(16, 16, FMT);
        p.draw_bevel(&mut owned.view(), 0, 0, 12, 12);
        let s = owned.view();
        let bevel = FMT.pack(200, 10, 10);
        // Straight edges sit one pixel in from the shape edge
        for x in 3..=8 {
            assert_eq!(s.get(x, 1), Some(bevel));
            assert_eq!(s.get(x, 10), Some(bevel));
        }
        for y in 3..=8 {
            assert_eq!(s.get(1, y), Some(bevel));
            assert_eq!(s.get(10, y), Some(bevel));
        }
        // The outer row and the square corner stay empty
        assert_eq!(s.get(0, 0), Some(0));
        assert_eq!(s.get(1, 1), Some(0));
        assert_eq!(s.get(5, 0), Some(0));
    }

    #[test]
    fn test_bevel_zero_width_is_noop() {
        let mut p = painter();
        p.state.set_bevel(0, 200, 10, 10);
        let mut owned = OwnedSurface::new(8, 8, FMT);
        p.draw_bevel(&mut owned.view(), 0, 0, 8, 8);
        let s = owned.view();
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(s.get(x, y), Some(0));
            }
        }
    }
}
