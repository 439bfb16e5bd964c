//! Shape drawing front end
//!
//! A `Painter` owns the drawing state and an edge flavor chosen once at
//! construction: aliased (hard edges) or antialiased (fractional-coverage
//! edges). Both flavors share the span-fill and gradient helpers here;
//! only the edge generation differs.

mod aliased;
mod antialiased;
mod effects;

use crate::state::{ArrowDirection, DrawState, FillMode};
use crate::surface::Surface;

/// Edge quality, fixed at construction rather than per call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeStyle {
    Aliased,
    AntiAliased,
}

/// Glyph rendering is delegated to the host; this layer only positions text
pub trait Font {
    fn line_height(&self) -> i32;
    fn text_width(&self, text: &str) -> i32;
    fn draw(&self, surface: &mut Surface<'_>, x: i32, y: i32, text: &str, color: u32);
}

/// Resolved interior treatment for one shape call
#[derive(Debug, Clone, Copy)]
pub(crate) enum Fill {
    Solid(u32),
    Gradient,
}

pub struct Painter {
    pub state: DrawState,
    edge: EdgeStyle,
}

impl Painter {
    pub fn new(state: DrawState, edge: EdgeStyle) -> Self {
        Self { state, edge }
    }

    #[inline]
    pub fn edge_style(&self) -> EdgeStyle {
        self.edge
    }

    /// Map the current fill mode to a concrete fill. Gradient fill without
    /// configured gradient colors falls back to a foreground fill instead of
    /// reusing stale state.
    pub(crate) fn resolve_fill(&self) -> Option<Fill> {
        match self.state.fill_mode() {
            FillMode::Disabled => None,
            FillMode::Foreground => Some(Fill::Solid(self.state.foreground())),
            FillMode::Background => Some(Fill::Solid(self.state.background())),
            FillMode::Gradient => {
                if self.state.gradient_configured() {
                    Some(Fill::Gradient)
                } else {
                    Some(Fill::Solid(self.state.foreground()))
                }
            },
        }
    }

    /// Fill one interior row. `pos`/`extent` locate the row inside the shape
    /// for gradient evaluation.
    pub(crate) fn fill_row(
        &self,
        surface: &mut Surface<'_>,
        x1: i32,
        x2: i32,
        y: i32,
        pos: i32,
        extent: i32,
        fill: Fill,
    ) {
        match fill {
            Fill::Solid(px) => surface.fill_span(x1, x2, y, px),
            Fill::Gradient => {
                surface.fill_span(x1, x2, y, self.state.gradient_at(pos, extent));
            },
        }
    }

    // ========================================================================
    // Shape API
    // ========================================================================

    /// Draw a line in the foreground color, honoring stroke width
    pub fn draw_line(&self, surface: &mut Surface<'_>, x0: i32, y0: i32, x1: i32, y1: i32) {
        if self.state.stroke_width() == 0 {
            return;
        }
        match self.edge {
            EdgeStyle::Aliased => self.line(surface, x0, y0, x1, y1),
            EdgeStyle::AntiAliased => self.line_aa(surface, x0, y0, x1, y1),
        }
    }

    /// Draw a circle: interior per fill mode, outline per stroke width
    pub fn draw_circle(&self, surface: &mut Surface<'_>, cx: i32, cy: i32, radius: i32) {
        if radius < 0 {
            return;
        }
        match self.edge {
            EdgeStyle::Aliased => self.circle(surface, cx, cy, radius),
            EdgeStyle::AntiAliased => self.circle_aa(surface, cx, cy, radius),
        }
    }

    /// Draw an axis-aligned rectangle
    pub fn draw_rect(&self, surface: &mut Surface<'_>, x: i32, y: i32, w: i32, h: i32) {
        self.draw_rounded_rect(surface, x, y, w, h, 0);
    }

    /// Draw a rounded rectangle. The corner radius is clamped to half the
    /// shorter side whenever 2*radius would exceed either dimension.
    pub fn draw_rounded_rect(
        &self,
        surface: &mut Surface<'_>,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        radius: i32,
    ) {
        if w <= 0 || h <= 0 {
            return;
        }
        let radius = clamp_corner_radius(radius, w, h);
        match self.edge {
            EdgeStyle::Aliased => self.rounded_rect(surface, x, y, w, h, radius),
            EdgeStyle::AntiAliased => self.rounded_rect_aa(surface, x, y, w, h, radius),
        }
    }

    /// Draw a tab: rounded top corners, square base, optional base
    /// extensions merging it with its neighbors. A zero radius delegates to
    /// the bevel drawer.
    pub fn draw_tab(
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
        if w <= 0 || h <= 0 {
            return;
        }
        let radius = clamp_corner_radius(radius, w, h);
        if radius == 0 {
            self.draw_bevel(surface, x, y, w, h);
            return;
        }
        self.tab(surface, x, y, w, h, radius, extend_left, extend_right);
    }

    /// Draw a cardinal isosceles arrow triangle (scrollbar arrows).
    /// `size` is the apex-to-base height in pixels.
    pub fn draw_arrow(
        &self,
        surface: &mut Surface<'_>,
        x: i32,
        y: i32,
        size: i32,
        dir: ArrowDirection,
    ) {
        if size <= 0 {
            return;
        }
        self.arrow(surface, x, y, size, dir);
    }

    /// Draw text by delegating to an externally supplied font
    pub fn draw_string(
        &self,
        surface: &mut Surface<'_>,
        x: i32,
        y: i32,
        text: &str,
        font: &dyn Font,
    ) {
        font.draw(surface, x, y, text, self.state.foreground());
    }

    /// Fill the whole surface per the current fill mode. Disabled is treated
    /// as a background clear; gradient fills run top to bottom.
    pub fn fill_surface(&self, surface: &mut Surface<'_>) {
        let h = surface.height() as i32;
        let w = surface.width() as i32;
        let fill = self
            .resolve_fill()
            .unwrap_or(Fill::Solid(self.state.background()));
        for y in 0..h {
            self.fill_row(surface, 0, w - 1, y, y, h, fill);
        }
    }
}

/// Clamp a corner radius so 2*radius never exceeds either dimension
pub(crate) fn clamp_corner_radius(radius: i32, w: i32, h: i32) -> i32 {
    radius.clamp(0, w.min(h) / 2)
}
