//! Renderer-wide drawing state
//!
//! Mutated incrementally by the caller and read by every shape call.
//! Gradient deltas are recomputed whenever the gradient colors change;
//! a stroke width of 0 disables outlines.

use crate::format::PixelFormat;

/// Interior treatment for shape calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    /// Outline only, honoring stroke width
    Disabled,
    Foreground,
    Background,
    Gradient,
}

/// Whole-surface post-process flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadingMode {
    /// Halve per-channel brightness
    Dim,
    /// Replace every pixel with its luminance gray
    Luminance,
}

/// Orientation for the scrollbar-arrow triangle rasterizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Gradient stretch factor in 8.8 fixed point meaning "full extent"
pub const GRADIENT_FACTOR_ONE: i32 = 256;

#[derive(Debug, Clone)]
pub struct DrawState {
    format: PixelFormat,
    fg: u32,
    bg: u32,
    fill: FillMode,
    stroke: i32,
    shadow: i32,
    bevel_width: i32,
    bevel_color: u32,
    grad_from: (u8, u8, u8),
    /// Per-channel end-minus-start deltas, recomputed on every color change
    grad_delta: [i32; 3],
    grad_set: bool,
    /// 8.8 fixed point; > 256 compresses the gradient into a sub-range
    grad_factor: i32,
}

impl DrawState {
    pub fn new(format: PixelFormat) -> Self {
        Self {
            format,
            fg: format.pack(255, 255, 255),
            bg: format.pack(0, 0, 0),
            fill: FillMode::Disabled,
            stroke: 1,
            shadow: 0,
            bevel_width: 1,
            bevel_color: format.pack(128, 128, 128),
            grad_from: (0, 0, 0),
            grad_delta: [0, 0, 0],
            grad_set: false,
            grad_factor: GRADIENT_FACTOR_ONE,
        }
    }

    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn set_foreground(&mut self, r: u8, g: u8, b: u8) {
        self.fg = self.format.pack(r, g, b);
    }

    pub fn set_background(&mut self, r: u8, g: u8, b: u8) {
        self.bg = self.format.pack(r, g, b);
    }

    #[inline]
    pub fn foreground(&self) -> u32 {
        self.fg
    }

    #[inline]
    pub fn background(&self) -> u32 {
        self.bg
    }

    pub fn set_fill_mode(&mut self, fill: FillMode) {
        self.fill = fill;
    }

    #[inline]
    pub fn fill_mode(&self) -> FillMode {
        self.fill
    }

    /// Stroke width 0 disables outlines entirely
    pub fn set_stroke_width(&mut self, width: i32) {
        self.stroke = width.max(0);
    }

    #[inline]
    pub fn stroke_width(&self) -> i32 {
        self.stroke
    }

    pub fn set_shadow_offset(&mut self, offset: i32) {
        self.shadow = offset.max(0);
    }

    #[inline]
    pub fn shadow_offset(&self) -> i32 {
        self.shadow
    }

    pub fn set_bevel(&mut self, width: i32, r: u8, g: u8, b: u8) {
        self.bevel_width = width.max(0);
        self.bevel_color = self.format.pack(r, g, b);
    }

    #[inline]
    pub fn bevel_width(&self) -> i32 {
        self.bevel_width
    }

    #[inline]
    pub fn bevel_color(&self) -> u32 {
        self.bevel_color
    }

    /// Configure the gradient endpoints. Deltas are precomputed here so
    /// per-span evaluation is a multiply and a shift.
    pub fn set_gradient(&mut self, from: (u8, u8, u8), to: (u8, u8, u8)) {
        self.grad_from = from;
        self.grad_delta = [
            i32::from(to.0) - i32::from(from.0),
            i32::from(to.1) - i32::from(from.1),
            i32::from(to.2) - i32::from(from.2),
        ];
        self.grad_set = true;
    }

    #[inline]
    pub fn gradient_configured(&self) -> bool {
        self.grad_set
    }

    pub fn set_gradient_factor(&mut self, factor: i32) {
        self.grad_factor = factor.max(1);
    }

    #[inline]
    pub fn gradient_factor(&self) -> i32 {
        self.grad_factor
    }

    /// Evaluate the gradient at `pos` within a shape of the given extent.
    ///
    /// The stretch factor compresses the visible ramp into a sub-range of
    /// the extent so gradient speed stays consistent across shape sizes;
    /// positions past the compressed range clamp to the end color.
    pub fn gradient_at(&self, pos: i32, extent: i32) -> u32 {
        let span = ((extent.max(1) * GRADIENT_FACTOR_ONE) / self.grad_factor).max(1);
        let t = pos.clamp(0, span);
        let (r0, g0, b0) = self.grad_from;
        let ch = |base: u8, delta: i32| -> u8 { (i32::from(base) + delta * t / span) as u8 };
        self.format.pack(
            ch(r0, self.grad_delta[0]),
            ch(g0, self.grad_delta[1]),
            ch(b0, self.grad_delta[2]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> DrawState {
        DrawState::new(PixelFormat::Rgba8888)
    }

    #[test]
    fn test_defaults() {
        let s = state();
        assert_eq!(s.fill_mode(), FillMode::Disabled);
        assert_eq!(s.stroke_width(), 1);
        assert!(!s.gradient_configured());
    }

    #[test]
    fn test_gradient_endpoints() {
        let mut s = state();
        s.set_gradient((10, 20, 30), (210, 120, 30));
        let fmt = s.format();
        assert_eq!(fmt.unpack(s.gradient_at(0, 100)), (10, 20, 30));
        assert_eq!(fmt.unpack(s.gradient_at(100, 100)), (210, 120, 30));
    }

    #[test]
    fn test_gradient_monotonic_per_channel() {
        let mut s = state();
        s.set_gradient((0, 255, 100), (255, 0, 100));
        let fmt = s.format();
        let mut prev = fmt.unpack(s.gradient_at(0, 64));
        for pos in 1..=64 {
            let cur = fmt.unpack(s.gradient_at(pos, 64));
            assert!(cur.0 >= prev.0);
            assert!(cur.1 <= prev.1);
            assert_eq!(cur.2, 100);
            prev = cur;
        }
    }

    #[test]
    fn test_gradient_deltas_recomputed_on_change() {
        let mut s = state();
        s.set_gradient((0, 0, 0), (100, 0, 0));
        s.set_gradient((0, 0, 0), (0, 100, 0));
        let (r, g, _) = s.format().unpack(s.gradient_at(50, 100));
        assert_eq!(r, 0);
        assert_eq!(g, 50);
    }

    #[test]
    fn test_gradient_factor_compresses_ramp() {
        let mut s = state();
        s.set_gradient((0, 0, 0), (200, 200, 200));
        s.set_gradient_factor(2 * GRADIENT_FACTOR_ONE);
        // With factor 2x, the ramp completes by the midpoint and clamps after
        let mid = s.format().unpack(s.gradient_at(50, 100));
        let end = s.format().unpack(s.gradient_at(100, 100));
        assert_eq!(mid, (200, 200, 200));
        assert_eq!(mid, end);
    }

    #[test]
    fn test_stroke_width_clamps_negative() {
        let mut s = state();
        s.set_stroke_width(-3);
        assert_eq!(s.stroke_width(), 0);
    }
}
