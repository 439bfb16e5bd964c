//! Surface addressing and span primitives
//!
//! `Surface` is a non-owning view of a caller-owned pixel buffer. The engine
//! never allocates or frees the storage; the borrow keeps it valid for the
//! duration of a call, and rebinding the active surface is just passing a
//! different view. Row pitch may exceed the visible width.

use crate::format::PixelFormat;

/// Mutable view of a caller-owned rectangular pixel buffer
pub struct Surface<'a> {
    data: &'a mut [u8],
    width: u32,
    height: u32,
    /// Row pitch in pixels (not bytes)
    pitch: u32,
    format: PixelFormat,
}

impl<'a> Surface<'a> {
    /// Wrap a raw buffer. Returns None when the slice is too small for the
    /// described geometry.
    pub fn from_raw(
        data: &'a mut [u8],
        width: u32,
        height: u32,
        pitch: u32,
        format: PixelFormat,
    ) -> Option<Self> {
        let needed = (pitch as usize) * (height as usize) * format.bytes_per_pixel();
        if pitch < width || data.len() < needed {
            return None;
        }
        Some(Self {
            data,
            width,
            height,
            pitch,
            format,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pitch(&self) -> u32 {
        self.pitch
    }

    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Byte offset of pixel (x, y)
    #[inline]
    fn byte_index(&self, x: u32, y: u32) -> usize {
        ((y * self.pitch + x) as usize) * self.format.bytes_per_pixel()
    }

    #[inline]
    fn load(&self, idx: usize) -> u32 {
        match self.format.bytes_per_pixel() {
            2 => u32::from(u16::from_le_bytes([self.data[idx], self.data[idx + 1]])),
            _ => u32::from_le_bytes([
                self.data[idx],
                self.data[idx + 1],
                self.data[idx + 2],
                self.data[idx + 3],
            ]),
        }
    }

    #[inline]
    fn store(&mut self, idx: usize, px: u32) {
        match self.format.bytes_per_pixel() {
            2 => self.data[idx..idx + 2].copy_from_slice(&(px as u16).to_le_bytes()),
            _ => self.data[idx..idx + 4].copy_from_slice(&px.to_le_bytes()),
        }
    }

    /// Set a single pixel (bounds checked)
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, px: u32) {
        if self.in_bounds(x, y) {
            let idx = self.byte_index(x as u32, y as u32);
            self.store(idx, px);
        }
    }

    /// Read a pixel, None if out of bounds
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        if self.in_bounds(x, y) {
            Some(self.load(self.byte_index(x as u32, y as u32)))
        } else {
            None
        }
    }

    /// Alpha blend a pixel onto the surface (bounds checked)
    #[inline]
    pub fn blend_px(&mut self, x: i32, y: i32, px: u32, alpha: u8) {
        if alpha == 0 || !self.in_bounds(x, y) {
            return;
        }
        let idx = self.byte_index(x as u32, y as u32);
        if alpha == 255 {
            self.store(idx, px);
        } else {
            let dst = self.load(idx);
            self.store(idx, self.format.blend(dst, px, alpha));
        }
    }

    /// Fill a horizontal pixel run with one color, clipped to the surface.
    /// The inner loop is 8-way unrolled; this is the primitive nearly every
    /// shape routine bottoms out in.
    pub fn fill_span(&mut self, x1: i32, x2: i32, y: i32, px: u32) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let (x1, x2) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let start = x1.max(0);
        let end = x2.min(self.width as i32 - 1);
        if start > end {
            return;
        }

        let bpp = self.format.bytes_per_pixel();
        let mut idx = self.byte_index(start as u32, y as u32);
        let mut count = (end - start + 1) as usize;

        while count >= 8 {
            self.store(idx, px);
            self.store(idx + bpp, px);
            self.store(idx + 2 * bpp, px);
            self.store(idx + 3 * bpp, px);
            self.store(idx + 4 * bpp, px);
            self.store(idx + 5 * bpp, px);
            self.store(idx + 6 * bpp, px);
            self.store(idx + 7 * bpp, px);
            idx += 8 * bpp;
            count -= 8;
        }
        while count > 0 {
            self.store(idx, px);
            idx += bpp;
            count -= 1;
        }
    }

    /// Fill a vertical pixel run, stepping by the row pitch
    pub fn fill_vspan(&mut self, x: i32, y1: i32, y2: i32, px: u32) {
        if x < 0 || x >= self.width as i32 {
            return;
        }
        let (y1, y2) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        let start = y1.max(0);
        let end = y2.min(self.height as i32 - 1);
        if start > end {
            return;
        }

        let stride = (self.pitch as usize) * self.format.bytes_per_pixel();
        let mut idx = self.byte_index(x as u32, start as u32);
        for _ in start..=end {
            self.store(idx, px);
            idx += stride;
        }
    }

    /// Alpha blend a horizontal run
    pub fn blend_span(&mut self, x1: i32, x2: i32, y: i32, px: u32, alpha: u8) {
        if alpha == 0 || y < 0 || y >= self.height as i32 {
            return;
        }
        if alpha == 255 {
            self.fill_span(x1, x2, y, px);
            return;
        }
        let (x1, x2) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let start = x1.max(0);
        let end = x2.min(self.width as i32 - 1);
        if start > end {
            return;
        }

        let bpp = self.format.bytes_per_pixel();
        let fmt = self.format;
        let mut idx = self.byte_index(start as u32, y as u32);
        for _ in start..=end {
            let dst = self.load(idx);
            self.store(idx, fmt.blend(dst, px, alpha));
            idx += bpp;
        }
    }

    /// Raw bytes, e.g. for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        self.data
    }
}

// ============================================================================
// OwnedSurface
// ============================================================================

/// Heap-backed surface storage for hosts that do not bring their own buffer
/// (the demo binary, offscreen scratch surfaces, tests)
pub struct OwnedSurface {
    data: Vec<u8>,
    width: u32,
    height: u32,
    format: PixelFormat,
}

impl OwnedSurface {
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
        Self {
            data: vec![0; (width as usize) * (height as usize) * format.bytes_per_pixel()],
            width,
            height,
            format,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Borrow as a drawable view (pitch equals width)
    pub fn view(&mut self) -> Surface<'_> {
        Surface {
            data: &mut self.data,
            width: self.width,
            height: self.height,
            pitch: self.width,
            format: self.format,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(w: u32, h: u32) -> OwnedSurface {
        OwnedSurface::new(w, h, PixelFormat::Rgba8888)
    }

    #[test]
    fn test_from_raw_rejects_short_buffer() {
        let mut buf = vec![0u8; 10];
        assert!(Surface::from_raw(&mut buf, 4, 4, 4, PixelFormat::Rgba8888).is_none());
    }

    #[test]
    fn test_from_raw_rejects_pitch_below_width() {
        let mut buf = vec![0u8; 1024];
        assert!(Surface::from_raw(&mut buf, 8, 4, 4, PixelFormat::Rgba8888).is_none());
    }

    #[test]
    fn test_put_get_roundtrip() {
        let mut owned = surface(8, 8);
        let mut s = owned.view();
        let px = s.format().pack(10, 20, 30);
        s.put(3, 5, px);
        assert_eq!(s.get(3, 5), Some(px));
        assert_eq!(s.get(8, 5), None);
        assert_eq!(s.get(-1, 0), None);
    }

    #[test]
    fn test_out_of_bounds_put_is_noop() {
        let mut owned = surface(4, 4);
        let mut s = owned.view();
        s.put(-1, 0, 0xFFFF_FFFF);
        s.put(0, 4, 0xFFFF_FFFF);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(s.get(x, y), Some(0));
            }
        }
    }

    #[test]
    fn test_fill_span_clips() {
        let mut owned = surface(8, 4);
        let mut s = owned.view();
        let px = s.format().pack(255, 0, 0);
        s.fill_span(-10, 100, 2, px);
        for x in 0..8 {
            assert_eq!(s.get(x, 2), Some(px));
            assert_eq!(s.get(x, 1), Some(0));
        }
        // Entirely off-surface rows are no-ops
        s.fill_span(0, 7, -1, px);
        s.fill_span(0, 7, 4, px);
    }

    #[test]
    fn test_fill_span_long_run_unrolled_tail() {
        let mut owned = surface(21, 1);
        let mut s = owned.view();
        let px = s.format().pack(1, 2, 3);
        s.fill_span(0, 20, 0, px);
        for x in 0..21 {
            assert_eq!(s.get(x, 0), Some(px));
        }
    }

    #[test]
    fn test_fill_vspan() {
        let mut owned = surface(4, 8);
        let mut s = owned.view();
        let px = s.format().pack(0, 255, 0);
        s.fill_vspan(1, 6, 2, px);
        for y in 2..=6 {
            assert_eq!(s.get(1, y), Some(px));
            assert_eq!(s.get(2, y), Some(0));
        }
    }

    #[test]
    fn test_pitch_addressing() {
        // 4 visible pixels per row, pitch of 6
        let mut buf = vec![0u8; 6 * 3 * 4];
        let fmt = PixelFormat::Rgba8888;
        let px = fmt.pack(9, 9, 9);
        {
            let mut s = Surface::from_raw(&mut buf, 4, 3, 6, fmt).unwrap();
            s.put(0, 1, px);
        }
        // Row 1 starts at pixel 6, not 4
        let idx = 6 * 4;
        assert_eq!(
            u32::from_le_bytes([buf[idx], buf[idx + 1], buf[idx + 2], buf[idx + 3]]),
            px
        );
    }

    #[test]
    fn test_blend_px_full_alpha_overwrites() {
        let mut owned = surface(2, 2);
        let mut s = owned.view();
        let px = s.format().pack(50, 60, 70);
        s.blend_px(0, 0, px, 255);
        assert_eq!(s.get(0, 0), Some(px));
        s.blend_px(1, 1, px, 0);
        assert_eq!(s.get(1, 1), Some(0));
    }

    #[test]
    fn test_rgb565_storage() {
        let mut owned = OwnedSurface::new(4, 4, PixelFormat::Rgb565);
        {
            let mut s = owned.view();
            let px = s.format().pack(255, 0, 0);
            s.put(2, 2, px);
            assert_eq!(s.get(2, 2), Some(px));
        }
        assert_eq!(owned.as_bytes().len(), 4 * 4 * 2);
    }
}
