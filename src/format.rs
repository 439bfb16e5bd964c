//! Pixel format adapter
//!
//! Packs and unpacks 8-bit RGB into the native representation of the bound
//! surface. The format is a closed set of variants chosen at construction so
//! inner loops stay branch-free per pixel.

/// Per-channel bit layout within a packed pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Channel {
    shift: u32,
    bits: u32,
}

impl Channel {
    #[inline]
    const fn mask(self) -> u32 {
        ((1 << self.bits) - 1) << self.shift
    }

    /// Pack an 8-bit value into this channel's bit field
    #[inline]
    const fn pack(self, v: u8) -> u32 {
        ((v as u32) >> (8 - self.bits)) << self.shift
    }

    /// Extract this channel back to 8 bits (low bits zero-filled)
    #[inline]
    const fn unpack(self, packed: u32) -> u8 {
        (((packed >> self.shift) & ((1 << self.bits) - 1)) << (8 - self.bits)) as u8
    }
}

/// Supported surface pixel layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 32bpp, red in bits 24-31, alpha in bits 0-7 (SDL RGBA8888)
    Rgba8888,
    /// 32bpp, alpha in bits 24-31, red in bits 16-23
    Argb8888,
    /// 16bpp, 5-6-5 packing
    Rgb565,
}

impl PixelFormat {
    #[inline]
    fn channels(self) -> [Channel; 3] {
        match self {
            PixelFormat::Rgba8888 => [
                Channel { shift: 24, bits: 8 },
                Channel { shift: 16, bits: 8 },
                Channel { shift: 8, bits: 8 },
            ],
            PixelFormat::Argb8888 => [
                Channel { shift: 16, bits: 8 },
                Channel { shift: 8, bits: 8 },
                Channel { shift: 0, bits: 8 },
            ],
            PixelFormat::Rgb565 => [
                Channel { shift: 11, bits: 5 },
                Channel { shift: 5, bits: 6 },
                Channel { shift: 0, bits: 5 },
            ],
        }
    }

    /// Bits outside the RGB fields, forced on so 32bpp pixels stay opaque
    #[inline]
    fn opaque_bits(self) -> u32 {
        let [r, g, b] = self.channels();
        !(r.mask() | g.mask() | b.mask())
            & match self {
                PixelFormat::Rgb565 => 0,
                _ => 0xFFFF_FFFF,
            }
    }

    #[inline]
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgb565 => 2,
            _ => 4,
        }
    }

    /// Pack 8-bit RGB into the native representation. Out-of-range channel
    /// precision is dropped by masking, never rejected.
    #[inline]
    pub fn pack(self, r: u8, g: u8, b: u8) -> u32 {
        let [cr, cg, cb] = self.channels();
        cr.pack(r) | cg.pack(g) | cb.pack(b) | self.opaque_bits()
    }

    /// Unpack a native pixel back to 8-bit RGB
    #[inline]
    pub fn unpack(self, packed: u32) -> (u8, u8, u8) {
        let [cr, cg, cb] = self.channels();
        (cr.unpack(packed), cg.unpack(packed), cb.unpack(packed))
    }

    /// Alpha blend `src` over `dst` with an 8-bit alpha, interpolating each
    /// color channel independently inside its bit field. Integer only.
    #[inline]
    pub fn blend(self, dst: u32, src: u32, alpha: u8) -> u32 {
        let (sr, sg, sb) = self.unpack(src);
        let (dr, dg, db) = self.unpack(dst);
        self.pack(
            blend_channel(sr, dr, alpha as u16),
            blend_channel(sg, dg, alpha as u16),
            blend_channel(sb, db, alpha as u16),
        )
    }

    /// Integer luma of a packed pixel (0-255)
    #[inline]
    pub fn luma(self, packed: u32) -> u8 {
        let (r, g, b) = self.unpack(packed);
        // Rec. 601 weights in /256 fixed point
        ((77 * r as u32 + 150 * g as u32 + 29 * b as u32) >> 8) as u8
    }
}

/// Alpha blend a single color channel
/// Uses fast approximation: (x + 1 + (x >> 8)) >> 8 instead of x / 255
#[inline]
pub(crate) fn blend_channel(src: u8, dst: u8, alpha: u16) -> u8 {
    let result = src as u16 * alpha + dst as u16 * (255 - alpha);
    ((result + 1 + (result >> 8)) >> 8) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_32bpp() {
        for fmt in [PixelFormat::Rgba8888, PixelFormat::Argb8888] {
            for &(r, g, b) in &[(0, 0, 0), (255, 255, 255), (12, 200, 99), (1, 2, 3)] {
                assert_eq!(fmt.unpack(fmt.pack(r, g, b)), (r, g, b));
            }
        }
    }

    #[test]
    fn test_roundtrip_565_representable() {
        let fmt = PixelFormat::Rgb565;
        // Every triple exactly representable in 5-6-5 survives the round trip
        for r in (0..=255u16).step_by(8) {
            for g in (0..=255u16).step_by(4) {
                let (r, g, b) = (r as u8, g as u8, r as u8);
                assert_eq!(fmt.unpack(fmt.pack(r, g, b)), (r, g, b));
            }
        }
    }

    #[test]
    fn test_565_truncates_low_bits() {
        let fmt = PixelFormat::Rgb565;
        // 7 low bits of red drop to the nearest 8-step
        assert_eq!(fmt.unpack(fmt.pack(0x17, 0, 0)).0, 0x10);
    }

    #[test]
    fn test_opaque_alpha_bits() {
        assert_eq!(PixelFormat::Rgba8888.pack(0, 0, 0) & 0xFF, 0xFF);
        assert_eq!(PixelFormat::Argb8888.pack(0, 0, 0) >> 24, 0xFF);
    }

    #[test]
    fn test_blend_endpoints() {
        let fmt = PixelFormat::Rgba8888;
        let dst = fmt.pack(10, 20, 30);
        let src = fmt.pack(200, 100, 50);
        assert_eq!(fmt.blend(dst, src, 0), dst);
        assert_eq!(fmt.blend(dst, src, 255), src);
    }

    #[test]
    fn test_blend_midpoint() {
        let fmt = PixelFormat::Argb8888;
        let dst = fmt.pack(0, 0, 0);
        let src = fmt.pack(200, 100, 50);
        let (r, g, b) = fmt.unpack(fmt.blend(dst, src, 128));
        assert!((r as i32 - 100).abs() <= 1);
        assert!((g as i32 - 50).abs() <= 1);
        assert!((b as i32 - 25).abs() <= 1);
    }

    #[test]
    fn test_luma_gray_is_identity() {
        let fmt = PixelFormat::Rgba8888;
        let l = fmt.luma(fmt.pack(128, 128, 128));
        assert!((l as i32 - 128).abs() <= 1);
    }
}
