//! Fixed-point math helpers shared by the shape algorithms
//!
//! The antialiased circle code needs the circle boundary at sub-pixel
//! precision without touching floating point, so the square root here works
//! in 24.8 fixed point. The midpoint stepping state is the one circle walk
//! every circular shape (circles, rounded corners, tabs) reuses.

/// Fixed-point integer square root.
///
/// Runs the non-restoring binary digit algorithm for exactly 24 iterations
/// over the radicand `v << 16` - deterministic cost, no early exit. The
/// result is `floor(sqrt(v) * 256)`, i.e. the root in 24.8 fixed point;
/// `sqroot(v) >> 8` equals the plain integer square root of `v`.
pub fn sqroot(v: u32) -> u32 {
    let mut num = u64::from(v) << 16;
    let mut res: u64 = 0;
    let mut bit: u64 = 1 << 46;

    for _ in 0..24 {
        if num >= res + bit {
            num -= res + bit;
            res = (res >> 1) + bit;
        } else {
            res >>= 1;
        }
        bit >>= 2;
    }
    res as u32
}

/// Midpoint-circle stepping state for one octant (x >= y half, y rising).
///
/// The decision variable determines per step whether only the minor
/// coordinate advances or the major coordinate pulls inward as well. Callers
/// mirror `(x, y)` across the eight symmetric positions themselves.
#[derive(Debug, Clone, Copy)]
pub struct CircleStep {
    pub x: i32,
    pub y: i32,
    err: i32,
}

impl CircleStep {
    pub fn new(radius: i32) -> Self {
        Self {
            x: radius,
            y: 0,
            err: 1 - radius,
        }
    }

    /// The octant is exhausted once y has crossed x
    #[inline]
    pub fn done(&self) -> bool {
        self.y > self.x
    }

    /// Advance one step. Returns true when the major coordinate stepped
    /// inward along with the minor one.
    #[inline]
    pub fn advance(&mut self) -> bool {
        self.y += 1;
        if self.err < 0 {
            self.err += 2 * self.y + 1;
            false
        } else {
            self.x -= 1;
            self.err += 2 * (self.y - self.x) + 1;
            true
        }
    }
}

/// Per-row half-widths of a circle of the given radius, derived from one
/// midpoint sweep mirrored across the diagonal. Index 0 is the equator row
/// (dy = 0), index `radius` the pole. Rounded-rectangle corners, tabs and
/// the filled circle all index into this.
pub fn circle_spans(radius: i32) -> Vec<i32> {
    let r = radius.max(0);
    let mut half = vec![0i32; (r + 1) as usize];
    let mut step = CircleStep::new(r);
    while !step.done() {
        // Each octant point covers two rows via the diagonal mirror
        if step.x > half[step.y as usize] {
            half[step.y as usize] = step.x;
        }
        if step.y > half[step.x as usize] {
            half[step.x as usize] = step.y;
        }
        step.advance();
    }
    half
}
