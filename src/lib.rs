//! Software rasterizer for UI primitives.
//!
//! Draws lines, circles, rectangles, rounded rectangles, tabs, and arrow
//! triangles directly into a caller-owned pixel buffer, with solid or
//! gradient fills, optional antialiasing, drop shadows, and bevels.
//! The only platform dependency is the SDL2 presentation layer used by the
//! demo binary; the engine itself writes plain memory.

pub mod display;
pub mod fixed;
pub mod format;
pub mod painter;
pub mod state;
pub mod surface;

mod blit;

pub use format::PixelFormat;
pub use painter::{EdgeStyle, Font, Painter};
pub use state::{ArrowDirection, DrawState, FillMode, ShadingMode, GRADIENT_FACTOR_ONE};
pub use surface::{OwnedSurface, Surface};
