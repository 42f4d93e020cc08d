//! Pixel canvas, colors, and brush-tip bitmaps.
//!
//! This module defines the raster side of the paint surface:
//! - [`Color`]: RGB color representation and the fixed toolbar palette
//! - [`Canvas`]: destructive pixel buffer with draw primitives and read-back
//! - [`Stamp`]: pre-rendered tinted brush tip for the stamp style

pub mod canvas;
pub mod color;
pub mod stamp;

// Re-export commonly used types at module level
pub use canvas::Canvas;
pub use color::Color;
pub use stamp::Stamp;

// Re-export color constants for public API
pub use color::{BACKGROUND, BLACK, PALETTE};
