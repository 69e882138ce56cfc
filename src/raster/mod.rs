//! # Raster Module
//!
//! Decoding of uploaded images, resizing, and the output canvas.

pub mod loader;
pub mod types;

pub use loader::{decode_image, resize_exact};
pub use types::Canvas;
