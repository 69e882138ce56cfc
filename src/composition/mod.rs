//! # Composition Engine
//!
//! Lays out and draws a banner: the logo and caption in a header band above
//! the main image.

pub mod engine;
pub mod layout;

// Re-exports for convenience
pub use engine::{Banner, ComposeOptions, Composer, MAX_FONT_SIZE};
pub use layout::{Layout, FINAL_WIDTH, LOGO_WIDTH, MAX_CANVAS_PIXELS, PADDING};
