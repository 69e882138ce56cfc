//! # Banner-Compositor
//!
//! Composite a logo, a caption and a photo into a single banner PNG.
//!
//! The banner is always 1200px wide. A header band holds the logo (scaled to
//! 300px wide) and the caption next to it, both vertically centred with 50px
//! of padding; the photo, scaled to the full width, sits directly below.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use banner_compositor::{composition::Composer, config::Config};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::default();
//! let composer = Composer::new(config.font.clone());
//!
//! let logo = std::fs::read("logo.png")?;
//! let photo = std::fs::read("photo.jpg")?;
//! let png = composer.compose(&logo, &photo, "Grand opening\nSaturday 10am", config.compose.font_size)?;
//! std::fs::write("banner.png", png)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`composition`] - Layout and drawing of the banner
//! - [`text`] - Caption measurement and rendering, font fallback
//! - [`raster`] - Image decoding, resizing and the output canvas
//! - [`web`] - Upload form and HTTP handlers
//! - [`config`] - Configuration management

pub mod composition;
pub mod config;
pub mod error;
pub mod raster;
pub mod text;
pub mod web;

// Re-export commonly used types for convenience
pub use crate::{
    composition::{Composer, ComposeOptions},
    config::Config,
    error::{CompositorError, Result},
    text::Typeface,
};
