//! # Caption Text
//!
//! Measuring and drawing multi-line captions.
//!
//! A face is resolved once per composition with [`resolve_font`]: the
//! configured TrueType file when it can be loaded, otherwise the built-in
//! bitmap face. Both implement [`Typeface`], which provides the multi-line
//! layout shared by every face.
//!
//! ```rust,no_run
//! use banner_compositor::config::FontConfig;
//! use banner_compositor::text::{resolve_font, Typeface};
//!
//! let face = resolve_font(&FontConfig::default(), 50);
//! let bbox = face.measure("Hello\nWorld", 4);
//! println!("{}x{}", bbox.width, bbox.height);
//! ```

pub mod builtin;
pub mod resolver;
pub mod traits;
pub mod truetype;

pub use builtin::BuiltinFace;
pub use resolver::resolve_font;
pub use traits::{split_lines, TextBox, Typeface};
pub use truetype::TrueTypeFace;
