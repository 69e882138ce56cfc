use tracing::{debug, warn};

use crate::config::FontConfig;
use crate::text::{BuiltinFace, TrueTypeFace, Typeface};

/// Resolve the caption face for `size`.
///
/// Tries the configured font file first. Any failure to read or parse it is
/// logged and answered with the built-in face, so this never fails.
pub fn resolve_font(config: &FontConfig, size: u32) -> Box<dyn Typeface> {
    match TrueTypeFace::load(&config.path, size) {
        Ok(face) => {
            debug!("Using font {:?} at {}px", config.path, size);
            Box::new(face)
        }
        Err(e) => {
            warn!("Font {:?} unavailable ({}), using built-in face", config.path, e);
            Box::new(BuiltinFace::new(size))
        }
    }
}
