use image::{imageops::FilterType, DynamicImage, GenericImageView};
use tracing::debug;

use crate::error::{ImageError, Result};

/// Resampling filter used for every resize (bicubic)
pub const RESIZE_FILTER: FilterType = FilterType::CatmullRom;

/// Decode an uploaded byte stream into an image.
///
/// `field` names the input in error messages.
pub fn decode_image(field: &str, bytes: &[u8]) -> Result<DynamicImage> {
    let image = image::load_from_memory(bytes).map_err(|e| ImageError::DecodeFailed {
        field: field.to_string(),
        reason: e.to_string(),
    })?;

    let (width, height) = image.dimensions();
    debug!("Decoded {}: {}x{} ({:?})", field, width, height, image.color());
    Ok(image)
}

/// Resize to exactly `width` x `height`, ignoring the source aspect ratio.
///
/// Callers compute `height` from the ratio they want to preserve.
pub fn resize_exact(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    if image.dimensions() == (width, height) {
        return image.clone();
    }
    image.resize_exact(width, height, RESIZE_FILTER)
}
