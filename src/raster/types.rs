use image::{codecs::png::PngEncoder, imageops, ColorType, DynamicImage, ImageBuffer, ImageEncoder, Rgba, RgbaImage, RgbImage};

use crate::error::{ImageError, Result};

/// The mutable output raster
///
/// Stored as RGBA so that the logo can be blended with its own alpha, but
/// always opaque: it starts filled with an opaque colour and is flattened to
/// RGB when encoded.
#[derive(Clone, Debug)]
pub struct Canvas {
    buffer: RgbaImage,
}

impl Canvas {
    /// Create a new canvas with the given dimensions filled with the specified color
    pub fn new_filled(width: u32, height: u32, color: [u8; 3]) -> Self {
        let buffer = ImageBuffer::from_pixel(width, height, Rgba([color[0], color[1], color[2], 255]));
        Self { buffer }
    }

    /// Create a new white canvas
    pub fn new_white(width: u32, height: u32) -> Self {
        Self::new_filled(width, height, [255, 255, 255])
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Get a pixel at the given coordinates (returns RGB array)
    #[cfg(test)]
    pub(crate) fn get_pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let pixel = self.buffer.get_pixel(x, y);
        [pixel[0], pixel[1], pixel[2]]
    }

    /// Paste `top` at (x, y), using its alpha channel as the mask.
    pub fn paste_masked(&mut self, top: &RgbaImage, x: i64, y: i64) {
        imageops::overlay(&mut self.buffer, top, x, y);
    }

    /// Paste `top` at (x, y), overwriting whatever is underneath.
    pub fn paste_opaque(&mut self, top: &RgbImage, x: i64, y: i64) {
        let opaque = DynamicImage::ImageRgb8(top.clone()).to_rgba8();
        imageops::replace(&mut self.buffer, &opaque, x, y);
    }

    /// Blend `color` into the pixel at (x, y) with the given coverage (0.0-1.0).
    ///
    /// Coordinates outside the canvas are ignored.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: [u8; 3], coverage: f32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.buffer.width() || y >= self.buffer.height() {
            return;
        }

        let alpha = coverage.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let inv = 1.0 - alpha;
        let dst = self.buffer.get_pixel_mut(x, y);
        for c in 0..3 {
            dst.0[c] = (color[c] as f32 * alpha + dst.0[c] as f32 * inv).round() as u8;
        }
        dst.0[3] = 255;
    }

    /// Flatten to RGB and encode as PNG
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let rgb = DynamicImage::ImageRgba8(self.buffer.clone()).to_rgb8();
        let mut out = Vec::new();
        PngEncoder::new(&mut out)
            .write_image(rgb.as_raw(), rgb.width(), rgb.height(), ColorType::Rgb8)
            .map_err(|e| ImageError::EncodingFailed { reason: e.to_string() })?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_white_canvas() {
        let canvas = Canvas::new_white(4, 3);
        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.height(), 3);
        assert_eq!(canvas.get_pixel(3, 2), [255, 255, 255]);
    }

    #[test]
    fn test_masked_paste_keeps_background_under_transparent_pixels() {
        let mut canvas = Canvas::new_white(4, 4);
        let mut logo = RgbaImage::new(2, 1);
        logo.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        logo.put_pixel(1, 0, Rgba([0, 0, 255, 0]));

        canvas.paste_masked(&logo, 1, 1);

        assert_eq!(canvas.get_pixel(1, 1), [255, 0, 0]);
        assert_eq!(canvas.get_pixel(2, 1), [255, 255, 255]);
    }

    #[test]
    fn test_opaque_paste_overwrites() {
        let mut canvas = Canvas::new_white(3, 3);
        let photo = RgbImage::from_pixel(3, 1, image::Rgb([10, 20, 30]));

        canvas.paste_opaque(&photo, 0, 2);

        assert_eq!(canvas.get_pixel(0, 2), [10, 20, 30]);
        assert_eq!(canvas.get_pixel(0, 1), [255, 255, 255]);
    }

    #[test]
    fn test_blend_pixel_outside_is_ignored() {
        let mut canvas = Canvas::new_white(2, 2);
        canvas.blend_pixel(-1, 0, [0, 0, 0], 1.0);
        canvas.blend_pixel(5, 5, [0, 0, 0], 1.0);
        canvas.blend_pixel(1, 1, [0, 0, 0], 1.0);
        assert_eq!(canvas.get_pixel(0, 0), [255, 255, 255]);
        assert_eq!(canvas.get_pixel(1, 1), [0, 0, 0]);
    }

    #[test]
    fn test_encode_png_signature_and_size() {
        let canvas = Canvas::new_white(7, 5);
        let bytes = canvas.encode_png().unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (7, 5));
    }
}
