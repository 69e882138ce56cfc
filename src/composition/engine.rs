use image::{DynamicImage, GenericImageView};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    composition::layout::Layout,
    config::FontConfig,
    error::{ComposeError, ConfigError, Result},
    raster::{decode_image, resize_exact, Canvas},
    text::{resolve_font, Typeface},
};

/// Caption colour
const TEXT_COLOR: [u8; 3] = [0, 0, 0];

/// Largest accepted caption font size, in pixels
pub const MAX_FONT_SIZE: u32 = 1000;

/// Per-composition options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposeOptions {
    /// Caption font size in pixels, used when a request doesn't carry one
    pub font_size: u32,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self { font_size: 50 }
    }
}

impl ComposeOptions {
    pub(crate) fn validate(&self) -> Result<()> {
        if !(1..=MAX_FONT_SIZE).contains(&self.font_size) {
            return Err(ConfigError::InvalidValue {
                key: "compose.font_size".to_string(),
                value: self.font_size.to_string()
            }.into());
        }
        Ok(())
    }
}

/// A finished banner: the encoded PNG and the layout it was drawn with
#[derive(Debug, Clone)]
pub struct Banner {
    pub png: Vec<u8>,
    pub layout: Layout,
}

/// Composes a logo, a caption and a main image into one banner
///
/// The pipeline for each call:
/// 1. Input validation - all three inputs present, font size in range
/// 2. Decoding - both images, the logo normalized to RGBA
/// 3. Font resolution - bundled face, or the built-in one
/// 4. Layout - scaled sizes, caption box, header height, canvas budget
/// 5. Drawing - white canvas, logo, caption, main image
/// 6. Encoding - PNG
///
/// Each call owns everything it touches; a `Composer` can be shared freely
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    font: FontConfig,
}

impl Composer {
    /// Create a composer that loads captions from the given font settings
    pub fn new(font: FontConfig) -> Self {
        Self { font }
    }

    /// Compose a banner and return it as PNG bytes
    ///
    /// # Arguments
    ///
    /// * `logo` - Encoded logo image (PNG, JPEG, ...); transparency is honoured
    /// * `main_image` - Encoded main photo
    /// * `text` - Caption, line breaks are kept as-is
    /// * `font_size` - Caption size in pixels
    pub fn compose(&self, logo: &[u8], main_image: &[u8], text: &str, font_size: u32) -> Result<Vec<u8>> {
        self.render(logo, main_image, text, font_size).map(|banner| banner.png)
    }

    /// Compose a banner, also returning the computed layout
    pub fn render(&self, logo: &[u8], main_image: &[u8], text: &str, font_size: u32) -> Result<Banner> {
        // Step 1: nothing is decoded until every input is known to be present
        Self::validate_inputs(logo, main_image, text, font_size)?;

        // Step 2: decoding; the logo keeps (or gains) an alpha channel for pasting
        let logo = DynamicImage::ImageRgba8(decode_image("logo", logo)?.to_rgba8());
        let main_image = decode_image("main_image", main_image)?;

        // Step 3: font resolution
        let face = resolve_font(&self.font, font_size);
        debug!("Caption face: {} at {}px", face.name(), face.size());

        // Step 4: layout
        let text_box = face.measure(text, self.font.line_spacing);
        let layout = Layout::compute(logo.dimensions(), main_image.dimensions(), text_box)?;
        debug!("Layout: {:?}", layout);

        // Step 5: drawing
        let canvas = self.draw(&layout, &logo, &main_image, face.as_ref(), text);

        // Step 6: encoding
        let png = canvas.encode_png()?;

        let (width, height) = layout.canvas_size();
        info!("Composed {}x{} banner ({} bytes)", width, height, png.len());

        Ok(Banner { png, layout })
    }

    fn validate_inputs(logo: &[u8], main_image: &[u8], text: &str, font_size: u32) -> Result<()> {
        let missing = if logo.is_empty() {
            Some("logo")
        } else if main_image.is_empty() {
            Some("main_image")
        } else if text.is_empty() {
            Some("text_input")
        } else {
            None
        };

        if let Some(field) = missing {
            return Err(ComposeError::MissingInput { field: field.to_string() }.into());
        }

        if !(1..=MAX_FONT_SIZE).contains(&font_size) {
            return Err(ComposeError::InvalidFontSize { size: font_size }.into());
        }

        Ok(())
    }

    fn draw(
        &self,
        layout: &Layout,
        logo: &DynamicImage,
        main_image: &DynamicImage,
        face: &dyn Typeface,
        text: &str,
    ) -> Canvas {
        let (width, height) = layout.canvas_size();
        let mut canvas = Canvas::new_white(width, height);

        let logo = resize_exact(logo, layout.logo_width, layout.logo_height).to_rgba8();
        let (logo_x, logo_y) = layout.logo_origin();
        canvas.paste_masked(&logo, logo_x, logo_y);

        let (text_x, text_y) = layout.text_origin();
        face.draw(&mut canvas, text_x, text_y, text, self.font.line_spacing, TEXT_COLOR);

        let main_image = resize_exact(main_image, layout.main_width, layout.main_height).to_rgb8();
        let (main_x, main_y) = layout.main_origin();
        canvas.paste_opaque(&main_image, main_x, main_y);

        canvas
    }
}
