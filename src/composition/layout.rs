use crate::error::{ComposeError, Result};
use crate::text::TextBox;

/// Width of every output image
pub const FINAL_WIDTH: u32 = 1200;

/// Width the logo is scaled to
pub const LOGO_WIDTH: u32 = 300;

/// Margin around the header band content
pub const PADDING: u32 = 50;

/// Largest canvas, in pixels, a composition may allocate
pub const MAX_CANVAS_PIXELS: u64 = 32_000_000;

/// Height of `src_width` x `src_height` scaled to `target_width`, truncated.
pub fn scaled_height(src_width: u32, src_height: u32, target_width: u32) -> u32 {
    let ratio = target_width as f64 / src_width as f64;
    (src_height as f64 * ratio) as u32
}

/// Every dimension and position of one banner
///
/// Derived from the two source image sizes and the measured caption; nothing
/// here is configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub logo_width: u32,
    pub logo_height: u32,
    pub text_width: u32,
    pub text_height: u32,
    pub header_height: u32,
    pub main_width: u32,
    pub main_height: u32,
}

impl Layout {
    /// Compute the layout for a logo and main image of the given source sizes
    pub fn compute(logo_size: (u32, u32), main_size: (u32, u32), text: TextBox) -> Result<Self> {
        let logo_height = scaled_height(logo_size.0, logo_size.1, LOGO_WIDTH);
        if logo_height == 0 {
            return Err(ComposeError::DegenerateDimensions {
                element: "logo".to_string(),
                width: logo_size.0,
                height: logo_size.1,
            }.into());
        }

        let main_height = scaled_height(main_size.0, main_size.1, FINAL_WIDTH);
        if main_height == 0 {
            return Err(ComposeError::DegenerateDimensions {
                element: "main image".to_string(),
                width: main_size.0,
                height: main_size.1,
            }.into());
        }

        // Extreme aspect ratios or captions blow up the canvas; refuse them here,
        // before anything is resized or allocated. Summed in u64 so saturated
        // heights can't wrap.
        let tallest = logo_height.max(text.height);
        let canvas_height = u64::from(tallest) + u64::from(2 * PADDING) + u64::from(main_height);
        if u64::from(FINAL_WIDTH) * canvas_height > MAX_CANVAS_PIXELS {
            return Err(ComposeError::TooLarge {
                width: FINAL_WIDTH,
                height: canvas_height,
                limit: MAX_CANVAS_PIXELS,
            }.into());
        }
        let header_height = tallest + 2 * PADDING;

        Ok(Self {
            logo_width: LOGO_WIDTH,
            logo_height,
            text_width: text.width,
            text_height: text.height,
            header_height,
            main_width: FINAL_WIDTH,
            main_height,
        })
    }

    /// Final canvas size
    pub fn canvas_size(&self) -> (u32, u32) {
        (FINAL_WIDTH, self.header_height.saturating_add(self.main_height))
    }

    /// Top-left of the logo: padded from the left, centred in the header band
    pub fn logo_origin(&self) -> (i64, i64) {
        (PADDING as i64, ((self.header_height - self.logo_height) / 2) as i64)
    }

    /// Top-left of the caption: right of the logo, centred in the header band
    pub fn text_origin(&self) -> (i32, i32) {
        (
            (self.logo_width + 2 * PADDING) as i32,
            ((self.header_height - self.text_height) / 2) as i32,
        )
    }

    /// Top-left of the main image: flush left, directly under the header
    pub fn main_origin(&self) -> (i64, i64) {
        (0, self.header_height as i64)
    }
}
