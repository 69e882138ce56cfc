use std::path::Path;

use rusttype::{point, Font, PositionedGlyph, Scale};
use tracing::debug;

use crate::error::{CompositorError, Result};
use crate::raster::Canvas;
use crate::text::traits::Typeface;

/// A TrueType/OpenType face loaded from disk
///
/// `size` is the em size in pixels. rusttype scales by ascent-to-descent
/// height, so the scale is converted from the font's units per em.
pub struct TrueTypeFace {
    font: Font<'static>,
    size: u32,
    scale: Scale,
    ascent: f32,
}

impl TrueTypeFace {
    /// Load a face from a font file
    pub fn load<P: AsRef<Path>>(path: P, size: u32) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let font = Font::try_from_vec(data).ok_or_else(|| {
            CompositorError::generic(format!("{} is not a usable font file", path.display()))
        })?;
        debug!("Loaded font {:?} ({} glyphs)", path, font.glyph_count());
        Ok(Self::from_font(font, size))
    }

    /// Wrap an already-parsed font
    pub fn from_font(font: Font<'static>, size: u32) -> Self {
        let unscaled = font.v_metrics_unscaled();
        let units_per_em = font.units_per_em().max(1) as f32;
        let pixel_height = size as f32 * (unscaled.ascent - unscaled.descent) / units_per_em;
        let scale = Scale::uniform(pixel_height);
        let ascent = font.v_metrics(scale).ascent;

        Self { font, size, scale, ascent }
    }

    fn layout_line(&self, line: &str, x: f32, y: f32) -> Vec<PositionedGlyph<'static>> {
        self.font
            .layout(line, self.scale, point(x, y + self.ascent))
            .collect()
    }
}

impl Typeface for TrueTypeFace {
    fn name(&self) -> &str {
        "truetype"
    }

    fn size(&self) -> u32 {
        self.size
    }

    fn line_extent(&self, line: &str) -> (u32, u32) {
        let mut right = 0i32;
        let mut bottom = 0i32;
        for glyph in self.layout_line(line, 0.0, 0.0) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                right = right.max(bb.max.x);
                bottom = bottom.max(bb.max.y);
            }
        }
        (right.max(0) as u32, bottom.max(0) as u32)
    }

    fn line_advance(&self) -> u32 {
        // Height of a capital, as measured from the top of the line
        self.line_extent("A").1
    }

    fn draw_line(&self, canvas: &mut Canvas, x: i32, y: i32, line: &str, color: [u8; 3]) {
        let (width, height) = (canvas.width() as i32, canvas.height() as i32);
        for glyph in self.layout_line(line, x as f32, y as f32) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                if bb.max.x <= 0 || bb.max.y <= 0 || bb.min.x >= width || bb.min.y >= height {
                    continue;
                }
                glyph.draw(|gx, gy, coverage| {
                    canvas.blend_pixel(bb.min.x + gx as i32, bb.min.y + gy as i32, color, coverage);
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempdir().unwrap();
        assert!(TrueTypeFace::load(dir.path().join("missing.ttf"), 50).is_err());
    }

    fn fixture_face(size: u32) -> TrueTypeFace {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/DejaVuSansMono.ttf");
        TrueTypeFace::load(path, size).unwrap()
    }

    #[test]
    fn test_fixture_font_measures_lines() {
        let face = fixture_face(50);
        let (right, bottom) = face.line_extent("Hello");
        assert!(right > 0 && bottom > 0);
        assert!(face.line_advance() > 0);
        assert_eq!(face.line_extent(""), (0, 0));
        // monospaced: twice the characters, about twice the width
        assert!(face.line_extent("HelloHello").0 > right * 3 / 2);
    }

    #[test]
    fn test_draw_skips_glyphs_off_canvas() {
        let face = fixture_face(50);
        let mut canvas = Canvas::new_white(40, 40);
        face.draw_line(&mut canvas, 5, 0, "H", [0, 0, 0]);
        let inked = (0..40).flat_map(|x| (0..40).map(move |y| (x, y))).any(|(x, y)| canvas.get_pixel(x, y)[0] < 128);
        assert!(inked);

        let mut canvas = Canvas::new_white(40, 40);
        face.draw_line(&mut canvas, 1000, 1000, "H", [0, 0, 0]);
        face.draw_line(&mut canvas, -1000, -1000, "H", [0, 0, 0]);
        let inked = (0..40).flat_map(|x| (0..40).map(move |y| (x, y))).any(|(x, y)| canvas.get_pixel(x, y) != [255, 255, 255]);
        assert!(!inked);
    }

    #[test]
    fn test_load_non_font_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fake.ttf");
        std::fs::write(&path, b"this is not a font").unwrap();
        assert!(TrueTypeFace::load(&path, 50).is_err());
    }
}
