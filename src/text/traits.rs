use crate::raster::Canvas;

/// Pixel extent of a block of caption text, measured from its top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBox {
    pub width: u32,
    pub height: u32,
}

/// Core trait for anything that can measure and draw caption text
///
/// Implementors only deal with single lines; multi-line layout is provided on
/// top of [`line_extent`](Typeface::line_extent) and
/// [`line_advance`](Typeface::line_advance) so that every face stacks lines
/// the same way.
pub trait Typeface: Send + Sync {
    /// Returns a short identifier for logging
    fn name(&self) -> &str;

    /// The size this face was resolved at
    fn size(&self) -> u32;

    /// Right and bottom edge of the inked pixels of `line`, drawn with its
    /// top-left at the origin. Empty lines are `(0, 0)`.
    fn line_extent(&self, line: &str) -> (u32, u32);

    /// Vertical distance between the tops of consecutive lines, before any
    /// extra spacing.
    fn line_advance(&self) -> u32;

    /// Draw a single line with its top-left at (x, y)
    fn draw_line(&self, canvas: &mut Canvas, x: i32, y: i32, line: &str, color: [u8; 3]);

    /// Measure multi-line `text`; `spacing` extra pixels separate the lines.
    fn measure(&self, text: &str, spacing: u32) -> TextBox {
        let step = self.line_advance().saturating_add(spacing);
        let mut bbox = TextBox::default();

        for (i, line) in split_lines(text).into_iter().enumerate() {
            let (right, bottom) = self.line_extent(line);
            if right == 0 && bottom == 0 {
                continue;
            }
            bbox.width = bbox.width.max(right);
            bbox.height = bbox.height.max((i as u32).saturating_mul(step).saturating_add(bottom));
        }

        bbox
    }

    /// Draw multi-line `text` with its top-left at (x, y)
    fn draw(&self, canvas: &mut Canvas, x: i32, y: i32, text: &str, spacing: u32, color: [u8; 3]) {
        let step = i64::from(self.line_advance().saturating_add(spacing));
        let bottom = i64::from(canvas.height());
        for (i, line) in split_lines(text).into_iter().enumerate() {
            let top = i64::from(y) + i as i64 * step;
            if top >= bottom {
                break;
            }
            if !line.is_empty() {
                self.draw_line(canvas, x, top as i32, line, color);
            }
        }
    }
}

/// Split caption text on embedded line breaks.
///
/// Browsers submit textarea content with `\r\n`; a lone `\r` is also a break.
/// Trailing empty lines are kept, they just contribute no ink.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        lines.extend(line.split('\r'));
    }
    lines
}
