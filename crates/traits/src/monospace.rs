//! A deterministic fixed-advance measurer for headless layout and tests.

use crate::measure::{MeasureError, TextMeasureRequest, TextMeasurer};
use flexa_types::Size;

/// Measures text as if every character had the same advance.
///
/// Each character is `font_size * advance_ratio` wide. Wrapping is greedy on
/// whitespace; a word wider than the available width sits on a line of its own.
/// Explicit `\n` always breaks the line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    pub advance_ratio: f32,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self { advance_ratio: 0.5 }
    }
}

impl MonospaceMeasurer {
    pub fn new(advance_ratio: f32) -> Self {
        Self { advance_ratio }
    }

    fn width_of(&self, chars: usize, font_size: f32) -> f32 {
        chars as f32 * font_size * self.advance_ratio
    }

    /// Greedily packs the words of one hard line, returning (line count, widest line in chars).
    fn wrap_paragraph(&self, paragraph: &str, max_chars: Option<usize>) -> (usize, usize) {
        let Some(limit) = max_chars else {
            return (1, paragraph.chars().count());
        };

        let mut lines = 1;
        let mut current = 0usize;
        let mut widest = 0usize;
        for word in paragraph.split_whitespace() {
            let len = word.chars().count();
            if current == 0 {
                current = len;
            } else if current + 1 + len <= limit {
                current += 1 + len;
            } else {
                widest = widest.max(current);
                lines += 1;
                current = len;
            }
        }
        (lines, widest.max(current))
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, request: &TextMeasureRequest<'_>) -> Result<Size, MeasureError> {
        if request.text.is_empty() {
            return Ok(Size::zero());
        }

        let advance = request.font_size * self.advance_ratio;
        let max_chars = match (request.no_wrap, request.max_width) {
            (false, Some(width)) if advance > 0.0 => Some((width / advance).floor().max(0.0) as usize),
            _ => None,
        };

        let mut lines = 0usize;
        let mut widest = 0usize;
        for paragraph in request.text.split('\n') {
            let (count, width) = self.wrap_paragraph(paragraph, max_chars);
            lines += count;
            widest = widest.max(width);
        }

        Ok(Size::new(
            self.width_of(widest, request.font_size),
            lines as f32 * request.line_height,
        ))
    }

    fn name(&self) -> &'static str {
        "MonospaceMeasurer"
    }
}
