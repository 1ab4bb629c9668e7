use crate::error::TickResult;

use super::{LabelFont, LabelSize, TextMeasurer};

/// Deterministic, backend-independent label size estimate.
///
/// Widths come from per-glyph-class factors of the font size; the height is the
/// font size itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTextMeasurer;

impl HeuristicTextMeasurer {
    fn glyph_units(ch: char) -> f64 {
        match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    }
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font: &LabelFont) -> TickResult<LabelSize> {
        if text.is_empty() {
            return Ok(LabelSize::ZERO);
        }

        let (units, glyphs) = text
            .chars()
            .fold((0.0, 0usize), |(units, glyphs), ch| {
                (units + Self::glyph_units(ch), glyphs + 1)
            });
        let spacing = font.letter_spacing_px * glyphs.saturating_sub(1) as f64;
        let width = (units * font.size_px + spacing).max(font.size_px);
        Ok(LabelSize::new(width, font.size_px).sanitized())
    }
}
