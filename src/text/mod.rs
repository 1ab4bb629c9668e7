//! Text measurement seam.
//!
//! Selection only needs the size of each label's bounding box. Shaping and
//! glyph layout stay with the host, which plugs in a [`TextMeasurer`] backed by
//! whatever it renders with; [`HeuristicTextMeasurer`] covers headless use.

mod cache;
mod heuristic;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::TickResult;

pub use cache::{CachedTextMeasurer, MeasureCacheStats};
pub use heuristic::HeuristicTextMeasurer;

/// Measures a single line of label text.
///
/// Implementations must return the same size for the same `(text, font)` for
/// the duration of a selection pass.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font: &LabelFont) -> TickResult<LabelSize>;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, font: &LabelFont) -> TickResult<LabelSize> {
        (**self).measure(text, font)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for Box<T> {
    fn measure(&self, text: &str, font: &LabelFont) -> TickResult<LabelSize> {
        (**self).measure(text, font)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for Arc<T> {
    fn measure(&self, text: &str, font: &LabelFont) -> TickResult<LabelSize> {
        (**self).measure(text, font)
    }
}

/// Adapts a closure into a [`TextMeasurer`].
#[derive(Debug, Clone, Copy)]
pub struct FnTextMeasurer<F>(pub F);

impl<F> TextMeasurer for FnTextMeasurer<F>
where
    F: Fn(&str, &LabelFont) -> TickResult<LabelSize>,
{
    fn measure(&self, text: &str, font: &LabelFont) -> TickResult<LabelSize> {
        (self.0)(text, font)
    }
}

/// Font parameters forwarded to the measurer. Selection never changes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelFont {
    #[serde(default = "default_font_size_px")]
    pub size_px: f64,
    #[serde(default = "default_font_family")]
    pub family: String,
    #[serde(default)]
    pub letter_spacing_px: f64,
}

impl LabelFont {
    #[must_use]
    pub fn new(size_px: f64) -> Self {
        Self {
            size_px,
            family: default_font_family(),
            letter_spacing_px: 0.0,
        }
    }

    #[must_use]
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }

    #[must_use]
    pub fn with_letter_spacing(mut self, letter_spacing_px: f64) -> Self {
        self.letter_spacing_px = letter_spacing_px;
        self
    }
}

impl Default for LabelFont {
    fn default() -> Self {
        Self::new(default_font_size_px())
    }
}

fn default_font_size_px() -> f64 {
    12.0
}

fn default_font_family() -> String {
    "sans-serif".to_owned()
}

/// Measured bounding box of a label.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LabelSize {
    pub width: f64,
    pub height: f64,
}

impl LabelSize {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Replaces negative or non-finite components with zero.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let clean = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self {
            width: clean(self.width),
            height: clean(self.height),
        }
    }
}
