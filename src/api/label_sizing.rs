use std::cell::OnceCell;

use tracing::warn;

use crate::core::{PrimaryDimension, angled_label_width};
use crate::text::{LabelFont, LabelSize, TextMeasurer};

/// Turns label text into an extent along the axis' primary dimension.
pub(super) struct LabelSizer<'a, M: ?Sized> {
    measurer: &'a M,
    font: &'a LabelFont,
    dimension: PrimaryDimension,
    unit: Option<&'a str>,
    unit_size: OnceCell<LabelSize>,
    label_angle_deg: f64,
}

impl<'a, M: TextMeasurer + ?Sized> LabelSizer<'a, M> {
    pub(super) fn new(
        measurer: &'a M,
        font: &'a LabelFont,
        dimension: PrimaryDimension,
        unit: Option<&'a str>,
        label_angle_deg: f64,
    ) -> Self {
        Self {
            measurer,
            font,
            dimension,
            unit,
            unit_size: OnceCell::new(),
            label_angle_deg,
        }
    }

    /// The unit suffix is measured on first use, once per pass.
    fn unit_size(&self) -> LabelSize {
        *self.unit_size.get_or_init(|| match self.unit {
            Some(unit) => measure_or_zero(self.measurer, unit, self.font),
            None => LabelSize::ZERO,
        })
    }

    pub(super) fn extent(&self, text: &str) -> f64 {
        let size = measure_or_zero(self.measurer, text, self.font);
        match self.dimension {
            PrimaryDimension::Horizontal => {
                let unit = self.unit_size();
                angled_label_width(
                    size.width + unit.width,
                    size.height + unit.height,
                    self.label_angle_deg,
                )
            }
            PrimaryDimension::Vertical => size.height,
        }
    }
}

fn measure_or_zero<M: TextMeasurer + ?Sized>(
    measurer: &M,
    text: &str,
    font: &LabelFont,
) -> LabelSize {
    match measurer.measure(text, font) {
        Ok(size) => size.sanitized(),
        Err(err) => {
            warn!(%err, text, "label measurement failed, treating it as zero-sized");
            LabelSize::ZERO
        }
    }
}
