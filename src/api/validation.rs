use crate::core::{AxisGeometry, TickCandidate};
use crate::error::{TickError, TickResult};

use super::TickSelectionConfig;

pub(super) fn validate_geometry(geometry: AxisGeometry) -> TickResult<AxisGeometry> {
    if !geometry.is_valid() {
        return Err(TickError::InvalidGeometry {
            start: geometry.view_box_start,
            extent: geometry.view_box_extent,
        });
    }
    Ok(geometry)
}

/// Coordinates must be finite and non-decreasing.
pub(super) fn validate_candidates<V>(candidates: &[TickCandidate<V>]) -> TickResult<()> {
    let mut previous: Option<f64> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let current = candidate.coordinate;
        if !current.is_finite() {
            return Err(TickError::NonFiniteCoordinate { index });
        }
        if let Some(previous) = previous {
            if current < previous {
                return Err(TickError::UnorderedCandidates {
                    index,
                    previous,
                    current,
                });
            }
        }
        previous = Some(current);
    }
    Ok(())
}

/// A negative gap is allowed and lets neighbouring labels overlap by that much.
pub(super) fn validate_min_tick_gap(min_tick_gap: f64) -> TickResult<f64> {
    if !min_tick_gap.is_finite() {
        return Err(TickError::InvalidConfig(
            "min_tick_gap must be finite".to_owned(),
        ));
    }
    Ok(min_tick_gap)
}

pub(super) fn validate_selection_config(config: &TickSelectionConfig) -> TickResult<()> {
    validate_min_tick_gap(config.min_tick_gap)?;

    if !config.label_angle_deg.is_finite() {
        return Err(TickError::InvalidConfig(
            "label_angle_deg must be finite".to_owned(),
        ));
    }

    if !config.font.size_px.is_finite() || config.font.size_px <= 0.0 {
        return Err(TickError::InvalidConfig(
            "font size must be finite and > 0".to_owned(),
        ));
    }
    if !config.font.letter_spacing_px.is_finite() {
        return Err(TickError::InvalidConfig(
            "letter spacing must be finite".to_owned(),
        ));
    }

    Ok(())
}
