//! Geometry shared by the selection policies.
//!
//! Every overlap test is written once in terms of a scan direction `sign`
//! (`+1.0` walking towards larger coordinates, `-1.0` towards smaller ones),
//! so start-anchored and end-anchored passes use the same arithmetic.

use super::types::AxisGeometry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanDirection {
    Ascending,
    Descending,
}

impl ScanDirection {
    #[must_use]
    pub(crate) fn sign(self) -> f64 {
        match self {
            Self::Ascending => 1.0,
            Self::Descending => -1.0,
        }
    }

    /// Returns `(origin, limit)`: the boundary a scan starts from and the one it walks towards.
    #[must_use]
    pub(crate) fn boundaries(self, geometry: AxisGeometry) -> (f64, f64) {
        let (region_start, region_end) = geometry.region();
        match self {
            Self::Ascending => (region_start, region_end),
            Self::Descending => (region_end, region_start),
        }
    }
}

/// Half of a measured label extent. Unusable measurements count as an empty label.
#[must_use]
pub(crate) fn half_extent(extent: f64) -> f64 {
    if extent.is_finite() && extent > 0.0 {
        extent * 0.5
    } else {
        0.0
    }
}

/// Pushes an anchor label inward when its box spills past the scan origin.
#[must_use]
pub(crate) fn clamp_anchor(sign: f64, coordinate: f64, half_extent: f64, origin: f64) -> f64 {
    let gap = sign * (coordinate - sign * half_extent - origin);
    if gap < 0.0 {
        coordinate - gap * sign
    } else {
        coordinate
    }
}

/// True when a label centered at `tick_coord` starts at or after `reference_edge`
/// and ends at or before `limit`, both measured along the scan direction.
#[must_use]
pub(crate) fn label_fits(
    sign: f64,
    tick_coord: f64,
    half_extent: f64,
    reference_edge: f64,
    limit: f64,
) -> bool {
    let near_gap = sign * (tick_coord - sign * half_extent - reference_edge);
    let far_overflow = sign * (tick_coord + sign * half_extent - limit);
    near_gap >= 0.0 && far_overflow <= 0.0
}

/// Width a rotated label occupies along a horizontal axis.
///
/// `angle_deg` is folded into `[0, 180)`. Past the box diagonal the label's
/// height dominates its footprint, before it the width does.
#[must_use]
pub fn angled_label_width(width: f64, height: f64, angle_deg: f64) -> f64 {
    let normalized = angle_deg.rem_euclid(180.0);
    let angle = normalized.to_radians();
    let diagonal = (height / width).atan();
    let footprint = if angle > diagonal && angle < std::f64::consts::PI - diagonal {
        height / angle.sin()
    } else {
        width / angle.cos()
    };
    let footprint = footprint.abs();
    if footprint.is_finite() { footprint } else { 0.0 }
}
