use tracing::{debug, trace};

use crate::core::geometry::{ScanDirection, half_extent};
use crate::core::{AxisGeometry, TickCandidate, TickDecision};

use super::overlap_selector::DirectionalScan;
use super::step_sampler::every_nth;

/// Finds the smallest stride whose ticks all fit and returns them unplaced.
///
/// The first tick is always kept and is not clamped; every other strided tick
/// must clear the previous one by `min_tick_gap` and end inside the region.
/// Each label is measured at most once across all strides tried.
pub(super) fn select_equidistant<V, F>(
    candidates: &[TickCandidate<V>],
    geometry: AxisGeometry,
    min_tick_gap: f64,
    mut label_extent: F,
) -> Vec<TickDecision<V>>
where
    V: Clone,
    F: FnMut(&TickCandidate<V>, usize) -> f64,
{
    let len = candidates.len();
    let mut halves: Vec<Option<f64>> = vec![None; len];
    let mut half_of = |index: usize| {
        *halves[index]
            .get_or_insert_with(|| half_extent(label_extent(&candidates[index], index)))
    };

    'stride: for stride in 1..=len {
        let mut scan = DirectionalScan::new(ScanDirection::Ascending, geometry, min_tick_gap);
        for index in (0..len).step_by(stride) {
            let half = half_of(index);
            let coordinate = candidates[index].coordinate;
            if index == 0 {
                scan.accept(coordinate, half);
                continue;
            }
            if scan.offer(coordinate, half).is_none() {
                trace!(stride, index, coordinate, "stride rejected");
                continue 'stride;
            }
        }
        debug!(stride, "equidistant stride selected");
        return every_nth(candidates, stride);
    }

    Vec::new()
}
