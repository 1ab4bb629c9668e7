use tracing::trace;

use crate::core::geometry::{ScanDirection, clamp_anchor, half_extent, label_fits};
use crate::core::{AxisGeometry, TickCandidate, TickDecision};

/// Anchored policies handled by the directional greedy scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum OverlapPolicy {
    PreserveStart,
    PreserveEnd,
    PreserveStartEnd,
}

/// Greedy walk along the axis in one direction.
///
/// `reference_edge` is where the next label may begin: the scan origin at
/// first, then the far edge of the last accepted label plus the minimum gap.
/// Rejections leave it untouched.
#[derive(Debug, Clone, Copy)]
pub(super) struct DirectionalScan {
    sign: f64,
    reference_edge: f64,
    limit: f64,
    min_tick_gap: f64,
}

impl DirectionalScan {
    pub(super) fn new(direction: ScanDirection, geometry: AxisGeometry, min_tick_gap: f64) -> Self {
        let (origin, limit) = direction.boundaries(geometry);
        Self {
            sign: direction.sign(),
            reference_edge: origin,
            limit,
            min_tick_gap,
        }
    }

    pub(super) fn reference_edge(&self) -> f64 {
        self.reference_edge
    }

    /// Offers the first label of the scan, which may be moved off the origin boundary.
    pub(super) fn offer_anchor(&mut self, coordinate: f64, half_extent: f64) -> Option<f64> {
        let tick_coord = clamp_anchor(self.sign, coordinate, half_extent, self.reference_edge);
        self.offer(tick_coord, half_extent)
    }

    pub(super) fn offer(&mut self, tick_coord: f64, half_extent: f64) -> Option<f64> {
        if !label_fits(
            self.sign,
            tick_coord,
            half_extent,
            self.reference_edge,
            self.limit,
        ) {
            return None;
        }
        self.accept(tick_coord, half_extent);
        Some(tick_coord)
    }

    /// Records a label as shown without testing it.
    pub(super) fn accept(&mut self, tick_coord: f64, half_extent: f64) {
        self.reference_edge = tick_coord + self.sign * (half_extent + self.min_tick_gap);
    }
}

pub(super) fn select_without_overlap<V, F>(
    candidates: &[TickCandidate<V>],
    policy: OverlapPolicy,
    geometry: AxisGeometry,
    min_tick_gap: f64,
    mut label_extent: F,
) -> Vec<TickDecision<V>>
where
    V: Clone,
    F: FnMut(&TickCandidate<V>, usize) -> f64,
{
    let Some(last) = candidates.len().checked_sub(1) else {
        return Vec::new();
    };
    let mut tick_coords: Vec<Option<f64>> = vec![None; candidates.len()];
    let mut half_of = |index: usize| half_extent(label_extent(&candidates[index], index));

    match policy {
        OverlapPolicy::PreserveEnd => {
            let mut scan = DirectionalScan::new(ScanDirection::Descending, geometry, min_tick_gap);
            for index in (0..=last).rev() {
                let half = half_of(index);
                let coordinate = candidates[index].coordinate;
                tick_coords[index] = if index == last {
                    scan.offer_anchor(coordinate, half)
                } else {
                    scan.offer(coordinate, half)
                };
                trace_offer(index, coordinate, tick_coords[index]);
            }
        }
        OverlapPolicy::PreserveStart | OverlapPolicy::PreserveStartEnd => {
            let mut scan = DirectionalScan::new(ScanDirection::Ascending, geometry, min_tick_gap);
            let mut forward_count = candidates.len();

            if policy == OverlapPolicy::PreserveStartEnd {
                // Reserve room for the tail before the forward pass fills the axis.
                let mut tail =
                    DirectionalScan::new(ScanDirection::Descending, geometry, min_tick_gap);
                let half = half_of(last);
                let coordinate = candidates[last].coordinate;
                tick_coords[last] = tail.offer_anchor(coordinate, half);
                trace_offer(last, coordinate, tick_coords[last]);
                if tick_coords[last].is_some() {
                    scan.limit = tail.reference_edge();
                }
                forward_count = last;
            }

            for index in 0..forward_count {
                let half = half_of(index);
                let coordinate = candidates[index].coordinate;
                tick_coords[index] = if index == 0 {
                    scan.offer_anchor(coordinate, half)
                } else {
                    scan.offer(coordinate, half)
                };
                trace_offer(index, coordinate, tick_coords[index]);
            }
        }
    }

    candidates
        .iter()
        .zip(tick_coords)
        .filter_map(|(candidate, tick_coord)| {
            tick_coord.map(|tick_coord| TickDecision::placed(candidate.clone(), tick_coord))
        })
        .collect()
}

fn trace_offer(index: usize, coordinate: f64, tick_coord: Option<f64>) {
    match tick_coord {
        Some(tick_coord) => trace!(index, coordinate, tick_coord, "tick label accepted"),
        None => trace!(index, coordinate, "tick label rejected"),
    }
}
