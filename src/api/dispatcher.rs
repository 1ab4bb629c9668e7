use tracing::debug;

use crate::core::{AxisGeometry, TickCandidate, TickDecision};
use crate::error::TickResult;

use super::equidistant_selector::select_equidistant;
use super::overlap_selector::{OverlapPolicy, select_without_overlap};
use super::step_sampler::sample_ticks;
use super::validation::{validate_candidates, validate_geometry, validate_min_tick_gap};
use super::{SelectionPolicy, SymbolicPolicy};

/// Decides which candidates are drawn and where.
///
/// `label_extent` returns the size of a candidate's label along the axis'
/// primary dimension; it is only called by geometry-aware policies, at most
/// once per candidate. Disabled ticks, empty input, and negative intervals all
/// yield an empty list.
///
/// # Errors
///
/// Geometry-aware policies fail fast on malformed geometry, a non-finite
/// `min_tick_gap`, and candidates that are not ordered by coordinate.
pub fn select_ticks<V, F>(
    candidates: &[TickCandidate<V>],
    policy: Option<SelectionPolicy>,
    geometry: AxisGeometry,
    min_tick_gap: f64,
    ticks_enabled: bool,
    label_extent: F,
) -> TickResult<Vec<TickDecision<V>>>
where
    V: Clone,
    F: FnMut(&TickCandidate<V>, usize) -> f64,
{
    if !ticks_enabled || candidates.is_empty() {
        return Ok(Vec::new());
    }

    let symbolic = match policy {
        Some(SelectionPolicy::Interval(interval)) => {
            let step = interval.saturating_add(1);
            debug!(
                interval,
                step,
                candidates = candidates.len(),
                "sampling ticks by interval"
            );
            return Ok(sample_ticks(candidates, step));
        }
        Some(SelectionPolicy::Symbolic(symbolic)) => symbolic,
        None => SymbolicPolicy::PreserveEnd,
    };

    let geometry = validate_geometry(geometry)?;
    let min_tick_gap = validate_min_tick_gap(min_tick_gap)?;
    validate_candidates(candidates)?;

    let overlap_policy = match symbolic {
        SymbolicPolicy::PreserveStart => OverlapPolicy::PreserveStart,
        SymbolicPolicy::PreserveEnd => OverlapPolicy::PreserveEnd,
        SymbolicPolicy::PreserveStartEnd => OverlapPolicy::PreserveStartEnd,
        SymbolicPolicy::EquidistantPreserveStart => {
            let selected = select_equidistant(candidates, geometry, min_tick_gap, label_extent);
            debug!(
                policy = ?symbolic,
                candidates = candidates.len(),
                selected = selected.len(),
                "selected equidistant ticks"
            );
            return Ok(selected);
        }
    };

    let selected = select_without_overlap(
        candidates,
        overlap_policy,
        geometry,
        min_tick_gap,
        label_extent,
    );
    debug!(
        policy = ?symbolic,
        candidates = candidates.len(),
        selected = selected.len(),
        "selected non-overlapping ticks"
    );
    Ok(selected)
}
