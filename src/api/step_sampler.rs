use crate::core::{TickCandidate, TickDecision};

/// Keeps the candidate at index `i` iff `i % step == 0`.
///
/// A non-positive `step` keeps nothing. Entries are passed through without
/// placement; overlap between them is the caller's concern.
#[must_use]
pub fn sample_ticks<V: Clone>(candidates: &[TickCandidate<V>], step: i64) -> Vec<TickDecision<V>> {
    if step <= 0 {
        return Vec::new();
    }
    let stride = usize::try_from(step).unwrap_or(usize::MAX);
    every_nth(candidates, stride)
}

pub(super) fn every_nth<V: Clone>(
    candidates: &[TickCandidate<V>],
    stride: usize,
) -> Vec<TickDecision<V>> {
    if stride == 0 {
        return Vec::new();
    }
    candidates
        .iter()
        .step_by(stride)
        .cloned()
        .map(TickDecision::sampled)
        .collect()
}
