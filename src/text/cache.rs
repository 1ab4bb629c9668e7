use std::sync::{Mutex, PoisonError};

use indexmap::IndexMap;
use ordered_float::OrderedFloat;

use crate::error::TickResult;

use super::{LabelFont, LabelSize, TextMeasurer};

/// Runtime metrics exposed by [`CachedTextMeasurer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeasureCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MeasureCacheKey {
    text: String,
    family: String,
    size_px: OrderedFloat<f64>,
    letter_spacing_px: OrderedFloat<f64>,
}

impl MeasureCacheKey {
    fn new(text: &str, font: &LabelFont) -> Self {
        Self {
            text: text.to_owned(),
            family: font.family.clone(),
            size_px: OrderedFloat(font.size_px),
            letter_spacing_px: OrderedFloat(font.letter_spacing_px),
        }
    }
}

#[derive(Debug, Default)]
struct MeasureCacheState {
    entries: IndexMap<MeasureCacheKey, LabelSize>,
    hits: u64,
    misses: u64,
}

/// Memoizes another measurer by `(text, font)`.
///
/// Failed measurements are not cached. When full, the oldest entry is evicted.
#[derive(Debug)]
pub struct CachedTextMeasurer<M> {
    inner: M,
    capacity: usize,
    state: Mutex<MeasureCacheState>,
}

impl<M> CachedTextMeasurer<M> {
    pub const DEFAULT_CAPACITY: usize = 4096;

    #[must_use]
    pub fn new(inner: M) -> Self {
        Self::with_capacity(inner, Self::DEFAULT_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(inner: M, capacity: usize) -> Self {
        Self {
            inner,
            capacity: capacity.max(1),
            state: Mutex::new(MeasureCacheState::default()),
        }
    }

    #[must_use]
    pub fn inner(&self) -> &M {
        &self.inner
    }

    #[must_use]
    pub fn stats(&self) -> MeasureCacheStats {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        MeasureCacheStats {
            hits: state.hits,
            misses: state.misses,
            size: state.entries.len(),
        }
    }

    pub fn clear(&self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.entries.clear();
        state.hits = 0;
        state.misses = 0;
    }
}

impl<M: TextMeasurer> TextMeasurer for CachedTextMeasurer<M> {
    fn measure(&self, text: &str, font: &LabelFont) -> TickResult<LabelSize> {
        let key = MeasureCacheKey::new(text, font);
        {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(size) = state.entries.get(&key).copied() {
                state.hits = state.hits.saturating_add(1);
                return Ok(size);
            }
        }

        // The lock is released while the inner measurer runs; it may be slow.
        let size = self.inner.measure(text, font)?;

        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.misses = state.misses.saturating_add(1);
        if state.entries.len() >= self.capacity {
            state.entries.shift_remove_index(0);
        }
        state.entries.insert(key, size);
        Ok(size)
    }
}
