use std::fmt::Display;

use crate::core::{AxisGeometry, TickCandidate, TickDecision};
use crate::error::TickResult;
use crate::text::TextMeasurer;

use super::dispatcher::select_ticks;
use super::label_sizing::LabelSizer;
use super::TickSelectionConfig;

/// Selection front-end for one axis: a validated config plus a text measurer.
///
/// The selector holds no per-pass state, so one instance can serve repeated
/// layout passes (and parallel callers, when `M` is `Sync`).
#[derive(Debug, Clone)]
pub struct TickSelector<M> {
    config: TickSelectionConfig,
    measurer: M,
}

impl<M: TextMeasurer> TickSelector<M> {
    pub fn new(config: TickSelectionConfig, measurer: M) -> TickResult<Self> {
        config.validate()?;
        Ok(Self { config, measurer })
    }

    #[must_use]
    pub fn config(&self) -> &TickSelectionConfig {
        &self.config
    }

    #[must_use]
    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    pub fn set_config(&mut self, config: TickSelectionConfig) -> TickResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Selects ticks, labelling each with its `Display` form.
    pub fn select<V>(
        &self,
        candidates: &[TickCandidate<V>],
        geometry: AxisGeometry,
    ) -> TickResult<Vec<TickDecision<V>>>
    where
        V: Clone + Display,
    {
        self.select_with_formatter(candidates, geometry, |value, _| value.to_string())
    }

    /// Selects ticks, labelling each with `formatter(value, index)`.
    pub fn select_with_formatter<V, F>(
        &self,
        candidates: &[TickCandidate<V>],
        geometry: AxisGeometry,
        formatter: F,
    ) -> TickResult<Vec<TickDecision<V>>>
    where
        V: Clone,
        F: Fn(&V, usize) -> String,
    {
        let sizer = LabelSizer::new(
            &self.measurer,
            &self.config.font,
            geometry.primary_dimension(),
            self.config.unit.as_deref(),
            self.config.label_angle_deg,
        );
        select_ticks(
            candidates,
            self.config.policy,
            geometry,
            self.config.min_tick_gap,
            self.config.ticks_enabled,
            |candidate, index| sizer.extent(&formatter(&candidate.value, index)),
        )
    }
}
