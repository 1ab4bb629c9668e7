use serde::{Deserialize, Serialize};

use crate::error::{TickError, TickResult};
use crate::text::LabelFont;

use super::validation::validate_selection_config;

/// Geometry-aware selection policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SymbolicPolicy {
    /// Anchor at the first tick and walk towards the end.
    PreserveStart,
    /// Anchor at the last tick and walk towards the start.
    PreserveEnd,
    /// Like `PreserveStart`, but the last tick is reserved first when it fits.
    PreserveStartEnd,
    /// Keep every `n`-th tick for the smallest `n` at which none of them overlap.
    EquidistantPreserveStart,
}

/// How ticks are thinned out when they do not all fit.
///
/// Serialized as either a bare integer or one of the symbolic names, e.g.
/// `2` or `"preserveStartEnd"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectionPolicy {
    /// Keep every `(n + 1)`-th tick regardless of geometry. Negative `n` keeps nothing.
    Interval(i64),
    Symbolic(SymbolicPolicy),
}

impl SelectionPolicy {
    pub const PRESERVE_START: Self = Self::Symbolic(SymbolicPolicy::PreserveStart);
    pub const PRESERVE_END: Self = Self::Symbolic(SymbolicPolicy::PreserveEnd);
    pub const PRESERVE_START_END: Self = Self::Symbolic(SymbolicPolicy::PreserveStartEnd);
    pub const EQUIDISTANT_PRESERVE_START: Self =
        Self::Symbolic(SymbolicPolicy::EquidistantPreserveStart);
}

impl From<i64> for SelectionPolicy {
    fn from(interval: i64) -> Self {
        Self::Interval(interval)
    }
}

impl From<SymbolicPolicy> for SelectionPolicy {
    fn from(policy: SymbolicPolicy) -> Self {
        Self::Symbolic(policy)
    }
}

/// Serializable inputs of a [`super::TickSelector`].
///
/// Everything except the candidates and the axis geometry, which change on
/// every layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickSelectionConfig {
    /// `None` behaves as [`SymbolicPolicy::PreserveEnd`].
    #[serde(default)]
    pub policy: Option<SelectionPolicy>,
    #[serde(default = "default_min_tick_gap")]
    pub min_tick_gap: f64,
    #[serde(default = "default_ticks_enabled")]
    pub ticks_enabled: bool,
    #[serde(default)]
    pub font: LabelFont,
    /// Suffix drawn after every label on horizontal axes (e.g. `"ms"`).
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub label_angle_deg: f64,
}

impl TickSelectionConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            policy: None,
            min_tick_gap: default_min_tick_gap(),
            ticks_enabled: default_ticks_enabled(),
            font: LabelFont::default(),
            unit: None,
            label_angle_deg: 0.0,
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: impl Into<SelectionPolicy>) -> Self {
        self.policy = Some(policy.into());
        self
    }

    #[must_use]
    pub fn with_min_tick_gap(mut self, min_tick_gap: f64) -> Self {
        self.min_tick_gap = min_tick_gap;
        self
    }

    #[must_use]
    pub fn with_ticks_enabled(mut self, ticks_enabled: bool) -> Self {
        self.ticks_enabled = ticks_enabled;
        self
    }

    #[must_use]
    pub fn with_font(mut self, font: LabelFont) -> Self {
        self.font = font;
        self
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    #[must_use]
    pub fn with_label_angle(mut self, label_angle_deg: f64) -> Self {
        self.label_angle_deg = label_angle_deg;
        self
    }

    pub fn validate(&self) -> TickResult<()> {
        validate_selection_config(self)
    }

    pub fn to_json_pretty(&self) -> TickResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            TickError::Serialization(format!("failed to serialize selection config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> TickResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            TickError::Serialization(format!("failed to parse selection config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for TickSelectionConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_min_tick_gap() -> f64 {
    5.0
}

fn default_ticks_enabled() -> bool {
    true
}
