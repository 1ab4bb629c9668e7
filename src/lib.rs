//! tick-sieve: decides which axis tick labels fit, and where they are drawn.
//!
//! Ticks and their nominal pixel coordinates come from an upstream scale; text
//! sizes come from a host-provided [`text::TextMeasurer`]. The crate returns the
//! subset of ticks a renderer should draw, thinned either by a fixed interval or
//! by a greedy overlap-avoiding scan anchored at one end of the axis.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;
pub mod text;

pub use api::{
    SelectionPolicy, SymbolicPolicy, TickSelectionConfig, TickSelector, sample_ticks,
    select_ticks,
};
pub use crate::core::{AxisGeometry, AxisOrientation, TickCandidate, TickDecision};
pub use error::{TickError, TickResult};
