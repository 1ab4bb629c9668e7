pub mod geometry;
pub mod types;

pub use geometry::angled_label_width;
pub use types::{
    AxisGeometry, AxisOrientation, PrimaryDimension, TickCandidate, TickDecision, TickPlacement,
    ViewBox,
};
