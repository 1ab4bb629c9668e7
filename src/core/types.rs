use serde::{Deserialize, Serialize};

/// Side of the plot an axis is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisOrientation {
    Top,
    Bottom,
    Left,
    Right,
}

impl AxisOrientation {
    /// Direction along which this axis distributes its ticks.
    #[must_use]
    pub fn primary_dimension(self) -> PrimaryDimension {
        match self {
            Self::Top | Self::Bottom => PrimaryDimension::Horizontal,
            Self::Left | Self::Right => PrimaryDimension::Vertical,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrimaryDimension {
    /// Ticks spread along x; labels are sized by width.
    Horizontal,
    /// Ticks spread along y; labels are sized by height.
    Vertical,
}

/// Full drawable rectangle, as handed down by the chart layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Drawable region of one axis, reduced to its primary dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisGeometry {
    pub orientation: AxisOrientation,
    pub view_box_start: f64,
    pub view_box_extent: f64,
}

impl AxisGeometry {
    #[must_use]
    pub fn new(orientation: AxisOrientation, view_box_start: f64, view_box_extent: f64) -> Self {
        Self {
            orientation,
            view_box_start,
            view_box_extent,
        }
    }

    /// Picks `x/width` for horizontal axes and `y/height` for vertical ones.
    #[must_use]
    pub fn from_view_box(orientation: AxisOrientation, view_box: ViewBox) -> Self {
        match orientation.primary_dimension() {
            PrimaryDimension::Horizontal => Self::new(orientation, view_box.x, view_box.width),
            PrimaryDimension::Vertical => Self::new(orientation, view_box.y, view_box.height),
        }
    }

    #[must_use]
    pub fn primary_dimension(self) -> PrimaryDimension {
        self.orientation.primary_dimension()
    }

    /// Returns `(region_start, region_end)` along the primary dimension.
    #[must_use]
    pub fn region(self) -> (f64, f64) {
        (
            self.view_box_start,
            self.view_box_start + self.view_box_extent,
        )
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.view_box_start.is_finite()
            && self.view_box_extent.is_finite()
            && self.view_box_extent >= 0.0
    }
}

/// One tick proposed by the upstream scale, before selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickCandidate<V> {
    pub value: V,
    pub coordinate: f64,
}

impl<V> TickCandidate<V> {
    #[must_use]
    pub fn new(value: V, coordinate: f64) -> Self {
        Self { value, coordinate }
    }
}

/// Where an overlap-checked tick is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickPlacement {
    /// Display coordinate, possibly moved inward so the label stays inside the axis.
    pub tick_coord: f64,
    pub is_show: bool,
}

/// A tick the rendering stage should draw.
///
/// Interval-sampled ticks are passed through untouched and carry no placement.
/// Ticks chosen by an overlap-avoiding policy carry the placement computed for
/// them; on the wire the placement fields sit next to `value` and `coordinate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickDecision<V> {
    pub value: V,
    pub coordinate: f64,
    #[serde(flatten)]
    pub placement: Option<TickPlacement>,
}

impl<V> TickDecision<V> {
    #[must_use]
    pub fn sampled(candidate: TickCandidate<V>) -> Self {
        Self {
            value: candidate.value,
            coordinate: candidate.coordinate,
            placement: None,
        }
    }

    #[must_use]
    pub fn placed(candidate: TickCandidate<V>, tick_coord: f64) -> Self {
        Self {
            value: candidate.value,
            coordinate: candidate.coordinate,
            placement: Some(TickPlacement {
                tick_coord,
                is_show: true,
            }),
        }
    }

    /// Coordinate the label should be drawn at.
    #[must_use]
    pub fn render_coord(&self) -> f64 {
        self.placement
            .map_or(self.coordinate, |placement| placement.tick_coord)
    }

    #[must_use]
    pub fn is_show(&self) -> bool {
        self.placement.is_none_or(|placement| placement.is_show)
    }

    /// Drops the placement, giving back the candidate this decision was made for.
    #[must_use]
    pub fn into_candidate(self) -> TickCandidate<V> {
        TickCandidate::new(self.value, self.coordinate)
    }
}
