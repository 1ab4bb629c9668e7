use thiserror::Error;

pub type TickResult<T> = Result<T, TickError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TickError {
    #[error("invalid axis geometry: start={start}, extent={extent}")]
    InvalidGeometry { start: f64, extent: f64 },

    #[error("tick candidate {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    #[error(
        "tick candidates must be ordered by coordinate: index {index} ({current}) follows {previous}"
    )]
    UnorderedCandidates {
        index: usize,
        previous: f64,
        current: f64,
    },

    #[error("invalid selection config: {0}")]
    InvalidConfig(String),

    #[error("text measurement failed: {0}")]
    Measurement(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
