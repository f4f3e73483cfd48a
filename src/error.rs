use thiserror::Error;

use crate::geometry::RingPath;

/// Top-level error type for segmented shape editing.
#[derive(Debug, Error)]
pub enum PolysegError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Segment(#[from] SegmentError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to the shape's vertex rings.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("no ring at polyline {} ring {}", .0.polyline, .0.ring)]
    RingNotFound(RingPath),
}

/// Errors related to vertex edits on a segment.
#[derive(Debug, Error)]
pub enum SegmentError {
    #[error("segment not found")]
    NotFound,

    #[error("segment is not being edited")]
    NotEditing,

    #[error("segment editing is disabled")]
    Disabled,

    #[error("vertex index {index} is out of range for {len} vertices")]
    VertexOutOfRange { index: usize, len: usize },

    #[error("a segment must keep at least one vertex")]
    WouldEmpty,
}

/// Errors related to loading edit options.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse edit options: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`PolysegError`].
pub type Result<T> = std::result::Result<T, PolysegError>;
