//! Segmented editing of long polylines and polygons.
//!
//! Every ring of a shape is cut into bounded, overlapping segments that can
//! be edited one at a time; edits are spliced back into the shape's
//! geometry as they happen.

pub mod editing;
pub mod error;
pub mod geometry;
pub mod host;
pub mod math;
pub mod segment;
pub mod style;

pub use editing::{SegmentEditCoordinator, SegmentEditOptions};
pub use error::{PolysegError, Result};
pub use host::{MapSurface, SegmentEdited, SEGMENT_EDITED_EVENT};
