use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::RingView;

use super::{SegmentData, SegmentId, SegmentStore};

/// Segment size used when none is configured.
pub const DEFAULT_SEGMENT_SIZE: usize = 100;

/// Smallest usable segment size: a start and an end vertex.
pub const MIN_SEGMENT_SIZE: usize = 2;

/// Splits rings into chains of overlapping, bounded-size segments.
///
/// Segment `k` of a ring covers `[k * (size - 1), min(k * (size - 1) + size, len))`:
/// each segment starts on the previous segment's last vertex. For a closed
/// ring the last segment also carries a display copy of the ring's first
/// vertex, which is not part of its index range.
#[derive(Debug, Clone, Copy)]
pub struct RingSegmenter {
    segment_size: usize,
}

impl Default for RingSegmenter {
    fn default() -> Self {
        Self::new(DEFAULT_SEGMENT_SIZE)
    }
}

impl RingSegmenter {
    /// Creates a segmenter; sizes below [`MIN_SEGMENT_SIZE`] are raised to it.
    #[must_use]
    pub fn new(segment_size: usize) -> Self {
        Self {
            segment_size: segment_size.max(MIN_SEGMENT_SIZE),
        }
    }

    /// Returns the maximum number of vertices per segment.
    #[must_use]
    pub fn segment_size(&self) -> usize {
        self.segment_size
    }

    /// Number of segments a ring of `len` vertices is split into.
    #[must_use]
    pub fn segment_count(&self, len: usize) -> usize {
        match len {
            0 => 0,
            1 => 1,
            _ => (len - 1).div_ceil(self.segment_size - 1),
        }
    }

    /// Cuts `ring` into a linked chain of segments stored in `store`.
    ///
    /// Returns the new segment IDs head to tail.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidGeometry` if the ring has no vertices.
    pub fn segment_ring<V: Clone>(
        &self,
        ring: &RingView<'_, V>,
        store: &mut SegmentStore<V>,
    ) -> Result<Vec<SegmentId>> {
        let vertices = ring.vertices;
        let Some(first) = vertices.first() else {
            return Err(GeometryError::InvalidGeometry(format!(
                "ring {} of polyline {} has no vertices",
                ring.path.ring, ring.path.polyline
            ))
            .into());
        };

        let mut ids: Vec<SegmentId> = Vec::with_capacity(self.segment_count(vertices.len()));
        let mut start = 0;
        loop {
            let end = (start + self.segment_size).min(vertices.len());
            let mut data = SegmentData::new(vertices[start..end].to_vec(), start, ring.path);
            if end == vertices.len() && ring.closed {
                data = data.with_closure(first.clone());
            }

            let id = store.add_segment(data);
            if let Some(&previous) = ids.last() {
                store.link(previous, id)?;
            }
            ids.push(id);

            if end == vertices.len() {
                break;
            }
            start = end - 1;
        }

        debug!(
            polyline = ring.path.polyline,
            ring = ring.path.ring,
            vertices = vertices.len(),
            segments = ids.len(),
            "segmented ring"
        );
        Ok(ids)
    }
}
