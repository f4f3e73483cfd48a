use slotmap::SlotMap;

use crate::error::SegmentError;
use crate::geometry::RingPath;

use super::{SegmentData, SegmentId};

/// Arena that owns every segment of a shape.
///
/// Chain neighbours reference each other through `SegmentId`s, so the
/// previous/next relation never forms owning cycles. Segments keep the
/// order in which they were inserted (ring by ring, head to tail).
#[derive(Debug)]
pub struct SegmentStore<V> {
    segments: SlotMap<SegmentId, SegmentData<V>>,
    order: Vec<SegmentId>,
}

impl<V> Default for SegmentStore<V> {
    fn default() -> Self {
        Self {
            segments: SlotMap::with_key(),
            order: Vec::new(),
        }
    }
}

impl<V> SegmentStore<V> {
    /// Creates a new, empty segment store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a segment at the end of the flattened order and returns its ID.
    pub fn add_segment(&mut self, data: SegmentData<V>) -> SegmentId {
        let id = self.segments.insert(data);
        self.order.push(id);
        id
    }

    /// Links `previous` and `next` as chain neighbours.
    ///
    /// # Errors
    ///
    /// Returns an error if either segment is not in the store.
    pub fn link(&mut self, previous: SegmentId, next: SegmentId) -> Result<(), SegmentError> {
        self.segment(next)?;
        self.segment_mut(previous)?.set_next(Some(next));
        self.segment_mut(next)?.set_previous(Some(previous));
        Ok(())
    }

    /// Returns a reference to the segment data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment is not in the store.
    pub fn segment(&self, id: SegmentId) -> Result<&SegmentData<V>, SegmentError> {
        self.segments.get(id).ok_or(SegmentError::NotFound)
    }

    /// Returns a mutable reference to the segment data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment is not in the store.
    pub fn segment_mut(&mut self, id: SegmentId) -> Result<&mut SegmentData<V>, SegmentError> {
        self.segments.get_mut(id).ok_or(SegmentError::NotFound)
    }

    /// All segment IDs in flattened order.
    #[must_use]
    pub fn ids(&self) -> &[SegmentId] {
        &self.order
    }

    /// Iterates segments in flattened order.
    pub fn iter(&self) -> impl Iterator<Item = (SegmentId, &SegmentData<V>)> + '_ {
        self.order.iter().map(|&id| (id, &self.segments[id]))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the first segment of the chain containing `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` or a linked segment is not in the store.
    pub fn chain_head(&self, id: SegmentId) -> Result<SegmentId, SegmentError> {
        let mut current = id;
        while let Some(previous) = self.segment(current)?.previous() {
            current = previous;
        }
        Ok(current)
    }

    /// Returns the whole chain containing `id`, head to tail.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` or a linked segment is not in the store.
    pub fn chain(&self, id: SegmentId) -> Result<Vec<SegmentId>, SegmentError> {
        let mut chain = Vec::new();
        let mut current = Some(self.chain_head(id)?);
        while let Some(seg) = current {
            chain.push(seg);
            current = self.segment(seg)?.next();
        }
        Ok(chain)
    }

    /// Returns the segments cut from the ring at `path`, in flattened order.
    #[must_use]
    pub fn ring_segments(&self, path: RingPath) -> Vec<SegmentId> {
        self.iter()
            .filter(|(_, seg)| seg.path() == path)
            .map(|(id, _)| id)
            .collect()
    }

    /// Re-derives `[start, end)` for every segment in the chain containing `id`.
    ///
    /// Walks from the chain head; each segment starts where the previous one
    /// ended, minus the shared boundary vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` or a linked segment is not in the store.
    pub fn update_ring_indices(&mut self, id: SegmentId) -> Result<(), SegmentError> {
        let mut start = 0;
        let mut current = Some(self.chain_head(id)?);
        while let Some(seg_id) = current {
            let seg = self.segment_mut(seg_id)?;
            let end = start + seg.vertex_count();
            seg.set_range(start, end);
            start = end.saturating_sub(1);
            current = seg.next();
        }
        Ok(())
    }

    /// Removes every segment.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.order.clear();
    }
}
