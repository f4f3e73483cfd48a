use tracing::debug;

use crate::error::{GeometryError, Result, SegmentError};
use crate::geometry::ring::splice;
use crate::geometry::EditableShape;
use crate::host::{MapSurface, SegmentEdited};
use crate::segment::SegmentId;

use super::SegmentEditCoordinator;

impl<S, M> SegmentEditCoordinator<S, M>
where
    S: EditableShape,
    M: MapSurface<S::Vertex>,
{
    /// Writes a segment's current vertices back into the shape.
    ///
    /// Splices the segment over its `[start, end)` range of the ring,
    /// replaces the ring in the shape, refreshes the chain neighbours,
    /// re-derives the index ranges of the whole ring, then fires
    /// [`SegmentEdited`]. Runs after every vertex edit; callers that mutate
    /// segment data through other means can invoke it directly.
    ///
    /// The segment does not have to be the one being edited. Only the edited
    /// ring is rewritten, through [`EditableShape::replace_ring`].
    ///
    /// # Errors
    ///
    /// Returns `SegmentError::Disabled` while editing is disabled, or an
    /// error if `id` is unknown or its ring no longer exists in the shape.
    pub fn commit_edit(&mut self, id: SegmentId) -> Result<()> {
        if !self.enabled {
            return Err(SegmentError::Disabled.into());
        }
        let seg = self.segments.segment(id)?;
        let path = seg.path();

        let ring = self
            .shape
            .vertex_rings()
            .ring(path)
            .ok_or(GeometryError::RingNotFound(path))?;
        let new_ring = splice(ring, seg.start_index(), seg.end_index(), seg.vertices());
        let ring_len = new_ring.len();

        self.shape.replace_ring(path, new_ring)?;

        self.redraw_neighbours(id)?;
        self.segments.update_ring_indices(id)?;

        debug!(
            ?id,
            polyline = path.polyline,
            ring = path.ring,
            ring_len,
            "segment edit reconciled"
        );
        self.surface.fire(&SegmentEdited {
            shape: self.shape.vertex_rings(),
            path,
        });
        Ok(())
    }

    /// Aligns the neighbours' shared boundary vertices with `id` and redraws them.
    ///
    /// Only the boundary vertex is carried over; neighbour vertex counts and
    /// the closure duplicate are left as they are.
    fn redraw_neighbours(&mut self, id: SegmentId) -> Result<()> {
        let seg = self.segments.segment(id)?;
        let (previous, next) = (seg.previous(), seg.next());
        let first = seg.vertices().first().cloned();
        let last = seg.vertices().last().cloned();

        if let (Some(prev_id), Some(first)) = (previous, first) {
            let prev = self.segments.segment_mut(prev_id)?;
            if let Some(boundary) = prev.vertices_mut().last_mut() {
                *boundary = first;
            }
            self.surface.redraw(prev_id, &prev.display_vertices());
        }

        if let (Some(next_id), Some(last)) = (next, last) {
            let next = self.segments.segment_mut(next_id)?;
            if let Some(boundary) = next.vertices_mut().first_mut() {
                *boundary = last;
            }
            self.surface.redraw(next_id, &next.display_vertices());
        }
        Ok(())
    }
}
