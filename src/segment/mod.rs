pub mod segmenter;
pub mod store;

pub use segmenter::{RingSegmenter, DEFAULT_SEGMENT_SIZE, MIN_SEGMENT_SIZE};
pub use store::SegmentStore;

use crate::geometry::RingPath;

slotmap::new_key_type! {
    /// Unique identifier for a segment in the segment store.
    pub struct SegmentId;
}

/// Interaction state of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentState {
    /// Default style, not editable.
    Idle,
    /// Pointer is over the segment; reverts to `Idle` or `Editing` on leave.
    Hovered,
    /// Vertex edit handles are active.
    Editing,
}

/// A bounded, independently editable run of a ring's vertices.
///
/// Consecutive segments of a ring share their boundary vertex. The
/// `[start_index, end_index)` range locates the segment on its ring and is
/// re-derived after every edit on that ring.
#[derive(Debug, Clone)]
pub struct SegmentData<V> {
    vertices: Vec<V>,
    closure: Option<V>,
    start_index: usize,
    end_index: usize,
    previous: Option<SegmentId>,
    next: Option<SegmentId>,
    path: RingPath,
    editing: bool,
    hovered: bool,
}

impl<V: Clone> SegmentData<V> {
    /// Creates an unlinked, idle segment covering `[start_index, start_index + vertices.len())`.
    #[must_use]
    pub fn new(vertices: Vec<V>, start_index: usize, path: RingPath) -> Self {
        let end_index = start_index + vertices.len();
        Self {
            vertices,
            closure: None,
            start_index,
            end_index,
            previous: None,
            next: None,
            path,
            editing: false,
            hovered: false,
        }
    }

    /// Attaches the display-only copy of the ring's first vertex.
    #[must_use]
    pub fn with_closure(mut self, first: V) -> Self {
        self.closure = Some(first);
        self
    }

    /// Returns the vertices as drawn, including the closure duplicate if any.
    #[must_use]
    pub fn display_vertices(&self) -> Vec<V> {
        let mut out = Vec::with_capacity(self.vertices.len() + 1);
        out.extend_from_slice(&self.vertices);
        out.extend(self.closure.iter().cloned());
        out
    }
}

impl<V> SegmentData<V> {
    /// The segment's own copy of its ring span.
    #[must_use]
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub(crate) fn vertices_mut(&mut self) -> &mut Vec<V> {
        &mut self.vertices
    }

    /// Number of vertices in the span, excluding the closure duplicate.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// The closure duplicate appended for display, if this segment ends a closed ring.
    #[must_use]
    pub fn closure(&self) -> Option<&V> {
        self.closure.as_ref()
    }

    #[must_use]
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    #[must_use]
    pub fn end_index(&self) -> usize {
        self.end_index
    }

    #[must_use]
    pub fn previous(&self) -> Option<SegmentId> {
        self.previous
    }

    #[must_use]
    pub fn next(&self) -> Option<SegmentId> {
        self.next
    }

    /// Which ring of which shape part this segment was cut from.
    #[must_use]
    pub fn path(&self) -> RingPath {
        self.path
    }

    #[must_use]
    pub fn state(&self) -> SegmentState {
        if self.hovered {
            SegmentState::Hovered
        } else if self.editing {
            SegmentState::Editing
        } else {
            SegmentState::Idle
        }
    }

    /// Whether vertex edit handles are active, regardless of hover.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub(crate) fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
    }

    pub(crate) fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub(crate) fn set_range(&mut self, start_index: usize, end_index: usize) {
        self.start_index = start_index;
        self.end_index = end_index;
    }

    pub(crate) fn set_previous(&mut self, previous: Option<SegmentId>) {
        self.previous = previous;
    }

    pub(crate) fn set_next(&mut self, next: Option<SegmentId>) {
        self.next = next;
    }
}
