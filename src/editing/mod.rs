mod options;
mod reconcile;

pub use options::SegmentEditOptions;

use tracing::{debug, trace, warn};

use crate::error::{Result, SegmentError};
use crate::geometry::{EditableShape, RingPath, ShapeKind};
use crate::host::MapSurface;
use crate::segment::{RingSegmenter, SegmentData, SegmentId, SegmentStore};
use crate::style::SegmentStyles;

/// Coordinates segmented editing of one shape.
///
/// Owns the shape's segments (all rings, all parts), keeps at most one of
/// them in edit mode, and writes every committed segment edit back into the
/// shape's geometry.
pub struct SegmentEditCoordinator<S: EditableShape, M> {
    shape: S,
    surface: M,
    kind: ShapeKind,
    styles: SegmentStyles,
    segmenter: RingSegmenter,
    segments: SegmentStore<S::Vertex>,
    active: Option<SegmentId>,
    enabled: bool,
}

impl<S, M> SegmentEditCoordinator<S, M>
where
    S: EditableShape,
    M: MapSurface<S::Vertex>,
{
    /// Segments every ring of `shape` and resolves the segment styles.
    ///
    /// Segments are not shown until [`enable`](Self::enable) is called.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidGeometry` if any ring of the shape is empty.
    pub fn new(shape: S, surface: M, options: &SegmentEditOptions) -> Result<Self> {
        let styles = SegmentStyles::resolve(&options.style, &surface.default_shape_style());
        let segmenter = RingSegmenter::new(options.effective_segment_size());

        let geometry = shape.vertex_rings();
        let kind = geometry.kind();
        let mut segments = SegmentStore::new();
        for ring in geometry.rings() {
            segmenter.segment_ring(&ring, &mut segments)?;
        }
        debug!(
            ?kind,
            segment_size = segmenter.segment_size(),
            segments = segments.len(),
            "built segments"
        );

        Ok(Self {
            shape,
            surface,
            kind,
            styles,
            segmenter,
            segments,
            active: None,
            enabled: false,
        })
    }

    /// Shows every segment on the map surface and starts accepting its events.
    pub fn enable(&mut self) {
        if self.enabled {
            return;
        }
        for (id, seg) in self.segments.iter() {
            self.surface
                .add_layer(id, &seg.display_vertices(), &self.styles.default);
        }
        self.enabled = true;
        debug!(segments = self.segments.len(), "segment editing enabled");
    }

    /// Ends any active edit and removes every segment from the map surface.
    pub fn disable(&mut self) {
        if !self.enabled {
            return;
        }
        if let Some(active) = self.active {
            self.stop_segment(active);
        }
        for id in self.segments.ids().to_vec() {
            if let Ok(seg) = self.segments.segment_mut(id) {
                seg.set_hovered(false);
            }
            self.surface.remove_layer(id);
        }
        self.enabled = false;
        debug!("segment editing disabled");
    }

    /// Pointer entered a segment: show the hover style.
    pub fn pointer_enter(&mut self, id: SegmentId) {
        let Some(seg) = self.listening_segment_mut(id) else {
            return;
        };
        seg.set_hovered(true);
        trace!(?id, "segment hovered");
        self.surface.set_style(id, &self.styles.hover);
        self.surface.bring_to_front(id);
    }

    /// Pointer left a segment: restore the default or editing style.
    pub fn pointer_leave(&mut self, id: SegmentId) {
        let Some(seg) = self.listening_segment_mut(id) else {
            return;
        };
        seg.set_hovered(false);
        trace!(?id, "segment left");
        let style = if seg.is_editing() {
            &self.styles.editing
        } else {
            &self.styles.default
        };
        self.surface.set_style(id, style);
    }

    /// Pointer clicked a segment: put it in edit mode.
    pub fn pointer_click(&mut self, id: SegmentId) {
        if self.listening_segment_mut(id).is_none() {
            return;
        }
        if let Err(err) = self.start_editing(id) {
            warn!(?id, %err, "click could not start editing");
        }
    }

    /// Puts a segment in edit mode, ending the edit of any other segment first.
    ///
    /// Does nothing if the segment is already being edited.
    ///
    /// # Errors
    ///
    /// Returns `SegmentError::Disabled` while editing is disabled, or
    /// `SegmentError::NotFound` if `id` is not a segment of this shape.
    pub fn start_editing(&mut self, id: SegmentId) -> Result<()> {
        if !self.enabled {
            return Err(SegmentError::Disabled.into());
        }
        if self.segments.segment(id)?.is_editing() {
            return Ok(());
        }
        self.on_edit_start(id);

        self.segments.segment_mut(id)?.set_editing(true);
        self.surface.set_vertex_handles(id, true);
        self.surface.set_style(id, &self.styles.editing);
        Ok(())
    }

    /// Ends the active edit, if any.
    pub fn stop_editing(&mut self) {
        if let Some(active) = self.active {
            self.stop_segment(active);
        }
    }

    /// Applies `edit` to a segment's vertices and reconciles the shape.
    ///
    /// # Errors
    ///
    /// Returns `SegmentError::Disabled` while editing is disabled,
    /// `SegmentError::NotEditing` if the segment is not in edit mode,
    /// or `SegmentError::WouldEmpty` if the edit removed every vertex, in
    /// which case the segment is left unchanged.
    pub fn edit_vertices<F>(&mut self, id: SegmentId, edit: F) -> Result<()>
    where
        F: FnOnce(&mut Vec<S::Vertex>),
    {
        self.apply_edit(id, |vertices| {
            let before = vertices.clone();
            edit(vertices);
            if vertices.is_empty() {
                *vertices = before;
                return Err(SegmentError::WouldEmpty);
            }
            Ok(())
        })
    }

    /// Moves the vertex at `index` of a segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment is not in edit mode or `index` is out of range.
    pub fn move_vertex(&mut self, id: SegmentId, index: usize, vertex: S::Vertex) -> Result<()> {
        self.apply_edit(id, |vertices| {
            let len = vertices.len();
            let slot = vertices
                .get_mut(index)
                .ok_or(SegmentError::VertexOutOfRange { index, len })?;
            *slot = vertex;
            Ok(())
        })
    }

    /// Inserts a vertex before `index` of a segment (`index == len` appends).
    ///
    /// # Errors
    ///
    /// Returns an error if the segment is not in edit mode or `index` is out of range.
    pub fn insert_vertex(&mut self, id: SegmentId, index: usize, vertex: S::Vertex) -> Result<()> {
        self.apply_edit(id, |vertices| {
            if index > vertices.len() {
                return Err(SegmentError::VertexOutOfRange {
                    index,
                    len: vertices.len(),
                });
            }
            vertices.insert(index, vertex);
            Ok(())
        })
    }

    /// Removes the vertex at `index` of a segment and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment is not in edit mode, `index` is out of
    /// range, or the segment has a single vertex left.
    pub fn remove_vertex(&mut self, id: SegmentId, index: usize) -> Result<S::Vertex> {
        self.apply_edit(id, |vertices| {
            if index >= vertices.len() {
                return Err(SegmentError::VertexOutOfRange {
                    index,
                    len: vertices.len(),
                });
            }
            if vertices.len() == 1 {
                return Err(SegmentError::WouldEmpty);
            }
            Ok(vertices.remove(index))
        })
    }

    /// The shape being edited.
    #[must_use]
    pub fn shape(&self) -> &S {
        &self.shape
    }

    /// Consumes the coordinator, returning the edited shape.
    #[must_use]
    pub fn into_shape(self) -> S {
        self.shape
    }

    #[must_use]
    pub fn surface(&self) -> &M {
        &self.surface
    }

    #[must_use]
    pub fn surface_mut(&mut self) -> &mut M {
        &mut self.surface
    }

    /// The structural kind of the shape, fixed at construction.
    #[must_use]
    pub fn shape_kind(&self) -> ShapeKind {
        self.kind
    }

    #[must_use]
    pub fn styles(&self) -> &SegmentStyles {
        &self.styles
    }

    #[must_use]
    pub fn segment_size(&self) -> usize {
        self.segmenter.segment_size()
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The segment currently in edit mode.
    #[must_use]
    pub fn active_segment(&self) -> Option<SegmentId> {
        self.active
    }

    /// All segments, ring by ring.
    #[must_use]
    pub fn segments(&self) -> &SegmentStore<S::Vertex> {
        &self.segments
    }

    /// Returns one segment.
    ///
    /// # Errors
    ///
    /// Returns `SegmentError::NotFound` if `id` is not a segment of this shape.
    pub fn segment(&self, id: SegmentId) -> Result<&SegmentData<S::Vertex>> {
        Ok(self.segments.segment(id)?)
    }

    /// The segments cut from one ring, head to tail.
    #[must_use]
    pub fn ring_segments(&self, path: RingPath) -> Vec<SegmentId> {
        self.segments.ring_segments(path)
    }

    /// A segment's vertices as drawn, including the closure duplicate.
    ///
    /// # Errors
    ///
    /// Returns `SegmentError::NotFound` if `id` is not a segment of this shape.
    pub fn display_vertices(&self, id: SegmentId) -> Result<Vec<S::Vertex>> {
        Ok(self.segments.segment(id)?.display_vertices())
    }

    fn on_edit_start(&mut self, id: SegmentId) {
        if let Some(previous) = self.active.filter(|&active| active != id) {
            self.stop_segment(previous);
        }
        self.active = Some(id);
        debug!(?id, "segment edit started");
    }

    fn stop_segment(&mut self, id: SegmentId) {
        if let Ok(seg) = self.segments.segment_mut(id) {
            if seg.is_editing() {
                seg.set_editing(false);
                self.surface.set_vertex_handles(id, false);
                self.surface.set_style(id, &self.styles.default);
                debug!(?id, "segment edit stopped");
            }
        }
        if self.active == Some(id) {
            self.active = None;
        }
    }

    fn apply_edit<R, F>(&mut self, id: SegmentId, edit: F) -> Result<R>
    where
        F: FnOnce(&mut Vec<S::Vertex>) -> std::result::Result<R, SegmentError>,
    {
        if !self.enabled {
            return Err(SegmentError::Disabled.into());
        }
        let seg = self.segments.segment_mut(id)?;
        if !seg.is_editing() {
            return Err(SegmentError::NotEditing.into());
        }
        let out = edit(seg.vertices_mut())?;
        self.surface.redraw(id, &seg.display_vertices());
        self.commit_edit(id)?;
        Ok(out)
    }

    /// Returns the segment if events for it should be handled right now.
    fn listening_segment_mut(&mut self, id: SegmentId) -> Option<&mut SegmentData<S::Vertex>> {
        if !self.enabled {
            warn!(?id, "ignoring pointer event while segment editing is disabled");
            return None;
        }
        let seg = self.segments.segment_mut(id).ok();
        if seg.is_none() {
            warn!(?id, "ignoring pointer event for unknown segment");
        }
        seg
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::*;
    use crate::error::{GeometryError, PolysegError};
    use crate::geometry::{GeometryShape, Shape};
    use crate::host::SegmentEdited;
    use crate::segment::SegmentState;
    use crate::style::{PathStyle, StyleOptions};

    #[derive(Debug, Default)]
    struct Recorder {
        layers: HashMap<SegmentId, Vec<char>>,
        styles: HashMap<SegmentId, String>,
        handles: HashSet<SegmentId>,
        redraws: Vec<SegmentId>,
        fired: Vec<(&'static str, RingPath)>,
    }

    impl MapSurface<char> for Recorder {
        fn add_layer(&mut self, id: SegmentId, vertices: &[char], style: &PathStyle) {
            self.layers.insert(id, vertices.to_vec());
            self.styles.insert(id, style.color.clone());
        }

        fn remove_layer(&mut self, id: SegmentId) {
            self.layers.remove(&id);
        }

        fn set_style(&mut self, id: SegmentId, style: &PathStyle) {
            self.styles.insert(id, style.color.clone());
        }

        fn redraw(&mut self, id: SegmentId, vertices: &[char]) {
            self.layers.insert(id, vertices.to_vec());
            self.redraws.push(id);
        }

        fn set_vertex_handles(&mut self, id: SegmentId, enabled: bool) {
            if enabled {
                self.handles.insert(id);
            } else {
                self.handles.remove(&id);
            }
        }

        fn fire(&mut self, event: &SegmentEdited<'_, char>) {
            self.fired.push((event.name(), event.path));
        }
    }

    type Coordinator = SegmentEditCoordinator<Shape<char>, Recorder>;

    fn options(segment_size: usize) -> SegmentEditOptions {
        SegmentEditOptions {
            segment_size: Some(segment_size),
            style: StyleOptions {
                default: Some(PathStyle::stroke("default", 3.0, 0.5)),
                hover: Some(PathStyle::stroke("hover", 5.0, 1.0)),
                editing: Some(PathStyle::stroke("editing", 4.0, 1.0)),
            },
        }
    }

    fn ring(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn polygon(rings: &[&str], segment_size: usize) -> Coordinator {
        let shape = Shape::new(GeometryShape::Polygon(rings.iter().map(|r| ring(r)).collect()));
        let mut coordinator =
            SegmentEditCoordinator::new(shape, Recorder::default(), &options(segment_size)).unwrap();
        coordinator.enable();
        coordinator
    }

    fn ranges(c: &Coordinator, ids: &[SegmentId]) -> Vec<(usize, usize)> {
        ids.iter()
            .map(|&id| {
                let s = c.segment(id).unwrap();
                (s.start_index(), s.end_index())
            })
            .collect()
    }

    fn outer_ring(c: &Coordinator, path: RingPath) -> Vec<char> {
        c.shape().vertex_rings().ring(path).unwrap().to_vec()
    }

    #[test]
    fn enable_shows_every_segment() {
        let c = polygon(&["ABCDEFG"], 3);
        assert!(c.is_enabled());
        assert_eq!(c.segments().len(), 3);
        let ids = c.segments().ids();
        assert_eq!(c.surface().layers[&ids[0]], ring("ABC"));
        assert_eq!(c.surface().layers[&ids[2]], ring("EFGA"));
        assert!(ids.iter().all(|id| c.surface().styles[id] == "default"));
    }

    #[test]
    fn insert_in_middle_segment_shifts_downstream() {
        let mut c = polygon(&["ABCDEFG"], 3);
        let ids = c.segments().ids().to_vec();
        c.pointer_click(ids[1]);
        c.insert_vertex(ids[1], 1, 'X').unwrap();
        c.insert_vertex(ids[1], 3, 'd').unwrap();

        assert_eq!(c.segment(ids[1]).unwrap().vertices(), &['C', 'X', 'D', 'd', 'E']);
        assert_eq!(ranges(&c, &ids), vec![(0, 3), (2, 7), (6, 9)]);
        assert_eq!(outer_ring(&c, RingPath::new(0, 0)), ring("ABCXDdEFG"));

        // Neighbours are redrawn, their data is unchanged.
        assert!(c.surface().redraws.contains(&ids[0]));
        assert!(c.surface().redraws.contains(&ids[2]));
        assert_eq!(c.segment(ids[0]).unwrap().vertices(), &['A', 'B', 'C']);
        assert_eq!(c.display_vertices(ids[2]).unwrap(), ring("EFGA"));
        assert_eq!(c.surface().fired.len(), 2);
    }

    #[test]
    fn only_one_segment_edits_at_a_time() {
        let mut c = polygon(&["ABCDEFGHIJ"], 3);
        let ids = c.segments().ids().to_vec();
        for &id in ids.iter().chain(ids.iter().rev()) {
            c.pointer_click(id);
            let editing = c.segments().iter().filter(|(_, s)| s.is_editing()).count();
            assert_eq!(editing, 1);
            assert_eq!(c.active_segment(), Some(id));
            assert_eq!(c.surface().handles.len(), 1);
            assert!(c.surface().handles.contains(&id));
        }
        assert_eq!(c.surface().styles[&ids[1]], "default");
    }

    #[test]
    fn clicking_active_segment_keeps_it_active() {
        let mut c = polygon(&["ABCDE"], 3);
        let id = c.segments().ids()[0];
        c.pointer_click(id);
        c.pointer_click(id);
        assert_eq!(c.active_segment(), Some(id));
        assert_eq!(c.segment(id).unwrap().state(), SegmentState::Editing);
    }

    #[test]
    fn hole_edits_leave_outer_ring_alone() {
        let mut c = polygon(&["ABCDEFGHI", "abcdefg"], 4);
        let outer = c.ring_segments(RingPath::new(0, 0));
        let inner = c.ring_segments(RingPath::new(0, 1));
        assert_eq!(outer.len(), 3);
        assert_eq!(inner.len(), 2);
        let outer_before = ranges(&c, &outer);

        c.start_editing(inner[0]).unwrap();
        c.insert_vertex(inner[0], 2, 'x').unwrap();
        c.remove_vertex(inner[0], 0).unwrap();
        c.insert_vertex(inner[0], 0, 'y').unwrap();
        c.insert_vertex(inner[0], 0, 'z').unwrap();

        assert_eq!(ranges(&c, &outer), outer_before);
        assert_eq!(outer_ring(&c, RingPath::new(0, 0)), ring("ABCDEFGHI"));
        assert_eq!(outer_ring(&c, RingPath::new(0, 1)), ring("zybxcdefg"));
        assert_eq!(ranges(&c, &inner), vec![(0, 6), (5, 9)]);
        assert!(c.surface().fired.iter().all(|(_, p)| *p == RingPath::new(0, 1)));
    }

    #[test]
    fn disable_while_editing_resets_and_detaches() {
        let mut c = polygon(&["ABCDEFG"], 3);
        let ids = c.segments().ids().to_vec();
        c.pointer_click(ids[1]);
        c.disable();

        assert!(!c.is_enabled());
        assert_eq!(c.active_segment(), None);
        assert_eq!(c.segment(ids[1]).unwrap().state(), SegmentState::Idle);
        assert_eq!(c.surface().styles[&ids[1]], "default");
        assert!(c.surface().handles.is_empty());
        assert!(c.surface().layers.is_empty());
        assert!(c.surface().fired.is_empty());
        assert_eq!(c.shape().revision(), 0);
    }

    #[test]
    fn edits_after_disable_are_rejected() {
        let mut c = polygon(&["ABCDEFG"], 3);
        let ids = c.segments().ids().to_vec();
        c.disable();
        let redraws = c.surface().redraws.len();

        assert!(matches!(
            c.start_editing(ids[1]).unwrap_err(),
            PolysegError::Segment(SegmentError::Disabled)
        ));
        assert!(matches!(
            c.move_vertex(ids[1], 1, 'Z').unwrap_err(),
            PolysegError::Segment(SegmentError::Disabled)
        ));
        assert!(matches!(
            c.commit_edit(ids[1]).unwrap_err(),
            PolysegError::Segment(SegmentError::Disabled)
        ));

        assert_eq!(c.active_segment(), None);
        assert_eq!(c.segment(ids[1]).unwrap().state(), SegmentState::Idle);
        assert!(c.surface().handles.is_empty());
        assert!(c.surface().styles.values().all(|s| s == "default"));
        assert_eq!(c.surface().redraws.len(), redraws);
        assert!(c.surface().fired.is_empty());
        assert_eq!(c.shape().revision(), 0);
        assert_eq!(outer_ring(&c, RingPath::new(0, 0)), ring("ABCDEFG"));
    }

    #[test]
    fn reenable_shows_default_style() {
        let mut c = polygon(&["ABCDE"], 3);
        let id = c.segments().ids()[0];
        c.pointer_click(id);
        c.disable();
        c.enable();
        assert_eq!(c.surface().styles[&id], "default");
        assert_eq!(c.surface().layers.len(), 2);
        c.pointer_click(id);
        assert_eq!(c.active_segment(), Some(id));
    }

    #[test]
    fn commit_from_inactive_segment_is_accepted() {
        let mut c = polygon(&["ABCDEFG", "abcde"], 3);
        let outer = c.ring_segments(RingPath::new(0, 0));
        let inner = c.ring_segments(RingPath::new(0, 1));

        c.start_editing(inner[0]).unwrap();
        c.insert_vertex(inner[0], 1, 'x').unwrap();
        c.start_editing(outer[1]).unwrap();
        assert_eq!(c.segment(inner[0]).unwrap().state(), SegmentState::Idle);

        c.commit_edit(inner[0]).unwrap();

        assert_eq!(c.active_segment(), Some(outer[1]));
        assert_eq!(outer_ring(&c, RingPath::new(0, 1)), ring("axbcde"));
        assert_eq!(outer_ring(&c, RingPath::new(0, 0)), ring("ABCDEFG"));
        assert_eq!(ranges(&c, &inner), vec![(0, 4), (3, 6)]);
        assert_eq!(ranges(&c, &outer), vec![(0, 3), (2, 5), (4, 7)]);
        assert_eq!(
            c.surface().fired,
            vec![
                (crate::SEGMENT_EDITED_EVENT, RingPath::new(0, 1)),
                (crate::SEGMENT_EDITED_EVENT, RingPath::new(0, 1)),
            ]
        );
        assert_eq!(c.shape().revision(), 2);
    }

    #[test]
    fn hover_reverts_to_current_style() {
        let mut c = polygon(&["ABCDEFG"], 3);
        let id = c.segments().ids()[0];
        c.pointer_enter(id);
        assert_eq!(c.segment(id).unwrap().state(), SegmentState::Hovered);
        assert_eq!(c.surface().styles[&id], "hover");
        c.pointer_leave(id);
        assert_eq!(c.surface().styles[&id], "default");

        c.pointer_enter(id);
        c.pointer_click(id);
        c.pointer_leave(id);
        assert_eq!(c.surface().styles[&id], "editing");
        assert_eq!(c.segment(id).unwrap().state(), SegmentState::Editing);
    }

    #[test]
    fn pointer_events_ignored_while_disabled() {
        let shape = Shape::new(GeometryShape::Flat(ring("ABCD")));
        let mut c: Coordinator =
            SegmentEditCoordinator::new(shape, Recorder::default(), &options(3)).unwrap();
        let id = c.segments().ids()[0];
        c.pointer_enter(id);
        c.pointer_click(id);
        assert_eq!(c.active_segment(), None);
        assert!(c.surface().styles.is_empty());
    }

    #[test]
    fn edits_require_edit_mode() {
        let mut c = polygon(&["ABCDEFG"], 3);
        let id = c.segments().ids()[0];
        let err = c.move_vertex(id, 0, 'Z').unwrap_err();
        assert!(matches!(err, PolysegError::Segment(SegmentError::NotEditing)));
        assert_eq!(c.shape().revision(), 0);
    }

    #[test]
    fn invalid_vertex_edits_are_rejected() {
        let mut c = polygon(&["AB", "abc"], 2);
        let id = c.segments().ids()[0];
        c.start_editing(id).unwrap();
        assert!(matches!(
            c.move_vertex(id, 5, 'Z').unwrap_err(),
            PolysegError::Segment(SegmentError::VertexOutOfRange { index: 5, len: 2 })
        ));
        c.remove_vertex(id, 1).unwrap();
        assert!(matches!(
            c.remove_vertex(id, 0).unwrap_err(),
            PolysegError::Segment(SegmentError::WouldEmpty)
        ));
        assert!(matches!(
            c.edit_vertices(id, Vec::clear).unwrap_err(),
            PolysegError::Segment(SegmentError::WouldEmpty)
        ));
        assert_eq!(c.segment(id).unwrap().vertices(), &['A']);
    }

    #[test]
    fn moving_boundary_vertex_updates_neighbour() {
        let mut c = polygon(&["ABCDEFG"], 3);
        let ids = c.segments().ids().to_vec();
        c.start_editing(ids[1]).unwrap();
        c.move_vertex(ids[1], 0, 'c').unwrap();
        c.move_vertex(ids[1], 2, 'e').unwrap();

        assert_eq!(c.segment(ids[0]).unwrap().vertices(), &['A', 'B', 'c']);
        assert_eq!(c.display_vertices(ids[2]).unwrap(), ring("eFGA"));
        assert_eq!(c.surface().layers[&ids[0]], ring("ABc"));
        assert_eq!(outer_ring(&c, RingPath::new(0, 0)), ring("ABcDeFG"));

        // A later edit on the neighbour must not resurrect the old boundary.
        c.start_editing(ids[0]).unwrap();
        c.move_vertex(ids[0], 1, 'b').unwrap();
        assert_eq!(outer_ring(&c, RingPath::new(0, 0)), ring("AbcDeFG"));
    }

    #[test]
    fn removing_first_vertex_realigns_boundary() {
        let mut c = polygon(&["ABCDEFG"], 3);
        let ids = c.segments().ids().to_vec();
        c.start_editing(ids[1]).unwrap();
        c.remove_vertex(ids[1], 0).unwrap();

        assert_eq!(outer_ring(&c, RingPath::new(0, 0)), ring("ABDEFG"));
        assert_eq!(c.segment(ids[0]).unwrap().vertices(), &['A', 'B', 'D']);
        assert_eq!(ranges(&c, &ids), vec![(0, 3), (2, 4), (3, 6)]);
    }

    #[test]
    fn fired_event_uses_exported_name() {
        let mut c = polygon(&["ABCD"], 3);
        let id = c.segments().ids()[0];
        c.start_editing(id).unwrap();
        c.edit_vertices(id, |v| v.push('Q')).unwrap();
        assert_eq!(
            c.surface().fired,
            vec![(crate::SEGMENT_EDITED_EVENT, RingPath::new(0, 0))]
        );
        assert_eq!(c.shape().revision(), 1);
    }

    #[test]
    fn empty_ring_fails_construction() {
        let shape = Shape::new(GeometryShape::Polygon(vec![ring("ABC"), Vec::new()]));
        let result = SegmentEditCoordinator::new(shape, Recorder::default(), &options(3));
        assert!(matches!(
            result.err(),
            Some(PolysegError::Geometry(GeometryError::InvalidGeometry(_)))
        ));
    }

    #[test]
    fn missing_styles_fall_back_to_host_default() {
        let shape = Shape::new(GeometryShape::Flat(ring("AB")));
        let c: Coordinator =
            SegmentEditCoordinator::new(shape, Recorder::default(), &SegmentEditOptions::default())
                .unwrap();
        assert_eq!(c.styles().hover, PathStyle::default());
        assert_eq!(c.segment_size(), 100);
        assert_eq!(c.shape_kind(), ShapeKind::Flat);
    }
}
