use crate::geometry::{GeometryShape, RingPath};
use crate::segment::SegmentId;
use crate::style::PathStyle;

/// Name of the notification fired after every reconciled segment edit.
pub const SEGMENT_EDITED_EVENT: &str = "draw:linesegment:editstart";

/// Notification carrying the edited shape's geometry after reconciliation.
#[derive(Debug, Clone, Copy)]
pub struct SegmentEdited<'a, V> {
    /// The whole, already updated, shape geometry.
    pub shape: &'a GeometryShape<V>,
    /// The ring that was rewritten.
    pub path: RingPath,
}

impl<V> SegmentEdited<'_, V> {
    /// The event name, [`SEGMENT_EDITED_EVENT`].
    #[must_use]
    pub fn name(&self) -> &'static str {
        SEGMENT_EDITED_EVENT
    }
}

/// The vector map surface that displays segments and delivers their events.
///
/// Each segment is shown as its own hit-testable layer keyed by its
/// [`SegmentId`]; pointer events for a layer are routed back to the
/// coordinator by the host.
pub trait MapSurface<V> {
    /// Style used for any segment style variant left unconfigured.
    fn default_shape_style(&self) -> PathStyle {
        PathStyle::default()
    }

    /// Adds a segment layer drawn through `vertices`.
    fn add_layer(&mut self, id: SegmentId, vertices: &[V], style: &PathStyle);

    /// Removes a segment layer.
    fn remove_layer(&mut self, id: SegmentId);

    /// Applies a style to a segment layer.
    fn set_style(&mut self, id: SegmentId, style: &PathStyle);

    /// Redraws a segment layer through `vertices`.
    fn redraw(&mut self, id: SegmentId, vertices: &[V]);

    /// Raises a segment layer above its siblings.
    fn bring_to_front(&mut self, _id: SegmentId) {}

    /// Shows or hides the vertex edit handles of a segment layer.
    fn set_vertex_handles(&mut self, id: SegmentId, enabled: bool);

    /// Publishes a segment-edited notification to external listeners.
    fn fire(&mut self, event: &SegmentEdited<'_, V>);
}

impl<V, M: MapSurface<V> + ?Sized> MapSurface<V> for &mut M {
    fn default_shape_style(&self) -> PathStyle {
        (**self).default_shape_style()
    }

    fn add_layer(&mut self, id: SegmentId, vertices: &[V], style: &PathStyle) {
        (**self).add_layer(id, vertices, style);
    }

    fn remove_layer(&mut self, id: SegmentId) {
        (**self).remove_layer(id);
    }

    fn set_style(&mut self, id: SegmentId, style: &PathStyle) {
        (**self).set_style(id, style);
    }

    fn redraw(&mut self, id: SegmentId, vertices: &[V]) {
        (**self).redraw(id, vertices);
    }

    fn bring_to_front(&mut self, id: SegmentId) {
        (**self).bring_to_front(id);
    }

    fn set_vertex_handles(&mut self, id: SegmentId, enabled: bool) {
        (**self).set_vertex_handles(id, enabled);
    }

    fn fire(&mut self, event: &SegmentEdited<'_, V>) {
        (**self).fire(event);
    }
}
