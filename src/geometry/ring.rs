/// An ordered vertex sequence forming one contour of a shape.
///
/// Rings of a polygon are closed (the last vertex connects back to the
/// first without repeating it); a flat polyline is a single open ring.
pub type Ring<V> = Vec<V>;

/// Locates one ring inside a shape.
///
/// `polyline` selects the part of a multi-geometry (always `0` otherwise),
/// `ring` selects the contour inside that part (`0` = outer, others = holes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RingPath {
    pub polyline: usize,
    pub ring: usize,
}

impl RingPath {
    /// Creates a new ring path.
    #[must_use]
    pub fn new(polyline: usize, ring: usize) -> Self {
        Self { polyline, ring }
    }
}

/// A borrowed ring together with its location and closure flag.
#[derive(Debug, Clone, Copy)]
pub struct RingView<'a, V> {
    pub path: RingPath,
    pub vertices: &'a [V],
    pub closed: bool,
}

/// Replaces `ring[start..end)` with `replacement`, keeping everything around it.
///
/// Out-of-range bounds are clamped to the ring length.
#[must_use]
pub fn splice<V: Clone>(ring: &[V], start: usize, end: usize, replacement: &[V]) -> Ring<V> {
    let start = start.min(ring.len());
    let end = end.clamp(start, ring.len());
    let mut out = Vec::with_capacity(start + replacement.len() + (ring.len() - end));
    out.extend_from_slice(&ring[..start]);
    out.extend_from_slice(replacement);
    out.extend_from_slice(&ring[end..]);
    out
}
