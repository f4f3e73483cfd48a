use crate::error::GeometryError;

use super::ring::{Ring, RingPath, RingView};

/// The structural kind of a shape's geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// A single open polyline.
    Flat,
    /// A polygon: outer ring plus optional holes.
    Polygon,
    /// A collection of polylines and/or polygons.
    Multi,
}

/// One member of a multi-geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Part<V> {
    /// An open polyline.
    Flat(Ring<V>),
    /// A polygon: ring 0 is the outer contour, the rest are holes.
    Polygon(Vec<Ring<V>>),
}

impl<V> Part<V> {
    fn rings(&self) -> &[Ring<V>] {
        match self {
            Self::Flat(ring) => std::slice::from_ref(ring),
            Self::Polygon(rings) => rings,
        }
    }

    fn ring_mut(&mut self, ring: usize) -> Option<&mut Ring<V>> {
        match self {
            Self::Flat(r) => (ring == 0).then_some(r),
            Self::Polygon(rings) => rings.get_mut(ring),
        }
    }

    fn is_closed(&self) -> bool {
        matches!(self, Self::Polygon(_))
    }
}

/// The full vertex geometry of an editable shape.
///
/// The variant is fixed when the shape is built, so ring addressing never
/// has to guess the nesting depth of the vertex data.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryShape<V> {
    Flat(Ring<V>),
    Polygon(Vec<Ring<V>>),
    Multi(Vec<Part<V>>),
}

impl<V> GeometryShape<V> {
    /// Returns the structural kind of this geometry.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Flat(_) => ShapeKind::Flat,
            Self::Polygon(_) => ShapeKind::Polygon,
            Self::Multi(_) => ShapeKind::Multi,
        }
    }

    /// Returns every ring in addressing order: parts first, then rings within a part.
    #[must_use]
    pub fn rings(&self) -> Vec<RingView<'_, V>> {
        fn view<V>(polyline: usize, ring: usize, vertices: &[V], closed: bool) -> RingView<'_, V> {
            RingView {
                path: RingPath::new(polyline, ring),
                vertices,
                closed,
            }
        }

        match self {
            Self::Flat(ring) => vec![view(0, 0, ring.as_slice(), false)],
            Self::Polygon(rings) => rings
                .iter()
                .enumerate()
                .map(|(i, r)| view(0, i, r.as_slice(), true))
                .collect(),
            Self::Multi(parts) => parts
                .iter()
                .enumerate()
                .flat_map(|(p, part)| {
                    let closed = part.is_closed();
                    part.rings()
                        .iter()
                        .enumerate()
                        .map(move |(i, r)| view(p, i, r.as_slice(), closed))
                })
                .collect(),
        }
    }

    /// Returns the ring at `path`, if present.
    #[must_use]
    pub fn ring(&self, path: RingPath) -> Option<&[V]> {
        match self {
            Self::Flat(ring) => (path.polyline == 0 && path.ring == 0).then_some(ring.as_slice()),
            Self::Polygon(rings) if path.polyline == 0 => rings.get(path.ring).map(Vec::as_slice),
            Self::Polygon(_) => None,
            Self::Multi(parts) => parts
                .get(path.polyline)
                .and_then(|part| part.rings().get(path.ring))
                .map(Vec::as_slice),
        }
    }

    /// Replaces the ring at `path` as a whole, returning the previous ring.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::RingNotFound` if `path` does not address a ring.
    pub fn replace_ring(&mut self, path: RingPath, ring: Ring<V>) -> Result<Ring<V>, GeometryError> {
        let slot = match self {
            Self::Flat(r) => (path.polyline == 0 && path.ring == 0).then_some(r),
            Self::Polygon(rings) if path.polyline == 0 => rings.get_mut(path.ring),
            Self::Polygon(_) => None,
            Self::Multi(parts) => parts
                .get_mut(path.polyline)
                .and_then(|part| part.ring_mut(path.ring)),
        };
        slot.map(|r| std::mem::replace(r, ring))
            .ok_or(GeometryError::RingNotFound(path))
    }
}

/// A host object owning the authoritative geometry of an edited shape.
pub trait EditableShape {
    /// The vertex type; only cloned and compared, never inspected.
    type Vertex: Clone + PartialEq;

    /// Returns the current geometry.
    fn vertex_rings(&self) -> &GeometryShape<Self::Vertex>;

    /// Replaces the whole geometry at once.
    fn set_vertex_rings(&mut self, rings: GeometryShape<Self::Vertex>);

    /// Replaces a single ring, returning the previous one.
    ///
    /// The default copies the whole geometry and hands it to
    /// [`set_vertex_rings`](Self::set_vertex_rings); shapes that can swap a
    /// ring in place should override it.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::RingNotFound` if `path` does not address a ring.
    fn replace_ring(
        &mut self,
        path: RingPath,
        ring: Ring<Self::Vertex>,
    ) -> Result<Ring<Self::Vertex>, GeometryError> {
        let mut geometry = self.vertex_rings().clone();
        let old = geometry.replace_ring(path, ring)?;
        self.set_vertex_rings(geometry);
        Ok(old)
    }
}

/// A plain owned shape, counting how many times its geometry was replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape<V> {
    geometry: GeometryShape<V>,
    revision: u64,
}

impl<V> Shape<V> {
    /// Creates a shape from its geometry.
    #[must_use]
    pub fn new(geometry: GeometryShape<V>) -> Self {
        Self {
            geometry,
            revision: 0,
        }
    }

    /// Number of `set_vertex_rings` calls so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Consumes the shape, returning its geometry.
    #[must_use]
    pub fn into_geometry(self) -> GeometryShape<V> {
        self.geometry
    }
}

impl<V: Clone + PartialEq> EditableShape for Shape<V> {
    type Vertex = V;

    fn vertex_rings(&self) -> &GeometryShape<V> {
        &self.geometry
    }

    fn set_vertex_rings(&mut self, rings: GeometryShape<V>) {
        self.geometry = rings;
        self.revision += 1;
    }

    fn replace_ring(&mut self, path: RingPath, ring: Ring<V>) -> Result<Ring<V>, GeometryError> {
        let old = self.geometry.replace_ring(path, ring)?;
        self.revision += 1;
        Ok(old)
    }
}
