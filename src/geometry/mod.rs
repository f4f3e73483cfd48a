pub mod ring;
pub mod shape;

pub use ring::{Ring, RingPath, RingView};
pub use shape::{EditableShape, GeometryShape, Part, Shape, ShapeKind};
