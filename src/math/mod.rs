/// 2D point type, the default planar vertex for editable shapes.
pub type Point2 = nalgebra::Point2<f64>;
