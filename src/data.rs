pub(crate) mod point;
mod point_set;
mod tour;

#[doc(inline)]
pub use point::Point;
pub use point_set::{PointId, PointSet};
pub use tour::Tour;
