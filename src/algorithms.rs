pub mod nearest_neighbor;
pub mod tour_construction;

#[doc(inline)]
pub use nearest_neighbor::axis_sweep::closest_unvisited;

#[doc(inline)]
pub use tour_construction::{build_tour, build_tour_random, build_tour_with, TourBuilder};
