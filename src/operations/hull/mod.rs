mod convex_hull_2d;

pub use convex_hull_2d::{compute_hull, ConvexHull2D};
