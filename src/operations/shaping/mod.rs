mod extrude_hull;

pub use extrude_hull::{build_mesh, ExtrudeHull};
