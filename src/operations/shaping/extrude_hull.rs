use crate::math::{lift, Point2};
use crate::tessellation::TriangleMesh;

/// Extrudes a counter-clockwise convex ground polygon into a closed prism
/// standing on the ground plane.
///
/// Produces `2n` vertices (bottom ring, then top ring) and `4n - 4`
/// triangles: a bottom fan facing down, a top fan facing up, and two
/// triangles per hull edge facing outward.
pub struct ExtrudeHull<'a> {
    hull: &'a [Point2],
    height: f64,
}

impl<'a> ExtrudeHull<'a> {
    /// Creates a new `ExtrudeHull` operation.
    #[must_use]
    pub fn new(hull: &'a [Point2], height: f64) -> Self {
        Self { hull, height }
    }

    /// Executes the extrusion.
    ///
    /// Returns `None` when the hull has fewer than 3 vertices.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Option<TriangleMesh> {
        let n = self.hull.len();
        if n < 3 {
            return None;
        }

        let mut vertices = Vec::with_capacity(2 * n);
        vertices.extend(self.hull.iter().map(|p| lift(p, 0.0)));
        vertices.extend(self.hull.iter().map(|p| lift(p, self.height)));

        let mut indices: Vec<[u32; 3]> = Vec::with_capacity(4 * n - 4);
        let n = n as u32;

        // Bottom cap
        for i in 1..n - 1 {
            indices.push([0, i + 1, i]);
        }

        // Top cap
        let top = n;
        for i in 1..n - 1 {
            indices.push([top, top + i, top + i + 1]);
        }

        // Side walls, one quad per hull edge
        for i in 0..n {
            let next = (i + 1) % n;
            indices.push([i, next, i + n]);
            indices.push([next, next + n, i + n]);
        }

        let mut mesh = TriangleMesh {
            vertices,
            normals: Vec::new(),
            indices,
        };
        mesh.recalculate_normals();
        Some(mesh)
    }
}

/// Convenience wrapper around [`ExtrudeHull`].
#[must_use]
pub fn build_mesh(hull: &[Point2], height: f64) -> Option<TriangleMesh> {
    ExtrudeHull::new(hull, height).execute()
}
