use crate::math::{Point3, Vector3, TOLERANCE};

/// An indexed triangle mesh with per-vertex normals.
///
/// Front faces wind clockwise when viewed from outside the solid (the Y-up
/// engine convention), so the face normal of `(a, b, c)` is
/// `(c - a) × (b - a)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Unit vertex normals, one per vertex.
    pub normals: Vec<Vector3>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Number of vertices in the mesh.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles in the mesh.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Unnormalized face normal of triangle `tri`; its length is twice the
    /// triangle's area.
    fn weighted_face_normal(&self, tri: [u32; 3]) -> Vector3 {
        let a = self.vertices[tri[0] as usize];
        let b = self.vertices[tri[1] as usize];
        let c = self.vertices[tri[2] as usize];
        (c - a).cross(&(b - a))
    }

    /// Returns the unit face normal of the triangle at `index`, or `None` if
    /// the index is out of range or the triangle is degenerate.
    #[must_use]
    pub fn face_normal(&self, index: usize) -> Option<Vector3> {
        let tri = *self.indices.get(index)?;
        let n = self.weighted_face_normal(tri);
        let len = n.norm();
        (len > TOLERANCE).then(|| n / len)
    }

    /// Recomputes vertex normals from triangle winding.
    ///
    /// Each face normal is accumulated onto its three vertices weighted by
    /// the triangle's area, then normalized. Vertices touched only by
    /// degenerate triangles get a zero normal.
    pub fn recalculate_normals(&mut self) {
        let mut normals = vec![Vector3::zeros(); self.vertices.len()];
        for &tri in &self.indices {
            let n = self.weighted_face_normal(tri);
            for &i in &tri {
                normals[i as usize] += n;
            }
        }
        for n in &mut normals {
            let len = n.norm();
            if len > TOLERANCE {
                *n /= len;
            }
        }
        self.normals = normals;
    }
}
