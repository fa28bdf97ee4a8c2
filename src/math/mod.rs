pub mod polygon_2d;

/// 2D ground-plane point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D world point type (Y up).
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Projects a world position onto the ground plane as `(x, z)`.
#[must_use]
pub fn ground_projection(position: &Point3) -> Point2 {
    Point2::new(position.x, position.z)
}

/// Lifts a ground-plane point back into the world at the given height.
#[must_use]
pub fn lift(point: &Point2, height: f64) -> Point3 {
    Point3::new(point.x, height, point.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_drops_height() {
        let p = ground_projection(&Point3::new(1.5, 7.0, -2.0));
        assert!((p.x - 1.5).abs() < TOLERANCE);
        assert!((p.y + 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn lift_inverts_projection() {
        let world = Point3::new(3.0, 0.25, 4.0);
        let back = lift(&ground_projection(&world), 0.25);
        assert!((back - world).norm() < TOLERANCE);
    }
}
