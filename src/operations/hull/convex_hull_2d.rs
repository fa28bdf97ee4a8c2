use crate::math::polygon_2d::cross_2d;
use crate::math::Point2;

/// Computes the convex hull of a set of ground-plane points using the
/// monotone chain algorithm.
///
/// The hull is returned counter-clockwise, each vertex exactly once (no
/// closing duplicate), with collinear middle points removed.
pub struct ConvexHull2D<'a> {
    points: &'a [Point2],
}

impl<'a> ConvexHull2D<'a> {
    /// Creates a new `ConvexHull2D` operation over `points`.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self { points }
    }

    /// Executes the hull computation.
    ///
    /// Points with a NaN or infinite coordinate are ignored. Returns an
    /// empty hull for fewer than 3 remaining points. Collinear or coincident
    /// inputs may yield a degenerate hull of 2 or fewer points.
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        // Work on a finite-only copy; the input slice is left untouched.
        let mut sorted: Vec<Point2> = self
            .points
            .iter()
            .filter(|p| p.x.is_finite() && p.y.is_finite())
            .copied()
            .collect();
        if sorted.len() < 3 {
            return Vec::new();
        }

        // Sort by y, ties broken by x.
        sorted.sort_by(|a, b| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)));

        let mut hull: Vec<Point2> = Vec::with_capacity(sorted.len() + 1);

        // First chain: bottom to top along the right side.
        for &point in &sorted {
            while hull.len() >= 2 && turns_non_left(&hull, &point) {
                hull.pop();
            }
            hull.push(point);
        }

        // Second chain: top to bottom along the left side, never popping
        // into the first chain.
        let first_chain_len = hull.len();
        for &point in sorted.iter().rev().skip(1) {
            while hull.len() > first_chain_len && turns_non_left(&hull, &point) {
                hull.pop();
            }
            hull.push(point);
        }

        // The starting point was pushed again to close the loop.
        hull.pop();
        hull
    }
}

/// Convenience wrapper around [`ConvexHull2D`].
#[must_use]
pub fn compute_hull(points: &[Point2]) -> Vec<Point2> {
    ConvexHull2D::new(points).execute()
}

/// `true` when the top two stack entries and `candidate` do not make a
/// strict left turn.
fn turns_non_left(stack: &[Point2], candidate: &Point2) -> bool {
    let n = stack.len();
    cross_2d(&stack[n - 2], &stack[n - 1], candidate) <= 0.0
}
