use tracing::{trace, warn};

use crate::math::{ground_projection, Point2, Point3};

/// Records an agent's ground-plane positions on a fixed cadence.
///
/// The sampler owns its trail; consumers only ever receive copies via
/// [`TrailSampler::points`].
#[derive(Debug, Clone)]
pub struct TrailSampler {
    interval: f64,
    elapsed: f64,
    active: bool,
    points: Vec<Point2>,
}

impl TrailSampler {
    /// Creates an inactive sampler that records one point every `interval`
    /// time units once activated.
    #[must_use]
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            active: false,
            points: Vec::new(),
        }
    }

    /// The sampling cadence.
    #[must_use]
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Whether samples are currently being recorded by [`tick`](Self::tick).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Enables or disables timed sampling. Recorded points are kept.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        if !active {
            self.elapsed = 0.0;
        }
    }

    /// Advances the sampling timer by `dt` and records `position` when the
    /// interval has elapsed.
    ///
    /// At most one sample is taken per tick, and the timer restarts even when
    /// the position is rejected. Returns the recorded ground point, or `None`
    /// if nothing was recorded.
    pub fn tick(&mut self, dt: f64, position: &Point3) -> Option<Point2> {
        if !self.active {
            return None;
        }
        self.elapsed += dt;
        if self.elapsed < self.interval {
            return None;
        }
        self.elapsed = 0.0;
        self.append_sample(position)
    }

    /// Appends the ground projection `(x, z)` of `position` to the trail.
    ///
    /// Positions with a NaN or infinite ground coordinate are dropped and
    /// `None` is returned.
    pub fn append_sample(&mut self, position: &Point3) -> Option<Point2> {
        let point = ground_projection(position);
        if !(point.x.is_finite() && point.y.is_finite()) {
            warn!(x = point.x, y = point.y, "non-finite trail sample dropped");
            return None;
        }
        self.points.push(point);
        trace!(
            x = point.x,
            y = point.y,
            len = self.points.len(),
            "trail sample"
        );
        Some(point)
    }

    /// Returns a snapshot of every point recorded since the last reset.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        self.points.clone()
    }

    /// Number of recorded points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` if no points have been recorded since the last reset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Discards all recorded points and restarts the sampling timer.
    pub fn reset(&mut self) {
        self.points.clear();
        self.elapsed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64, z: f64) -> Point3 {
        Point3::new(x, 1.0, z)
    }

    #[test]
    fn append_projects_onto_ground() {
        let mut sampler = TrailSampler::new(0.01);
        let p = sampler.append_sample(&Point3::new(2.0, 5.0, -3.0));
        assert_eq!(p, Some(Point2::new(2.0, -3.0)));
        assert_eq!(sampler.points(), vec![Point2::new(2.0, -3.0)]);
    }

    #[test]
    fn inactive_sampler_ignores_ticks() {
        let mut sampler = TrailSampler::new(0.01);
        assert!(sampler.tick(1.0, &at(0.0, 0.0)).is_none());
        assert!(sampler.is_empty());
    }

    #[test]
    fn samples_once_interval_elapses() {
        let mut sampler = TrailSampler::new(0.1);
        sampler.set_active(true);
        assert!(sampler.tick(0.04, &at(0.0, 0.0)).is_none());
        assert!(sampler.tick(0.04, &at(1.0, 0.0)).is_none());
        assert_eq!(
            sampler.tick(0.04, &at(2.0, 0.0)),
            Some(Point2::new(2.0, 0.0))
        );
        assert_eq!(sampler.len(), 1);
    }

    #[test]
    fn long_tick_records_a_single_sample() {
        let mut sampler = TrailSampler::new(0.01);
        sampler.set_active(true);
        assert!(sampler.tick(0.5, &at(1.0, 1.0)).is_some());
        assert_eq!(sampler.len(), 1);
    }

    #[test]
    fn preserves_insertion_order() {
        let mut sampler = TrailSampler::new(0.01);
        sampler.set_active(true);
        for i in 0..5 {
            sampler.tick(0.02, &at(f64::from(i), 0.0));
        }
        let xs: Vec<f64> = sampler.points().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn snapshot_is_detached() {
        let mut sampler = TrailSampler::new(0.01);
        sampler.append_sample(&at(0.0, 0.0));
        let snapshot = sampler.points();
        sampler.append_sample(&at(1.0, 1.0));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(sampler.len(), 2);
    }

    #[test]
    fn non_finite_positions_are_not_recorded() {
        let mut sampler = TrailSampler::new(0.01);
        assert!(sampler.append_sample(&at(f64::NAN, 1.0)).is_none());
        assert!(sampler.append_sample(&at(0.0, f64::INFINITY)).is_none());
        assert!(sampler.is_empty());

        // Only the height is non-finite, so the ground point is still usable.
        let p = sampler.append_sample(&Point3::new(1.0, f64::NAN, 2.0));
        assert_eq!(p, Some(Point2::new(1.0, 2.0)));
    }

    #[test]
    fn non_finite_tick_restarts_timer_without_sample() {
        let mut sampler = TrailSampler::new(0.1);
        sampler.set_active(true);
        assert!(sampler.tick(0.2, &at(f64::NEG_INFINITY, 0.0)).is_none());
        assert!(sampler.is_empty());
        assert!(sampler.tick(0.05, &at(1.0, 1.0)).is_none());
        assert!(sampler.tick(0.05, &at(1.0, 1.0)).is_some());
        assert_eq!(sampler.points(), vec![Point2::new(1.0, 1.0)]);
    }

    #[test]
    fn reset_clears_points_and_timer() {
        let mut sampler = TrailSampler::new(0.1);
        sampler.set_active(true);
        sampler.append_sample(&at(0.0, 0.0));
        sampler.tick(0.09, &at(0.0, 0.0));
        sampler.reset();
        assert!(sampler.is_empty());
        assert!(sampler.tick(0.09, &at(0.0, 0.0)).is_none());
        assert!(sampler.is_active());
    }
}
