use tracing::{debug, info, warn};

use crate::config::CaptureConfig;
use crate::error::Result;
use crate::math::polygon_2d::signed_area_2d;
use crate::math::{Point2, Point3};
use crate::operations::hull::compute_hull;
use crate::operations::shaping::build_mesh;
use crate::trail::TrailSampler;

use super::{
    CaptureHost, CapturedTerritory, RegionEvent, RegionSignal, TerritoryId, TerritoryStore,
};

/// Per-agent state shared with the rest of the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgentState {
    outside: bool,
}

impl AgentState {
    /// An agent starting inside its home region.
    #[must_use]
    pub fn inside() -> Self {
        Self { outside: false }
    }

    /// An agent starting on an excursion.
    #[must_use]
    pub fn outside() -> Self {
        Self { outside: true }
    }

    #[must_use]
    pub fn is_outside(&self) -> bool {
        self.outside
    }

    /// The capture state implied by the agent's position.
    #[must_use]
    pub fn capture_state(&self) -> CaptureState {
        if self.outside {
            CaptureState::Outside
        } else {
            CaptureState::Inside
        }
    }
}

/// Where the agent is relative to its home region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Inside,
    Outside,
}

/// Why a capture attempt produced no territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The trail held fewer than 3 points.
    TooFewPoints(usize),
    /// The hull collapsed to fewer than 3 vertices (collinear or coincident trail).
    DegenerateHull(usize),
}

/// Result of feeding one [`RegionEvent`] to a [`CaptureController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Wrong tag, or a signal that does not change the state.
    Ignored,
    /// The agent left the region; trail sampling started.
    Departed,
    /// The agent returned and a territory was built.
    Captured { id: TerritoryId, hull_len: usize },
    /// The agent returned but the trail could not enclose any area.
    Skipped(SkipReason),
}

/// Drives trail sampling and territory capture for a single agent.
///
/// The controller exclusively owns the agent's sampler and state, so only one
/// capture can ever be in flight per agent.
pub struct CaptureController<H> {
    config: CaptureConfig,
    sampler: TrailSampler,
    agent: AgentState,
    territories: TerritoryStore,
    host: H,
}

impl<H: CaptureHost> CaptureController<H> {
    /// Creates a controller from its collaborators.
    ///
    /// The initial state follows `agent`; an agent that starts outside has
    /// sampling enabled immediately.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`](crate::error::ConfigError) if `config` is invalid.
    pub fn new(
        config: CaptureConfig,
        mut sampler: TrailSampler,
        agent: AgentState,
        host: H,
    ) -> Result<Self> {
        config.validate()?;
        sampler.set_active(agent.is_outside());
        Ok(Self {
            config,
            sampler,
            agent,
            territories: TerritoryStore::new(),
            host,
        })
    }

    /// Creates a controller for an agent starting inside its home region,
    /// with a sampler built from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`](crate::error::ConfigError) if `config` is invalid.
    pub fn from_config(config: CaptureConfig, host: H) -> Result<Self> {
        let sampler = TrailSampler::new(config.sample_interval);
        Self::new(config, sampler, AgentState::inside(), host)
    }

    /// Current state, read from the owned [`AgentState`].
    #[must_use]
    pub fn state(&self) -> CaptureState {
        self.agent.capture_state()
    }

    #[must_use]
    pub fn agent(&self) -> AgentState {
        self.agent
    }

    #[must_use]
    pub fn sampler(&self) -> &TrailSampler {
        &self.sampler
    }

    #[must_use]
    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    #[must_use]
    pub fn territories(&self) -> &TerritoryStore {
        &self.territories
    }

    pub fn territories_mut(&mut self) -> &mut TerritoryStore {
        &mut self.territories
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Advances the trail sampler by one frame.
    ///
    /// Returns the ground point recorded this tick, if any. A marker that
    /// fails to spawn is logged; the point stays recorded.
    pub fn tick(&mut self, dt: f64, position: &Point3) -> Option<Point2> {
        let point = self.sampler.tick(dt, position)?;
        if self.config.spawn_markers {
            if let Err(err) = self.host.spawn_marker(*position, self.config.marker_radius) {
                warn!(error = %err, x = point.x, y = point.y, "trail marker not spawned");
            }
        }
        Some(point)
    }

    /// Reacts to a boundary crossing reported by the host.
    pub fn handle(&mut self, event: RegionEvent<'_>) -> CaptureOutcome {
        if event.tag != self.config.agent_tag {
            debug!(tag = event.tag, "ignoring boundary signal from non-agent");
            return CaptureOutcome::Ignored;
        }

        match (self.state(), event.signal) {
            (CaptureState::Inside, RegionSignal::Exit) => self.depart(),
            (CaptureState::Outside, RegionSignal::Enter) => self.return_home(),
            (state, signal) => {
                debug!(?state, ?signal, "duplicate boundary signal ignored");
                CaptureOutcome::Ignored
            }
        }
    }

    fn depart(&mut self) -> CaptureOutcome {
        self.agent.outside = true;
        self.sampler.reset();
        self.sampler.set_active(true);
        self.host.set_trail_visible(true);
        debug!("agent left home region, trail sampling started");
        CaptureOutcome::Departed
    }

    fn return_home(&mut self) -> CaptureOutcome {
        self.agent.outside = false;
        self.host.set_trail_visible(false);
        self.sampler.set_active(false);

        let trail = self.sampler.points();
        let outcome = self.capture(&trail);
        self.sampler.reset();
        outcome
    }

    fn capture(&mut self, trail: &[Point2]) -> CaptureOutcome {
        if trail.len() < 3 {
            debug!(points = trail.len(), "trail too short, capture skipped");
            return CaptureOutcome::Skipped(SkipReason::TooFewPoints(trail.len()));
        }

        let hull = compute_hull(trail);
        let Some(mesh) = build_mesh(&hull, self.config.extrude_height) else {
            debug!(hull_len = hull.len(), "degenerate hull, capture skipped");
            return CaptureOutcome::Skipped(SkipReason::DegenerateHull(hull.len()));
        };

        let hull_len = hull.len();
        let area = signed_area_2d(&hull);
        let id = self.territories.add(CapturedTerritory {
            hull,
            area,
            height: self.config.extrude_height,
        });
        info!(points = trail.len(), hull_len, area, "territory captured");

        if let Err(err) = self.host.spawn_territory(id, mesh) {
            warn!(error = %err, "host failed to display captured territory");
        }
        CaptureOutcome::Captured { id, hull_len }
    }
}
