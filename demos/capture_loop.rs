//! Territory capture demo — drives an agent around one loop and logs the
//! captured territory.
//!
//! Usage:
//! ```text
//! cargo run --example capture_loop
//! RUST_LOG=territory=trace cargo run --example capture_loop
//! ```

use territory::capture::TerritoryId;
use territory::error::HostError;
use territory::math::{Point3, Vector3};
use territory::tessellation::TriangleMesh;
use territory::{CaptureConfig, CaptureController, CaptureHost, CaptureOutcome, RegionEvent};

/// Forward speed of the agent, units per second.
const SPEED: f64 = 10.0;
/// Steering rate at full input, degrees per second.
const TURN_SPEED: f64 = 100.0;
/// Radius of the circular home region around the origin.
const HOME_RADIUS: f64 = 3.0;
const FRAME: f64 = 1.0 / 60.0;

struct LoggingScene;

impl CaptureHost for LoggingScene {
    fn set_trail_visible(&mut self, visible: bool) {
        tracing::info!(visible, "trail renderer toggled");
    }

    fn spawn_territory(&mut self, id: TerritoryId, mesh: TriangleMesh) -> Result<(), HostError> {
        tracing::info!(
            ?id,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "spawned CapturedArea"
        );
        Ok(())
    }

    fn spawn_marker(&mut self, position: Point3, radius: f64) -> Result<(), HostError> {
        tracing::trace!(x = position.x, z = position.z, radius, "trail marker");
        Ok(())
    }
}

/// Kinematic agent: constant forward motion, yaw driven by steering input.
struct Agent {
    position: Point3,
    yaw_degrees: f64,
}

impl Agent {
    fn update(&mut self, steer: f64, dt: f64) {
        let yaw = self.yaw_degrees.to_radians();
        let forward = Vector3::new(yaw.sin(), 0.0, yaw.cos());
        self.position += forward * SPEED * dt;
        self.yaw_degrees += steer * TURN_SPEED * dt;
    }

    fn is_home(&self) -> bool {
        Vector3::new(self.position.x, 0.0, self.position.z).norm() < HOME_RADIUS
    }
}

fn main() -> territory::Result<()> {
    // Default: WARN for everything, INFO for territory.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("capture_loop=info".parse().unwrap_or_default())
        .add_directive("territory=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = CaptureConfig::default().with_markers(0.5);
    let mut controller = CaptureController::from_config(config, LoggingScene)?;

    let mut agent = Agent {
        position: Point3::origin(),
        yaw_degrees: 0.0,
    };
    let mut was_home = agent.is_home();

    // One full turn takes 360 / TURN_SPEED seconds; run a little longer.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let frames = (1.2 * 360.0 / TURN_SPEED / FRAME) as usize;
    for _ in 0..frames {
        agent.update(1.0, FRAME);
        controller.tick(FRAME, &agent.position);

        let home = agent.is_home();
        if home != was_home {
            let event = if home {
                RegionEvent::enter("Player")
            } else {
                RegionEvent::exit("Player")
            };
            match controller.handle(event) {
                CaptureOutcome::Captured { hull_len, .. } => {
                    tracing::info!(hull_len, "loop closed");
                }
                outcome => tracing::info!(?outcome, "boundary crossed"),
            }
            was_home = home;
        }
    }

    tracing::info!(
        territories = controller.territories().len(),
        total_area = controller.territories().total_area(),
        "session finished"
    );
    Ok(())
}
