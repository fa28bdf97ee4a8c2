use crate::error::HostError;
use crate::math::Point3;
use crate::tessellation::TriangleMesh;

use super::TerritoryId;

/// Which side of the home region boundary the agent just crossed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionSignal {
    /// The agent entered the home region.
    Enter,
    /// The agent left the home region.
    Exit,
}

/// A boundary crossing reported by the host's trigger system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionEvent<'a> {
    pub signal: RegionSignal,
    /// Tag of the object that crossed the boundary.
    pub tag: &'a str,
}

impl<'a> RegionEvent<'a> {
    #[must_use]
    pub fn enter(tag: &'a str) -> Self {
        Self {
            signal: RegionSignal::Enter,
            tag,
        }
    }

    #[must_use]
    pub fn exit(tag: &'a str) -> Self {
        Self {
            signal: RegionSignal::Exit,
            tag,
        }
    }
}

/// Services the host runtime provides to a capture controller.
pub trait CaptureHost {
    /// Shows or hides the agent's trail visual.
    fn set_trail_visible(&mut self, visible: bool);

    /// Takes ownership of a freshly built territory mesh and places it in the
    /// scene. The host supplies the material.
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] if the scene object cannot be created.
    fn spawn_territory(&mut self, id: TerritoryId, mesh: TriangleMesh) -> Result<(), HostError>;

    /// Spawns a trigger marker at a freshly sampled trail position.
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] if the marker is missing a required component.
    fn spawn_marker(&mut self, _position: Point3, _radius: f64) -> Result<(), HostError> {
        Ok(())
    }
}
