mod controller;
mod host;
mod store;

pub use controller::{AgentState, CaptureController, CaptureOutcome, CaptureState, SkipReason};
pub use host::{CaptureHost, RegionEvent, RegionSignal};
pub use store::{CapturedTerritory, TerritoryId, TerritoryStore};
