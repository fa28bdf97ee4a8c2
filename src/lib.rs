pub mod capture;
pub mod config;
pub mod error;
pub mod math;
pub mod operations;
pub mod tessellation;
pub mod trail;

pub use capture::{CaptureController, CaptureHost, CaptureOutcome, RegionEvent};
pub use config::CaptureConfig;
pub use error::{Result, TerritoryError};
pub use operations::hull::compute_hull;
pub use operations::shaping::build_mesh;
pub use trail::TrailSampler;
