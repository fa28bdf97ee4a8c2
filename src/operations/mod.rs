pub mod hull;
pub mod shaping;
