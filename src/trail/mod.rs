mod sampler;

pub use sampler::TrailSampler;
