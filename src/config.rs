use crate::error::ConfigError;

/// Tunable parameters of the capture pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureConfig {
    /// Time between two trail samples.
    pub sample_interval: f64,
    /// Thickness of the extruded territory along the Y axis.
    pub extrude_height: f64,
    /// Tag identifying the agent in region boundary signals.
    pub agent_tag: String,
    /// Whether a host-side marker is spawned for every trail sample.
    pub spawn_markers: bool,
    /// Radius of the trigger volume spawned per trail sample.
    pub marker_radius: f64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            sample_interval: 0.01,
            extrude_height: 0.25,
            agent_tag: "Player".to_owned(),
            spawn_markers: false,
            marker_radius: 0.5,
        }
    }
}

impl CaptureConfig {
    /// Sets the sampling cadence.
    #[must_use]
    pub fn with_sample_interval(mut self, interval: f64) -> Self {
        self.sample_interval = interval;
        self
    }

    /// Sets the extrusion height.
    #[must_use]
    pub fn with_extrude_height(mut self, height: f64) -> Self {
        self.extrude_height = height;
        self
    }

    /// Sets the agent tag.
    #[must_use]
    pub fn with_agent_tag(mut self, tag: impl Into<String>) -> Self {
        self.agent_tag = tag.into();
        self
    }

    /// Enables per-sample markers with the given radius.
    #[must_use]
    pub fn with_markers(mut self, radius: f64) -> Self {
        self.spawn_markers = true;
        self.marker_radius = radius;
        self
    }

    /// Checks that every numeric parameter is finite and positive and that
    /// the agent tag is non-empty.
    ///
    /// # Errors
    ///
    /// Returns the first offending parameter as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("sample_interval", self.sample_interval)?;
        positive("extrude_height", self.extrude_height)?;
        if self.spawn_markers {
            positive("marker_radius", self.marker_radius)?;
        }
        if self.agent_tag.is_empty() {
            return Err(ConfigError::EmptyAgentTag);
        }
        Ok(())
    }
}

fn positive(parameter: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { parameter, value })
    }
}
