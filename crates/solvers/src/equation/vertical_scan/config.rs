use thiserror::Error;

/// Default finite-difference step for gradients.
pub const DELTA: f64 = 0.001;

/// Default number of seed points sampled along the scan line.
pub const RESOLUTION: usize = 100;

/// Default number of grid cells along the shorter side of the bounds.
pub const SUB_RESOLUTION: usize = 200;

/// Default distance a point moves in one refinement pass.
pub const STEP: f64 = 0.05;

/// Default number of refinement passes.
pub const PASSES: usize = 100;

/// Configuration for the vertical scan.
///
/// Deserialized configs are validated like [`Config::new`], and missing
/// fields take their default values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ConfigFields")
)]
pub struct Config {
    delta: f64,
    resolution: usize,
    sub_resolution: usize,
    step: f64,
    passes: usize,
}

/// Errors that can occur when validating a vertical scan config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("delta must be finite and positive")]
    Delta,

    #[error("resolution must be positive")]
    Resolution,

    #[error("sub_resolution must be positive")]
    SubResolution,

    #[error("step must be finite and positive")]
    Step,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(DELTA, RESOLUTION, SUB_RESOLUTION, STEP, PASSES).unwrap()
    }
}

impl Config {
    /// Creates a new validated config.
    ///
    /// # Errors
    ///
    /// Returns an error if `delta` or `step` is not finite and positive, or if
    /// either resolution is zero.
    pub fn new(
        delta: f64,
        resolution: usize,
        sub_resolution: usize,
        step: f64,
        passes: usize,
    ) -> Result<Self, ConfigError> {
        if !delta.is_finite() || delta <= 0.0 {
            return Err(ConfigError::Delta);
        }
        if resolution == 0 {
            return Err(ConfigError::Resolution);
        }
        if sub_resolution == 0 {
            return Err(ConfigError::SubResolution);
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::Step);
        }

        Ok(Self {
            delta,
            resolution,
            sub_resolution,
            step,
            passes,
        })
    }

    /// Returns the finite-difference step for gradients.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Returns the number of seed samples along the scan line.
    #[must_use]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Returns the number of grid cells along the shorter side of the bounds.
    #[must_use]
    pub fn sub_resolution(&self) -> usize {
        self.sub_resolution
    }

    /// Returns the per-pass move distance.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the number of refinement passes.
    #[must_use]
    pub fn passes(&self) -> usize {
        self.passes
    }
}

#[cfg(feature = "serde-derive")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct ConfigFields {
    delta: f64,
    resolution: usize,
    sub_resolution: usize,
    step: f64,
    passes: usize,
}

#[cfg(feature = "serde-derive")]
impl Default for ConfigFields {
    fn default() -> Self {
        Self {
            delta: DELTA,
            resolution: RESOLUTION,
            sub_resolution: SUB_RESOLUTION,
            step: STEP,
            passes: PASSES,
        }
    }
}

#[cfg(feature = "serde-derive")]
impl TryFrom<ConfigFields> for Config {
    type Error = ConfigError;

    fn try_from(fields: ConfigFields) -> Result<Self, Self::Error> {
        Self::new(
            fields.delta,
            fields.resolution,
            fields.sub_resolution,
            fields.step,
            fields.passes,
        )
    }
}
