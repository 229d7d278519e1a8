//! Sweep configuration.
//!
//! Supports YAML configuration with per-field defaults. Every field is
//! optional in the file; missing fields fall back to the defaults below.

use std::f64::consts::PI;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::angle::AngleBounds;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::points::Layout;
use crate::sweep::DEFAULT_STEP;

/// Parameters for point generation and the θ sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Number of points to generate (>= 2).
    #[serde(default = "default_point_count")]
    pub point_count: usize,

    /// Maximum per-coordinate perturbation (>= 0).
    #[serde(default = "default_jitter")]
    pub jitter: f64,

    /// θ increment per tick in radians (> 0).
    #[serde(default = "default_step")]
    pub step: f64,

    /// Initial θ and lower sweep bound.
    #[serde(default = "default_min_angle")]
    pub min_angle: f64,

    /// Upper sweep bound.
    #[serde(default = "default_max_angle")]
    pub max_angle: f64,

    /// Center of the base layout as `[x, y]`.
    #[serde(default = "default_layout_center")]
    pub layout_center: [f64; 2],

    /// Half the side of the base square.
    #[serde(default = "default_layout_half_size")]
    pub layout_half_size: f64,

    /// RNG seed; `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_point_count() -> usize {
    4
}
fn default_jitter() -> f64 {
    20.0
}
fn default_step() -> f64 {
    DEFAULT_STEP
}
fn default_min_angle() -> f64 {
    0.01
}
fn default_max_angle() -> f64 {
    PI - 0.01
}
fn default_layout_center() -> [f64; 2] {
    [250.0, 250.0]
}
fn default_layout_half_size() -> f64 {
    150.0
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            point_count: default_point_count(),
            jitter: default_jitter(),
            step: default_step(),
            min_angle: default_min_angle(),
            max_angle: default_max_angle(),
            layout_center: default_layout_center(),
            layout_half_size: default_layout_half_size(),
            seed: None,
        }
    }
}

impl SweepConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parses and validates configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Check the documented parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if self.point_count < 2 {
            return Err(Error::TooFewPoints {
                count: self.point_count,
            });
        }
        if !self.jitter.is_finite() || self.jitter < 0.0 {
            return Err(Error::InvalidJitter(self.jitter));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(Error::InvalidStepSize(self.step));
        }
        if !self.layout_half_size.is_finite() || self.layout_half_size <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "layout_half_size must be > 0, got {}",
                self.layout_half_size
            )));
        }
        if !self.layout_center.iter().all(|v| v.is_finite()) {
            return Err(Error::InvalidConfig(
                "layout_center must be finite".to_string(),
            ));
        }
        self.bounds().map(|_| ())
    }

    /// Sweep bounds.
    pub fn bounds(&self) -> Result<AngleBounds> {
        AngleBounds::new(self.min_angle, self.max_angle)
    }

    /// Base layout for point generation.
    #[must_use]
    pub fn layout(&self) -> Layout {
        let [x, y] = self.layout_center;
        Layout::new(Point::new(x, y), self.layout_half_size)
    }
}
