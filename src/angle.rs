//! Validated viewing angles.
//!
//! The circle construction divides by `cos(θ/2)`, which vanishes at θ = π,
//! so every angle handed to the circle builder goes through [`Angle::new`].

use std::f64::consts::PI;
use std::fmt;

use crate::error::{Error, Result};

/// Margin kept away from π so that `cos(θ/2)` stays well above zero.
pub const PI_MARGIN: f64 = 1e-6;

/// A viewing angle θ in radians, guaranteed to satisfy `0 < θ < π - PI_MARGIN`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    /// Largest accepted value.
    pub const MAX: f64 = PI - PI_MARGIN;

    /// Validate a raw angle.
    pub fn new(theta: f64) -> Result<Self> {
        if theta.is_finite() && theta > 0.0 && theta < Self::MAX {
            Ok(Self(theta))
        } else {
            Err(Error::AngleOutOfRange {
                theta,
                min: 0.0,
                max: Self::MAX,
            })
        }
    }

    /// Angle in radians.
    #[must_use]
    pub fn radians(self) -> f64 {
        self.0
    }

    /// Angle in degrees.
    #[must_use]
    pub fn degrees(self) -> f64 {
        self.0.to_degrees()
    }

    /// `cos(θ/2)`, strictly positive for any valid angle.
    #[must_use]
    pub fn half_cos(self) -> f64 {
        (self.0 / 2.0).cos()
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} rad ({:.1}°)", self.0, self.degrees())
    }
}

impl TryFrom<f64> for Angle {
    type Error = Error;

    fn try_from(theta: f64) -> Result<Self> {
        Self::new(theta)
    }
}

/// Closed range `[min, max]` the sweep moves through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleBounds {
    min: Angle,
    max: Angle,
}

impl AngleBounds {
    /// Create bounds; both ends must be valid angles with `min < max`.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        let min = Angle::new(min)?;
        let max = Angle::new(max)?;
        if min >= max {
            return Err(Error::InvalidConfig(format!(
                "angle bounds inverted: min {} >= max {}",
                min.radians(),
                max.radians()
            )));
        }
        Ok(Self { min, max })
    }

    /// Lower bound; also the initial sweep angle.
    #[must_use]
    pub fn min(&self) -> Angle {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> Angle {
        self.max
    }

    /// Clamp a raw value into the bounds.
    #[must_use]
    pub fn clamp(&self, theta: f64) -> Angle {
        if theta.is_nan() || theta <= self.min.0 {
            self.min
        } else if theta >= self.max.0 {
            self.max
        } else {
            Angle(theta)
        }
    }

    /// Whether `theta` is at (or past) the upper bound.
    #[must_use]
    pub fn is_at_max(&self, theta: Angle) -> bool {
        theta.0 >= self.max.0
    }
}

impl Default for AngleBounds {
    fn default() -> Self {
        Self {
            min: Angle(0.01),
            max: Angle(PI - 0.01),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_angle_accepts_open_interval() {
        assert!(Angle::new(0.01).is_ok());
        assert!(Angle::new(PI / 2.0).is_ok());
        assert!(Angle::new(PI - 0.01).is_ok());
    }

    #[test]
    fn test_angle_rejects_out_of_range() {
        for theta in [0.0, -0.5, PI, PI - 1e-9, 4.0, f64::NAN, f64::INFINITY] {
            let err = Angle::new(theta).unwrap_err();
            assert!(matches!(err, Error::AngleOutOfRange { .. }), "theta = {theta}");
        }
    }

    #[test]
    fn test_half_cos_positive() {
        let a = Angle::new(Angle::MAX - 1e-9).unwrap();
        assert!(a.half_cos() > 0.0);
        assert_relative_eq!(Angle::new(PI / 2.0).unwrap().half_cos(), (PI / 4.0).cos());
    }

    #[test]
    fn test_display() {
        let a = Angle::new(PI / 2.0).unwrap();
        assert_eq!(a.to_string(), "1.57 rad (90.0°)");
    }

    #[test]
    fn test_bounds_clamp() {
        let bounds = AngleBounds::default();
        assert_eq!(bounds.clamp(-1.0), bounds.min());
        assert_eq!(bounds.clamp(10.0), bounds.max());
        assert_eq!(bounds.clamp(f64::NAN), bounds.min());
        assert_relative_eq!(bounds.clamp(1.0).radians(), 1.0);
        assert!(bounds.is_at_max(bounds.max()));
    }

    #[test]
    fn test_bounds_inverted() {
        assert!(matches!(
            AngleBounds::new(2.0, 1.0),
            Err(Error::InvalidConfig(_))
        ));
        assert!(AngleBounds::new(0.0, 1.0).is_err());
    }
}
