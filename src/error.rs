//! Error types for isoptic-sweep operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building circles or driving a sweep.
///
/// Only [`Error::AngleOutOfRange`] and the parameter-validation variants are
/// surfaced from the public sweep API. [`Error::DegeneratePair`] and
/// [`Error::NonFinite`] describe a single pair and are absorbed by skipping it.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (config file operations).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Viewing angle outside the open interval accepted by the circle builder.
    #[error("Angle {theta} rad out of range: expected {min} < theta < {max}")]
    AngleOutOfRange {
        /// Rejected angle.
        theta: f64,
        /// Exclusive lower bound.
        min: f64,
        /// Exclusive upper bound.
        max: f64,
    },

    /// The two points of a pair coincide, so no chord exists.
    #[error("Degenerate pair: points are {distance} apart")]
    DegeneratePair {
        /// Distance between the two points.
        distance: f64,
    },

    /// Near-degenerate geometry produced a non-finite value.
    #[error("Non-finite {what} in circle construction")]
    NonFinite {
        /// Name of the quantity that overflowed.
        what: &'static str,
    },

    /// Fewer points than needed to form a single pair.
    #[error("Too few points: {count} (need at least 2)")]
    TooFewPoints {
        /// Number of points supplied.
        count: usize,
    },

    /// A point coordinate is NaN or infinite.
    #[error("Non-finite coordinate at point {index}")]
    NonFiniteCoordinate {
        /// Index of the offending point.
        index: usize,
    },

    /// Jitter magnitude must be finite and non-negative.
    #[error("Invalid jitter: {0} (must be >= 0)")]
    InvalidJitter(f64),

    /// Sweep step must be finite and positive.
    #[error("Invalid step size: {0} (must be > 0)")]
    InvalidStepSize(f64),

    /// Configuration is well-formed YAML but semantically invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed.
    #[error("Config parse error at line {line}: {message}")]
    ConfigParse {
        /// Line number of the error (1-based, 0 when unknown).
        line: usize,
        /// Parser message.
        message: String,
    },
}

impl Error {
    /// Whether this error only affects a single pair and can be skipped.
    #[must_use]
    pub fn is_pair_local(&self) -> bool {
        matches!(self, Self::DegeneratePair { .. } | Self::NonFinite { .. })
    }
}
