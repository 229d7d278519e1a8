//! # Isoptic-Sweep
//!
//! Inscribed-angle circle sweep over a planar point set.
//!
//! For every pair of input points and a viewing angle θ, isoptic-sweep builds
//! the circle through both points whose tangents at the points meet at θ.
//! As θ grows from near 0 toward π these circles grow from the chord-diameter
//! circles outward; the sweep finds the smallest θ at which every pair of
//! circles overlaps, and the point where the last pair first touches.
//!
//! ## Quick Start
//!
//! ```rust
//! use isoptic_sweep::prelude::*;
//!
//! let points = PointSet::new(vec![
//!     Point::new(100.0, 100.0),
//!     Point::new(400.0, 100.0),
//!     Point::new(100.0, 400.0),
//!     Point::new(400.0, 400.0),
//! ])?;
//!
//! let mut sweep = Sweep::new(points, AngleBounds::default());
//! if let Some(finding) = sweep.run(0.01)? {
//!     println!("overlap at {} near ({:.1}, {:.1})", finding.angle, finding.point.x, finding.point.y);
//! }
//! # Ok::<(), isoptic_sweep::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! Each query flows one way:
//! [`PointSet`](points::PointSet) → [`build_circles`](circle::build_circles)
//! → [`analyze`](overlap::analyze) → [`find_contact`](contact::find_contact).
//! Only [`Sweep`](sweep::Sweep) holds state (θ, search state, history).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in numeric geometry code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Geometric primitives (points, chords, circles).
pub mod geometry;

/// Validated viewing angles and sweep bounds.
pub mod angle;

/// Input point sets and their generation.
pub mod points;

// ============================================================================
// Construction and Analysis
// ============================================================================

/// Inscribed-angle circle construction.
pub mod circle;

/// Pairwise and global circle overlap.
pub mod overlap;

/// Contact point of the critical pair.
pub mod contact;

// ============================================================================
// Sweep Control
// ============================================================================

/// θ-sweep state machine.
pub mod sweep;

/// YAML sweep configuration.
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for isoptic-sweep operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use isoptic_sweep::prelude::*;
/// ```
pub mod prelude {
    pub use crate::angle::{Angle, AngleBounds};
    pub use crate::circle::{build_circle, build_circles, try_build_circle};
    pub use crate::config::SweepConfig;
    pub use crate::contact::find_contact;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Circle, Line, Point};
    pub use crate::overlap::{analyze, OverlapResult};
    pub use crate::points::{Layout, PointSet};
    pub use crate::sweep::{
        evaluate, EvaluationMode, Frame, OptimalFinding, Sweep, SweepSample, SweepState,
        TickReport, DEFAULT_STEP,
    };
}
