//! θ-sweep controller.
//!
//! A [`Sweep`] owns the current point set, the current θ, the search state and
//! the search history. Everything else is recomputed per call by the pure
//! [`evaluate`] function.
//!
//! ```text
//!             tick (all overlap)
//!  Searching ───────────────────▶ Found
//!     ▲                             │
//!     └──────── reset / regenerate ─┘
//! ```
//!
//! Manual positioning ([`Sweep::set_angle`]) moves θ but evaluates in
//! [`EvaluationMode::Manual`], which never yields a finding.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::angle::{Angle, AngleBounds};
use crate::circle::build_circles;
use crate::config::SweepConfig;
use crate::contact::find_contact;
use crate::error::{Error, Result};
use crate::geometry::{Circle, Point};
use crate::overlap::{analyze, intersection_area_estimate, OverlapResult};
use crate::points::{Layout, PointSet};

/// θ increment per tick when none is configured.
pub const DEFAULT_STEP: f64 = 0.01;

/// Search state of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepState {
    /// Still looking for the first θ where all circles overlap.
    #[default]
    Searching,
    /// A finding was recorded; ticks are suppressed until reset.
    Found,
}

/// Whether an evaluation may produce an [`OptimalFinding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationMode {
    /// Display-only positioning; never produces a finding.
    Manual,
    /// Forward sweep step; produces a finding when all circles overlap.
    Sweep,
}

/// Smallest swept θ at which all circles overlap, and where the last pair touches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimalFinding {
    /// θ at which overlap was first observed.
    pub angle: Angle,
    /// Contact point of the critical pair.
    pub point: Point,
    /// The critical pair of circles.
    pub circles: (Circle, Circle),
}

/// Circles and overlap status at one θ.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Angle the frame was computed for.
    pub theta: Angle,
    /// Circles of all non-degenerate pairs.
    pub circles: Vec<Circle>,
    /// Overlap analysis of `circles`.
    pub overlap: OverlapResult,
}

impl Frame {
    /// The critical pair of circles, if any.
    #[must_use]
    pub fn critical_circles(&self) -> Option<(Circle, Circle)> {
        self.overlap
            .critical_pair
            .map(|(i, j)| (self.circles[i], self.circles[j]))
    }

    /// Rough area of the common intersection when all circles overlap.
    #[must_use]
    pub fn intersection_area(&self) -> Option<f64> {
        intersection_area_estimate(&self.circles, &self.overlap)
    }
}

/// Result of a single [`Sweep::tick`].
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// State at the current θ after the tick.
    pub frame: Frame,
    /// Set only on the tick that transitioned to [`SweepState::Found`].
    pub finding: Option<OptimalFinding>,
    /// Whether θ moved.
    pub advanced: bool,
    /// The upper bound was reached without a finding.
    pub exhausted: bool,
}

/// One history entry per evaluated sweep tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepSample {
    /// Evaluated angle.
    pub theta: Angle,
    /// Minimum pair slack at that angle.
    pub min_slack: f64,
    /// Whether all circles overlapped.
    pub all_overlap: bool,
}

/// Build all circles at `theta`, analyze them and, in sweep mode, derive a finding.
///
/// A finding needs a critical pair, so a set with fewer than two circles
/// never produces one even though its overlap is vacuously true.
#[must_use]
pub fn evaluate(
    points: &PointSet,
    theta: Angle,
    mode: EvaluationMode,
) -> (Frame, Option<OptimalFinding>) {
    let circles = build_circles(points, theta);
    let overlap = analyze(&circles);
    let frame = Frame {
        theta,
        circles,
        overlap,
    };

    let finding = match mode {
        EvaluationMode::Manual => None,
        EvaluationMode::Sweep if !frame.overlap.all_overlap => None,
        EvaluationMode::Sweep => frame.critical_circles().map(|(c1, c2)| OptimalFinding {
            angle: theta,
            point: find_contact(&c1, &c2),
            circles: (c1, c2),
        }),
    };
    (frame, finding)
}

/// Stateful sweep over θ for one point set.
#[derive(Debug, Clone)]
pub struct Sweep {
    points: PointSet,
    bounds: AngleBounds,
    layout: Layout,
    theta: Angle,
    state: SweepState,
    finding: Option<OptimalFinding>,
    history: Vec<SweepSample>,
    step: f64,
    rng: StdRng,
}

impl Sweep {
    /// Create a sweep over an existing point set, starting at `bounds.min()`.
    #[must_use]
    pub fn new(points: PointSet, bounds: AngleBounds) -> Self {
        Self {
            points,
            bounds,
            layout: Layout::default(),
            theta: bounds.min(),
            state: SweepState::Searching,
            finding: None,
            history: Vec::new(),
            step: DEFAULT_STEP,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a sweep from configuration, generating its initial point set.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: &SweepConfig) -> Result<Self> {
        config.validate()?;
        let bounds = config.bounds()?;
        let layout = config.layout();
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let points = PointSet::generate(config.point_count, config.jitter, &layout, &mut rng)?;
        Ok(Self {
            layout,
            step: config.step,
            rng,
            ..Self::new(points, bounds)
        })
    }

    /// Current point set.
    #[must_use]
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    /// Current θ.
    #[must_use]
    pub fn theta(&self) -> Angle {
        self.theta
    }

    /// Sweep bounds.
    #[must_use]
    pub fn bounds(&self) -> AngleBounds {
        self.bounds
    }

    /// θ increment used by [`Sweep::advance`] and [`Sweep::run_configured`].
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Search state.
    #[must_use]
    pub fn state(&self) -> SweepState {
        self.state
    }

    /// Recorded finding, kept until reset or regeneration.
    #[must_use]
    pub fn finding(&self) -> Option<&OptimalFinding> {
        self.finding.as_ref()
    }

    /// Samples of every evaluated sweep tick since the last reset.
    #[must_use]
    pub fn history(&self) -> &[SweepSample] {
        &self.history
    }

    /// Whether the sweep sits at its upper bound without a finding.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.state == SweepState::Searching && self.bounds.is_at_max(self.theta)
    }

    /// Replace the point set with a fresh jittered layout and reset.
    ///
    /// # Errors
    ///
    /// Returns an error for `point_count < 2` or a negative jitter; the
    /// current point set and sweep state are left untouched in that case.
    pub fn regenerate(&mut self, point_count: usize, jitter: f64) -> Result<&PointSet> {
        let points = PointSet::generate(point_count, jitter, &self.layout, &mut self.rng)?;
        Ok(self.set_points(points))
    }

    /// Replace the point set and reset.
    pub fn set_points(&mut self, points: PointSet) -> &PointSet {
        self.points = points;
        self.reset();
        &self.points
    }

    /// Move θ without searching.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AngleOutOfRange`] unless `0 < theta < π`.
    pub fn set_angle(&mut self, theta: f64) -> Result<Frame> {
        let theta = Angle::new(theta)?;
        self.theta = theta;
        let (frame, _) = evaluate(&self.points, theta, EvaluationMode::Manual);
        Ok(frame)
    }

    /// Frame at the current θ, without side effects.
    #[must_use]
    pub fn current_frame(&self) -> Frame {
        evaluate(&self.points, self.theta, EvaluationMode::Manual).0
    }

    /// Advance θ by `step` and search.
    ///
    /// θ is clamped to the upper bound; the clamped angle is still evaluated.
    /// Once found or exhausted, ticks leave θ where it is and report
    /// `advanced: false`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStepSize`] unless `step` is finite and positive.
    pub fn tick(&mut self, step: f64) -> Result<TickReport> {
        if !step.is_finite() || step <= 0.0 {
            return Err(Error::InvalidStepSize(step));
        }

        if self.state == SweepState::Found || self.is_exhausted() {
            return Ok(TickReport {
                frame: self.current_frame(),
                finding: None,
                advanced: false,
                exhausted: self.is_exhausted(),
            });
        }

        self.theta = self.bounds.clamp(self.theta.radians() + step);
        let (frame, candidate) = evaluate(&self.points, self.theta, EvaluationMode::Sweep);
        self.history.push(SweepSample {
            theta: self.theta,
            min_slack: frame.overlap.min_slack,
            all_overlap: frame.overlap.all_overlap,
        });
        tracing::debug!(
            "Sweep tick at {}: min slack {:.4}, all overlap {}",
            self.theta,
            frame.overlap.min_slack,
            frame.overlap.all_overlap
        );

        let finding = candidate.filter(|_| self.state == SweepState::Searching);
        if let Some(found) = finding {
            tracing::info!(
                "All circles overlap at {}; contact point ({:.2}, {:.2})",
                found.angle,
                found.point.x,
                found.point.y
            );
            self.finding = Some(found);
            self.state = SweepState::Found;
        }

        let exhausted = self.is_exhausted();
        if exhausted {
            tracing::warn!("Sweep reached {} without full overlap", self.theta);
        }

        Ok(TickReport {
            frame,
            finding,
            advanced: true,
            exhausted,
        })
    }

    /// Tick until a finding is recorded or the upper bound is reached.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStepSize`] unless `step` is finite and positive.
    pub fn run(&mut self, step: f64) -> Result<Option<OptimalFinding>> {
        loop {
            let report = self.tick(step)?;
            if !report.advanced || report.finding.is_some() || report.exhausted {
                return Ok(self.finding);
            }
        }
    }

    /// Tick by the configured step.
    ///
    /// # Errors
    ///
    /// Same as [`Sweep::tick`].
    pub fn advance(&mut self) -> Result<TickReport> {
        self.tick(self.step)
    }

    /// Run with the configured step.
    ///
    /// # Errors
    ///
    /// Same as [`Sweep::run`].
    pub fn run_configured(&mut self) -> Result<Option<OptimalFinding>> {
        self.run(self.step)
    }

    /// Return to the initial angle, clear the finding and the history.
    pub fn reset(&mut self) {
        self.theta = self.bounds.min();
        self.state = SweepState::Searching;
        self.finding = None;
        self.history.clear();
    }
}
