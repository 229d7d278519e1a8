//! Input point sets.
//!
//! A [`PointSet`] is created once per session (or per regeneration) and stays
//! immutable for the duration of a sweep.

use std::f64::consts::{FRAC_PI_4, PI, SQRT_2};

use rand::Rng;

use crate::error::{Error, Result};
use crate::geometry::{Point, EPSILON};

/// An ordered sequence of at least two points.
///
/// Coincident points are accepted; the pairs they form are reported by
/// [`PointSet::degenerate_pairs`] and skipped when circles are built.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Create a point set.
    ///
    /// # Errors
    ///
    /// Returns an error for fewer than two points or a non-finite coordinate.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < 2 {
            return Err(Error::TooFewPoints {
                count: points.len(),
            });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(Error::NonFiniteCoordinate { index });
        }
        Ok(Self { points })
    }

    /// Generate `count` points from the base layout, each coordinate perturbed
    /// by a uniform offset in `[-jitter, jitter]`.
    ///
    /// Offsets are drawn in `[-1, 1]` and scaled, so any finite jitter is
    /// accepted even when `2 * jitter` overflows.
    pub fn generate<R: Rng + ?Sized>(
        count: usize,
        jitter: f64,
        layout: &Layout,
        rng: &mut R,
    ) -> Result<Self> {
        if !jitter.is_finite() || jitter < 0.0 {
            return Err(Error::InvalidJitter(jitter));
        }
        let points = layout
            .base_points(count)
            .into_iter()
            .map(|p| {
                if jitter > 0.0 {
                    Point::new(
                        p.x + rng.gen_range(-1.0..=1.0) * jitter,
                        p.y + rng.gen_range(-1.0..=1.0) * jitter,
                    )
                } else {
                    p
                }
            })
            .collect();
        Self::new(points)
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a point set holds at least two points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Borrow the points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Point at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Arithmetic mean of the points.
    #[must_use]
    pub fn centroid(&self) -> Point {
        let n = self.points.len() as f64;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Point::new(sx / n, sy / n)
    }

    /// All unordered index pairs `(i, j)` with `i < j`, `i` ascending then `j`.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> {
        let n = self.points.len();
        (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
    }

    /// Pairs whose points are closer than [`EPSILON`].
    #[must_use]
    pub fn degenerate_pairs(&self) -> Vec<(usize, usize)> {
        self.pairs()
            .filter(|&(i, j)| self.points[i].distance(self.points[j]) < EPSILON)
            .collect()
    }
}

/// Deterministic base layout that jitter is applied to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Center of the layout.
    pub center: Point,
    /// Half the side of the base square.
    pub half_size: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            center: Point::new(250.0, 250.0),
            half_size: 150.0,
        }
    }
}

impl Layout {
    /// Create a layout.
    #[must_use]
    pub const fn new(center: Point, half_size: f64) -> Self {
        Self { center, half_size }
    }

    /// Base positions for `count` points.
    ///
    /// Four points are the square corners in reading order (top-left,
    /// top-right, bottom-left, bottom-right). Any other count is spread on a
    /// regular polygon through the same corners' circumcircle.
    #[must_use]
    pub fn base_points(&self, count: usize) -> Vec<Point> {
        let (c, s) = (self.center, self.half_size);
        if count == 4 {
            return vec![
                Point::new(c.x - s, c.y - s),
                Point::new(c.x + s, c.y - s),
                Point::new(c.x - s, c.y + s),
                Point::new(c.x + s, c.y + s),
            ];
        }

        let r = s * SQRT_2;
        let start = -3.0 * FRAC_PI_4;
        (0..count)
            .map(|k| {
                let phi = start + 2.0 * PI * k as f64 / count as f64;
                c.offset(phi.cos(), phi.sin(), r)
            })
            .collect()
    }
}
