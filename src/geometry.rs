//! Geometric primitives for the inscribed-angle construction.
//!
//! Provides plain value types (points, chords, circles) plus a few helpers
//! used to check results: the inscribed angle seen from a viewer and
//! convex-hull containment.

use std::f64::consts::PI;

/// Distance below which two points, or two circle centers, are treated as coincident.
pub const EPSILON: f64 = 1e-3;

/// A 2D point with double-precision coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate the distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Linear interpolation between two points.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Midpoint between two points.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        self.lerp(other, 0.5)
    }

    /// Translate by a vector scaled by `t`.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64, t: f64) -> Self {
        Self::new(self.x + dx * t, self.y + dy * t)
    }

    /// Whether both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A chord (line segment) between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Get the length of the line.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }

    /// Unit vector perpendicular to the segment, rotated +90° from `start -> end`.
    ///
    /// Returns `None` for a segment shorter than [`EPSILON`].
    #[must_use]
    pub fn unit_normal(&self) -> Option<(f64, f64)> {
        let len = self.length();
        if len < EPSILON {
            return None;
        }
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        Some((-dy / len, dx / len))
    }
}

/// A circle through a pair of source points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center point.
    pub center: Point,
    /// Radius (always > 0).
    pub radius: f64,
    /// Indices of the two points the circle passes through, `i < j`.
    pub source: (usize, usize),
}

impl Circle {
    /// Create a new circle.
    #[must_use]
    pub const fn new(center: Point, radius: f64, source: (usize, usize)) -> Self {
        Self {
            center,
            radius,
            source,
        }
    }

    /// Distance between the centers of two circles.
    #[must_use]
    pub fn center_distance(&self, other: &Self) -> f64 {
        self.center.distance(other.center)
    }

    /// Sum of radii minus center distance. Non-negative means overlapping or tangent.
    #[must_use]
    pub fn slack(&self, other: &Self) -> f64 {
        self.radius + other.radius - self.center_distance(other)
    }

    /// Whether the two discs share at least one point.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.slack(other) >= 0.0
    }

    /// Whether a point lies inside or on the circle.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.center.distance(point) <= self.radius
    }

    /// Whether a point lies on the circle boundary within `tolerance`.
    #[must_use]
    pub fn passes_through(&self, point: Point, tolerance: f64) -> bool {
        (self.center.distance(point) - self.radius).abs() <= tolerance
    }

    /// Point on the boundary at polar angle `phi` (radians).
    #[must_use]
    pub fn point_at(&self, phi: f64) -> Point {
        self.center.offset(phi.cos(), phi.sin(), self.radius)
    }

    /// Area of the disc.
    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

/// Angle (radians, in `[0, π]`) subtended by chord `a`–`b` as seen from `viewer`.
#[must_use]
pub fn inscribed_angle(a: Point, b: Point, viewer: Point) -> f64 {
    let (ux, uy) = (a.x - viewer.x, a.y - viewer.y);
    let (vx, vy) = (b.x - viewer.x, b.y - viewer.y);
    let cross = ux * vy - uy * vx;
    let dot = ux * vx + uy * vy;
    cross.abs().atan2(dot)
}

/// Whether `point` lies inside or on the convex hull of `points`.
///
/// The hull is computed with Andrew's monotone chain; `tolerance` widens the
/// edge test to absorb rounding.
#[must_use]
pub fn convex_hull_contains(points: &[Point], point: Point, tolerance: f64) -> bool {
    let hull = convex_hull(points);
    match hull.len() {
        0 => false,
        1 => hull[0].distance(point) <= tolerance,
        _ => hull.iter().zip(hull.iter().cycle().skip(1)).all(|(a, b)| {
            let len = a.distance(*b).max(f64::MIN_POSITIVE);
            cross(*a, *b, point) / len >= -tolerance
        }),
    }
}

/// Convex hull in counter-clockwise order (collinear points dropped).
#[must_use]
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut sorted: Vec<Point> = points.iter().copied().filter(|p| p.is_finite()).collect();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup();
    if sorted.len() < 3 {
        return sorted;
    }

    let mut lower: Vec<Point> = Vec::with_capacity(sorted.len());
    for &p in &sorted {
        while lower.len() >= 2
            && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0
        {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Point> = Vec::with_capacity(sorted.len());
    for &p in sorted.iter().rev() {
        while upper.len() >= 2
            && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0
        {
            upper.pop();
        }
        upper.push(p);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

fn cross(o: Point, a: Point, b: Point) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}
