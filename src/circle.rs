//! Inscribed-angle circle construction.
//!
//! For a chord of length `d` and a viewing angle θ, the circle through the
//! chord's endpoints has radius `(d/2) / cos(θ/2)` and its center sits
//! `(d/2) tan(θ/2)` off the chord midpoint. The tangents at the two endpoints
//! meet at θ; the chord spans a central angle of `π - θ`. At θ → 0 this is the
//! circle on the chord as diameter, and it grows without bound as θ → π.
//!
//! Two such circles exist, mirrored across the chord; the one whose center
//! lies closer to a reference point (the centroid of the point set) is kept.

use crate::angle::Angle;
use crate::error::{Error, Result};
use crate::geometry::{Circle, Line, Point};
use crate::points::PointSet;

/// Build the circle through `p1` and `p2` for viewing angle `theta`.
///
/// Returns `None` for a degenerate pair; see [`try_build_circle`] for the reason.
#[must_use]
pub fn build_circle(
    p1: Point,
    p2: Point,
    theta: Angle,
    reference: Point,
    source: (usize, usize),
) -> Option<Circle> {
    try_build_circle(p1, p2, theta, reference, source).ok()
}

/// Build the circle through `p1` and `p2`, reporting why a pair was rejected.
///
/// # Errors
///
/// - [`Error::DegeneratePair`] when the points are closer than
///   [`EPSILON`](crate::geometry::EPSILON).
/// - [`Error::NonFinite`] when the radius or center offset overflows.
pub fn try_build_circle(
    p1: Point,
    p2: Point,
    theta: Angle,
    reference: Point,
    source: (usize, usize),
) -> Result<Circle> {
    let chord = Line::new(p1, p2);
    let d = chord.length();
    let (nx, ny) = chord
        .unit_normal()
        .ok_or(Error::DegeneratePair { distance: d })?;

    let half = d / 2.0;
    let radius = half / theta.half_cos();
    if !radius.is_finite() {
        return Err(Error::NonFinite { what: "radius" });
    }

    // Rounding can push radius² slightly below half² for tiny θ.
    let offset = (radius * radius - half * half).max(0.0).sqrt();
    if !offset.is_finite() {
        return Err(Error::NonFinite { what: "center offset" });
    }

    let mid = chord.midpoint();
    let plus = mid.offset(nx, ny, offset);
    let minus = mid.offset(nx, ny, -offset);
    let center = if plus.distance(reference) < minus.distance(reference) {
        plus
    } else {
        minus
    };

    Ok(Circle::new(center, radius, source))
}

/// Build the circle for every non-degenerate pair of `points` at `theta`.
///
/// Circles come out in pair order (`i` ascending, then `j`); skipped pairs
/// leave no gap, so a circle's index is not its pair index. Use
/// [`Circle::source`] to map back to points.
#[must_use]
pub fn build_circles(points: &PointSet, theta: Angle) -> Vec<Circle> {
    let reference = points.centroid();
    let pts = points.points();
    points
        .pairs()
        .filter_map(|(i, j)| {
            match try_build_circle(pts[i], pts[j], theta, reference, (i, j)) {
                Ok(circle) => Some(circle),
                Err(e) => {
                    tracing::debug!("Skipping pair ({}, {}) at theta {}: {}", i, j, theta, e);
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::inscribed_angle;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    fn angle(theta: f64) -> Angle {
        Angle::new(theta).unwrap()
    }

    #[test]
    fn test_small_angle_approaches_diameter_circle() {
        let c = build_circle(
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            angle(1e-4),
            Point::new(1.0, 5.0),
            (0, 1),
        )
        .unwrap();
        assert_relative_eq!(c.radius, 1.0, epsilon = 1e-6);
        assert_relative_eq!(c.center.x, 1.0, epsilon = 1e-9);
        assert_relative_eq!(c.center.y, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_right_angle_radius_and_offset() {
        // r = (d/2) / cos(π/4) = d/√2, center offset = (d/2) tan(π/4) = d/2.
        let c = build_circle(
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            angle(PI / 2.0),
            Point::new(1.0, 5.0),
            (0, 1),
        )
        .unwrap();
        assert_relative_eq!(c.radius, 2.0_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(c.center.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(c.center.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_center_picked_toward_reference() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(2.0, 0.0);
        let theta = angle(1.0);
        let up = build_circle(p1, p2, theta, Point::new(1.0, 10.0), (0, 1)).unwrap();
        let down = build_circle(p1, p2, theta, Point::new(1.0, -10.0), (0, 1)).unwrap();
        assert!(up.center.y > 0.0);
        assert!(down.center.y < 0.0);
        assert_relative_eq!(up.radius, down.radius);
        assert_relative_eq!(up.center.y, -down.center.y, epsilon = 1e-9);
    }

    #[test]
    fn test_coincident_points_rejected() {
        let p = Point::new(3.0, 3.0);
        assert!(build_circle(p, p, angle(1.0), Point::ORIGIN, (0, 1)).is_none());
        let err = try_build_circle(p, Point::new(3.0, 3.0005), angle(1.0), Point::ORIGIN, (0, 1))
            .unwrap_err();
        assert!(matches!(err, Error::DegeneratePair { .. }));
    }

    #[test]
    fn test_small_angle_offset_clamped() {
        let c = build_circle(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            angle(1e-9),
            Point::new(0.5, 1.0),
            (0, 1),
        )
        .unwrap();
        assert!(c.radius.is_finite());
        assert!(c.center.is_finite());
    }

    #[test]
    fn test_build_circles_skips_degenerate_pair() {
        let set = PointSet::new(vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        ])
        .unwrap();
        let circles = build_circles(&set, angle(1.0));
        let sources: Vec<_> = circles.iter().map(|c| c.source).collect();
        assert_eq!(sources, vec![(0, 2), (1, 2)]);
    }

    #[test]
    fn test_overflowing_pair_is_non_finite() {
        // Radius stays finite but radius² overflows.
        let err = try_build_circle(
            Point::new(-1e154, 0.0),
            Point::new(1e154, 0.0),
            angle(3.0),
            Point::ORIGIN,
            (0, 1),
        )
        .unwrap_err();
        assert!(matches!(err, Error::NonFinite { .. }), "got {err}");
        assert!(err.is_pair_local());
    }

    #[test]
    fn test_build_circles_skips_overflowing_pair() {
        let set = PointSet::new(vec![
            Point::new(-1e154, 0.0),
            Point::new(1e154, 0.0),
            Point::ORIGIN,
        ])
        .unwrap();
        let circles = build_circles(&set, angle(2.0));
        let sources: Vec<_> = circles.iter().map(|c| c.source).collect();
        assert_eq!(sources, vec![(0, 2), (1, 2)]);
        assert!(circles.iter().all(|c| c.radius.is_finite() && c.center.is_finite()));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// The circle passes through both chord endpoints.
        #[test]
        fn prop_circle_passes_through_endpoints(
            x1 in -500.0f64..500.0, y1 in -500.0f64..500.0,
            x2 in -500.0f64..500.0, y2 in -500.0f64..500.0,
            rx in -500.0f64..500.0, ry in -500.0f64..500.0,
            theta in 0.01f64..(PI - 0.01),
        ) {
            let (p1, p2) = (Point::new(x1, y1), Point::new(x2, y2));
            prop_assume!(p1.distance(p2) >= 1.0);
            let c = build_circle(p1, p2, angle(theta), Point::new(rx, ry), (0, 1)).unwrap();
            prop_assert!(c.passes_through(p1, 1e-6), "p1 off circle by {}", (c.center.distance(p1) - c.radius).abs());
            prop_assert!(c.passes_through(p2, 1e-6), "p2 off circle by {}", (c.center.distance(p2) - c.radius).abs());
            prop_assert!(c.radius >= p1.distance(p2) / 2.0 - 1e-9);
        }

        /// The tangents at the chord endpoints meet at θ: the chord is seen
        /// under (π - θ)/2 from the major arc and (π + θ)/2 from the minor arc.
        #[test]
        fn prop_chord_angles_match_theta(
            x1 in -500.0f64..500.0, y1 in -500.0f64..500.0,
            x2 in -500.0f64..500.0, y2 in -500.0f64..500.0,
            theta in 0.05f64..(PI - 0.05),
        ) {
            let (p1, p2) = (Point::new(x1, y1), Point::new(x2, y2));
            prop_assume!(p1.distance(p2) >= 1.0);
            let (nx, ny) = Line::new(p1, p2).unit_normal().unwrap();
            let mid = p1.midpoint(p2);
            let c = build_circle(p1, p2, angle(theta), mid.offset(nx, ny, 1.0), (0, 1)).unwrap();

            // The center sits on the +normal side, so the major arc bulges that way.
            let major = c.center.offset(nx, ny, c.radius);
            let minor = c.center.offset(nx, ny, -c.radius);
            prop_assert!((inscribed_angle(p1, p2, major) - (PI - theta) / 2.0).abs() < 1e-6);
            prop_assert!((inscribed_angle(p1, p2, minor) - (PI + theta) / 2.0).abs() < 1e-6);
            prop_assert!((inscribed_angle(p1, p2, c.center) - (PI - theta)).abs() < 1e-6);
        }

        /// Radius strictly grows with θ, since cos(θ/2) shrinks.
        #[test]
        fn prop_radius_increasing_in_theta(
            d in 1.0f64..1000.0,
            t1 in 0.01f64..(PI - 0.02),
            dt in 0.001f64..0.5,
        ) {
            let t2 = (t1 + dt).min(PI - 0.01);
            prop_assume!(t2 > t1);
            let (p1, p2) = (Point::ORIGIN, Point::new(d, 0.0));
            let r1 = build_circle(p1, p2, angle(t1), Point::ORIGIN, (0, 1)).unwrap().radius;
            let r2 = build_circle(p1, p2, angle(t2), Point::ORIGIN, (0, 1)).unwrap().radius;
            prop_assert!(r1 < r2, "radius({t1}) = {r1} >= radius({t2}) = {r2}");
        }
    }
}
