//! Contact point between the critical pair of circles.

use crate::geometry::{Circle, Point, EPSILON};

/// Point on `c1`'s boundary facing `c2`'s center.
///
/// Exact when the pair is tangent; close to the true touching point while the
/// slack is near zero. Concentric circles (centers closer than [`EPSILON`])
/// yield `c1`'s center.
#[must_use]
pub fn find_contact(c1: &Circle, c2: &Circle) -> Point {
    let dx = c2.center.x - c1.center.x;
    let dy = c2.center.y - c1.center.y;
    let dist = dx.hypot(dy);
    if dist < EPSILON {
        return c1.center;
    }
    c1.center.offset(dx / dist, dy / dist, c1.radius)
}
