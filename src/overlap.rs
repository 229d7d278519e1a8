//! Pairwise and global overlap of a circle set.

use crate::geometry::Circle;

/// Slack of one unordered circle pair, indexed into the analyzed slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairSlack {
    /// Circle indices `(i, j)`, `i < j`.
    pub pair: (usize, usize),
    /// `r_i + r_j - |c_i - c_j|`; negative means the discs are apart.
    pub slack: f64,
}

impl PairSlack {
    /// Whether the pair overlaps or touches.
    #[must_use]
    pub fn overlaps(&self) -> bool {
        self.slack >= 0.0
    }
}

/// Outcome of [`analyze`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapResult {
    /// Every pair has non-negative slack (vacuously true below two circles).
    pub all_overlap: bool,
    /// Pair with the smallest slack; `None` below two circles.
    pub critical_pair: Option<(usize, usize)>,
    /// Slack of the critical pair; `+∞` below two circles.
    pub min_slack: f64,
}

impl OverlapResult {
    const VACUOUS: Self = Self {
        all_overlap: true,
        critical_pair: None,
        min_slack: f64::INFINITY,
    };
}

/// Slack of every unordered pair, `i` ascending then `j`.
pub fn pair_slacks(circles: &[Circle]) -> impl Iterator<Item = PairSlack> + '_ {
    let n = circles.len();
    (0..n).flat_map(move |i| {
        (i + 1..n).map(move |j| PairSlack {
            pair: (i, j),
            slack: circles[i].slack(&circles[j]),
        })
    })
}

/// Determine global overlap and the critical pair.
///
/// The critical pair is the first pair in iteration order whose slack equals
/// the minimum. It is reported whether or not everything overlaps.
#[must_use]
pub fn analyze(circles: &[Circle]) -> OverlapResult {
    let mut critical: Option<PairSlack> = None;
    for ps in pair_slacks(circles) {
        if critical.map_or(true, |c| ps.slack < c.slack) {
            critical = Some(ps);
        }
    }

    match critical {
        None => OverlapResult::VACUOUS,
        Some(c) => OverlapResult {
            all_overlap: c.overlaps(),
            critical_pair: Some(c.pair),
            min_slack: c.slack,
        },
    }
}

/// Rough size of the common intersection: the area of the smallest disc.
///
/// This is an upper bound, only meaningful when every pair overlaps;
/// `None` otherwise or for an empty set.
#[must_use]
pub fn intersection_area_estimate(circles: &[Circle], result: &OverlapResult) -> Option<f64> {
    if !result.all_overlap {
        return None;
    }
    circles.iter().map(Circle::area).reduce(f64::min)
}
