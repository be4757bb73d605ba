//! Local cubic Bezier segments.
//!
//! Each input segment `[p1, p2]` gets two control values derived from its
//! neighbours `p0` and `p3`:
//!
//! ```text
//! y1 = p1.y + (p2.y - p0.y) * s1
//! y2 = p2.y + (p1.y - p3.y) * s2
//! ```
//!
//! The scale factors `s1`/`s2` are bounded by the chord lengths `|p0 p2|` and
//! `|p1 p3|` relative to half the segment length. This keeps the tangents short
//! enough that the curve does not overshoot between samples.
//!
//! The control values are stored pre-multiplied by 3 (the Bernstein weight of the
//! inner control points), so evaluation is a plain Horner form.

use crate::domain::{BezierInterval, Point};
use crate::math::geometry::line_length;

/// How the tangent scale factors of a segment are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleCase {
    /// Both chords are long relative to the segment: fixed `1/6` scaling
    /// (`1/3` on a side whose neighbour coincides with the endpoint).
    Fixed,
    /// Only the left chord `|p0 p2|` limits the tangent; both sides use it.
    LeftChord,
    /// Only the right chord `|p1 p3|` limits the tangent; both sides use it.
    RightChord,
    /// Each side is scaled by its own chord.
    Independent,
}

impl ScaleCase {
    /// Pick the case from the two "chord / 6 is shorter than half the segment" tests.
    pub fn classify(left_short: bool, right_short: bool) -> Self {
        match (left_short, right_short) {
            (true, true) => ScaleCase::Fixed,
            (false, true) => ScaleCase::LeftChord,
            (true, false) => ScaleCase::RightChord,
            (false, false) => ScaleCase::Independent,
        }
    }

    /// Scale factors `(s1, s2)` for this case.
    ///
    /// `d02`/`d13` are the chord lengths, `half` is `|p1 p2| / 2`. The duplicate
    /// flags are only consulted in the `Fixed` case; the chord ratios of the other
    /// cases are never formed there, so a zero chord is not divided by.
    pub fn scales(self, d02: f64, d13: f64, half: f64, left_dup: bool, right_dup: bool) -> (f64, f64) {
        match self {
            ScaleCase::Fixed => {
                let s1 = if left_dup { 1.0 / 3.0 } else { 1.0 / 6.0 };
                let s2 = if right_dup { 1.0 / 3.0 } else { 1.0 / 6.0 };
                (s1, s2)
            }
            ScaleCase::LeftChord => {
                let s = half / d02;
                (s, s)
            }
            ScaleCase::RightChord => {
                let s = half / d13;
                (s, s)
            }
            ScaleCase::Independent => (half / d02, half / d13),
        }
    }
}

/// Control interval of segment `[p1, p2]`, using `p0` and `p3` as tangent neighbours.
pub fn bezier_interval(p0: Point, p1: Point, p2: Point, p3: Point) -> BezierInterval {
    let d02 = line_length(p0, p2);
    let d13 = line_length(p1, p3);
    let d12_2 = 0.5 * line_length(p1, p2);

    let case = ScaleCase::classify((d02 / 6.0) < d12_2, (d13 / 6.0) < d12_2);
    let (s1, s2) = case.scales(d02, d13, d12_2, p0 == p1, p2 == p3);

    let y1 = p1.y + (p2.y - p0.y) * s1;
    let y2 = p2.y + (p1.y - p3.y) * s2;

    BezierInterval::new(3.0 * y1, 3.0 * y2)
}

/// Evaluate the cubic of segment `[p1, p2]` at `x`.
///
/// `x` is expected inside `[p1.x, p2.x]`; `p1.x == p2.x` divides by zero.
#[inline]
pub fn bezier_value(p1: Point, p2: Point, interval: BezierInterval, x: f64) -> f64 {
    let s1 = (x - p1.x) / (p2.x - p1.x);
    let s2 = 1.0 - s1;

    let a1 = s1 * interval.min;
    let a2 = s1 * s1 * interval.max;
    let a3 = s1 * s1 * s1 * p2.y;

    ((s2 * p1.y + a1) * s2 + a2) * s2 + a3
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn classify_covers_all_branches() {
        assert_eq!(ScaleCase::classify(true, true), ScaleCase::Fixed);
        assert_eq!(ScaleCase::classify(false, true), ScaleCase::LeftChord);
        assert_eq!(ScaleCase::classify(true, false), ScaleCase::RightChord);
        assert_eq!(ScaleCase::classify(false, false), ScaleCase::Independent);
    }

    #[test]
    fn fixed_case_widens_duplicated_sides() {
        assert_eq!(ScaleCase::Fixed.scales(1.0, 1.0, 1.0, false, false), (1.0 / 6.0, 1.0 / 6.0));
        assert_eq!(ScaleCase::Fixed.scales(1.0, 1.0, 1.0, true, false), (1.0 / 3.0, 1.0 / 6.0));
        assert_eq!(ScaleCase::Fixed.scales(1.0, 1.0, 1.0, false, true), (1.0 / 6.0, 1.0 / 3.0));
    }

    #[test]
    fn chord_cases_share_or_split_the_ratio() {
        assert_eq!(ScaleCase::LeftChord.scales(4.0, 8.0, 1.0, false, false), (0.25, 0.25));
        assert_eq!(ScaleCase::RightChord.scales(4.0, 8.0, 1.0, false, false), (0.125, 0.125));
        assert_eq!(ScaleCase::Independent.scales(4.0, 8.0, 1.0, false, false), (0.25, 0.125));
    }

    #[test]
    fn duplicated_left_neighbour_uses_wide_scale() {
        // p0 == p1: the first segment is seeded this way.
        let iv = bezier_interval(p(0.0, 0.0), p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0));
        // y1 = 0 + 1 * 1/3, y2 = 1 + (0 - 2) / 6
        assert_abs_diff_eq!(iv.min, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(iv.max, 2.0, epsilon = 1e-12);
        assert!(iv.min.is_finite() && iv.max.is_finite());
    }

    #[test]
    fn long_left_chord_bounds_both_tangents() {
        // p0 is far away: |p0 p2| / 6 exceeds half the segment.
        let (p0, p1, p2, p3) = (p(-20.0, 0.0), p(0.0, 0.0), p(1.0, 1.0), p(2.0, 1.0));
        let d02 = line_length(p0, p2);
        let half = 0.5 * line_length(p1, p2);
        let s = half / d02;

        let iv = bezier_interval(p0, p1, p2, p3);
        assert_abs_diff_eq!(iv.min, 3.0 * (p1.y + (p2.y - p0.y) * s), epsilon = 1e-12);
        assert_abs_diff_eq!(iv.max, 3.0 * (p2.y + (p1.y - p3.y) * s), epsilon = 1e-12);
    }

    #[test]
    fn value_hits_segment_endpoints_exactly() {
        let (p1, p2) = (p(1.0, 3.0), p(2.0, -1.0));
        let iv = BezierInterval::new(7.0, -5.0);
        assert_eq!(bezier_value(p1, p2, iv, 1.0), 3.0);
        assert_eq!(bezier_value(p1, p2, iv, 2.0), -1.0);
    }

    #[test]
    fn collinear_controls_reproduce_the_line() {
        let iv = bezier_interval(p(0.0, 0.0), p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0));
        for i in 0..=10 {
            let x = i as f64 / 10.0;
            assert_abs_diff_eq!(bezier_value(p(0.0, 0.0), p(1.0, 1.0), iv, x), x, epsilon = 1e-12);
        }
    }
}
