//! Path invariants as executable checks.
//!
//! Design-by-contract specifications using Verus-style pre/postconditions.
//! These serve as both documentation and verification targets: the
//! rasterizer checks its output against them through `debug_assert!()`,
//! [`PixelPath`](crate::path::PixelPath) validation uses them on untrusted
//! input, and the test suites use them as oracles.

/// Per-step invariants
///
/// # Verification Specifications
///
/// #[invariant(forall i. |p[i+1].x - p[i].x| <= 1 && |p[i+1].y - p[i].y| <= 1)]
/// #[invariant(forall i. p[i+1] != p[i])]
pub mod step_contracts {
    use crate::geometry::Point;

    /// Whether `to` is one king's move away from `from`
    ///
    /// #[ensures(result == true ==> from != to)]
    /// #[ensures(result == true ==> |to.x - from.x| <= 1 && |to.y - from.y| <= 1)]
    pub fn is_unit_step(from: Point, to: Point) -> bool {
        let dx = from.x.abs_diff(to.x);
        let dy = from.y.abs_diff(to.y);
        dx <= 1 && dy <= 1 && (dx, dy) != (0, 0)
    }

    /// Index of the second point of the first non-unit step, if any
    ///
    /// #[ensures(result == None ==> forall i. is_unit_step(p[i], p[i+1]))]
    /// #[ensures(result == Some(i) ==> i >= 1 && !is_unit_step(p[i-1], p[i]))]
    pub fn first_invalid_step(points: &[Point]) -> Option<usize> {
        points
            .windows(2)
            .position(|pair| !is_unit_step(pair[0], pair[1]))
            .map(|i| i + 1)
    }
}

/// Whole-path invariants for the output of a segment
///
/// #[requires(points.len() > 0)]
/// #[ensures(points[0] == segment.start)]
/// #[ensures(points[points.len() - 1] == segment.end)]
/// #[ensures(points.len() == max(dx, dy) + 1)]
/// #[decreases(max(dx, dy))]
pub mod path_contracts {
    use super::step_contracts;
    use crate::geometry::{Axis, Point, Segment};

    /// Both endpoints present, in order
    ///
    /// #[ensures(result == true ==> points[0] == segment.start)]
    /// #[ensures(result == true ==> points[points.len() - 1] == segment.end)]
    pub fn endpoints_match(points: &[Point], segment: Segment) -> bool {
        points.first() == Some(&segment.start) && points.last() == Some(&segment.end)
    }

    /// Length equals the major-axis delta plus one
    ///
    /// #[ensures(result == true ==> points.len() == max(dx, dy) + 1)]
    pub fn has_expected_len(points: &[Point], segment: Segment) -> bool {
        points.len() as u64 == segment.pixel_count()
    }

    /// The major axis moves every step, the minor axis never backtracks
    ///
    /// #[invariant(forall i. p[i+1].major - p[i].major == major_sign)]
    /// #[invariant(forall i. (p[i+1].minor - p[i].minor) in {0, minor_sign})]
    pub fn is_monotonic(points: &[Point], segment: Segment) -> bool {
        let major = segment.major_axis();
        let minor = major.other();
        let major_sign = axis_sign(segment, major);
        let minor_sign = axis_sign(segment, minor);

        points.windows(2).all(|pair| {
            let d_major = i64::from(pair[1].coord(major)) - i64::from(pair[0].coord(major));
            let d_minor = i64::from(pair[1].coord(minor)) - i64::from(pair[0].coord(minor));
            d_major == major_sign && (d_minor == 0 || d_minor == minor_sign)
        })
    }

    /// No pixel is more than half a pixel from the ideal line along the minor axis
    ///
    /// #[ensures(result == true ==> forall p. 2 * |offset(p)| <= major_delta)]
    pub fn within_half_pixel(points: &[Point], segment: Segment) -> bool {
        let major_delta = i128::from(segment.delta(segment.major_axis()));
        points.iter().all(|&p| 2 * segment.offset(p).abs() <= major_delta)
    }

    /// All path invariants together
    pub fn holds(points: &[Point], segment: Segment) -> bool {
        endpoints_match(points, segment)
            && has_expected_len(points, segment)
            && step_contracts::first_invalid_step(points).is_none()
            && is_monotonic(points, segment)
            && within_half_pixel(points, segment)
    }

    /// Step direction along `axis`, `+1` for a zero delta.
    fn axis_sign(segment: Segment, axis: Axis) -> i64 {
        if segment.end.coord(axis) >= segment.start.coord(axis) {
            1
        } else {
            -1
        }
    }
}
