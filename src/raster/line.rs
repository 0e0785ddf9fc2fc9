//! Bresenham line walking.
//!
//! Every segment is walked in its canonical direction: from the endpoint with
//! the smaller coordinate along the driving axis towards the larger one. The
//! accumulator's `>= 0` test rounds exact midpoints towards a minor step, so
//! walking the other way would pick different pixels at ties. Canonical
//! walking makes the output independent of argument order; callers that pass
//! the far endpoint first get the same pixels in reverse.

use std::iter::FusedIterator;

use crate::contracts::path_contracts;
use crate::geometry::{Axis, Point, Segment};
use crate::path::PixelPath;

// ============================================================================
// Public entry points
// ============================================================================

/// Rasterize the line from `start` to `end` using Bresenham's algorithm.
///
/// The result begins with `start`, ends with `end` and holds
/// `max(|dx|, |dy|) + 1` points. Total over all `i32` inputs.
///
/// # Example
///
/// ```
/// use line_raster::prelude::*;
///
/// let path = rasterize(Point::new(0, 0), Point::new(4, 4));
/// assert_eq!(path.len(), 5);
/// assert_eq!(path.end(), Point::new(4, 4));
/// ```
#[must_use]
pub fn rasterize(start: Point, end: Point) -> PixelPath {
    let points: Vec<Point> = LineIter::new(start, end).collect();
    debug_assert!(
        path_contracts::holds(&points, Segment::new(start, end)),
        "rasterized path violates its invariants"
    );
    PixelPath::from_raster(points)
}

/// Rasterize a [`Segment`]. Same as [`rasterize`] on its endpoints.
#[must_use]
pub fn rasterize_segment(segment: Segment) -> PixelPath {
    rasterize(segment.start, segment.end)
}

// ============================================================================
// Walker
// ============================================================================

/// Position and error accumulator of a walker in canonical direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    major: i32,
    minor: i32,
    err: i64,
}

/// Per-line constants shared by the front and back cursors.
#[derive(Debug, Clone, Copy)]
struct Stepper {
    major_axis: Axis,
    minor_step: i32,
    two_major: i64,
    two_minor: i64,
}

impl Stepper {
    #[inline]
    fn point(self, cursor: Cursor) -> Point {
        Point::from_axes(self.major_axis, cursor.major, cursor.minor)
    }

    /// One step towards the canonical end.
    #[inline]
    fn advance(self, cursor: &mut Cursor) {
        if cursor.err >= 0 {
            cursor.minor += self.minor_step;
            cursor.err -= self.two_major;
        }
        cursor.err += self.two_minor;
        cursor.major += 1;
    }

    /// Undo one [`advance`](Self::advance).
    ///
    /// Accumulator values reached through a minor step lie below
    /// `4*minor - 2*major`; values reached without one lie at or above it.
    #[inline]
    fn retreat(self, cursor: &mut Cursor) {
        cursor.major -= 1;
        if cursor.err < 2 * self.two_minor - self.two_major {
            cursor.minor -= self.minor_step;
            cursor.err += self.two_major - self.two_minor;
        } else {
            cursor.err -= self.two_minor;
        }
    }
}

/// Lazy iterator over the pixels of a line, in caller order.
///
/// Yields exactly the points of [`rasterize`] without allocating. Iterating
/// from the back yields them in reverse.
///
/// ```
/// use line_raster::prelude::*;
///
/// let pixels: Vec<Point> = LineIter::new(Point::new(0, 0), Point::new(3, 1)).collect();
/// assert_eq!(pixels.first(), Some(&Point::new(0, 0)));
/// assert_eq!(pixels.last(), Some(&Point::new(3, 1)));
/// ```
#[derive(Debug, Clone)]
pub struct LineIter {
    stepper: Stepper,
    /// Next point at the canonical start side.
    front: Cursor,
    /// Next point at the canonical end side.
    back: Cursor,
    remaining: u64,
    /// Caller's start is the canonical end.
    reversed: bool,
}

impl LineIter {
    /// Iterate the line from `start` to `end`.
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        let segment = Segment::new(start, end);
        let major_axis = segment.major_axis();
        let minor_axis = major_axis.other();

        let reversed = start.coord(major_axis) > end.coord(major_axis);
        let (from, to) = if reversed { (end, start) } else { (start, end) };

        let major_delta = i64::from(segment.delta(major_axis));
        let minor_delta = i64::from(segment.delta(minor_axis));
        let minor_step = if to.coord(minor_axis) >= from.coord(minor_axis) { 1 } else { -1 };

        // The accumulator returns to its initial value at the far endpoint.
        let err = 2 * minor_delta - major_delta;

        Self {
            stepper: Stepper {
                major_axis,
                minor_step,
                two_major: 2 * major_delta,
                two_minor: 2 * minor_delta,
            },
            front: Cursor {
                major: from.coord(major_axis),
                minor: from.coord(minor_axis),
                err,
            },
            back: Cursor {
                major: to.coord(major_axis),
                minor: to.coord(minor_axis),
                err,
            },
            remaining: major_delta as u64 + 1,
            reversed,
        }
    }

    /// Number of points not yet yielded.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    fn take_front(&mut self) -> Point {
        let point = self.stepper.point(self.front);
        if self.remaining > 0 {
            self.stepper.advance(&mut self.front);
        } else {
            debug_assert_eq!(self.front, self.back, "cursors must meet on the last point");
        }
        point
    }

    fn take_back(&mut self) -> Point {
        let point = self.stepper.point(self.back);
        if self.remaining > 0 {
            self.stepper.retreat(&mut self.back);
        } else {
            debug_assert_eq!(self.front, self.back, "cursors must meet on the last point");
        }
        point
    }
}

impl Iterator for LineIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(if self.reversed { self.take_back() } else { self.take_front() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = usize::try_from(self.remaining).ok();
        (upper.unwrap_or(usize::MAX), upper)
    }

    fn count(self) -> usize {
        self.remaining as usize
    }
}

impl DoubleEndedIterator for LineIter {
    fn next_back(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(if self.reversed { self.take_front() } else { self.take_back() })
    }
}

impl ExactSizeIterator for LineIter {}

impl FusedIterator for LineIter {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    fn line(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<Point> {
        rasterize(Point::new(x0, y0), Point::new(x1, y1)).into_vec()
    }

    #[test]
    fn test_rasterize_horizontal() {
        assert_eq!(line(0, 0, 5, 0), pts(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]));
    }

    #[test]
    fn test_rasterize_vertical() {
        assert_eq!(line(0, 0, 0, 5), pts(&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5)]));
    }

    #[test]
    fn test_rasterize_diagonal() {
        assert_eq!(line(0, 0, 4, 4), pts(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]));
    }

    #[test]
    fn test_rasterize_anti_diagonal() {
        assert_eq!(line(0, 0, -3, 3), pts(&[(0, 0), (-1, 1), (-2, 2), (-3, 3)]));
    }

    #[test]
    fn test_rasterize_single_point() {
        assert_eq!(line(3, 3, 3, 3), pts(&[(3, 3)]));
    }

    #[test]
    fn test_rasterize_shallow_canvas_line() {
        let path = line(1, 1, 18, 8);
        assert_eq!(path.len(), 18);
        assert_eq!(path.first(), Some(&Point::new(1, 1)));
        assert_eq!(path.last(), Some(&Point::new(18, 8)));
        for pair in path.windows(2) {
            assert_eq!(pair[1].x - pair[0].x, 1);
            assert!(pair[1].y >= pair[0].y);
        }
    }

    #[test]
    fn test_rasterize_descending_y() {
        let path = line(2, 5, 10, 1);
        assert_eq!(path.len(), 9);
        assert_eq!(path.last(), Some(&Point::new(10, 1)));
        for pair in path.windows(2) {
            assert_eq!(pair[1].x - pair[0].x, 1);
            assert!(pair[1].y <= pair[0].y);
        }
    }

    #[test]
    fn test_rasterize_known_shallow() {
        // dx = 5, dy = 2: minor steps fall at the rounded midpoints.
        assert_eq!(line(0, 0, 5, 2), pts(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]));
    }

    #[test]
    fn test_rasterize_known_steep() {
        assert_eq!(line(0, 0, 2, 5), pts(&[(0, 0), (0, 1), (1, 2), (1, 3), (2, 4), (2, 5)]));
    }

    #[test]
    fn test_midpoint_tie_is_order_independent() {
        // (0,0)-(2,1) has an exact tie at x = 1.
        let forward = line(0, 0, 2, 1);
        let mut backward = line(2, 1, 0, 0);
        backward.reverse();
        assert_eq!(forward, pts(&[(0, 0), (1, 1), (2, 1)]));
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_reversed_matches_for_all_octants() {
        for (dx, dy) in [(7, 3), (3, 7), (-3, 7), (-7, 3), (-7, -3), (-3, -7), (3, -7), (7, -3)] {
            let a = Point::new(10, -4);
            let b = Point::new(10 + dx, -4 + dy);
            let mut back = rasterize(b, a).into_vec();
            back.reverse();
            assert_eq!(rasterize(a, b).into_vec(), back, "delta ({dx}, {dy})");
        }
    }

    #[test]
    fn test_rasterize_near_integer_limits() {
        let start = Point::new(i32::MAX - 2, i32::MIN);
        let end = Point::new(i32::MAX, i32::MIN + 5);
        let path = rasterize(start, end);
        assert_eq!(path.len(), 6);
        assert_eq!(path.start(), start);
        assert_eq!(path.end(), end);
    }

    #[test]
    fn test_full_range_line_ends() {
        // 2^32 pixels; only the ends are walked.
        let start = Point::new(i32::MIN, i32::MIN);
        let end = Point::new(i32::MAX, i32::MAX - 7);
        let mut it = LineIter::new(start, end);
        assert_eq!(it.remaining(), 1u64 << 32);

        assert_eq!(it.next(), Some(start));
        assert_eq!(it.next(), Some(Point::new(i32::MIN + 1, i32::MIN + 1)));
        assert_eq!(it.next_back(), Some(end));
        assert_eq!(it.next_back(), Some(Point::new(i32::MAX - 1, i32::MAX - 8)));
        assert_eq!(it.remaining(), (1u64 << 32) - 4);
    }

    #[test]
    fn test_rasterize_segment_matches_rasterize() {
        let seg = Segment::from_coords(-4, 9, 11, 2);
        assert_eq!(rasterize_segment(seg), rasterize(seg.start, seg.end));
    }

    #[test]
    fn test_iter_len_and_remaining() {
        let mut it = LineIter::new(Point::new(0, 0), Point::new(6, -2));
        assert_eq!(it.len(), 7);
        it.next();
        it.next_back();
        assert_eq!(it.len(), 5);
        assert_eq!(it.remaining(), 5);
        assert_eq!(it.clone().count(), 5);
    }

    #[test]
    fn test_iter_rev_matches_reversed_path() {
        let a = Point::new(-5, 3);
        let b = Point::new(8, -1);
        let mut expected = rasterize(a, b).into_vec();
        expected.reverse();
        let rev: Vec<Point> = LineIter::new(a, b).rev().collect();
        assert_eq!(rev, expected);
    }

    #[test]
    fn test_iter_interleaved_ends() {
        let a = Point::new(9, 0);
        let b = Point::new(0, 4);
        let expected = rasterize(a, b).into_vec();

        let mut it = LineIter::new(a, b);
        let mut front = Vec::new();
        let mut back = Vec::new();
        loop {
            match it.next() {
                Some(p) => front.push(p),
                None => break,
            }
            match it.next_back() {
                Some(p) => back.push(p),
                None => break,
            }
        }
        back.reverse();
        front.extend(back);
        assert_eq!(front, expected);
    }

    #[test]
    fn test_iter_is_fused() {
        let mut it = LineIter::new(Point::new(1, 1), Point::new(1, 1));
        assert_eq!(it.next(), Some(Point::new(1, 1)));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LineIter>();
        assert_send_sync::<PixelPath>();
    }
}

// ============================================================================
// Property-based tests with proptest
// ============================================================================
