//! Geometric primitives for line rasterization.
//!
//! Provides the integer value types consumed and produced by the rasterizer.
//! Coordinates are `i32`; every derived quantity (deltas, lengths, offsets) is
//! computed in a wider type so that any pair of `i32` points is valid input.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::path::PixelPath;
use crate::raster::{rasterize_segment, LineIter};

/// A 2D point with integer pixel coordinates.
///
/// Ordering is lexicographic on `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Swap the x and y coordinates.
    #[must_use]
    pub const fn transpose(self) -> Self {
        Self::new(self.y, self.x)
    }

    /// Coordinate along `axis`.
    #[must_use]
    pub const fn coord(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Build a point from its coordinate along `major` and along the other axis.
    #[must_use]
    pub const fn from_axes(major: Axis, major_coord: i32, minor_coord: i32) -> Self {
        match major {
            Axis::X => Self::new(major_coord, minor_coord),
            Axis::Y => Self::new(minor_coord, major_coord),
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = Error;

    /// Parse `x,y` or `(x, y)`; whitespace around each part is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let inner = match trimmed.strip_prefix('(') {
            Some(rest) => rest.strip_suffix(')').ok_or_else(|| Error::ParsePoint(s.to_string()))?,
            None if trimmed.ends_with(')') => return Err(Error::ParsePoint(s.to_string())),
            None => trimmed,
        };

        let mut parts = inner.split(',');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(x), Some(y), None) => Ok(Self::new(x.trim().parse()?, y.trim().parse()?)),
            _ => Err(Error::ParsePoint(s.to_string())),
        }
    }
}

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl Axis {
    /// The other axis.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// One of the eight direction cases of a non-degenerate segment.
///
/// Numbered counter-clockwise in a y-up frame, starting from the x-driven
/// case with both deltas non-negative. A zero delta counts as positive and
/// `dx == dy` counts as x-driven, matching the rasterizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Octant {
    /// x-driven, +x, +y.
    Octant0,
    /// y-driven, +x, +y.
    Octant1,
    /// y-driven, -x, +y.
    Octant2,
    /// x-driven, -x, +y.
    Octant3,
    /// x-driven, -x, -y.
    Octant4,
    /// y-driven, -x, -y.
    Octant5,
    /// y-driven, +x, -y.
    Octant6,
    /// x-driven, +x, -y.
    Octant7,
}

impl Octant {
    /// Classify a direction by driving axis and step signs.
    #[must_use]
    pub const fn from_parts(major: Axis, x_positive: bool, y_positive: bool) -> Self {
        match (major, x_positive, y_positive) {
            (Axis::X, true, true) => Self::Octant0,
            (Axis::Y, true, true) => Self::Octant1,
            (Axis::Y, false, true) => Self::Octant2,
            (Axis::X, false, true) => Self::Octant3,
            (Axis::X, false, false) => Self::Octant4,
            (Axis::Y, false, false) => Self::Octant5,
            (Axis::Y, true, false) => Self::Octant6,
            (Axis::X, true, false) => Self::Octant7,
        }
    }

    /// The axis advanced on every step.
    #[must_use]
    pub const fn major_axis(self) -> Axis {
        match self {
            Self::Octant0 | Self::Octant3 | Self::Octant4 | Self::Octant7 => Axis::X,
            Self::Octant1 | Self::Octant2 | Self::Octant5 | Self::Octant6 => Axis::Y,
        }
    }

    /// Step direction along x (`1` or `-1`).
    #[must_use]
    pub const fn x_step(self) -> i32 {
        match self {
            Self::Octant0 | Self::Octant1 | Self::Octant6 | Self::Octant7 => 1,
            Self::Octant2 | Self::Octant3 | Self::Octant4 | Self::Octant5 => -1,
        }
    }

    /// Step direction along y (`1` or `-1`).
    #[must_use]
    pub const fn y_step(self) -> i32 {
        match self {
            Self::Octant0 | Self::Octant1 | Self::Octant2 | Self::Octant3 => 1,
            Self::Octant4 | Self::Octant5 | Self::Octant6 | Self::Octant7 => -1,
        }
    }
}

/// A line segment between two integer points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a segment from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Whether start and end coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Absolute x delta.
    #[must_use]
    pub const fn dx(&self) -> u32 {
        self.start.x.abs_diff(self.end.x)
    }

    /// Absolute y delta.
    #[must_use]
    pub const fn dy(&self) -> u32 {
        self.start.y.abs_diff(self.end.y)
    }

    /// Absolute delta along `axis`.
    #[must_use]
    pub const fn delta(&self, axis: Axis) -> u32 {
        match axis {
            Axis::X => self.dx(),
            Axis::Y => self.dy(),
        }
    }

    /// The driving axis: the one with the larger delta, x on ties.
    #[must_use]
    pub const fn major_axis(&self) -> Axis {
        if self.dx() >= self.dy() {
            Axis::X
        } else {
            Axis::Y
        }
    }

    /// Direction case, or `None` for a degenerate segment.
    #[must_use]
    pub fn octant(&self) -> Option<Octant> {
        if self.is_degenerate() {
            return None;
        }
        Some(Octant::from_parts(
            self.major_axis(),
            self.end.x >= self.start.x,
            self.end.y >= self.start.y,
        ))
    }

    /// Number of pixels in the rasterized path, `max(dx, dy) + 1`.
    #[must_use]
    pub const fn pixel_count(&self) -> u64 {
        let dx = self.dx();
        let dy = self.dy();
        let major = if dx >= dy { dx } else { dy };
        major as u64 + 1
    }

    /// The same segment walked the other way.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// The segment mirrored across the `x == y` diagonal.
    #[must_use]
    pub const fn transposed(&self) -> Self {
        Self::new(self.start.transpose(), self.end.transpose())
    }

    /// Signed deviation of `point` from the ideal line through this segment.
    ///
    /// This is the cross product `(point - start) x (end - start)`. Divided by
    /// the major-axis delta it gives the distance from `point` to the ideal
    /// line measured along the minor axis.
    #[must_use]
    pub fn offset(&self, point: Point) -> i128 {
        let px = i128::from(point.x) - i128::from(self.start.x);
        let py = i128::from(point.y) - i128::from(self.start.y);
        let ex = i128::from(self.end.x) - i128::from(self.start.x);
        let ey = i128::from(self.end.y) - i128::from(self.start.y);
        px * ey - py * ex
    }

    /// Rasterize this segment.
    #[must_use]
    pub fn rasterize(&self) -> PixelPath {
        rasterize_segment(*self)
    }

    /// Lazily iterate the pixels of this segment.
    #[must_use]
    pub fn iter(&self) -> LineIter {
        LineIter::new(self.start, self.end)
    }
}

impl From<(Point, Point)> for Segment {
    fn from((start, end): (Point, Point)) -> Self {
        Self::new(start, end)
    }
}

impl IntoIterator for Segment {
    type Item = Point;
    type IntoIter = LineIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Segment {
    type Item = Point;
    type IntoIter = LineIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
