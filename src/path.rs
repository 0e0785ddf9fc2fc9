//! Owned pixel paths.
//!
//! A [`PixelPath`] is the materialized output of the rasterizer. It is never
//! empty and every pair of neighbours is one unit step apart.

use std::fmt;

use crate::contracts::step_contracts;
use crate::error::{Error, Result};
use crate::geometry::Point;

/// An ordered, non-empty sequence of unit-step pixels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Point>", into = "Vec<Point>")
)]
pub struct PixelPath {
    points: Vec<Point>,
}

impl PixelPath {
    /// Wrap rasterizer output. The caller guarantees the path invariants.
    pub(crate) fn from_raster(points: Vec<Point>) -> Self {
        debug_assert!(!points.is_empty(), "rasterized path is never empty");
        Self { points }
    }

    /// Number of pixels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; a path holds at least one pixel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First pixel.
    #[must_use]
    pub fn start(&self) -> Point {
        self.points[0]
    }

    /// Last pixel.
    #[must_use]
    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// The pixels as a slice.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterate the pixels in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Whether `point` lies on the path.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.points.contains(&point)
    }

    /// The same pixels in reverse order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Take ownership of the pixels.
    #[must_use]
    pub fn into_vec(self) -> Vec<Point> {
        self.points
    }
}

impl TryFrom<Vec<Point>> for PixelPath {
    type Error = Error;

    fn try_from(points: Vec<Point>) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::EmptyPath);
        }
        if let Some(index) = step_contracts::first_invalid_step(&points) {
            return Err(Error::NonUnitStep {
                index,
                from: points[index - 1],
                to: points[index],
            });
        }
        Ok(Self { points })
    }
}

impl From<PixelPath> for Vec<Point> {
    fn from(path: PixelPath) -> Self {
        path.points
    }
}

impl AsRef<[Point]> for PixelPath {
    fn as_ref(&self) -> &[Point] {
        &self.points
    }
}

impl IntoIterator for PixelPath {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a PixelPath {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl fmt::Display for PixelPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{p}")?;
        }
        f.write_str("]")
    }
}
