//! Error types for line-raster operations.
//!
//! Rasterization itself is total and never fails. These errors come only from
//! the conversions that accept caller-supplied data: parsing a [`Point`] from
//! text and validating a point sequence into a [`PixelPath`].
//!
//! [`Point`]: crate::geometry::Point
//! [`PixelPath`]: crate::path::PixelPath

use std::num::ParseIntError;
use thiserror::Error;

use crate::geometry::Point;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in line-raster operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Point text is not of the form `x,y` or `(x, y)`.
    #[error("Invalid point: {0:?}")]
    ParsePoint(String),

    /// A point coordinate is not a valid `i32`.
    #[error("Invalid coordinate: {0}")]
    ParseInt(#[from] ParseIntError),

    /// An empty sequence was supplied where a pixel path is required.
    #[error("Pixel path must contain at least one point")]
    EmptyPath,

    /// Two consecutive points are not one unit step apart.
    #[error("Non-unit step at index {index}: {from} -> {to}")]
    NonUnitStep {
        /// Index of the second point of the offending pair.
        index: usize,
        /// Point before the step.
        from: Point,
        /// Point after the step.
        to: Point,
    },
}
