//! # line-raster
//!
//! Integer-only line rasterization with Bresenham's algorithm.
//!
//! Given two integer endpoints, [`rasterize`](raster::rasterize) produces the
//! exact, deterministic sequence of pixels that best approximates the ideal
//! line between them. No floating point, no clipping, no drawing: the output
//! is a [`PixelPath`](path::PixelPath) for a presentation layer to consume.
//!
//! ## Features
//!
//! - **Exact endpoints**: the path starts at `start` and ends at `end`
//! - **Unit steps**: neighbours differ by at most one unit per axis
//! - **Symmetric**: swapping the endpoints reverses the path; swapping the
//!   axes transposes it
//! - **Total**: any pair of `i32` points is valid input, with no overflow
//! - **Lazy or owned**: [`LineIter`](raster::LineIter) walks the same pixels
//!   from either end without allocating
//!
//! ## Quick Start
//!
//! ```rust
//! use line_raster::prelude::*;
//!
//! let path = rasterize(Point::new(1, 1), Point::new(18, 8));
//! assert_eq!(path.len(), 18);
//! assert_eq!(path.start(), Point::new(1, 1));
//! assert_eq!(path.end(), Point::new(18, 8));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Point`](geometry::Point),
//!   [`Segment`](geometry::Segment) and [`PixelPath`](path::PixelPath)
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   IBM Systems Journal 4(1).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Geometric primitives (points, segments, axes, octants).
pub mod geometry;

/// Owned pixel paths.
pub mod path;

// ============================================================================
// Rasterization
// ============================================================================

/// Bresenham line rasterization.
pub mod raster;

/// Path invariants as executable checks.
pub mod contracts;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for line-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use line_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Axis, Octant, Point, Segment};
    pub use crate::path::PixelPath;
    pub use crate::raster::{rasterize, rasterize_segment, LineIter};
}

// ============================================================================
// Tests
// ============================================================================
