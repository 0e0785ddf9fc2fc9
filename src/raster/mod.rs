//! Line rasterization.
//!
//! Maps a pair of integer endpoints to the ordered pixels of the digital line
//! between them, using only integer arithmetic.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: one error accumulator, one unconditional step along
//!   the driving axis per pixel, conditional steps along the minor axis
//!
//! # Guarantees
//!
//! - Both endpoints are included, exactly
//! - Every step moves each coordinate by at most one unit, and never zero on both
//! - `rasterize(a, b)` is `rasterize(b, a)` reversed
//! - Rasterizing transposed endpoints transposes the output
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod line;

pub use line::{rasterize, rasterize_segment, LineIter};
