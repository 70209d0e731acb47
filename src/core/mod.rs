//! # Core
//!
//! Pure math, no I/O.
//!
//! - `Point` / `Norm` - the value types
//! - `distance` - per-dimension and Minkowski distances
//! - `angle` - radian, degree and compass degree conversions
//! - `circle` - points on a circle
//! - `Metric` - trait for pluggable distance functions
//!
//! Every function is deterministic and free of shared state, so all of it
//! can be called from any thread.

mod point;
mod norm;
pub mod distance;
pub mod angle;
pub mod circle;
pub mod metric;

// Re-exports
pub use point::Point;
pub use norm::Norm;
