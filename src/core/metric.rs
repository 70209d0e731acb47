//! # Metric
//!
//! Trait and implementations for measuring the distance between two points.
//!
//! Every implementation is a Minkowski distance with a fixed exponent, so
//! they all return a value in `[0, ∞)` where 0 means identical.

use super::distance::distance_between_points;
use super::{Norm, Point};
use crate::error::TrigResult;

/// Trait for measuring distance between points
pub trait Metric: Send + Sync {
    /// Compute the distance between two points
    ///
    /// Fails when the points differ in dimensionality or have none.
    fn distance(&self, a: &Point, b: &Point) -> TrigResult<f64>;

    /// Name of this metric (for debugging/logging)
    fn name(&self) -> &'static str;
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

/// Euclidean (L2) distance
///
/// The straight-line distance between two points.
#[derive(Clone, Copy, Debug, Default)]
pub struct Euclidean;

impl Metric for Euclidean {
    fn distance(&self, a: &Point, b: &Point) -> TrigResult<f64> {
        distance_between_points(a.dims(), b.dims(), Some(Norm::EUCLIDEAN))
    }

    fn name(&self) -> &'static str {
        "euclidean"
    }
}

/// Manhattan (L1) distance
///
/// Sum of absolute differences along each dimension.
#[derive(Clone, Copy, Debug, Default)]
pub struct Manhattan;

impl Metric for Manhattan {
    fn distance(&self, a: &Point, b: &Point) -> TrigResult<f64> {
        distance_between_points(a.dims(), b.dims(), Some(Norm::MANHATTAN))
    }

    fn name(&self) -> &'static str {
        "manhattan"
    }
}

/// Chebyshev (L∞) distance
///
/// Largest absolute difference along any single dimension.
#[derive(Clone, Copy, Debug, Default)]
pub struct Chebyshev;

impl Metric for Chebyshev {
    fn distance(&self, a: &Point, b: &Point) -> TrigResult<f64> {
        distance_between_points(a.dims(), b.dims(), Some(Norm::CHEBYSHEV))
    }

    fn name(&self) -> &'static str {
        "chebyshev"
    }
}

/// Minkowski distance with an arbitrary exponent
///
/// Exponents below 1 give a quasinorm and log an info event per call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Minkowski {
    /// Exponent `p`
    pub norm: Norm,
}

impl Minkowski {
    /// Minkowski metric with exponent `p` (0 falls back to Euclidean)
    pub fn new(p: f64) -> Self {
        Self { norm: Norm::new(p) }
    }
}

impl Metric for Minkowski {
    fn distance(&self, a: &Point, b: &Point) -> TrigResult<f64> {
        distance_between_points(a.dims(), b.dims(), Some(self.norm))
    }

    fn name(&self) -> &'static str {
        "minkowski"
    }
}
