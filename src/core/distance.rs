//! # Distance
//!
//! Minkowski distances in any number of dimensions, computed in two steps:
//!
//! 1. per-dimension absolute differences ([`dimension_distances_from_points`])
//! 2. aggregation under a [`Norm`] ([`distance_from_dimension_distances`])
//!
//! `(Σ dᵢ^p)^(1/p)`, or `max(dᵢ)` when `p = ∞`.

use super::Norm;
use crate::error::{TrigError, TrigResult};

/// Absolute difference between two points along every dimension
///
/// # Example
/// ```
/// use trigonometric::dimension_distances_from_points;
/// let d = dimension_distances_from_points(&[0.0, 0.0], &[3.0, -4.0]).unwrap();
/// assert_eq!(d, vec![3.0, 4.0]);
/// ```
pub fn dimension_distances_from_points(p1: &[f64], p2: &[f64]) -> TrigResult<Vec<f64>> {
    if p1.len() != p2.len() {
        return Err(TrigError::DimensionMismatch {
            left: p1.len(),
            right: p2.len(),
        });
    }

    Ok(p1.iter().zip(p2.iter()).map(|(a, b)| (a - b).abs()).collect())
}

/// Aggregate per-dimension distances into a single distance
///
/// `None` means Euclidean.
///
/// Exponents below 1 emit an info event and are computed anyway.
///
/// # Example
/// ```
/// use trigonometric::{distance_from_dimension_distances, Norm};
/// let euclid = distance_from_dimension_distances(&[3.0, 4.0], None).unwrap();
/// assert!((euclid - 5.0).abs() < 1e-12);
/// let cheb = distance_from_dimension_distances(&[3.0, 4.0, 10.0], Some(Norm::CHEBYSHEV)).unwrap();
/// assert_eq!(cheb, 10.0);
/// ```
pub fn distance_from_dimension_distances(
    distances: &[f64],
    norm: Option<Norm>,
) -> TrigResult<f64> {
    if distances.is_empty() {
        return Err(TrigError::EmptyDistances);
    }

    let norm = norm.unwrap_or_default();

    if norm.is_quasinorm() {
        tracing::info!(
            norm = norm.exponent(),
            "quasinorm: triangle inequality does not hold"
        );
    }

    if norm.is_chebyshev() {
        // NaN wins, as it does in the Lp branch
        return Ok(distances
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, |max, d| if d.is_nan() || d > max { d } else { max }));
    }

    let p = norm.exponent();
    let sum: f64 = distances.iter().map(|d| d.powf(p)).sum();

    Ok(sum.powf(1.0 / p))
}

/// Distance between two points under `norm`
pub fn distance_between_points(p1: &[f64], p2: &[f64], norm: Option<Norm>) -> TrigResult<f64> {
    let distances = dimension_distances_from_points(p1, p2)?;
    distance_from_dimension_distances(&distances, norm)
}
