//! # Point
//!
//! A position in N-dimensional space.
//!
//! Dimensionality is not fixed; two points only need to agree with each
//! other when a distance between them is taken.

use serde::{Deserialize, Serialize};

use super::distance::{distance_between_points, dimension_distances_from_points};
use super::Norm;
use crate::error::TrigResult;

/// A point in dimensional space
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    dims: Vec<f64>,
}

impl Point {
    /// Create a new point from its coordinates
    ///
    /// # Example
    /// ```
    /// use trigonometric::Point;
    /// let p = Point::new(vec![1.0, 2.0, 3.0]);
    /// assert_eq!(p.dimensionality(), 3);
    /// ```
    pub fn new(dims: Vec<f64>) -> Self {
        Self { dims }
    }

    /// Create an origin point (all zeros) of given dimensionality
    pub fn origin(dims: usize) -> Self {
        Self {
            dims: vec![0.0; dims],
        }
    }

    /// Number of coordinates
    pub fn dimensionality(&self) -> usize {
        self.dims.len()
    }

    /// Access the coordinates as a slice
    pub fn dims(&self) -> &[f64] {
        &self.dims
    }

    /// Absolute difference to `other` along every dimension
    pub fn dimension_distances(&self, other: &Point) -> TrigResult<Vec<f64>> {
        dimension_distances_from_points(&self.dims, &other.dims)
    }

    /// Minkowski distance to `other`; `None` means Euclidean
    ///
    /// # Example
    /// ```
    /// use trigonometric::{Norm, Point};
    /// let a = Point::from([0.0, 0.0]);
    /// let b = Point::from([3.0, 4.0]);
    /// assert!((a.distance(&b, None).unwrap() - 5.0).abs() < 1e-12);
    /// assert_eq!(a.distance(&b, Some(Norm::CHEBYSHEV)).unwrap(), 4.0);
    /// ```
    pub fn distance(&self, other: &Point, norm: Option<Norm>) -> TrigResult<f64> {
        distance_between_points(&self.dims, &other.dims, norm)
    }
}

impl From<Vec<f64>> for Point {
    fn from(dims: Vec<f64>) -> Self {
        Self::new(dims)
    }
}

impl<const N: usize> From<[f64; N]> for Point {
    fn from(dims: [f64; N]) -> Self {
        Self::new(dims.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrigError;

    #[test]
    fn test_new_point() {
        let p = Point::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(p.dimensionality(), 3);
        assert_eq!(p.dims(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_origin() {
        let origin = Point::origin(5);
        assert_eq!(origin.dimensionality(), 5);
        assert!(origin.dims().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_from_array_and_vec() {
        assert_eq!(Point::from([1.0, 2.0]), Point::from(vec![1.0, 2.0]));
    }

    #[test]
    fn test_dimension_distances() {
        let a = Point::origin(2);
        let b = Point::from([3.0, -4.0]);
        assert_eq!(a.dimension_distances(&b).unwrap(), vec![3.0, 4.0]);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Point::from([1.0, -2.0, 3.0]);
        let b = Point::from([-4.0, 0.5, 2.0]);
        let ab = a.distance(&b, Some(Norm::new(3.0))).unwrap();
        let ba = b.distance(&a, Some(Norm::new(3.0))).unwrap();
        assert!((ab - ba).abs() < 1e-12);
    }

    #[test]
    fn test_distance_different_dims() {
        let a = Point::origin(2);
        let b = Point::origin(3);
        assert_eq!(
            a.distance(&b, None),
            Err(TrigError::DimensionMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn test_serde() {
        let p = Point::from([1.5, -2.0]);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"dims":[1.5,-2.0]}"#);
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
