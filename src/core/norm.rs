//! # Norm
//!
//! The exponent `p` of a Minkowski (Lp) distance.
//!
//! - `p = 1` is Manhattan
//! - `p = 2` is Euclidean (the default)
//! - `p = ∞` is Chebyshev
//!
//! Anything below 1 is a quasinorm: it still produces a number, but the
//! triangle inequality no longer holds.

use serde::{Deserialize, Serialize};

/// Exponent selecting a Minkowski distance
///
/// Serialized as the bare exponent. Deserializing goes through [`Norm::new`],
/// so a stored `0.0` reads back as Euclidean.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Norm(f64);

impl Norm {
    /// Sum of absolute differences
    pub const MANHATTAN: Norm = Norm(1.0);

    /// Straight-line distance
    pub const EUCLIDEAN: Norm = Norm(2.0);

    /// Largest absolute difference (limit as `p → ∞`)
    pub const CHEBYSHEV: Norm = Norm(f64::INFINITY);

    /// Create a norm from an exponent
    ///
    /// Zero and `NaN` are treated as "not given" and fall back to Euclidean.
    /// Every other value is kept as is, negative ones included.
    ///
    /// # Example
    /// ```
    /// use trigonometric::Norm;
    /// assert_eq!(Norm::new(0.0), Norm::EUCLIDEAN);
    /// assert_eq!(Norm::new(3.0).exponent(), 3.0);
    /// ```
    pub fn new(p: f64) -> Self {
        if p == 0.0 || p.is_nan() {
            Self::EUCLIDEAN
        } else {
            Self(p)
        }
    }

    /// The raw exponent
    pub fn exponent(&self) -> f64 {
        self.0
    }

    /// True when `p < 1`
    pub fn is_quasinorm(&self) -> bool {
        self.0 < 1.0
    }

    /// True for the `p = +∞` case
    pub fn is_chebyshev(&self) -> bool {
        self.0 == f64::INFINITY
    }
}

impl Default for Norm {
    fn default() -> Self {
        Self::EUCLIDEAN
    }
}

impl From<f64> for Norm {
    fn from(p: f64) -> Self {
        Self::new(p)
    }
}

impl From<Norm> for f64 {
    fn from(norm: Norm) -> Self {
        norm.0
    }
}

impl From<Option<f64>> for Norm {
    fn from(p: Option<f64>) -> Self {
        p.map(Self::new).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_euclidean() {
        assert_eq!(Norm::default(), Norm::EUCLIDEAN);
        assert_eq!(Norm::from(None), Norm::EUCLIDEAN);
    }

    #[test]
    fn test_falsy_values_fall_back() {
        assert_eq!(Norm::from(0.0), Norm::EUCLIDEAN);
        assert_eq!(Norm::from(-0.0), Norm::EUCLIDEAN);
        assert_eq!(Norm::from(f64::NAN), Norm::EUCLIDEAN);
        assert_eq!(Norm::from(Some(0.0)), Norm::EUCLIDEAN);
    }

    #[test]
    fn test_other_values_kept() {
        assert_eq!(Norm::from(Some(1.0)), Norm::MANHATTAN);
        assert_eq!(Norm::from(0.5).exponent(), 0.5);
        assert_eq!(Norm::from(-2.0).exponent(), -2.0);
    }

    #[test]
    fn test_quasinorm() {
        assert!(Norm::new(0.5).is_quasinorm());
        assert!(Norm::new(-1.0).is_quasinorm());
        assert!(!Norm::MANHATTAN.is_quasinorm());
        assert!(!Norm::CHEBYSHEV.is_quasinorm());
    }

    #[test]
    fn test_chebyshev() {
        assert!(Norm::CHEBYSHEV.is_chebyshev());
        assert!(Norm::from(f64::INFINITY).is_chebyshev());
        assert!(!Norm::from(f64::NEG_INFINITY).is_chebyshev());
        assert!(!Norm::EUCLIDEAN.is_chebyshev());
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Norm::MANHATTAN).unwrap();
        assert_eq!(json, "1.0");
        let back: Norm = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Norm::MANHATTAN);
    }

    #[test]
    fn test_deserialize_zero_is_euclidean() {
        let zero: Norm = serde_json::from_str("0.0").unwrap();
        assert_eq!(zero, Norm::EUCLIDEAN);

        let d = crate::distance_from_dimension_distances(&[3.0, 4.0], Some(zero)).unwrap();
        assert!((d - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_deserialize_keeps_other_exponents() {
        let p: Norm = serde_json::from_str("0.5").unwrap();
        assert_eq!(p.exponent(), 0.5);
        let p: Norm = serde_json::from_str("-3").unwrap();
        assert_eq!(p.exponent(), -3.0);
    }
}
