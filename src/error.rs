//! # Errors
//!
//! Only two things can go wrong: points of different dimensionality,
//! and aggregating a distance vector with nothing in it.

/// Result type for fallible distance operations
pub type TrigResult<T> = Result<T, TrigError>;

/// Errors raised by the distance functions
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrigError {
    /// The two points do not have the same number of coordinates
    #[error("Points need the same dimension! (left has {left}, right has {right})")]
    DimensionMismatch { left: usize, right: usize },

    /// A distance was requested over zero dimensions
    #[error("Cannot aggregate an empty distance vector")]
    EmptyDistances,
}
