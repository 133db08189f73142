//! Error types for framelayout.

use crate::geometry::Axis;
use crate::view::ViewId;
use thiserror::Error;

/// Structural errors raised by element construction, bound mutation and
/// layout passes.
///
/// Every variant aborts the offending operation before any state changes.
/// Insufficient space is not an error; it is reported by the resolver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A minimum exceeds its paired maximum, or a bound is negative or NaN.
    #[error("invalid {axis} bounds: min {min}, max {max}")]
    InvalidBounds {
        /// Axis the bound pair belongs to.
        axis: Axis,
        /// Offending minimum.
        min: f32,
        /// Offending maximum.
        max: f32,
    },

    /// Element construction without a backing view.
    #[error("element has no backing view")]
    NullView,

    /// Layout pass requested with negative, infinite or NaN available space.
    #[error("available extent must be finite and non-negative, got {0}")]
    NegativeExtent(f32),

    /// Spacing between elements is negative or not finite.
    #[error("spacing must be finite and non-negative, got {0}")]
    InvalidSpacing(f32),

    /// Leading or trailing padding is negative or not finite.
    #[error("padding must be finite and non-negative, got {0}")]
    InvalidPadding(f32),

    /// Proportional weight is negative or not finite.
    #[error("weight must be finite and non-negative, got {0}")]
    InvalidWeight(f32),

    /// A view handle that is not part of the layout.
    #[error("view {0} is not part of this layout")]
    UnknownView(ViewId),
}

/// Result alias used throughout framelayout.
pub type LayoutResult<T> = Result<T, LayoutError>;
