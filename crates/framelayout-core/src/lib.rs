//! Core types for the FrameLayout box layout engine.
//!
//! This crate provides the vocabulary shared by the resolver and the
//! container:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`Axis`], [`EdgeInsets`]
//! - Validated size bounds: [`Bounds`], [`SizeBounds`]
//! - View handles: [`ViewId`]
//! - Errors: [`LayoutError`]

mod bounds;
mod error;
mod geometry;
mod view;

pub use bounds::{Bounds, SizeBounds};
pub use error::{LayoutError, LayoutResult};
pub use geometry::{Axis, EdgeInsets, Point, Rect, Size};
pub use view::ViewId;
