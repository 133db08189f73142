//! FrameLayout: constraint-based single-axis box layout.
//!
//! A [`FrameLayout`] stacks externally owned views along one axis. Each
//! view carries minimum and maximum bounds on both axes; a layout pass
//! sizes every view inside its bounds, shares leftover space according to
//! a [`DistributionPolicy`], and places the views as [`Rect`] frames.
//!
//! ```
//! use framelayout::{FrameLayout, Size, SizeBounds};
//!
//! let mut stack = FrameLayout::horizontal();
//! let a = stack.add_view("sidebar", SizeBounds::new(50.0, 50.0, 0.0, f32::INFINITY)?);
//! let b = stack.add_view("content", SizeBounds::new(10.0, 100.0, 0.0, f32::INFINITY)?);
//!
//! let report = stack.layout(Size::new(120.0, 40.0))?;
//! assert!(report.is_satisfied());
//! assert_eq!(stack.frame(a).map(|f| f.width), Some(50.0));
//! assert_eq!(stack.frame(b).map(|f| f.x), Some(50.0));
//! # Ok::<(), framelayout::LayoutError>(())
//! ```
//!
//! Views are never touched by the layout: the container hands out
//! [`ViewId`] handles and the host reads frames back to position its views.

#![allow(clippy::doc_markdown)]

mod container;
mod view_table;

pub use container::FrameLayout;
pub use view_table::ViewTable;

pub use framelayout_core::*;
pub use framelayout_layout as layout;
pub use framelayout_layout::{
    Alignment, Arrangement, ConfigError, ConstraintStatus, CrossAxisSizing, DistributionPolicy,
    Element, LayoutConfig, LayoutPass, LayoutReport, Rounding,
};
