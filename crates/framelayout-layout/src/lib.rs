#![allow(clippy::unwrap_used)]
#![allow(clippy::doc_markdown)]
//! Constraint resolver for FrameLayout stacks.
//!
//! Sizes an ordered list of [`Element`]s along one axis so that every
//! element stays inside its minimum/maximum bounds and leftover space is
//! shared according to a [`DistributionPolicy`].
//!
//! - [`resolve`] runs a pass and writes each element's computed size
//! - [`compute_sizes`] returns the sizes without writing them
//! - [`distribute_extent`] is the single-axis form with every parameter
//!   explicit
//! - [`arrange`] turns sizes into frames
//!
//! Minimums that do not fit are not an error: every element is pinned at
//! its minimum and the [`LayoutReport`] carries
//! [`ConstraintStatus::Unsatisfiable`].

mod arrange;
mod config;
mod distribute;
mod element;
mod policy;
mod resolver;

pub use arrange::{arrange, fitting_size, Arrangement};
pub use config::{ConfigError, LayoutConfig};
pub use distribute::{
    distribute, gaps, minimum_extent, ConstraintStatus, Distribution, Track, EPSILON,
};
pub use element::{Element, ElementBuilder};
pub use policy::{Alignment, CrossAxisSizing, DistributionPolicy, Rounding};
pub use resolver::{
    compute_sizes, distribute_extent, resolve, AxisReport, LayoutPass, LayoutReport,
};
