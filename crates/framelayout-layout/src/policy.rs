//! Distribution, rounding and alignment policies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How space beyond the summed minimums is handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionPolicy {
    /// Split leftover space equally among elements below their maximum
    #[default]
    Equal,
    /// Split leftover space by explicit weight, or by current size when no
    /// weight is set
    Proportional,
    /// Keep every element at its minimum; leftover space stays unused
    PackMinimum,
}

impl fmt::Display for DistributionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal => f.write_str("equal"),
            Self::Proportional => f.write_str("proportional"),
            Self::PackMinimum => f.write_str("pack_minimum"),
        }
    }
}

/// Numeric grid computed sizes are snapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Whole units; remainders go to elements in traversal order
    #[default]
    Pixel,
    /// Keep fractional sizes
    Fractional,
}

/// Placement of an element or of unused space inside the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Pack at the leading edge
    #[default]
    Start,
    /// Center in the available space
    Center,
    /// Pack at the trailing edge
    End,
}

impl Alignment {
    /// Offset that places content inside `free` units of space.
    #[must_use]
    pub fn offset(self, free: f32, rounding: Rounding) -> f32 {
        let free = free.max(0.0);
        match self {
            Self::Start => 0.0,
            Self::Center => match rounding {
                Rounding::Pixel => (free / 2.0).floor(),
                Rounding::Fractional => free / 2.0,
            },
            Self::End => free,
        }
    }
}

/// Sizing rule for the axis orthogonal to the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossAxisSizing {
    /// Resolve each element alone with the pass's distribution policy
    #[default]
    FollowPolicy,
    /// Grow each element toward the full cross extent, capped at its maximum
    Stretch,
}
