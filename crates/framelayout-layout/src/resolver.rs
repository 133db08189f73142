//! Layout pass resolution.
//!
//! A pass is a pure function of its inputs: the ordered elements' bounds and
//! weights plus a [`LayoutPass`]. Previously computed sizes are never read.

use framelayout_core::{Axis, EdgeInsets, LayoutError, LayoutResult, Size};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::distribute::{distribute, gaps, ConstraintStatus, Distribution, Track};
use crate::element::Element;
use crate::policy::{CrossAxisSizing, DistributionPolicy, Rounding};

/// Inputs of one layout pass besides the elements themselves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutPass {
    /// Stacking axis
    pub axis: Axis,
    /// Container size
    pub available: Size,
    /// Gap between consecutive elements
    pub spacing: f32,
    /// Container padding
    pub padding: EdgeInsets,
    /// Distribution of leftover space
    pub policy: DistributionPolicy,
    /// Unit grid of computed sizes
    pub rounding: Rounding,
    /// Sizing across the stacking axis
    pub cross_sizing: CrossAxisSizing,
}

impl LayoutPass {
    /// A pass along `axis` inside `available`, with no spacing or padding.
    #[must_use]
    pub fn new(axis: Axis, available: Size) -> Self {
        Self {
            axis,
            available,
            spacing: 0.0,
            padding: EdgeInsets::ZERO,
            policy: DistributionPolicy::default(),
            rounding: Rounding::default(),
            cross_sizing: CrossAxisSizing::default(),
        }
    }

    /// Set the spacing.
    #[must_use]
    pub const fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the padding.
    #[must_use]
    pub const fn padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    /// Set the distribution policy.
    #[must_use]
    pub const fn policy(mut self, policy: DistributionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the rounding mode.
    #[must_use]
    pub const fn rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Set the cross axis sizing.
    #[must_use]
    pub const fn cross_sizing(mut self, cross_sizing: CrossAxisSizing) -> Self {
        self.cross_sizing = cross_sizing;
        self
    }

    /// Reject negative, infinite or NaN extents, spacing and padding.
    pub fn validate(&self) -> LayoutResult<()> {
        for extent in [self.available.width, self.available.height] {
            if !extent.is_finite() || extent < 0.0 {
                return Err(LayoutError::NegativeExtent(extent));
            }
        }
        check_spacing(self.spacing)?;
        for inset in [
            self.padding.top,
            self.padding.right,
            self.padding.bottom,
            self.padding.left,
        ] {
            check_padding(inset)?;
        }
        Ok(())
    }

    /// Extent along the axis left for `count` elements after padding and
    /// gaps.
    #[must_use]
    pub fn usable_main(&self, count: usize) -> f32 {
        usable(
            self.available.main(self.axis),
            self.padding.leading(self.axis),
            self.padding.trailing(self.axis),
            self.spacing,
            count,
        )
    }

    /// Extent across the axis left after padding.
    #[must_use]
    pub fn usable_cross(&self) -> f32 {
        let cross = self.axis.cross();
        (self.available.cross(self.axis) - self.padding.along(cross)).max(0.0)
    }
}

fn check_spacing(spacing: f32) -> LayoutResult<()> {
    if spacing.is_finite() && spacing >= 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidSpacing(spacing))
    }
}

fn check_padding(padding: f32) -> LayoutResult<()> {
    if padding.is_finite() && padding >= 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidPadding(padding))
    }
}

fn usable(extent: f32, leading: f32, trailing: f32, spacing: f32, count: usize) -> f32 {
    (extent - leading - trailing - gaps(count, spacing)).max(0.0)
}

/// Outcome of a pass along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisReport {
    /// Fit of the minimums
    pub status: ConstraintStatus,
    /// Usable space no element consumed
    pub unused: f32,
    /// Growth rounds performed
    pub rounds: usize,
}

impl From<&Distribution> for AxisReport {
    fn from(d: &Distribution) -> Self {
        Self {
            status: d.status,
            unused: d.unused,
            rounds: d.rounds,
        }
    }
}

/// Outcome of a two-axis pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutReport {
    /// Stacking axis
    pub main: AxisReport,
    /// Worst fit across the stacking axis
    pub cross: ConstraintStatus,
    /// Number of elements written
    pub resolved: usize,
}

impl LayoutReport {
    /// Check that every minimum fit on both axes.
    #[must_use]
    pub const fn is_satisfied(&self) -> bool {
        self.main.status.is_satisfied() && self.cross.is_satisfied()
    }
}

/// Distribute one axis with every parameter explicit.
///
/// This is the single-axis contract: ordered tracks, available extent,
/// spacing, leading and trailing padding, and a policy. Returns one size per
/// track without touching any element.
pub fn distribute_extent(
    tracks: &[Track],
    available_extent: f32,
    spacing: f32,
    leading_padding: f32,
    trailing_padding: f32,
    policy: DistributionPolicy,
    rounding: Rounding,
) -> LayoutResult<Distribution> {
    if !available_extent.is_finite() || available_extent < 0.0 {
        return Err(LayoutError::NegativeExtent(available_extent));
    }
    check_spacing(spacing)?;
    check_padding(leading_padding)?;
    check_padding(trailing_padding)?;

    let usable = usable(
        available_extent,
        leading_padding,
        trailing_padding,
        spacing,
        tracks.len(),
    );
    Ok(distribute(tracks, usable, policy, rounding))
}

/// Compute the size of every element without writing anything.
///
/// Returns one size per element, in order, and the pass report.
pub fn compute_sizes(
    elements: &[Element],
    pass: &LayoutPass,
) -> LayoutResult<(Vec<Size>, LayoutReport)> {
    pass.validate()?;

    let axis = pass.axis;
    let usable_main = pass.usable_main(elements.len());
    debug!(
        elements = elements.len(),
        %axis,
        policy = %pass.policy,
        usable = usable_main,
        "resolving layout pass"
    );

    let tracks: Vec<Track> = elements
        .iter()
        .map(|e| Track {
            bounds: e.bounds().along(axis),
            weight: e.weight(),
        })
        .collect();
    let main = distribute(&tracks, usable_main, pass.policy, pass.rounding);

    let cross_axis = axis.cross();
    let usable_cross = pass.usable_cross();
    let cross_policy = match pass.cross_sizing {
        CrossAxisSizing::FollowPolicy => pass.policy,
        CrossAxisSizing::Stretch => DistributionPolicy::Equal,
    };
    let mut cross = ConstraintStatus::Satisfied;
    let mut sizes = Vec::with_capacity(elements.len());

    for (element, main_size) in elements.iter().zip(&main.sizes) {
        // Weights share space along the stack only.
        let track = Track::new(element.bounds().along(cross_axis));
        let alone = distribute(&[track], usable_cross, cross_policy, pass.rounding);
        cross = worst(cross, alone.status);
        let cross_size = alone.sizes.first().copied().unwrap_or_default();
        sizes.push(axis.size(*main_size, cross_size));
    }

    let report = LayoutReport {
        main: AxisReport::from(&main),
        cross,
        resolved: sizes.len(),
    };

    if let ConstraintStatus::Unsatisfiable {
        required,
        available,
    } = report.main.status
    {
        warn!(
            %axis,
            required,
            available,
            "minimum sizes exceed available space; elements pinned at minimum"
        );
    }
    if let ConstraintStatus::Unsatisfiable {
        required,
        available,
    } = report.cross
    {
        warn!(
            axis = %cross_axis,
            required,
            available,
            "minimum cross size exceeds available space"
        );
    }

    Ok((sizes, report))
}

fn worst(current: ConstraintStatus, next: ConstraintStatus) -> ConstraintStatus {
    match (current, next) {
        (ConstraintStatus::Satisfied, other) | (other, ConstraintStatus::Satisfied) => other,
        (
            ConstraintStatus::Unsatisfiable {
                required: a,
                available,
            },
            ConstraintStatus::Unsatisfiable { required: b, .. },
        ) => ConstraintStatus::Unsatisfiable {
            required: a.max(b),
            available,
        },
    }
}

/// Run a layout pass and write every element's computed size.
///
/// On error nothing is written. Zero elements is a successful no-op.
pub fn resolve(elements: &mut [Element], pass: &LayoutPass) -> LayoutResult<LayoutReport> {
    let (sizes, report) = compute_sizes(elements, pass)?;
    for (element, size) in elements.iter_mut().zip(sizes) {
        element.set_computed(size);
    }
    Ok(report)
}
