//! Frame placement from resolved sizes.

use framelayout_core::{Axis, EdgeInsets, Rect, Size};
use serde::{Deserialize, Serialize};

use crate::distribute::gaps;
use crate::element::Element;
use crate::policy::Alignment;
use crate::resolver::LayoutPass;

/// Where elements sit inside the container once sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Arrangement {
    /// Placement of the whole stack when space is left unused
    pub main: Alignment,
    /// Placement of each element across the stack
    pub cross: Alignment,
}

impl Arrangement {
    /// Create an arrangement.
    #[must_use]
    pub const fn new(main: Alignment, cross: Alignment) -> Self {
        Self { main, cross }
    }
}

/// Turn sizes into frames relative to the container's origin.
///
/// Elements are laid end to end from the leading padding, separated by the
/// pass spacing. Space the resolver left unused shifts the whole stack by
/// the main alignment; an overflowing stack starts at the leading padding.
#[must_use]
pub fn arrange(sizes: &[Size], pass: &LayoutPass, arrangement: Arrangement) -> Vec<Rect> {
    let axis = pass.axis;
    let cross_axis = axis.cross();
    let used: f32 = sizes.iter().map(|s| s.main(axis)).sum();
    let free = pass.usable_main(sizes.len()) - used;
    let cross_leading = pass.padding.leading(cross_axis);
    let cross_usable = pass.usable_cross();

    let mut cursor = pass.padding.leading(axis) + arrangement.main.offset(free, pass.rounding);
    sizes
        .iter()
        .map(|size| {
            let cross_free = cross_usable - size.cross(axis);
            let cross = cross_leading + arrangement.cross.offset(cross_free, pass.rounding);
            let origin = axis.point(cursor, cross);
            cursor += size.main(axis) + pass.spacing;
            Rect::from_origin_size(origin, *size)
        })
        .collect()
}

/// Smallest container size that holds every element at its minimum.
#[must_use]
pub fn fitting_size(elements: &[Element], axis: Axis, spacing: f32, padding: EdgeInsets) -> Size {
    let cross_axis = axis.cross();
    let main: f32 = elements
        .iter()
        .map(|e| e.bounds().along(axis).min())
        .sum::<f32>()
        + gaps(elements.len(), spacing)
        + padding.along(axis);
    let cross = elements
        .iter()
        .map(|e| e.bounds().along(cross_axis).min())
        .fold(0.0, f32::max)
        + padding.along(cross_axis);
    axis.size(main, cross)
}
