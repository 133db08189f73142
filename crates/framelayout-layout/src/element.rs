//! Layout participants.

use framelayout_core::{Axis, Bounds, LayoutError, LayoutResult, Size, SizeBounds, ViewId};

/// One layout participant: a view handle, its size bounds and the size the
/// last successful pass computed for it.
///
/// Bounds are mutable through validated setters. The computed size is
/// written only by this crate's resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    view: ViewId,
    bounds: SizeBounds,
    weight: Option<f32>,
    computed: Option<Size>,
}

impl Element {
    /// Create an unbounded element for `view`.
    #[must_use]
    pub const fn new(view: ViewId) -> Self {
        Self::with_bounds(view, SizeBounds::unbounded())
    }

    /// Create an element with pre-validated bounds.
    #[must_use]
    pub const fn with_bounds(view: ViewId, bounds: SizeBounds) -> Self {
        Self {
            view,
            bounds,
            weight: None,
            computed: None,
        }
    }

    /// Start building an element from raw scalars.
    #[must_use]
    pub fn builder() -> ElementBuilder {
        ElementBuilder::default()
    }

    /// The view this element lays out.
    #[must_use]
    pub const fn view(&self) -> ViewId {
        self.view
    }

    /// Current bounds.
    #[must_use]
    pub const fn bounds(&self) -> SizeBounds {
        self.bounds
    }

    /// Minimum width.
    #[must_use]
    pub const fn min_width(&self) -> f32 {
        self.bounds.width.min()
    }

    /// Maximum width.
    #[must_use]
    pub const fn max_width(&self) -> f32 {
        self.bounds.width.max()
    }

    /// Minimum height.
    #[must_use]
    pub const fn min_height(&self) -> f32 {
        self.bounds.height.min()
    }

    /// Maximum height.
    #[must_use]
    pub const fn max_height(&self) -> f32 {
        self.bounds.height.max()
    }

    /// Replace the width bounds. Leaves the element untouched on error.
    pub fn set_width_bounds(&mut self, min: f32, max: f32) -> LayoutResult<()> {
        self.bounds.width = Bounds::new(Axis::Horizontal, min, max)?;
        Ok(())
    }

    /// Replace the height bounds. Leaves the element untouched on error.
    pub fn set_height_bounds(&mut self, min: f32, max: f32) -> LayoutResult<()> {
        self.bounds.height = Bounds::new(Axis::Vertical, min, max)?;
        Ok(())
    }

    /// Replace both bound pairs.
    pub fn set_bounds(&mut self, bounds: SizeBounds) {
        self.bounds = bounds;
    }

    /// Explicit proportional weight, if any.
    #[must_use]
    pub const fn weight(&self) -> Option<f32> {
        self.weight
    }

    /// Set or clear the proportional weight.
    pub fn set_weight(&mut self, weight: Option<f32>) -> LayoutResult<()> {
        self.weight = validate_weight(weight)?;
        Ok(())
    }

    /// Size written by the last successful pass, `None` before the first.
    #[must_use]
    pub const fn computed_size(&self) -> Option<Size> {
        self.computed
    }

    /// Computed width, `None` before the first pass.
    #[must_use]
    pub fn computed_width(&self) -> Option<f32> {
        self.computed.map(|s| s.width)
    }

    /// Computed height, `None` before the first pass.
    #[must_use]
    pub fn computed_height(&self) -> Option<f32> {
        self.computed.map(|s| s.height)
    }

    /// Check if a pass has written a size.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.computed.is_some()
    }

    pub(crate) fn set_computed(&mut self, size: Size) {
        self.computed = Some(size);
    }
}

fn validate_weight(weight: Option<f32>) -> LayoutResult<Option<f32>> {
    match weight {
        Some(w) if !w.is_finite() || w < 0.0 => Err(LayoutError::InvalidWeight(w)),
        other => Ok(other),
    }
}

/// Builder for [`Element`] mirroring the `view, min_width = 0, max_width = inf,
/// min_height = 0, max_height = inf` construction signature.
#[derive(Debug, Clone, Copy)]
pub struct ElementBuilder {
    view: Option<ViewId>,
    min_width: f32,
    max_width: f32,
    min_height: f32,
    max_height: f32,
    weight: Option<f32>,
}

impl Default for ElementBuilder {
    fn default() -> Self {
        Self {
            view: None,
            min_width: 0.0,
            max_width: f32::INFINITY,
            min_height: 0.0,
            max_height: f32::INFINITY,
            weight: None,
        }
    }
}

impl ElementBuilder {
    /// Set the backing view.
    #[must_use]
    pub const fn view(mut self, view: ViewId) -> Self {
        self.view = Some(view);
        self
    }

    /// Set width bounds.
    #[must_use]
    pub const fn width(mut self, min: f32, max: f32) -> Self {
        self.min_width = min;
        self.max_width = max;
        self
    }

    /// Set height bounds.
    #[must_use]
    pub const fn height(mut self, min: f32, max: f32) -> Self {
        self.min_height = min;
        self.max_height = max;
        self
    }

    /// Set the proportional weight.
    #[must_use]
    pub const fn weight(mut self, weight: f32) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Validate and build.
    pub fn build(self) -> LayoutResult<Element> {
        let view = self.view.ok_or(LayoutError::NullView)?;
        let bounds = SizeBounds::new(
            self.min_width,
            self.max_width,
            self.min_height,
            self.max_height,
        )?;
        let mut element = Element::with_bounds(view, bounds);
        element.weight = validate_weight(self.weight)?;
        Ok(element)
    }
}
