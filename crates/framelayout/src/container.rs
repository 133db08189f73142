//! The FrameLayout container.

use framelayout_core::{Axis, LayoutError, LayoutResult, Rect, Size, SizeBounds, ViewId};
use framelayout_layout::{arrange, fitting_size, resolve, Element, LayoutConfig, LayoutReport};
use tracing::{debug, trace};

use crate::view_table::ViewTable;

/// Stacks views along one axis.
///
/// The container owns the views and one [`Element`] per view, in insertion
/// order. Bounds are changed through the container; only [`layout`] writes
/// computed sizes and frames. Changing bounds does not re-run the layout.
///
/// [`layout`]: FrameLayout::layout
#[derive(Debug, Clone)]
pub struct FrameLayout<V> {
    config: LayoutConfig,
    views: ViewTable<V>,
    elements: Vec<Element>,
    /// Frames from the last pass, parallel to `elements`
    frames: Vec<Rect>,
    report: Option<LayoutReport>,
}

impl<V> Default for FrameLayout<V> {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl<V> FrameLayout<V> {
    /// Create an empty container.
    #[must_use]
    pub const fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            views: ViewTable::new(),
            elements: Vec::new(),
            frames: Vec::new(),
            report: None,
        }
    }

    /// Top-to-bottom stack with default settings.
    #[must_use]
    pub fn vertical() -> Self {
        Self::new(LayoutConfig::new(Axis::Vertical))
    }

    /// Left-to-right stack with default settings.
    #[must_use]
    pub fn horizontal() -> Self {
        Self::new(LayoutConfig::new(Axis::Horizontal))
    }

    /// Current settings.
    #[must_use]
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Replace the settings. Frames from earlier passes are dropped.
    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
        self.invalidate();
    }

    /// Append a view at the end of the stack.
    pub fn add_view(&mut self, view: V, bounds: SizeBounds) -> ViewId {
        let id = self.views.insert(view);
        self.elements.push(Element::with_bounds(id, bounds));
        self.invalidate();
        trace!(view = %id, count = self.elements.len(), "view added");
        id
    }

    /// Remove a view and its element. The view is handed back untouched.
    pub fn remove_view(&mut self, id: ViewId) -> Option<V> {
        let view = self.views.remove(id)?;
        self.elements.retain(|e| e.view() != id);
        self.invalidate();
        trace!(view = %id, count = self.elements.len(), "view removed");
        Some(view)
    }

    /// Replace a view's width bounds.
    pub fn set_width_bounds(&mut self, id: ViewId, min: f32, max: f32) -> LayoutResult<()> {
        self.element_mut(id)?.set_width_bounds(min, max)
    }

    /// Replace a view's height bounds.
    pub fn set_height_bounds(&mut self, id: ViewId, min: f32, max: f32) -> LayoutResult<()> {
        self.element_mut(id)?.set_height_bounds(min, max)
    }

    /// Set or clear a view's proportional weight.
    pub fn set_weight(&mut self, id: ViewId, weight: Option<f32>) -> LayoutResult<()> {
        self.element_mut(id)?.set_weight(weight)
    }

    /// Run a layout pass for a container of `container_size`.
    ///
    /// On error the sizes and frames of the previous pass are kept.
    pub fn layout(&mut self, container_size: Size) -> LayoutResult<LayoutReport> {
        let pass = self.config.pass(container_size);
        let report = resolve(&mut self.elements, &pass)?;

        let sizes: Vec<Size> = self
            .elements
            .iter()
            .filter_map(Element::computed_size)
            .collect();
        self.frames = arrange(&sizes, &pass, self.config.arrangement);
        self.report = Some(report);

        debug!(
            views = self.frames.len(),
            width = container_size.width,
            height = container_size.height,
            satisfied = report.is_satisfied(),
            "frames updated"
        );
        Ok(report)
    }

    /// Report of the last successful pass.
    #[must_use]
    pub const fn last_report(&self) -> Option<&LayoutReport> {
        self.report.as_ref()
    }

    /// Frame of a view, relative to the container's origin.
    ///
    /// `None` for unknown views and before the first pass after the view set
    /// changed.
    #[must_use]
    pub fn frame(&self, id: ViewId) -> Option<Rect> {
        let index = self.index_of(id)?;
        self.frames.get(index).copied()
    }

    /// Every frame, in stacking order.
    pub fn frames(&self) -> impl Iterator<Item = (ViewId, Rect)> + '_ {
        self.elements
            .iter()
            .zip(&self.frames)
            .map(|(e, frame)| (e.view(), *frame))
    }

    /// The view behind a handle.
    #[must_use]
    pub fn view(&self, id: ViewId) -> Option<&V> {
        self.views.get(id)
    }

    /// Mutable access to the view behind a handle.
    pub fn view_mut(&mut self, id: ViewId) -> Option<&mut V> {
        self.views.get_mut(id)
    }

    /// Element of a view, with its bounds and last computed size.
    #[must_use]
    pub fn element(&self, id: ViewId) -> Option<&Element> {
        self.elements.iter().find(|e| e.view() == id)
    }

    /// Elements in stacking order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Number of views in the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the stack holds no views.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Smallest container size that holds every view at its minimum.
    #[must_use]
    pub fn fitting_size(&self) -> Size {
        fitting_size(
            &self.elements,
            self.config.axis,
            self.config.spacing,
            self.config.padding,
        )
    }

    fn index_of(&self, id: ViewId) -> Option<usize> {
        self.elements.iter().position(|e| e.view() == id)
    }

    fn element_mut(&mut self, id: ViewId) -> LayoutResult<&mut Element> {
        self.elements
            .iter_mut()
            .find(|e| e.view() == id)
            .ok_or(LayoutError::UnknownView(id))
    }

    fn invalidate(&mut self) {
        self.frames.clear();
        self.report = None;
    }
}
