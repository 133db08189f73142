//! Validated minimum/maximum size bounds.

use crate::error::{LayoutError, LayoutResult};
use crate::geometry::{Axis, Size};
use serde::{Deserialize, Serialize};

/// A validated `min..=max` pair along one axis.
///
/// Invariant: `0 <= min <= max`, neither value is NaN. `max` may be
/// `f32::INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds", into = "RawBounds")]
pub struct Bounds {
    min: f32,
    max: f32,
}

/// Wire form: an absent `max` means unbounded.
#[derive(Serialize, Deserialize)]
struct RawBounds {
    #[serde(default)]
    min: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max: Option<f32>,
}

impl TryFrom<RawBounds> for Bounds {
    type Error = LayoutError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        // Serialized bounds carry no axis; report them against the default.
        Self::new(Axis::default(), raw.min, raw.max.unwrap_or(f32::INFINITY))
    }
}

impl From<Bounds> for RawBounds {
    fn from(bounds: Bounds) -> Self {
        Self {
            min: bounds.min,
            max: bounds.max.is_finite().then_some(bounds.max),
        }
    }
}

impl Bounds {
    /// `0..=inf`
    pub const UNBOUNDED: Self = Self {
        min: 0.0,
        max: f32::INFINITY,
    };

    /// Create bounds, rejecting `min > max`, negative values and NaN.
    ///
    /// `axis` is only used to describe the failure.
    pub fn new(axis: Axis, min: f32, max: f32) -> LayoutResult<Self> {
        if min.is_nan() || max.is_nan() || min < 0.0 || min.is_infinite() || min > max {
            return Err(LayoutError::InvalidBounds { axis, min, max });
        }
        Ok(Self { min, max })
    }

    /// Bounds admitting exactly `value`.
    pub fn exact(axis: Axis, value: f32) -> LayoutResult<Self> {
        Self::new(axis, value, value)
    }

    /// Minimum.
    #[must_use]
    pub const fn min(&self) -> f32 {
        self.min
    }

    /// Maximum.
    #[must_use]
    pub const fn max(&self) -> f32 {
        self.max
    }

    /// Clamp a value into these bounds.
    #[must_use]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Check if `value` lies inside these bounds.
    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Check if only one value is admitted.
    #[must_use]
    pub fn is_tight(&self) -> bool {
        self.min == self.max
    }

    /// Check if the maximum is finite.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.max.is_finite()
    }

    /// Bounds snapped inward to whole units.
    ///
    /// Falls back to pinning at the fractional minimum when no integer lies
    /// between `min` and `max`.
    #[must_use]
    pub fn snapped(&self) -> Self {
        let min = self.min.ceil();
        let max = self.max.floor();
        if min <= max {
            Self { min, max }
        } else {
            Self {
                min: self.min,
                max: self.min,
            }
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// Width and height bounds of one element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeBounds {
    /// Horizontal bounds
    pub width: Bounds,
    /// Vertical bounds
    pub height: Bounds,
}

impl SizeBounds {
    /// Create size bounds from four scalars.
    pub fn new(
        min_width: f32,
        max_width: f32,
        min_height: f32,
        max_height: f32,
    ) -> LayoutResult<Self> {
        Ok(Self {
            width: Bounds::new(Axis::Horizontal, min_width, max_width)?,
            height: Bounds::new(Axis::Vertical, min_height, max_height)?,
        })
    }

    /// Bounds that allow only the exact size.
    pub fn tight(size: Size) -> LayoutResult<Self> {
        Self::new(size.width, size.width, size.height, size.height)
    }

    /// Bounds that allow any size up to the given maximum.
    pub fn loose(size: Size) -> LayoutResult<Self> {
        Self::new(0.0, size.width, 0.0, size.height)
    }

    /// Unbounded on both axes.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            width: Bounds::UNBOUNDED,
            height: Bounds::UNBOUNDED,
        }
    }

    /// Bounds along `axis`.
    #[must_use]
    pub const fn along(&self, axis: Axis) -> Bounds {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Constrain a size to fit within these bounds.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(self.width.clamp(size.width), self.height.clamp(size.height))
    }

    /// Check if a size satisfies both bound pairs.
    #[must_use]
    pub fn contains(&self, size: Size) -> bool {
        self.width.contains(size.width) && self.height.contains(size.height)
    }

    /// Check if both axes admit a single value.
    #[must_use]
    pub fn is_tight(&self) -> bool {
        self.width.is_tight() && self.height.is_tight()
    }

    /// The smallest admitted size.
    #[must_use]
    pub const fn smallest(&self) -> Size {
        Size::new(self.width.min, self.height.min)
    }

    /// Replace the width bounds.
    #[must_use]
    pub const fn with_width(mut self, width: Bounds) -> Self {
        self.width = width;
        self
    }

    /// Replace the height bounds.
    #[must_use]
    pub const fn with_height(mut self, height: Bounds) -> Self {
        self.height = height;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_default_unbounded() {
        let b = Bounds::default();
        assert_eq!(b.min(), 0.0);
        assert!(b.max().is_infinite());
        assert!(!b.is_bounded());
    }

    #[test]
    fn test_bounds_rejects_crossed_pair() {
        let err = Bounds::new(Axis::Vertical, 20.0, 10.0).unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidBounds {
                axis: Axis::Vertical,
                min: 20.0,
                max: 10.0
            }
        );
    }

    #[test]
    fn test_bounds_rejects_negative_and_nan() {
        assert!(Bounds::new(Axis::Horizontal, -1.0, 10.0).is_err());
        assert!(Bounds::new(Axis::Horizontal, f32::NAN, 10.0).is_err());
        assert!(Bounds::new(Axis::Horizontal, 0.0, f32::NAN).is_err());
        assert!(Bounds::new(Axis::Horizontal, f32::INFINITY, f32::INFINITY).is_err());
    }

    #[test]
    fn test_bounds_equal_pair_is_tight() {
        let b = Bounds::exact(Axis::Horizontal, 50.0).unwrap();
        assert!(b.is_tight());
        assert_eq!(b.clamp(10.0), 50.0);
    }

    #[test]
    fn test_bounds_clamp_and_contains() {
        let b = Bounds::new(Axis::Horizontal, 10.0, 100.0).unwrap();
        assert_eq!(b.clamp(5.0), 10.0);
        assert_eq!(b.clamp(500.0), 100.0);
        assert!(b.contains(10.0));
        assert!(!b.contains(100.5));
    }

    #[test]
    fn test_bounds_snapped() {
        let b = Bounds::new(Axis::Horizontal, 10.2, 20.7).unwrap().snapped();
        assert_eq!(b.min(), 11.0);
        assert_eq!(b.max(), 20.0);

        let narrow = Bounds::new(Axis::Horizontal, 10.2, 10.7).unwrap().snapped();
        assert_eq!(narrow.min(), 10.2);
        assert_eq!(narrow.max(), 10.2);

        let open = Bounds::UNBOUNDED.snapped();
        assert!(open.max().is_infinite());
    }

    #[test]
    fn test_bounds_serde_validates() {
        let ok: Bounds = serde_json::from_str(r#"{"min": 5.0, "max": 10.0}"#).unwrap();
        assert_eq!(ok.min(), 5.0);
        let open: Bounds = serde_json::from_str(r#"{"min": 5.0}"#).unwrap();
        assert!(open.max().is_infinite());
        assert!(serde_json::from_str::<Bounds>(r#"{"min": 10.0, "max": 5.0}"#).is_err());
        assert_eq!(serde_json::to_string(&Bounds::UNBOUNDED).unwrap(), r#"{"min":0.0}"#);
    }

    #[test]
    fn test_size_bounds_tight_and_loose() {
        let tight = SizeBounds::tight(Size::new(100.0, 50.0)).unwrap();
        assert!(tight.is_tight());
        let loose = SizeBounds::loose(Size::new(100.0, 50.0)).unwrap();
        assert!(!loose.is_tight());
        assert_eq!(loose.smallest(), Size::ZERO);
    }

    #[test]
    fn test_size_bounds_constrain() {
        let b = SizeBounds::new(10.0, 100.0, 20.0, 80.0).unwrap();
        assert_eq!(b.constrain(Size::new(50.0, 50.0)), Size::new(50.0, 50.0));
        assert_eq!(b.constrain(Size::new(5.0, 5.0)), Size::new(10.0, 20.0));
        assert_eq!(b.constrain(Size::new(200.0, 200.0)), Size::new(100.0, 80.0));
        assert!(b.contains(Size::new(10.0, 80.0)));
    }

    #[test]
    fn test_size_bounds_reports_failing_axis() {
        let err = SizeBounds::new(0.0, 10.0, 30.0, 20.0).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidBounds {
                axis: Axis::Vertical,
                ..
            }
        ));
    }

    #[test]
    fn test_size_bounds_along() {
        let b = SizeBounds::new(1.0, 2.0, 3.0, 4.0).unwrap();
        assert_eq!(b.along(Axis::Horizontal).min(), 1.0);
        assert_eq!(b.along(Axis::Vertical).max(), 4.0);
    }
}
