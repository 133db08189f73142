//! Container configuration.
//!
//! A [`LayoutConfig`] bundles everything about a stack that is not per
//! element. It can be loaded from TOML or JSON; missing keys take their
//! defaults.
//!
//! ```toml
//! axis = "horizontal"
//! spacing = 8.0
//! policy = "proportional"
//! rounding = "pixel"
//!
//! [padding]
//! left = 12.0
//! right = 12.0
//!
//! [arrangement]
//! main = "center"
//! ```

use framelayout_core::{Axis, EdgeInsets, LayoutError, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::arrange::Arrangement;
use crate::policy::{CrossAxisSizing, DistributionPolicy, Rounding};
use crate::resolver::LayoutPass;

/// Errors from loading or saving a [`LayoutConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed TOML.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization failure.
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Malformed JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Well-formed but invalid values.
    #[error("invalid layout config: {0}")]
    Invalid(#[from] LayoutError),
}

/// Stack-wide layout settings.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Stacking axis
    pub axis: Axis,
    /// Gap between consecutive elements
    pub spacing: f32,
    /// Distribution of leftover space
    pub policy: DistributionPolicy,
    /// Unit grid of computed sizes
    pub rounding: Rounding,
    /// Sizing across the stacking axis
    pub cross_sizing: CrossAxisSizing,
    /// Container padding
    pub padding: EdgeInsets,
    /// Placement of elements once sized
    pub arrangement: Arrangement,
}

impl LayoutConfig {
    /// Default settings along `axis`.
    #[must_use]
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            ..Self::default()
        }
    }

    /// Parse and validate TOML.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate JSON.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Reject negative or non-finite spacing and padding.
    pub fn validate(&self) -> Result<(), LayoutError> {
        // Extent is checked per pass; a zero size passes here.
        self.pass(Size::ZERO).validate()
    }

    /// The pass these settings describe for a container of `available` size.
    #[must_use]
    pub const fn pass(&self, available: Size) -> LayoutPass {
        LayoutPass {
            axis: self.axis,
            available,
            spacing: self.spacing,
            padding: self.padding,
            policy: self.policy,
            rounding: self.rounding,
            cross_sizing: self.cross_sizing,
        }
    }

    /// Set the spacing.
    #[must_use]
    pub const fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the padding.
    #[must_use]
    pub const fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    /// Set the distribution policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: DistributionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the rounding mode.
    #[must_use]
    pub const fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Set the cross axis sizing.
    #[must_use]
    pub const fn with_cross_sizing(mut self, cross_sizing: CrossAxisSizing) -> Self {
        self.cross_sizing = cross_sizing;
        self
    }

    /// Set the arrangement.
    #[must_use]
    pub const fn with_arrangement(mut self, arrangement: Arrangement) -> Self {
        self.arrangement = arrangement;
        self
    }
}
