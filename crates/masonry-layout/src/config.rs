//! Layout configuration.

use masonry_core::{Breakpoint, ColumnSpec, ConfigError, Platform};

/// Estimated heights for posts whose rendered height is not known yet.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DefaultHeights {
    pub twitter: f64,
    pub instagram: f64,
}

impl Default for DefaultHeights {
    fn default() -> Self {
        Self {
            twitter: 500.0,
            instagram: 600.0,
        }
    }
}

impl DefaultHeights {
    /// Estimated height for a platform.
    pub fn get(&self, platform: Platform) -> f64 {
        match platform {
            Platform::Twitter => self.twitter,
            Platform::Instagram => self.instagram,
        }
    }

    /// Replace the estimate for a platform.
    pub fn set(&mut self, platform: Platform, height: f64) {
        match platform {
            Platform::Twitter => self.twitter = height,
            Platform::Instagram => self.instagram = height,
        }
    }
}

/// Masonry layout configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Spacing between items, both horizontally and vertically
    pub gap: f64,
    /// Fixed column count or responsive breakpoints
    pub columns: ColumnSpec,
    /// Inset applied to the left and right container edges
    pub padding: f64,
    /// Height assumed for posts that have not reported one
    pub default_heights: DefaultHeights,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            gap: 16.0,
            columns: ColumnSpec::default(),
            padding: 0.0,
            default_heights: DefaultHeights::default(),
        }
    }
}

impl LayoutConfig {
    /// Set the gap between items.
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Set the column specification.
    pub fn with_columns(mut self, columns: impl Into<ColumnSpec>) -> Self {
        self.columns = columns.into();
        self
    }

    /// Set the horizontal padding.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set the estimated height for one platform.
    pub fn with_default_height(mut self, platform: Platform, height: f64) -> Self {
        self.default_heights.set(platform, height);
        self
    }

    /// Parse a configuration from JSON.
    ///
    /// Every field is optional; missing fields take their defaults. The
    /// result is validated before it is returned.
    ///
    /// ```
    /// use masonry_layout::{ColumnSpec, LayoutConfig};
    ///
    /// let config = LayoutConfig::from_json(r#"{ "gap": 8, "columns": 3 }"#).unwrap();
    /// assert_eq!(config.gap, 8.0);
    /// assert_eq!(config.columns, ColumnSpec::Fixed(3));
    /// assert_eq!(config.padding, 0.0);
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: LayoutConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values that produce a degenerate layout.
    ///
    /// The engine itself lays out whatever it is given; this is for callers
    /// that want to reject bad input up front.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(ConfigError::InvalidGap { value: self.gap });
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ConfigError::InvalidPadding { value: self.padding });
        }

        for platform in Platform::ALL {
            let value = self.default_heights.get(platform);
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidDefaultHeight {
                    platform: platform.to_string(),
                    value,
                });
            }
        }

        match &self.columns {
            ColumnSpec::Fixed(count) if *count < 1 => {
                Err(ConfigError::InvalidColumnCount { value: *count })
            }
            ColumnSpec::Fixed(_) => Ok(()),
            ColumnSpec::Breakpoints(breakpoints) => validate_breakpoints(breakpoints),
        }
    }
}

fn validate_breakpoints(breakpoints: &[Breakpoint]) -> Result<(), ConfigError> {
    if breakpoints.is_empty() {
        return Err(ConfigError::EmptyBreakpoints);
    }

    match breakpoints
        .iter()
        .find(|bp| bp.columns < 1 || !bp.min_width.is_finite())
    {
        Some(bp) => Err(ConfigError::InvalidBreakpoint {
            min_width: bp.min_width,
            columns: bp.columns,
        }),
        None => Ok(()),
    }
}
