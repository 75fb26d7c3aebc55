//! Progress bar style settings
//!
//! Styles are plain data and can be written as RON, e.g.
//! `(width: 10, filled: '=', empty: ' ')`. Missing fields take defaults.

use serde::{Deserialize, Serialize};

use crate::error::{ProgressionError, Result};
use crate::render::bar;

/// Default number of cells in a progress bar
pub const DEFAULT_BAR_WIDTH: usize = 20;

/// How a progress bar is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarStyle {
    /// Number of cells between the brackets
    pub width: usize,
    /// Marker for earned cells
    pub filled: char,
    /// Marker for remaining cells
    pub empty: char,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            width: DEFAULT_BAR_WIDTH,
            filled: '#',
            empty: '-',
        }
    }
}

impl BarStyle {
    /// Default markers at a custom width
    pub fn with_width(width: usize) -> Self {
        Self { width, ..Self::default() }
    }

    /// Parse and validate a style from RON text
    pub fn from_ron(source: &str) -> Result<Self> {
        let style: BarStyle =
            ron::from_str(source).map_err(|e| ProgressionError::Config(e.to_string()))?;
        style.validate()?;
        Ok(style)
    }

    /// Parse a style, falling back to the default when the text is unusable
    pub fn from_ron_or_default(source: &str) -> Self {
        Self::from_ron(source).unwrap_or_else(|e| {
            log::warn!("Failed to load bar style: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Check the style can draw a readable bar
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(ProgressionError::ZeroWidth);
        }
        if self.filled == self.empty {
            return Err(ProgressionError::Config(format!(
                "filled and empty markers are both '{}'",
                self.filled
            )));
        }
        Ok(())
    }

    /// Draw `current` out of `total` in this style
    pub fn render(&self, current: u64, total: u64) -> Result<String> {
        bar::render_styled(current, total, self)
    }
}
