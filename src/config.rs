//! Grid configuration.
//!
//! Loaded from JSON (CLI, tests) or a plain JS object (browser). Missing
//! keys take their defaults.

use serde::{Deserialize, Serialize};

use crate::error::{BookgridError, Result};

/// Estimated height of one table row in CSS pixels.
pub const DEFAULT_ROW_HEIGHT: f64 = 50.0;

/// Rows rendered above and below the viewport.
pub const DEFAULT_OVERSCAN: usize = 5;

/// Height of the scroll container in CSS pixels.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 600.0;

/// Rows produced by the sample generator.
pub const SAMPLE_ROW_COUNT: usize = 10_000;

/// Settings for the virtualized grid and the sample generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    pub row_height: f64,
    pub overscan: usize,
    pub viewport_height: f64,
    pub sample_rows: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            row_height: DEFAULT_ROW_HEIGHT,
            overscan: DEFAULT_OVERSCAN,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            sample_rows: SAMPLE_ROW_COUNT,
        }
    }
}

impl GridConfig {
    /// Parse and validate a JSON config.
    ///
    /// # Errors
    /// Returns an error for malformed JSON or values rejected by
    /// [`GridConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the geometry is usable.
    ///
    /// # Errors
    /// Returns [`BookgridError::Config`] for a non-positive row height or a
    /// negative viewport height.
    pub fn validate(&self) -> Result<()> {
        if !self.row_height.is_finite() || self.row_height <= 0.0 {
            return Err(BookgridError::Config(format!(
                "rowHeight must be a positive number, got {}",
                self.row_height
            )));
        }
        if !self.viewport_height.is_finite() || self.viewport_height < 0.0 {
            return Err(BookgridError::Config(format!(
                "viewportHeight must be zero or more, got {}",
                self.viewport_height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GridConfig::default();
        assert_eq!(config.row_height, 50.0);
        assert_eq!(config.overscan, 5);
        assert_eq!(config.sample_rows, 10_000);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GridConfig::from_json(r#"{"rowHeight": 32, "overscan": 2}"#).unwrap();
        assert_eq!(config.row_height, 32.0);
        assert_eq!(config.overscan, 2);
        assert_eq!(config.viewport_height, 600.0);
    }

    #[test]
    fn test_rejects_zero_row_height() {
        let err = GridConfig::from_json(r#"{"rowHeight": 0}"#).unwrap_err();
        assert!(matches!(err, BookgridError::Config(_)));
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = GridConfig::from_json("{rowHeight").unwrap_err();
        assert!(matches!(err, BookgridError::Json(_)));
    }
}
