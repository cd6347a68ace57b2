//! Page configuration loaded from JSON.

use assets_host::{UploadSettings, DEFAULT_MAX_FILE_COUNT, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
/// Configuration load failures.
pub enum ConfigError {
    /// The JSON could not be parsed into [`AssetsPageConfig`].
    #[error("assets page config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field holds a value outside its accepted range.
    #[error("assets page config field `{field}` is invalid: {reason}")]
    Invalid {
        /// Offending field.
        field: &'static str,
        /// Why it was rejected.
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Tunables for the assets page and the data layer it is paired with.
pub struct AssetsPageConfig {
    /// Height of the fixed studio header, in CSS pixels.
    pub header_height_px: f64,
    /// Extra distance below the header at which the sidebar pins.
    pub sidebar_pin_offset_px: f64,
    /// Largest upload batch the data layer accepts.
    pub max_upload_file_count: u64,
    /// Assets listed per table page.
    pub page_size: u32,
    /// Upload limits the data layer publishes.
    pub upload_settings: UploadSettings,
}

impl Default for AssetsPageConfig {
    fn default() -> Self {
        Self {
            header_height_px: 66.0,
            sidebar_pin_offset_px: 30.0,
            max_upload_file_count: DEFAULT_MAX_FILE_COUNT,
            page_size: DEFAULT_PAGE_SIZE,
            upload_settings: UploadSettings::default(),
        }
    }
}

impl AssetsPageConfig {
    /// Parses and validates a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the JSON is malformed or a value is out of range.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.header_height_px.is_finite() || self.header_height_px < 0.0 {
            return Err(ConfigError::Invalid {
                field: "header_height_px",
                reason: "must be a non-negative number",
            });
        }
        if !self.sidebar_pin_offset_px.is_finite() || self.sidebar_pin_offset_px < 0.0 {
            return Err(ConfigError::Invalid {
                field: "sidebar_pin_offset_px",
                reason: "must be a non-negative number",
            });
        }
        if self.max_upload_file_count == 0 {
            return Err(ConfigError::Invalid {
                field: "max_upload_file_count",
                reason: "must allow at least one file",
            });
        }
        if self.page_size == 0 {
            return Err(ConfigError::Invalid {
                field: "page_size",
                reason: "must list at least one asset",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = AssetsPageConfig::from_json_str(r#"{ "header_height_px": 80 }"#)
            .expect("config");
        assert_eq!(
            config,
            AssetsPageConfig {
                header_height_px: 80.0,
                ..AssetsPageConfig::default()
            }
        );
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = AssetsPageConfig::from_json_str(r#"{ "max_upload_file_count": 0 }"#)
            .expect_err("zero count");
        assert!(err.to_string().contains("max_upload_file_count"));

        let err = AssetsPageConfig::from_json_str(r#"{ "page_size": 0 }"#).expect_err("page");
        assert!(err.to_string().contains("page_size"));

        let err = AssetsPageConfig::from_json_str("{ not json").expect_err("parse");
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
