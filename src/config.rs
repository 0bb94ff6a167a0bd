//! Bucketing configuration
//!
//! Serializable settings for the geometry and GeoJSON collaborators. The
//! bucket-naming core itself takes no configuration.

use crate::error::{BucketError, Result};
use crate::validation::MAX_PRECISION;
use serde::de::Error;
use serde::{Deserialize, Serialize};

/// Bucketing configuration
///
/// # Example
///
/// ```rust
/// use geobucket::Config;
///
/// let config = Config::default();
/// assert_eq!(config.precision, 3);
///
/// let json = r#"{
///     "precision": 5,
///     "max_features": 1000,
///     "parallel": true
/// }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.precision, 5);
/// assert!(config.skip_invalid);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Geohash length used for both corners of every bounding box (1-12).
    /// This is the deepest a drill-down path can get.
    #[serde(default = "Config::default_precision")]
    pub precision: usize,

    /// Stop after this many features (None means no limit)
    #[serde(default)]
    pub max_features: Option<usize>,

    /// Bucket features on the rayon thread pool
    #[serde(default)]
    pub parallel: bool,

    /// Log and count features that fail to bucket instead of aborting
    #[serde(default = "Config::default_skip_invalid")]
    pub skip_invalid: bool,
}

impl Config {
    const fn default_precision() -> usize {
        3
    }

    const fn default_skip_invalid() -> bool {
        true
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = Some(max_features);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_skip_invalid(mut self, skip_invalid: bool) -> Self {
        self.skip_invalid = skip_invalid;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.precision < 1 || self.precision > MAX_PRECISION {
            return Err(BucketError::InvalidConfig(format!(
                "precision must be between 1 and {}, got: {}",
                MAX_PRECISION, self.precision
            )));
        }

        if self.max_features == Some(0) {
            return Err(BucketError::InvalidConfig(
                "max_features must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Load configuration from JSON string
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(serde_json::Error::custom(e));
        }
        Ok(config)
    }

    /// Save configuration as JSON string
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load configuration from TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    /// Save configuration as TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: Self::default_precision(),
            max_features: None,
            parallel: false,
            skip_invalid: Self::default_skip_invalid(),
        }
    }
}
