//! Reading and validating configuration documents.
//!
//! Validation runs after deserialization so that a syntactically valid file
//! with nonsensical values (a zero `top_n`, a zero translation timeout) is
//! still rejected at startup rather than at the first request.

use std::path::Path;

use tracing::debug;

use triage_contracts::error::{TriageError, TriageResult};

use crate::settings::TriageConfig;

impl TriageConfig {
    /// Parse `s` as TOML and validate the result.
    ///
    /// Data paths are returned as written; see [`TriageConfig::from_file`]
    /// for path resolution.
    pub fn from_toml_str(s: &str) -> TriageResult<Self> {
        let config: TriageConfig = toml::from_str(s).map_err(|e| TriageError::ConfigError {
            reason: format!("failed to parse config TOML: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read the file at `path`, parse it, and resolve relative data paths
    /// against the file's parent directory.
    pub fn from_file(path: &Path) -> TriageResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| TriageError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        let mut config = Self::from_toml_str(&contents)?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.data = config.data.resolve_against(base);

        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Reject values that deserialize fine but cannot be served.
    pub fn validate(&self) -> TriageResult<()> {
        if self.ranking.top_n == 0 {
            return Err(TriageError::ConfigError {
                reason: "ranking.top_n must be at least 1".to_string(),
            });
        }

        if self.translation.enabled {
            if self.translation.timeout_ms == 0 {
                return Err(TriageError::ConfigError {
                    reason: "translation.timeout_ms must be positive when translation is enabled"
                        .to_string(),
                });
            }
            if self.translation.endpoint.trim().is_empty() {
                return Err(TriageError::ConfigError {
                    reason: "translation.endpoint must be set when translation is enabled"
                        .to_string(),
                });
            }
        }

        let lat = self.facilities.latitude;
        let lon = self.facilities.longitude;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(TriageError::ConfigError {
                reason: format!("facility reference point ({lat}, {lon}) is not a valid coordinate"),
            });
        }

        Ok(())
    }
}
