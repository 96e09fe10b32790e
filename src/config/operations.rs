//! Config loading and validation.

use super::model::Config;
use crate::error::{MergeError, Result};
use crate::overrides::Override;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            MergeError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty or comment-only document deserializes to unit, not a map.
        if yaml.lines().all(|l| l.trim().is_empty() || l.trim_start().starts_with('#')) {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| MergeError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Every configured override must be one the command line would accept.
    pub fn validate(&self) -> Result<()> {
        for (i, directive) in self.overrides.iter().enumerate() {
            directive
                .parse::<Override>()
                .map_err(|e| MergeError::Config(format!("overrides[{}]: {}", i, e)))?;
        }

        Ok(())
    }
}
