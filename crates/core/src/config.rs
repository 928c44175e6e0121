//! Generator configuration, read from `hookgen.toml`.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Scalar type designation meaning "transmitted as JSON-encoded text".
pub const DEFAULT_JSON_SCALAR: &str = "JSON";

/// Name of the raw result parameter of output transformers.
pub const DEFAULT_RESULT_PARAM: &str = "data";

/// Settings shared by every generated transformer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "snake_case")]
pub struct GeneratorConfig {
    /// Scalar marker whose values are JSON text on the wire
    pub json_scalar: String,
    /// Parameter name of the raw operation result
    pub result_param: String,
    /// Emit a JSDoc header above each transformer
    pub docs: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            json_scalar: DEFAULT_JSON_SCALAR.to_string(),
            result_param: DEFAULT_RESULT_PARAM.to_string(),
            docs: true,
        }
    }
}

impl GeneratorConfig {
    /// Parse a configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
        let config = Self::from_toml_str(&content)?;
        debug!(
            path = %path.display(),
            json_scalar = %config.json_scalar,
            "Loaded generator configuration."
        );
        Ok(config)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = GeneratorConfig::from_toml_str("").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.json_scalar, "JSON");
        assert_eq!(config.result_param, "data");
        assert!(config.docs);
    }

    #[test]
    fn test_partial_config() {
        let config = GeneratorConfig::from_toml_str("json_scalar = \"JSONString\"\ndocs = false\n")
            .unwrap();
        assert_eq!(config.json_scalar, "JSONString");
        assert_eq!(config.result_param, "data");
        assert!(!config.docs);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = GeneratorConfig::from_toml_str("jsonScalar = \"X\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = GeneratorConfig::load(Path::new("/nonexistent/hookgen.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/hookgen.toml"));
    }
}
