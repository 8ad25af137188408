//! Report storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Report storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Which repository implementation to use
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory for the file backend
    #[serde(default = "default_path")]
    pub path: Option<PathBuf>,
}

/// Report repository implementation
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    File,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StorageBackend::File && self.path.is_none() {
            return Err(ValidationError::MissingRequired("storage.path"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_path(),
        }
    }
}

fn default_path() -> Option<PathBuf> {
    Some(PathBuf::from("./data/reports"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackend::Memory);
        assert_eq!(config.path, Some(PathBuf::from("./data/reports")));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_backend_requires_path() {
        let config = StorageConfig {
            backend: StorageBackend::File,
            path: None,
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("storage.path"))
        );
    }
}
