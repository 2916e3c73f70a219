use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::config::types::KeywordSpec;
use crate::partition::SpecError;

/// Errors that can occur when loading a keyword spec file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read spec file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse spec file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("spec validation failed: {source}")]
    Validation {
        #[from]
        source: SpecError,
    },
}

impl KeywordSpec {
    /// Returns the path to the default spec file.
    ///
    /// Uses `~/.config/argseam/spec.toml` on Unix/macOS, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn spec_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("argseam").join("spec.toml")
    }

    /// Loads the spec from the default path.
    ///
    /// A missing file is not an error here: it yields the empty default
    /// spec, leaving the keyword lists to be supplied on the command line.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::spec_path();
        if !path.exists() {
            debug!(path = %path.display(), "no spec file, using empty default");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Loads and validates the spec from an explicit path. Unlike
    /// [`load`](Self::load), a missing file is an error: the caller named
    /// it and presumably expects it to exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let spec: KeywordSpec = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        // Building the table surfaces duplicate declarations now rather
        // than at first resolution.
        spec.arity_table()?;
        debug!(path = %path.display(), "loaded keyword spec");
        Ok(spec)
    }
}
