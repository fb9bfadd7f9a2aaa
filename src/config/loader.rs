//! Configuration file discovery and loading.
//!
//! Two layers exist: the user's global config and an explicit file passed
//! with `--config`. Both are optional. The explicit file overrides the global
//! one field by field.

use crate::config::merger::merge_configs;
use crate::config::schema::RigcheckConfig;
use crate::config::validator::ensure_valid;
use crate::error::{Result, RigcheckError};
use std::fs;
use std::path::{Path, PathBuf};

/// Paths to configuration files in priority order (later overrides earlier).
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config: ~/.rigcheck/config.yml
    pub user_global: Option<PathBuf>,

    /// File given on the command line
    pub explicit: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover the global config and record the explicit one.
    pub fn discover(explicit: Option<&Path>) -> Self {
        Self {
            user_global: Self::find_user_global(),
            explicit: explicit.map(Path::to_path_buf),
        }
    }

    /// Find user's global config at ~/.rigcheck/config.yml
    fn find_user_global() -> Option<PathBuf> {
        let path = dirs::home_dir()?.join(".rigcheck").join("config.yml");
        if path.exists() {
            Some(path)
        } else {
            None
        }
    }

    /// Config paths in merge order.
    pub fn all(&self) -> Vec<&PathBuf> {
        self.user_global.iter().chain(self.explicit.iter()).collect()
    }
}

/// Load a single config file and parse it into RigcheckConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<RigcheckConfig> {
    let value = load_config_value(path)?;
    from_value(value, path)
}

/// Parse YAML content into RigcheckConfig.
pub fn parse_config(content: &str, source_path: &Path) -> Result<RigcheckConfig> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| RigcheckError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;
    from_value(non_null(value), source_path)
}

/// Load a config file as a raw YAML value for merging.
///
/// An empty file yields an empty mapping.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RigcheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            RigcheckError::Io(e)
        }
    })?;

    let value: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|e| RigcheckError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(non_null(value))
}

fn non_null(value: serde_yaml::Value) -> serde_yaml::Value {
    match value {
        serde_yaml::Value::Null => serde_yaml::Value::Mapping(Default::default()),
        other => other,
    }
}

fn from_value(value: serde_yaml::Value, path: &Path) -> Result<RigcheckConfig> {
    serde_yaml::from_value(value).map_err(|e| RigcheckError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load, merge and validate every config in `paths`.
pub fn load_from_paths(paths: &ConfigPaths) -> Result<RigcheckConfig> {
    let all = paths.all();
    let Some(last) = all.last() else {
        return Ok(RigcheckConfig::default());
    };

    let mut layers = Vec::new();
    for path in &all {
        tracing::debug!(path = %path.display(), "Loading config");
        layers.push(load_config_value(path)?);
    }

    let config = serde_yaml::from_value(merge_configs(&layers)).map_err(|e| {
        RigcheckError::ConfigParseError {
            path: last.to_path_buf(),
            message: format!("Failed to parse merged config: {}", e),
        }
    })?;

    ensure_valid(&config)?;
    Ok(config)
}

/// Load the effective configuration.
///
/// Without any config file the built-in defaults are returned.
pub fn load_config(explicit: Option<&Path>) -> Result<RigcheckConfig> {
    load_from_paths(&ConfigPaths::discover(explicit))
}
