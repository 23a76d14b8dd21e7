//! Configuration for waypoint
//!
//! Lookup order: an explicit `--config` path, then `./waypoint.toml`, then the
//! global file in the user config directory, then built-in defaults.

pub mod global;
pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GraphError, Result};

pub use types::{GridConfig, PersistenceConfig, SearchConfig, WaypointConfig};

/// Name of the per-directory config file
pub const LOCAL_CONFIG_FILE: &str = "waypoint.toml";

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Local(PathBuf),
    Global(PathBuf),
    Defaults,
}

impl ConfigSource {
    pub fn describe(&self) -> String {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::Local(path) => {
                path.display().to_string()
            }
            ConfigSource::Global(_) => global::source_display(),
            ConfigSource::Defaults => "built-in defaults".to_string(),
        }
    }
}

impl WaypointConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GraphError::io_operation("read config", path.display(), e))?;
        let config: WaypointConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                GraphError::io_operation("create config directory", parent.display(), e)
            })?;
        }
        fs::write(path, content)
            .map_err(|e| GraphError::io_operation("write config", path.display(), e))?;
        Ok(())
    }

    /// Resolve configuration for a command run from `cwd`
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<(Self, ConfigSource)> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(GraphError::UsageError(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            return Ok((Self::load(path)?, ConfigSource::Explicit(path.to_path_buf())));
        }

        let local = cwd.join(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Ok((Self::load(&local)?, ConfigSource::Local(local)));
        }

        if let Ok(global) = global::config_path() {
            if global.is_file() {
                return Ok((Self::load(&global)?, ConfigSource::Global(global)));
            }
        }

        tracing::debug!("no config file found; using defaults");
        Ok((Self::default(), ConfigSource::Defaults))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::HeuristicKind;
    use crate::persistence::LoadMode;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = WaypointConfig::default();
        assert_eq!(config.search.heuristic, HeuristicKind::SquaredEuclidean);
        assert_eq!(config.persistence.load_mode, LoadMode::Strict);
        assert!(config.grid.diagonals);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("waypoint.toml");

        let config = WaypointConfig {
            search: SearchConfig {
                heuristic: HeuristicKind::Manhattan,
            },
            persistence: PersistenceConfig {
                load_mode: LoadMode::SkipMalformed,
            },
            grid: GridConfig { diagonals: false },
        };
        config.save(&path).unwrap();

        let loaded = WaypointConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("waypoint.toml");
        fs::write(&path, "[search]\nheuristic = \"euclidean\"\n").unwrap();

        let loaded = WaypointConfig::load(&path).unwrap();
        assert_eq!(loaded.search.heuristic, HeuristicKind::Euclidean);
        assert_eq!(loaded.persistence.load_mode, LoadMode::Strict);
        assert!(loaded.grid.diagonals);
    }

    #[test]
    fn test_unknown_heuristic_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("waypoint.toml");
        fs::write(&path, "[search]\nheuristic = \"octile\"\n").unwrap();

        let err = WaypointConfig::load(&path).unwrap_err();
        assert!(matches!(err, GraphError::Toml(_)));
    }

    #[test]
    fn test_discover_prefers_explicit_then_local() {
        let dir = tempdir().unwrap();
        let local = dir.path().join(LOCAL_CONFIG_FILE);
        fs::write(&local, "[grid]\ndiagonals = false\n").unwrap();

        let (config, source) = WaypointConfig::discover(None, dir.path()).unwrap();
        assert!(!config.grid.diagonals);
        assert_eq!(source, ConfigSource::Local(local));

        let explicit = dir.path().join("other.toml");
        fs::write(&explicit, "[persistence]\nload_mode = \"skip-malformed\"\n").unwrap();
        let (config, source) = WaypointConfig::discover(Some(&explicit), dir.path()).unwrap();
        assert_eq!(config.persistence.load_mode, LoadMode::SkipMalformed);
        assert!(config.grid.diagonals);
        assert_eq!(source, ConfigSource::Explicit(explicit));
    }

    #[test]
    fn test_discover_missing_explicit_is_usage_error() {
        let dir = tempdir().unwrap();
        let err = WaypointConfig::discover(Some(&dir.path().join("nope.toml")), dir.path())
            .unwrap_err();
        assert!(matches!(err, GraphError::UsageError(_)));
    }
}
