//! Application settings and paths.
//!
//! Settings live in a JSON file in the XDG config directory. Every field is
//! optional in the file; missing fields take their defaults.

use crate::error::{ConfigError, ConfigResult};
use crate::types::{PortError, PortSpec};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Default hosts file, relative to the working directory.
pub const DEFAULT_HOSTS_FILE: &str = "pscan.hosts";

/// Default ports probed by `pscan scan`.
pub const DEFAULT_PORTS: &str = "22,80,443";

/// Application directory paths following the XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/pscan)
    pub config_dir: PathBuf,
}

impl Paths {
    /// Locate the platform directories. Nothing is created on disk.
    pub fn discover() -> ConfigResult<Self> {
        let project =
            ProjectDirs::from("com", "pscan", "pscan").ok_or(ConfigError::DirectoryNotFound)?;

        Ok(Self {
            config_dir: project.config_dir().to_path_buf(),
        })
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// File holding the hosts list.
    pub hosts_file: PathBuf,
    /// Ports scanned when none are given on the command line.
    pub ports: String,
    /// Connection timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            hosts_file: PathBuf::from(DEFAULT_HOSTS_FILE),
            ports: DEFAULT_PORTS.to_string(),
            timeout_ms: 1000,
        }
    }
}

impl AppSettings {
    /// Load settings from the default location, or defaults if absent.
    ///
    /// Also falls back to defaults when no config directory can be
    /// determined (no home directory).
    pub fn load() -> ConfigResult<Self> {
        match Paths::discover() {
            Ok(paths) => Self::load_or_default(&paths.settings_file()),
            Err(e) => {
                debug!(error = %e, "using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Load settings from `path`, returning defaults if it does not exist.
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        match fs::read_to_string(path) {
            Ok(content) => {
                debug!(path = %path.display(), "loading settings");
                Self::parse(&content)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(ConfigError::ReadFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }),
        }
    }

    /// Load settings from a file that must exist.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Self::parse(&content)
    }

    fn parse(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
    }

    /// Parsed default port specification.
    pub fn port_spec(&self) -> Result<PortSpec, PortError> {
        self.ports.parse()
    }

    /// Connection timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.hosts_file, PathBuf::from("pscan.hosts"));
        assert_eq!(settings.timeout(), Duration::from_secs(1));
        assert_eq!(settings.port_spec().unwrap().count(), 3);
    }

    #[test]
    fn test_partial_settings_file() {
        let settings = AppSettings::parse(r#"{"timeout_ms": 250}"#).unwrap();
        assert_eq!(settings.timeout_ms, 250);
        assert_eq!(settings.ports, DEFAULT_PORTS);
    }

    #[test]
    fn test_invalid_settings_file() {
        assert!(matches!(
            AppSettings::parse("not json"),
            Err(ConfigError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = TempDir::new().unwrap();
        let settings = AppSettings::load_or_default(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_load_from_requires_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        assert!(matches!(
            AppSettings::load_from(&path),
            Err(ConfigError::ReadFailed { .. })
        ));

        fs::write(&path, r#"{"hosts_file": "/tmp/targets", "ports": "8080"}"#).unwrap();
        let settings = AppSettings::load_from(&path).unwrap();
        assert_eq!(settings.hosts_file, PathBuf::from("/tmp/targets"));
        assert_eq!(settings.ports, "8080");
    }
}
