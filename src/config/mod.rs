//! Configuration management for pscan.
//!
//! Provides XDG-compliant settings storage. Command-line flags and
//! environment variables take precedence over the settings file.

mod settings;

pub use settings::{AppSettings, Paths, DEFAULT_HOSTS_FILE, DEFAULT_PORTS};
