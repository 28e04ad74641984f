//! Ordered list of hosts backed by a plain text file.
//!
//! The file holds one hostname per line, in list order, with no header.

use crate::error::{RegistryError, RegistryResult};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// An ordered list of unique hostnames.
///
/// Entries keep insertion order. After [`HostsList::load`] the order is the
/// order of the lines in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostsList {
    hosts: Vec<String>,
}

impl HostsList {
    /// Create an empty list.
    pub const fn new() -> Self {
        Self { hosts: Vec::new() }
    }

    /// Append a host to the end of the list.
    pub fn add(&mut self, host: impl Into<String>) -> RegistryResult<()> {
        let host = host.into();

        if host.is_empty() {
            return Err(RegistryError::EmptyHost);
        }
        // The file is line based and trims trailing whitespace on load.
        if host.contains(['\n', '\r']) || host.ends_with(char::is_whitespace) {
            return Err(RegistryError::InvalidHost(host));
        }
        if self.contains(&host) {
            return Err(RegistryError::DuplicateHost(host));
        }

        self.hosts.push(host);
        Ok(())
    }

    /// Remove a host, keeping the relative order of the others.
    pub fn remove(&mut self, host: &str) -> RegistryResult<()> {
        let index = self
            .position(host)
            .ok_or_else(|| RegistryError::HostNotFound(host.to_string()))?;

        self.hosts.remove(index);
        Ok(())
    }

    /// Check whether `host` is in the list (exact match).
    pub fn contains(&self, host: &str) -> bool {
        self.position(host).is_some()
    }

    /// Hosts in list order.
    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    /// Iterate over hosts in list order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.hosts.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Replace the list with the contents of `path`.
    ///
    /// A missing file is not an error and leaves the list as it was. The
    /// whole file is read before the list is touched, so a failed read never
    /// leaves it half-populated.
    ///
    /// Trailing whitespace is trimmed from each line, blank lines are
    /// skipped and a repeated hostname keeps only its first occurrence.
    pub fn load(&mut self, path: impl AsRef<Path>) -> RegistryResult<()> {
        let path = path.as_ref();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "hosts file not found, nothing to load");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let mut hosts: Vec<String> = Vec::new();
        for line in content.lines() {
            let host = line.trim_end();
            if host.is_empty() {
                continue;
            }
            if hosts.iter().any(|h| h == host) {
                warn!(host, path = %path.display(), "skipping duplicate host in hosts file");
                continue;
            }
            hosts.push(host.to_string());
        }

        info!(path = %path.display(), count = hosts.len(), "loaded hosts");
        self.hosts = hosts;
        Ok(())
    }

    /// Write the list to `path`, one host per line, replacing its contents.
    pub fn save(&self, path: impl AsRef<Path>) -> RegistryResult<()> {
        let path = path.as_ref();

        let mut content = String::with_capacity(self.hosts.iter().map(|h| h.len() + 1).sum());
        for host in &self.hosts {
            content.push_str(host);
            content.push('\n');
        }

        fs::write(path, content)?;
        info!(path = %path.display(), count = self.hosts.len(), "saved hosts");
        Ok(())
    }

    fn position(&self, host: &str) -> Option<usize> {
        self.hosts.iter().position(|h| h == host)
    }
}
