//! Scanner trait abstraction and result types.
//!
//! Resolution and probing are separate traits so the engine can be driven by
//! the platform resolver and real sockets in production, and by fakes in
//! tests.

use crate::types::Port;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::time::Duration;

/// Reachability of a single TCP port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortState {
    /// A connection was established within the timeout.
    Open,
    /// The connection failed: refused, timed out or unreachable.
    Closed,
}

impl fmt::Display for PortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// Result of probing a single port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortResult {
    /// The port number that was probed.
    pub port: Port,
    /// State determined by the probe.
    pub state: PortState,
}

impl PortResult {
    pub fn new(port: Port, state: PortState) -> Self {
        Self { port, state }
    }

    /// Check if the port is open.
    pub fn is_open(&self) -> bool {
        self.state == PortState::Open
    }
}

/// Outcome of scanning one host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Hostname as stored in the hosts list.
    pub host: String,
    /// The name did not resolve to any address.
    pub not_found: bool,
    /// One entry per requested port, in request order.
    pub ports: Vec<PortResult>,
}

impl ScanResult {
    /// Result for a host that resolved; ports are filled in by the engine.
    pub fn found(host: impl Into<String>, ports: Vec<PortResult>) -> Self {
        Self {
            host: host.into(),
            not_found: false,
            ports,
        }
    }

    /// Result for a host whose name did not resolve.
    pub fn not_found(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            not_found: true,
            ports: Vec::new(),
        }
    }

    /// Number of open ports in this result.
    pub fn open_count(&self) -> usize {
        self.ports.iter().filter(|p| p.is_open()).count()
    }
}

/// Configuration for a scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Upper bound on each connection attempt.
    pub timeout: Duration,
}

impl ScanConfig {
    pub fn new() -> Self {
        Self {
            timeout: super::DEFAULT_TIMEOUT,
        }
    }

    /// Set the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Turns a hostname into network addresses.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Resolve `host`, returning an empty list when it has no addresses.
    async fn resolve(&self, host: &str) -> std::io::Result<Vec<IpAddr>>;
}

/// Determines the state of one port on an already resolved host.
///
/// # Example
///
/// ```ignore
/// use pscan::scanner::{Prober, PortState};
///
/// async fn is_open<P: Prober>(prober: &P, addrs: &[IpAddr], port: Port) -> bool {
///     prober.probe(addrs, port).await == PortState::Open
/// }
/// ```
#[async_trait]
pub trait Prober: Send + Sync {
    /// Probe `port` on any of `addrs`.
    async fn probe(&self, addrs: &[IpAddr], port: Port) -> PortState;

    /// Get the configured timeout.
    fn timeout(&self) -> Duration;
}
