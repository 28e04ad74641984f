//! TCP connect prober.
//!
//! Performs a full TCP handshake using the operating system's socket API and
//! closes the connection straight away. Does not require elevated privileges.

use crate::scanner::traits::{PortState, Prober};
use crate::types::Port;
use async_trait::async_trait;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

/// TCP connect prober.
///
/// A port is open when `connect()` to one of the host's addresses succeeds
/// before the timeout elapses. Every failure is reported as closed.
pub struct TcpConnectProber {
    timeout: Duration,
}

impl TcpConnectProber {
    /// Create a new prober with the given per-port timeout.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl Prober for TcpConnectProber {
    async fn probe(&self, addrs: &[IpAddr], port: Port) -> PortState {
        let targets: Vec<SocketAddr> = addrs
            .iter()
            .map(|ip| SocketAddr::new(*ip, port.as_u16()))
            .collect();

        // The timeout covers the whole attempt, across every address.
        match timeout(self.timeout, TcpStream::connect(targets.as_slice())).await {
            Ok(Ok(stream)) => {
                drop(stream);
                PortState::Open
            }
            Ok(Err(e)) => {
                debug!(%port, error = %e, "connection failed");
                PortState::Closed
            }
            Err(_) => {
                debug!(%port, timeout_ms = self.timeout.as_millis() as u64, "connection timed out");
                PortState::Closed
            }
        }
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}
