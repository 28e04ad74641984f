//! Hostname resolution through the platform resolver.

use crate::scanner::traits::Resolver;
use async_trait::async_trait;
use std::io;
use std::net::IpAddr;
use tokio::net::lookup_host;

/// Resolves names with the operating system's resolver (`getaddrinfo`).
///
/// IP literals resolve to themselves without a lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

#[async_trait]
impl Resolver for SystemResolver {
    async fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        let mut ips: Vec<IpAddr> = Vec::new();
        for addr in lookup_host((host, 0u16)).await? {
            if !ips.contains(&addr.ip()) {
                ips.push(addr.ip());
            }
        }
        Ok(ips)
    }
}
