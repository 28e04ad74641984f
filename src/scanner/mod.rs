//! Scanner module - resolves hosts and probes their ports.
//!
//! The engine walks the hosts list in order. Each host is resolved first; a
//! host that does not resolve is reported as not found and its ports are
//! skipped. Otherwise every requested port is probed, one at a time, in the
//! order given. Nothing runs concurrently.

pub mod resolve;
pub mod tcp;
pub mod traits;

use crate::hosts::HostsList;
use crate::types::Port;
use std::time::Duration;
use tracing::{debug, info};

pub use resolve::SystemResolver;
pub use tcp::TcpConnectProber;
pub use traits::{PortResult, PortState, Prober, Resolver, ScanConfig, ScanResult};

/// Default upper bound on a single connection attempt.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Scan engine over a resolver and a prober.
pub struct Scanner<R = SystemResolver, P = TcpConnectProber> {
    resolver: R,
    prober: P,
}

impl Scanner {
    /// Create a scanner using the platform resolver and TCP connect probes.
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            resolver: SystemResolver,
            prober: TcpConnectProber::new(config.timeout),
        }
    }
}

impl<R: Resolver, P: Prober> Scanner<R, P> {
    /// Create a scanner from explicit parts.
    pub fn with_parts(resolver: R, prober: P) -> Self {
        Self { resolver, prober }
    }

    /// Scan every host in `hosts` against `ports`.
    ///
    /// Returns one result per host, in list order. Ports within a result
    /// follow `ports` exactly, including repeats.
    pub async fn run(&self, hosts: &HostsList, ports: &[Port]) -> Vec<ScanResult> {
        info!(
            hosts = hosts.len(),
            ports = ports.len(),
            timeout_ms = self.prober.timeout().as_millis() as u64,
            "starting scan"
        );

        let mut results = Vec::with_capacity(hosts.len());
        for host in hosts.iter() {
            results.push(self.scan_host(host, ports).await);
        }
        results
    }

    /// Resolve one host and probe its ports.
    pub async fn scan_host(&self, host: &str, ports: &[Port]) -> ScanResult {
        let addrs = match self.resolver.resolve(host).await {
            Ok(addrs) if !addrs.is_empty() => addrs,
            Ok(_) => {
                debug!(host, "no addresses found");
                return ScanResult::not_found(host);
            }
            Err(e) => {
                debug!(host, error = %e, "resolution failed");
                return ScanResult::not_found(host);
            }
        };
        debug!(host, ?addrs, "resolved");

        let mut port_results = Vec::with_capacity(ports.len());
        for &port in ports {
            let state = self.prober.probe(&addrs, port).await;
            debug!(host, %port, %state, "probed");
            port_results.push(PortResult::new(port, state));
        }

        ScanResult::found(host, port_results)
    }
}

/// Scan `hosts` with the default configuration.
pub async fn run(hosts: &HostsList, ports: &[Port]) -> Vec<ScanResult> {
    Scanner::new(&ScanConfig::default()).run(hosts, ports).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::io;
    use std::net::{IpAddr, Ipv4Addr};
    use std::sync::Mutex;
    use tokio::net::TcpListener;

    /// Resolves names from a fixed table.
    struct StaticResolver(HashMap<&'static str, Vec<IpAddr>>);

    #[async_trait]
    impl Resolver for StaticResolver {
        async fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>> {
            self.0
                .get(host)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such host"))
        }
    }

    /// Reports even ports as open and records every call.
    #[derive(Default)]
    struct RecordingProber {
        calls: Mutex<Vec<u16>>,
    }

    #[async_trait]
    impl Prober for RecordingProber {
        async fn probe(&self, _addrs: &[IpAddr], port: Port) -> PortState {
            self.calls.lock().unwrap().push(port.as_u16());
            if port.as_u16() % 2 == 0 {
                PortState::Open
            } else {
                PortState::Closed
            }
        }

        fn timeout(&self) -> Duration {
            DEFAULT_TIMEOUT
        }
    }

    fn ports(values: &[u16]) -> Vec<Port> {
        values.iter().map(|&p| Port::new(p).unwrap()).collect()
    }

    fn hosts(names: &[&str]) -> HostsList {
        let mut list = HostsList::new();
        for name in names {
            list.add(*name).unwrap();
        }
        list
    }

    fn scanner() -> Scanner<StaticResolver, RecordingProber> {
        let local = IpAddr::V4(Ipv4Addr::LOCALHOST);
        let table = HashMap::from([("alpha", vec![local]), ("beta", vec![local]), ("empty", vec![])]);
        Scanner::with_parts(StaticResolver(table), RecordingProber::default())
    }

    #[tokio::test]
    async fn test_results_follow_host_and_port_order() {
        let scanner = scanner();
        let results = scanner
            .run(&hosts(&["beta", "missing", "alpha"]), &ports(&[443, 22, 443, 80]))
            .await;

        let names: Vec<&str> = results.iter().map(|r| r.host.as_str()).collect();
        assert_eq!(names, ["beta", "missing", "alpha"]);

        for result in [&results[0], &results[2]] {
            assert!(!result.not_found);
            let probed: Vec<u16> = result.ports.iter().map(|p| p.port.as_u16()).collect();
            assert_eq!(probed, [443, 22, 443, 80]);
            let states: Vec<PortState> = result.ports.iter().map(|p| p.state).collect();
            assert_eq!(
                states,
                [PortState::Closed, PortState::Open, PortState::Closed, PortState::Open]
            );
        }
    }

    #[tokio::test]
    async fn test_unresolved_host_skips_ports() {
        let scanner = scanner();
        let results = scanner
            .run(&hosts(&["missing", "empty"]), &ports(&[22, 80]))
            .await;

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.not_found && r.ports.is_empty()));
        assert!(scanner.prober.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_no_ports_requested() {
        let results = scanner().run(&hosts(&["alpha"]), &[]).await;
        assert_eq!(results, vec![ScanResult::found("alpha", Vec::new())]);
    }

    #[tokio::test]
    async fn test_empty_hosts_list() {
        let results = scanner().run(&HostsList::new(), &ports(&[22])).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_run_against_localhost() {
        let open = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let open_port = Port::new(open.local_addr().unwrap().port()).unwrap();

        let closed = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let closed_port = Port::new(closed.local_addr().unwrap().port()).unwrap();
        drop(closed);

        let results = run(
            &hosts(&["localhost", "unknownhost.invalid"]),
            &[open_port, closed_port],
        )
        .await;

        assert_eq!(
            results,
            vec![
                ScanResult::found(
                    "localhost",
                    vec![
                        PortResult::new(open_port, PortState::Open),
                        PortResult::new(closed_port, PortState::Closed),
                    ]
                ),
                ScanResult::not_found("unknownhost.invalid"),
            ]
        );
    }
}
