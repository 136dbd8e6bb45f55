use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpStream;
use tracing::debug;

/// Default host probed for connectivity.
pub const DEFAULT_PROBE_ADDR: &str = "source.unsplash.com:443";

/// Default time allowed for a probe connection.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(3);

#[async_trait]
/// Reports whether network-backed features can be used.
pub trait Connectivity: Send + Sync {
    /// True if the device appears to be online.
    async fn is_online(&self) -> bool;
}

/// Connectivity check that opens a TCP connection to a known host.
#[derive(Debug, Clone)]
pub struct TcpProbe {
    addr: String,
    timeout: Duration,
}

impl TcpProbe {
    /// Probe `addr` (`host:port`), giving up after `timeout`.
    pub fn new(addr: impl Into<String>, timeout: Duration) -> Self {
        Self {
            addr: addr.into(),
            timeout,
        }
    }
}

impl Default for TcpProbe {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_ADDR, DEFAULT_PROBE_TIMEOUT)
    }
}

#[async_trait]
impl Connectivity for TcpProbe {
    async fn is_online(&self) -> bool {
        match tokio::time::timeout(self.timeout, TcpStream::connect(&self.addr)).await {
            Ok(Ok(_)) => true,
            Ok(Err(e)) => {
                debug!(addr = %self.addr, "Connectivity probe failed: {e}");
                false
            }
            Err(_) => {
                debug!(addr = %self.addr, "Connectivity probe timed out");
                false
            }
        }
    }
}

/// Connectivity with a fixed answer, for offline use and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedConnectivity(pub bool);

#[async_trait]
impl Connectivity for FixedConnectivity {
    async fn is_online(&self) -> bool {
        self.0
    }
}
