use std::env;
use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Reads `HOST` and `PORT`. An unparsable port falls back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = lookup("PORT")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self { host, port }
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        parse_addr(&self.host, self.port)
    }

    /// The port right above the configured one, tried once when binding fails.
    pub fn fallback_addr(&self) -> anyhow::Result<SocketAddr> {
        let port = self
            .port
            .checked_add(1)
            .context("no fallback port above 65535")?;
        parse_addr(&self.host, port)
    }
}

/// `RUST_LOG` directives when set and valid, `info` otherwise.
pub fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| EnvFilter::try_new(v).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn parse_addr(host: &str, port: u16) -> anyhow::Result<SocketAddr> {
    format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("cannot parse listen address {}:{}", host, port))
}
