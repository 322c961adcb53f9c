//! Upstream DNS server handle.
//!
//! # Responsibilities
//! - Represent a single upstream server in a forwarding group
//! - Parse upstream specs from configuration
//!
//! Supported spec formats:
//! - `8.8.8.8` - plain DNS to 8.8.8.8:53
//! - `8.8.8.8:5353` - plain DNS to 8.8.8.8:5353
//! - `[2001:4860:4860::8888]:53` - plain DNS over IPv6
//! - `dns://1.1.1.1` - plain DNS, explicit scheme
//! - `tls://9.9.9.9` - DNS over TLS to 9.9.9.9:853

use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

/// Errors from parsing an upstream spec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    #[error("invalid upstream address '{0}'")]
    InvalidAddress(String),

    #[error("unsupported upstream scheme '{0}://', expected dns:// or tls://")]
    UnsupportedScheme(String),
}

/// Wire transport used to reach an upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Transport {
    /// Plain DNS over UDP, falling back to TCP.
    #[default]
    Dns,
    /// DNS over TLS.
    Tls,
}

impl Transport {
    pub const fn default_port(self) -> u16 {
        match self {
            Transport::Dns => 53,
            Transport::Tls => 853,
        }
    }

    pub const fn scheme(self) -> &'static str {
        match self {
            Transport::Dns => "dns",
            Transport::Tls => "tls",
        }
    }
}

/// A single upstream server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Upstream {
    /// The address of the upstream.
    pub addr: SocketAddr,
    /// How queries reach it.
    pub transport: Transport,
}

impl Upstream {
    pub fn new(addr: SocketAddr, transport: Transport) -> Self {
        Self { addr, transport }
    }
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.transport.scheme(), self.addr)
    }
}

impl FromStr for Upstream {
    type Err = UpstreamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_upstream(s)
    }
}

/// Parse an upstream spec string.
pub fn parse_upstream(s: &str) -> Result<Upstream, UpstreamError> {
    let s = s.trim();

    let (transport, rest) = match s.split_once("://") {
        Some(("dns", rest)) => (Transport::Dns, rest),
        Some(("tls", rest)) => (Transport::Tls, rest),
        Some((scheme, _)) => return Err(UpstreamError::UnsupportedScheme(scheme.to_string())),
        None => (Transport::Dns, s),
    };

    parse_socket_addr(rest, transport.default_port())
        .map(|addr| Upstream::new(addr, transport))
        .ok_or_else(|| UpstreamError::InvalidAddress(s.to_string()))
}

fn parse_socket_addr(s: &str, default_port: u16) -> Option<SocketAddr> {
    if let Ok(addr) = s.parse::<SocketAddr>() {
        return Some(addr);
    }

    // Bare IP, optionally bracketed IPv6
    let host = s
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(s);
    host.parse::<IpAddr>()
        .ok()
        .map(|ip| SocketAddr::new(ip, default_port))
}
