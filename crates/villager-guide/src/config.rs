//! Server and export configuration.

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

/// Where the site server listens and where static exports land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub host: IpAddr,
    pub port: u16,
    pub out_dir: PathBuf,
}

impl SiteConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            out_dir: PathBuf::from("dist"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_addr() {
        let config = SiteConfig::default();
        assert_eq!(config.addr(), "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.out_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_custom_addr() {
        let config = SiteConfig {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            ..SiteConfig::default()
        };
        assert_eq!(config.addr().to_string(), "0.0.0.0:8080");
    }
}
