//! Server configuration read from the environment

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use board_core::board::Seed;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub seed: Seed,
    pub cors_any: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), DEFAULT_PORT),
            seed: Seed::default(),
            cors_any: true,
        }
    }
}

impl ServerConfig {
    /// Read `BOARD_HOST`, `BOARD_PORT`, `BOARD_SEED` and `BOARD_CORS_ANY`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match lookup("BOARD_HOST") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| invalid("BOARD_HOST", raw))?,
            None => defaults.bind_addr.ip(),
        };
        let port = match lookup("BOARD_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| invalid("BOARD_PORT", raw))?,
            None => defaults.bind_addr.port(),
        };
        let seed = match lookup("BOARD_SEED") {
            Some(raw) => raw.parse::<Seed>().map_err(|_| invalid("BOARD_SEED", raw))?,
            None => defaults.seed,
        };
        let cors_any = flag(lookup("BOARD_CORS_ANY"), defaults.cors_any);

        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
            seed,
            cors_any,
        })
    }
}

fn invalid(name: &'static str, value: String) -> ConfigError {
    ConfigError::InvalidValue { name, value }
}

fn flag(raw: Option<String>, default: bool) -> bool {
    match raw {
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        None => default,
    }
}
