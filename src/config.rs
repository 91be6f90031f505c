//! Process configuration sourced from the environment.

use std::env;
use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Environment variable overriding the listen address.
pub const BIND_ADDR_VAR: &str = "CHART_EMBED_ADDR";

/// Loopback default, matching a local development run.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> ChartResult<Self> {
        Self::from_override(env::var(BIND_ADDR_VAR).ok().as_deref())
    }

    /// Builds the configuration from an explicit override, falling back to
    /// [`DEFAULT_BIND_ADDR`] when none is given.
    pub fn from_override(addr: Option<&str>) -> ChartResult<Self> {
        let raw = addr.unwrap_or(DEFAULT_BIND_ADDR);
        let bind_addr = raw
            .parse()
            .map_err(|_| ChartError::Config(format!("unparseable listen address: {raw:?}")))?;

        Ok(Self { bind_addr })
    }
}
