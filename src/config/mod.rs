//! Server configuration sourced from the host environment.

use std::{env, path::PathBuf};

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_DATA_DIR: &str = "data";

/// Runtime settings for the portal server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listener address, `host:port`.
    pub bind_addr: String,
    /// Directory holding the backing documents, resolved relative to the
    /// process working directory when not absolute.
    pub data_dir: PathBuf,
}

impl ServerConfig {
    /// Reads `PORTAL_BIND` and `PORTAL_DATA_DIR`, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Self {
        Self {
            bind_addr: env_str("PORTAL_BIND", DEFAULT_BIND),
            data_dir: PathBuf::from(env_str("PORTAL_DATA_DIR", DEFAULT_DATA_DIR)),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

fn env_str(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}
