// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Server configuration.
//!
//! Settings come from an optional `opsboard.toml`:
//!
//! ```toml
//! bind = "0.0.0.0:3000"
//! data_dir = "/var/lib/opsboard"
//! log_level = "info"
//! ```
//!
//! Command-line flags override values from the file.

use std::fs;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "opsboard.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Address the HTTP server listens on.
    pub bind: SocketAddr,
    /// Directory holding the JSON data files.
    pub data_dir: PathBuf,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, 3000)),
            data_dir: PathBuf::from("data"),
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration.
    ///
    /// An explicit path must exist. Without one, `opsboard.toml` in the
    /// working directory is used if present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::from_file(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Applies command-line overrides.
    pub fn with_overrides(
        mut self,
        bind: Option<SocketAddr>,
        data_dir: Option<PathBuf>,
        verbose: bool,
    ) -> Self {
        if let Some(bind) = bind {
            self.bind = bind;
        }
        if let Some(data_dir) = data_dir {
            self.data_dir = data_dir;
        }
        if verbose {
            self.log_level = "debug".to_string();
        }
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
