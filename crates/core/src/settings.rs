// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dashboard settings backed by `config.json`.
//!
//! The document maps each dashboard node to a link target. Keys the
//! dashboard adds beyond `nodes` are preserved as-is.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use crate::error::Result;
use crate::jsonfile::JsonFile;

pub const CONFIG_FILE: &str = "config.json";

/// Nodes shown on the network map, seeded with empty URLs.
pub const DEFAULT_NODE_IDS: &[&str] = &[
    "laptop", "pc", "apps", "wifi", "switch", "firewall", "nas", "server", "vm", "vpn", "cloud",
    "m365", "auth", "secrets",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConfig {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub nodes: BTreeMap<String, NodeConfig>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub fn default_config() -> Result<AppConfig> {
    Ok(AppConfig {
        nodes: DEFAULT_NODE_IDS
            .iter()
            .map(|id| (id.to_string(), NodeConfig::default()))
            .collect(),
        extra: Map::new(),
    })
}

#[derive(Debug)]
pub struct ConfigStore {
    file: JsonFile<AppConfig>,
}

impl ConfigStore {
    pub fn open(data_dir: &Path) -> Self {
        ConfigStore {
            file: JsonFile::new(data_dir.join(CONFIG_FILE), default_config),
        }
    }

    pub fn read(&self) -> Result<AppConfig> {
        self.file.load()
    }

    /// Replaces the stored settings wholesale.
    pub fn write(&self, config: &AppConfig) -> Result<()> {
        self.file.replace(config)?;
        info!(nodes = config.nodes.len(), "settings saved");
        Ok(())
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
