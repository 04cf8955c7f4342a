/*
 *  Copyright 2025-2026 Adjutant Contributors
 *
 *  Licensed under the Apache License, Version 2.0 (the "License");
 *  you may not use this file except in compliance with the License.
 *  You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 *  Unless required by applicable law or agreed to in writing, software
 *  distributed under the License is distributed on an "AS IS" BASIS,
 *  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *  See the License for the specific language governing permissions and
 *  limitations under the License.
 */

//! Server configuration, loaded from a TOML file with every field optional.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration for the API server process.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Listen address.
    pub bind_addr: String,
    /// SQLite database path or URL.
    pub database_url: String,
    /// Directory receiving uploads.
    pub upload_dir: PathBuf,
    /// Chat channel recorded on enqueued records' behalf (informational;
    /// delivery routing lives in the monitor config).
    pub channel_id: String,
    /// Maximum accepted request body, in bytes.
    pub max_upload_bytes: usize,
    /// How often the system-stats snapshot refreshes, in seconds.
    pub stats_refresh_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8095".to_string(),
            database_url: "data/dashboard.db".to_string(),
            upload_dir: PathBuf::from("data/uploads"),
            channel_id: String::new(),
            max_upload_bytes: 25 * 1024 * 1024,
            stats_refresh_secs: 5,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from the given file, or defaults when no file is
    /// given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }
}
