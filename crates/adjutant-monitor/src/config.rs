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

//! Monitor configuration file handling.
//!
//! TOML, discovered from an explicit path, `ADJUTANT_MONITOR_CONFIG`, or a
//! fixed search list. Secrets (chat token, mail API key) can live in the
//! file or arrive via environment variables, which take precedence.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use adjutant::config::MonitorConfig;

/// Environment variable overriding the chat bot token.
pub const ENV_CHAT_TOKEN: &str = "ADJUTANT_CHAT_TOKEN";
/// Environment variable overriding the mail API key.
pub const ENV_MAIL_API_KEY: &str = "ADJUTANT_MAIL_API_KEY";

const SEARCH_PATHS: &[&str] = &["./adjutant.toml", "/etc/adjutant/config.toml"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No configuration file found (searched ./adjutant.toml, /etc/adjutant/config.toml)")]
    NotFound,

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Missing chat token: set `chat_token` in the config file or {ENV_CHAT_TOKEN}")]
    MissingChatToken,
}

/// Mail provider section; absent means the email monitor stays off.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MailSection {
    /// Provider API base URL.
    pub api_base: String,
    /// Inbox identifier.
    pub inbox_id: String,
    /// Bearer key; usually supplied via environment instead.
    #[serde(default)]
    pub api_key: String,
    /// The monitored address, used to skip self-addressed mail.
    pub own_address: String,
    /// Poll interval in seconds.
    #[serde(default = "default_interval_secs")]
    pub poll_interval_secs: u64,
}

/// The monitor configuration file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MonitorFileConfig {
    /// SQLite database path or URL.
    pub database_url: String,
    /// Directory holding cursor and email state files.
    pub state_dir: PathBuf,
    /// Change-detector poll interval in seconds.
    pub poll_interval_secs: u64,
    /// Drain-loop poll interval in seconds.
    pub drain_interval_secs: u64,
    /// Outbound request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Chat channel receiving notifications.
    pub channel_id: String,
    /// User ids mentioned on each notification.
    pub mention_user_ids: Vec<String>,
    /// Chat bot token; usually supplied via environment instead.
    pub chat_token: String,
    /// Optional mail provider section.
    pub mail: Option<MailSection>,
}

fn default_interval_secs() -> u64 {
    30
}

impl Default for MonitorFileConfig {
    fn default() -> Self {
        Self {
            database_url: "data/dashboard.db".to_string(),
            state_dir: PathBuf::from("data"),
            poll_interval_secs: 30,
            drain_interval_secs: 30,
            request_timeout_secs: 10,
            channel_id: String::new(),
            mention_user_ids: Vec::new(),
            chat_token: String::new(),
            mail: None,
        }
    }
}

impl MonitorFileConfig {
    /// Loads configuration from the given file or the default search paths,
    /// then applies environment-variable secret overrides.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => Self::find_config_file().ok_or(ConfigError::NotFound)?,
        };

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let mut config: Self = toml::from_str(&content)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// First existing file from the search list.
    fn find_config_file() -> Option<PathBuf> {
        SEARCH_PATHS
            .iter()
            .map(PathBuf::from)
            .find(|path| path.is_file())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(token) = std::env::var(ENV_CHAT_TOKEN) {
            if !token.is_empty() {
                self.chat_token = token;
            }
        }
        if let Some(mail) = self.mail.as_mut() {
            if let Ok(key) = std::env::var(ENV_MAIL_API_KEY) {
                if !key.is_empty() {
                    mail.api_key = key;
                }
            }
        }
    }

    /// The chat token, required for any delivery.
    pub fn chat_token(&self) -> Result<&str, ConfigError> {
        if self.chat_token.is_empty() {
            return Err(ConfigError::MissingChatToken);
        }
        Ok(&self.chat_token)
    }

    /// The runtime config handed to the monitor loops.
    pub fn monitor_config(&self) -> MonitorConfig {
        MonitorConfig::builder()
            .poll_interval(Duration::from_secs(self.poll_interval_secs))
            .drain_interval(Duration::from_secs(self.drain_interval_secs))
            .request_timeout(Duration::from_secs(self.request_timeout_secs))
            .channel_id(self.channel_id.clone())
            .mention_user_ids(self.mention_user_ids.clone())
            .build()
    }

    /// Path of the change-detector cursor state file.
    pub fn cursor_state_path(&self) -> PathBuf {
        self.state_dir.join("monitor-cursors.json")
    }

    /// Path of the email processed-ids state file.
    pub fn email_state_path(&self) -> PathBuf {
        self.state_dir.join("email-state.json")
    }
}
