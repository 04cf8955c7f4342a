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

//! Configuration for the monitor runtime.
//!
//! All knobs are passed explicitly at construction; there is no ambient
//! process-wide state.
//!
//! # Construction
//!
//! ```rust,ignore
//! let config = MonitorConfig::builder()
//!     .channel_id("1466517317403021362")
//!     .poll_interval(Duration::from_secs(30))
//!     .build();
//! ```

use std::time::Duration;

/// Configuration for the monitor loops (change detector + drain loop).
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct MonitorConfig {
    poll_interval: Duration,
    drain_interval: Duration,
    request_timeout: Duration,
    channel_id: String,
    mention_user_ids: Vec<String>,
}

impl MonitorConfig {
    /// Creates a new configuration builder with default values.
    pub fn builder() -> MonitorConfigBuilder {
        MonitorConfigBuilder::default()
    }

    /// How often the change detector diffs the store.
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// How often the drain loop checks the queue.
    pub fn drain_interval(&self) -> Duration {
        self.drain_interval
    }

    /// Timeout applied to each outbound messaging call.
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Chat channel receiving notifications.
    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    /// User ids mentioned on each notification.
    pub fn mention_user_ids(&self) -> &[String] {
        &self.mention_user_ids
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        MonitorConfigBuilder::default().build()
    }
}

/// Builder for [`MonitorConfig`].
#[derive(Debug, Clone)]
pub struct MonitorConfigBuilder {
    config: MonitorConfig,
}

impl Default for MonitorConfigBuilder {
    fn default() -> Self {
        Self {
            config: MonitorConfig {
                poll_interval: Duration::from_secs(30),
                drain_interval: Duration::from_secs(30),
                request_timeout: Duration::from_secs(10),
                channel_id: String::new(),
                mention_user_ids: Vec::new(),
            },
        }
    }
}

impl MonitorConfigBuilder {
    /// Sets the change-detector poll interval.
    pub fn poll_interval(mut self, value: Duration) -> Self {
        self.config.poll_interval = value;
        self
    }

    /// Sets the drain-loop poll interval.
    pub fn drain_interval(mut self, value: Duration) -> Self {
        self.config.drain_interval = value;
        self
    }

    /// Sets the outbound request timeout.
    pub fn request_timeout(mut self, value: Duration) -> Self {
        self.config.request_timeout = value;
        self
    }

    /// Sets the chat channel id.
    pub fn channel_id(mut self, value: impl Into<String>) -> Self {
        self.config.channel_id = value.into();
        self
    }

    /// Sets the user ids to mention.
    pub fn mention_user_ids(mut self, value: Vec<String>) -> Self {
        self.config.mention_user_ids = value;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> MonitorConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_monitor_config() {
        let config = MonitorConfig::default();
        assert_eq!(config.poll_interval(), Duration::from_secs(30));
        assert_eq!(config.drain_interval(), Duration::from_secs(30));
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert!(config.channel_id().is_empty());
        assert!(config.mention_user_ids().is_empty());
    }

    #[test]
    fn test_builder_overrides() {
        let config = MonitorConfig::builder()
            .poll_interval(Duration::from_secs(5))
            .drain_interval(Duration::from_secs(7))
            .request_timeout(Duration::from_secs(3))
            .channel_id("c-1")
            .mention_user_ids(vec!["u-1".to_string()])
            .build();

        assert_eq!(config.poll_interval(), Duration::from_secs(5));
        assert_eq!(config.drain_interval(), Duration::from_secs(7));
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
        assert_eq!(config.channel_id(), "c-1");
        assert_eq!(config.mention_user_ids(), ["u-1".to_string()]);
    }
}
