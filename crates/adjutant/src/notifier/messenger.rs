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

//! Outbound messaging boundary.
//!
//! The drain loop only knows the [`Messenger`] trait; the Discord REST
//! implementation below makes a direct in-process call with a bounded
//! timeout. Retries are the caller's responsibility (a failed send leaves
//! the record pending).

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::NotifyError;

/// Sends one text message to a chat channel, optionally mentioning users.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send(
        &self,
        channel_id: &str,
        text: &str,
        mentions: &[String],
    ) -> Result<(), NotifyError>;
}

/// Discord REST API base.
const DISCORD_API_BASE: &str = "https://discord.com/api/v10";

/// Messenger posting to the Discord channel-messages endpoint with a bot
/// token.
pub struct DiscordMessenger {
    http: reqwest::Client,
    token: String,
    api_base: String,
}

impl DiscordMessenger {
    /// Creates a messenger with the given bot token and request timeout.
    pub fn new(token: impl Into<String>, timeout: Duration) -> Result<Self, NotifyError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            token: token.into(),
            api_base: DISCORD_API_BASE.to_string(),
        })
    }

    /// Overrides the API base URL (used by tests against a local server).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    fn render_content(text: &str, mentions: &[String]) -> String {
        if mentions.is_empty() {
            return text.to_string();
        }
        let prefix = mentions
            .iter()
            .map(|id| format!("<@{}>", id))
            .collect::<Vec<_>>()
            .join(" ");
        format!("{} {}", prefix, text)
    }
}

#[async_trait]
impl Messenger for DiscordMessenger {
    async fn send(
        &self,
        channel_id: &str,
        text: &str,
        mentions: &[String],
    ) -> Result<(), NotifyError> {
        let url = format!("{}/channels/{}/messages", self.api_base, channel_id);
        let body = serde_json::json!({
            "content": Self::render_content(text, mentions),
        });

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bot {}", self.token))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Delivery {
                status: status.as_u16(),
            });
        }

        debug!(channel_id, "Message delivered");
        Ok(())
    }
}
