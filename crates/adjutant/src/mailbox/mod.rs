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

//! Email monitor.
//!
//! Polls the mail provider for new inbound messages, auto-replies, marks
//! them read and enqueues an `email_received` record per message. Already
//! processed message ids persist in a JSON state file so restarts do not
//! re-reply. The provider is reached only through the [`Mailbox`] trait.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::dal::DAL;
use crate::error::MailboxError;
use crate::models::NewNotification;
use crate::shutdown::ShutdownSignal;

/// One message as reported by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct MailMessage {
    pub message_id: String,
    pub from_address: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub folder: String,
}

/// Mail provider boundary.
#[async_trait]
pub trait Mailbox: Send + Sync {
    /// The most recent messages, inbound and outbound.
    async fn recent_messages(&self, limit: usize) -> Result<Vec<MailMessage>, MailboxError>;

    /// Sends a reply. The caller passes the full subject line (including any
    /// `Re:` prefix).
    async fn send_reply(&self, to: &str, subject: &str, body: &str) -> Result<(), MailboxError>;

    /// Marks a message read.
    async fn mark_read(&self, message_id: &str) -> Result<(), MailboxError>;
}

#[derive(Debug, Deserialize)]
struct MessageListResponse {
    #[serde(default)]
    data: Vec<MailMessage>,
}

/// REST client for the mail provider (bearer-token API).
pub struct RestMailbox {
    http: reqwest::Client,
    api_base: String,
    inbox_id: String,
    api_key: String,
}

impl RestMailbox {
    pub fn new(
        api_base: impl Into<String>,
        inbox_id: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, MailboxError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(MailboxError::MissingCredentials);
        }
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_base: api_base.into(),
            inbox_id: inbox_id.into(),
            api_key,
        })
    }

    fn url(&self, suffix: &str) -> String {
        format!(
            "{}/inboxes/{}/messages{}",
            self.api_base, self.inbox_id, suffix
        )
    }

    fn check(status: reqwest::StatusCode) -> Result<(), MailboxError> {
        if status.is_success() {
            Ok(())
        } else {
            Err(MailboxError::Api {
                status: status.as_u16(),
            })
        }
    }
}

#[async_trait]
impl Mailbox for RestMailbox {
    async fn recent_messages(&self, limit: usize) -> Result<Vec<MailMessage>, MailboxError> {
        let response = self
            .http
            .get(self.url(&format!("?limit={}", limit)))
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        Self::check(response.status())?;

        let listing: MessageListResponse = response.json().await?;
        Ok(listing.data)
    }

    async fn send_reply(&self, to: &str, subject: &str, body: &str) -> Result<(), MailboxError> {
        let response = self
            .http
            .post(self.url("/send"))
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({
                "to": to,
                "subject": subject,
                "text": body,
            }))
            .send()
            .await?;
        Self::check(response.status())
    }

    async fn mark_read(&self, message_id: &str) -> Result<(), MailboxError> {
        let response = self
            .http
            .post(self.url(&format!("/{}/read", message_id)))
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        Self::check(response.status())
    }
}

/// Processed-message-id state, persisted as a JSON array.
#[derive(Debug)]
struct ProcessedStore {
    path: PathBuf,
    ids: HashSet<String>,
}

impl ProcessedStore {
    fn load(path: PathBuf) -> Self {
        let ids = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(ids) => ids.into_iter().collect(),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Corrupt email state; starting empty");
                    HashSet::new()
                }
            },
            Err(_) => HashSet::new(),
        };
        Self { path, ids }
    }

    fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    fn insert(&mut self, id: String) {
        self.ids.insert(id);
    }

    fn save(&self) {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    warn!(path = %self.path.display(), error = %e, "Failed to create email state dir");
                    return;
                }
            }
        }
        let mut ids: Vec<&String> = self.ids.iter().collect();
        ids.sort();
        match serde_json::to_string(&ids) {
            Ok(encoded) => {
                if let Err(e) = std::fs::write(&self.path, encoded) {
                    warn!(path = %self.path.display(), error = %e, "Failed to persist email state");
                }
            }
            Err(e) => warn!(error = %e, "Failed to encode email state"),
        }
    }
}

const AUTO_REPLY_TEMPLATE: &str = "Hey!\n\n\
Thanks for your email!\n\n\
I received your message about: \"{subject}\"\n\n\
I'll get back to you soon. For urgent matters, reach out on the usual channel.\n\n\
---\n\
This is an automated response. Your message has been logged.\n";

/// Polls the mailbox and feeds `email_received` records into the queue.
pub struct EmailMonitor {
    dal: DAL,
    mailbox: Arc<dyn Mailbox>,
    state: ProcessedStore,
    own_address: String,
    fetch_limit: usize,
    poll_interval: Duration,
}

impl EmailMonitor {
    pub fn new(
        dal: DAL,
        mailbox: Arc<dyn Mailbox>,
        state_path: impl Into<PathBuf>,
        own_address: impl Into<String>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            dal,
            mailbox,
            state: ProcessedStore::load(state_path.into()),
            own_address: own_address.into(),
            fetch_limit: 10,
            poll_interval,
        }
    }

    /// Runs one poll pass; returns how many new messages were processed.
    pub async fn check_once(&mut self) -> usize {
        let messages = match self.mailbox.recent_messages(self.fetch_limit).await {
            Ok(messages) => messages,
            Err(e) => {
                warn!(error = %e, "Mail provider unavailable; skipping cycle");
                return 0;
            }
        };

        let mut processed = 0;
        for message in messages {
            if self.state.contains(&message.message_id) {
                continue;
            }
            // Our own sent mail only needs recording, not a reply.
            if message.folder == "sent" {
                self.state.insert(message.message_id.clone());
                continue;
            }

            self.process(&message).await;
            self.state.insert(message.message_id.clone());
            processed += 1;
        }

        self.state.save();
        if processed > 0 {
            info!(processed, "Processed new emails");
        }
        processed
    }

    async fn process(&self, message: &MailMessage) {
        debug!(from = %message.from_address, subject = %message.subject, "New email");

        if !message.from_address.contains(&self.own_address) {
            let body = AUTO_REPLY_TEMPLATE.replace("{subject}", &message.subject);
            let subject = format!("Re: {}", message.subject);
            if let Err(e) = self
                .mailbox
                .send_reply(&message.from_address, &subject, &body)
                .await
            {
                warn!(error = %e, "Auto-reply failed");
            }
        }

        if let Err(e) = self.mailbox.mark_read(&message.message_id).await {
            warn!(error = %e, "Failed to mark email read");
        }

        let record = NewNotification::email_received(
            &message.message_id,
            &message.from_address,
            &message.subject,
        );
        if let Err(e) = self.dal.notification_queue().enqueue(record).await {
            warn!(error = %e, "Failed to enqueue email notification");
        }
    }

    /// Runs the poll loop until shutdown is triggered.
    pub async fn run(mut self, shutdown: ShutdownSignal) {
        info!(interval = ?self.poll_interval, "Email monitor started");
        loop {
            self.check_once().await;

            tokio::select! {
                _ = tokio::time::sleep(self.poll_interval) => {}
                _ = shutdown.notified() => {}
            }
            if shutdown.is_triggered() {
                info!("Email monitor stopped");
                return;
            }
        }
    }
}
