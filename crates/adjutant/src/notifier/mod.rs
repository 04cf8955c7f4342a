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

//! Drain loop.
//!
//! Consumes the notification queue: renders each unprocessed record into a
//! chat message, delivers it through the [`Messenger`], and marks the record
//! processed immediately after a successful send - before moving to the next
//! record - so a crash mid-batch reprocesses at most the in-flight record.
//!
//! A failed delivery leaves the record pending; it is retried on every
//! subsequent pass (at-least-once, no retry cap).

pub mod message;
pub mod messenger;

pub use messenger::{DiscordMessenger, Messenger};

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::MonitorConfig;
use crate::dal::DAL;
use crate::shutdown::ShutdownSignal;

/// Turns queued records into outbound notifications.
pub struct DrainLoop {
    dal: DAL,
    messenger: Arc<dyn Messenger>,
    channel_id: String,
    mentions: Vec<String>,
    drain_interval: Duration,
}

impl DrainLoop {
    pub fn new(dal: DAL, messenger: Arc<dyn Messenger>, config: &MonitorConfig) -> Self {
        Self {
            dal,
            messenger,
            channel_id: config.channel_id().to_string(),
            mentions: config.mention_user_ids().to_vec(),
            drain_interval: config.drain_interval(),
        }
    }

    /// Runs one drain pass; returns how many records were delivered.
    pub async fn drain_once(&self) -> usize {
        let pending = match self.dal.notification_queue().dequeue_unprocessed().await {
            Ok(pending) => pending,
            Err(e) => {
                warn!(error = %e, "Queue unavailable; skipping drain cycle");
                return 0;
            }
        };

        if pending.is_empty() {
            return 0;
        }
        debug!(count = pending.len(), "Draining pending notifications");

        let mut delivered = 0;
        for record in pending {
            let Some(text) = message::render(&record) else {
                // A record this process cannot render will never become
                // renderable; discard it instead of wedging the queue.
                warn!(dedup_key = %record.dedup_key, kind = %record.kind, "Discarding unrenderable record");
                self.finish(&record.dedup_key).await;
                continue;
            };

            match self
                .messenger
                .send(&self.channel_id, &text, &self.mentions)
                .await
            {
                Ok(()) => {
                    self.finish(&record.dedup_key).await;
                    delivered += 1;
                }
                Err(e) => {
                    warn!(dedup_key = %record.dedup_key, error = %e, "Delivery failed; record stays pending");
                }
            }
        }

        if delivered > 0 {
            info!(delivered, "Notifications delivered");
        }
        delivered
    }

    /// Marks a record processed, logging (not propagating) store failures so
    /// one bad mark does not abort the rest of the pass.
    async fn finish(&self, dedup_key: &str) {
        if let Err(e) = self.dal.notification_queue().mark_processed(dedup_key).await {
            warn!(dedup_key, error = %e, "Failed to mark record processed");
        }
    }

    /// Runs the drain loop until shutdown is triggered.
    pub async fn run(self, shutdown: ShutdownSignal) {
        info!(interval = ?self.drain_interval, "Drain loop started");
        loop {
            self.drain_once().await;

            tokio::select! {
                _ = tokio::time::sleep(self.drain_interval) => {}
                _ = shutdown.notified() => {}
            }
            if shutdown.is_triggered() {
                info!("Drain loop stopped");
                return;
            }
        }
    }
}
