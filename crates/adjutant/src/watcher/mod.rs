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

//! Change detector.
//!
//! Diffs the watched store tables (`projects`, `tasks`, `ideas`) against
//! persisted high-water marks and enqueues one notification per newly
//! observed row. Store errors are logged and skip the cycle; state is only
//! advanced on a successful diff pass.
//!
//! Ordering within a pass: cursors are persisted before the records are
//! enqueued, so a crash between the two drops that pass's records rather
//! than duplicating them on restart (the CRUD API's own enqueue covers the
//! gap, and the dedup key collapses the overlap in the normal case).

pub mod cursor;

pub use cursor::{CursorStore, Cursors};

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::dal::DAL;
use crate::error::StoreError;
use crate::models::NewNotification;
use crate::shutdown::ShutdownSignal;

/// Polls the store for new rows and feeds the notification queue.
pub struct Watcher {
    dal: DAL,
    store: CursorStore,
    cursors: Cursors,
    poll_interval: Duration,
}

impl Watcher {
    /// Creates a watcher, loading persisted cursors from the store.
    pub fn new(dal: DAL, store: CursorStore, poll_interval: Duration) -> Self {
        let cursors = store.load();
        debug!(?cursors, "Loaded change-detector cursors");
        Self {
            dal,
            store,
            cursors,
            poll_interval,
        }
    }

    /// The current in-memory high-water marks.
    pub fn cursors(&self) -> Cursors {
        self.cursors
    }

    /// Runs one diff pass.
    ///
    /// Returns the records built for newly observed rows; they have already
    /// been enqueued. A store error leaves the cursors untouched and returns
    /// an empty list (the pass is retried on the next interval).
    pub async fn poll(&mut self) -> Vec<NewNotification> {
        let (records, advanced) = match self.diff().await {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "Store unavailable; skipping change-detection cycle");
                return Vec::new();
            }
        };

        if records.is_empty() {
            return records;
        }

        self.cursors = advanced;
        if let Err(e) = self.store.save(&self.cursors) {
            // Losing the state file means at worst re-emitting these rows
            // next pass; the queue's dedup key absorbs that.
            warn!(error = %e, "Failed to persist change-detector cursors");
        }

        for record in &records {
            match self.dal.notification_queue().enqueue(record.clone()).await {
                Ok(true) => debug!(dedup_key = %record.dedup_key, "Enqueued notification"),
                Ok(false) => {
                    debug!(dedup_key = %record.dedup_key, "Notification already queued; skipped")
                }
                Err(e) => {
                    warn!(dedup_key = %record.dedup_key, error = %e, "Failed to enqueue notification")
                }
            }
        }

        info!(count = records.len(), "Detected new dashboard rows");
        records
    }

    /// Collects records for rows above the current cursors.
    async fn diff(&self) -> Result<(Vec<NewNotification>, Cursors), StoreError> {
        let mut advanced = self.cursors;
        let mut records = Vec::new();

        for project in self
            .dal
            .projects()
            .created_after(self.cursors.last_project_id)
            .await?
        {
            advanced.last_project_id = advanced.last_project_id.max(project.id);
            records.push(NewNotification::project_created(&project));
        }

        for task in self
            .dal
            .tasks()
            .created_after(self.cursors.last_task_id)
            .await?
        {
            advanced.last_task_id = advanced.last_task_id.max(task.id);
            records.push(NewNotification::task_created(&task));
        }

        for idea in self
            .dal
            .ideas()
            .created_after(self.cursors.last_idea_id)
            .await?
        {
            advanced.last_idea_id = advanced.last_idea_id.max(idea.id);
            records.push(NewNotification::idea_created(&idea));
        }

        Ok((records, advanced))
    }

    /// Runs the poll loop until shutdown is triggered.
    ///
    /// Performs an initial pass immediately, then once per interval.
    pub async fn run(mut self, shutdown: ShutdownSignal) {
        info!(interval = ?self.poll_interval, "Change detector started");
        loop {
            self.poll().await;

            tokio::select! {
                _ = tokio::time::sleep(self.poll_interval) => {}
                _ = shutdown.notified() => {}
            }
            if shutdown.is_triggered() {
                info!("Change detector stopped");
                return;
            }
        }
    }
}
