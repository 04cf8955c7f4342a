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

//! Notification Queue DAL
//!
//! The queue is an ordinary store table, so enqueue from any process is a
//! single atomic insert. The UNIQUE dedup key drops a duplicate enqueue of
//! the same logical event (the CRUD API and the change detector can both
//! observe one creation).

use diesel::prelude::*;

use super::DAL;
use crate::database::schema::notifications;
use crate::error::StoreError;
use crate::models::{NewNotification, Notification};

/// Data access layer for the notification queue.
#[derive(Clone)]
pub struct NotificationQueueDAL<'a> {
    dal: &'a DAL,
}

impl<'a> NotificationQueueDAL<'a> {
    pub fn new(dal: &'a DAL) -> Self {
        Self { dal }
    }

    /// Appends a record to the queue.
    ///
    /// Returns `true` if the record was inserted and `false` when a record
    /// with the same dedup key already exists.
    pub async fn enqueue(&self, record: NewNotification) -> Result<bool, StoreError> {
        let conn = self
            .dal
            .database
            .get_connection()
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))?;

        let inserted: usize = conn
            .interact(move |conn| {
                diesel::insert_into(notifications::table)
                    .values(&record)
                    .on_conflict(notifications::dedup_key)
                    .do_nothing()
                    .execute(conn)
            })
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))??;

        Ok(inserted > 0)
    }

    /// All unprocessed records in insertion order.
    pub async fn dequeue_unprocessed(&self) -> Result<Vec<Notification>, StoreError> {
        let conn = self
            .dal
            .database
            .get_connection()
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))?;

        let rows: Vec<Notification> = conn
            .interact(|conn| {
                notifications::table
                    .filter(notifications::processed.eq(false))
                    .order(notifications::id.asc())
                    .load(conn)
            })
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))??;

        Ok(rows)
    }

    /// Marks a record processed. Idempotent: a missing or already-processed
    /// key is a no-op returning `false`.
    pub async fn mark_processed(&self, dedup_key: &str) -> Result<bool, StoreError> {
        let conn = self
            .dal
            .database
            .get_connection()
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))?;

        let key = dedup_key.to_string();
        let now = chrono::Utc::now().naive_utc();
        let updated: usize = conn
            .interact(move |conn| {
                diesel::update(
                    notifications::table
                        .filter(notifications::dedup_key.eq(key))
                        .filter(notifications::processed.eq(false)),
                )
                .set((
                    notifications::processed.eq(true),
                    notifications::processed_at.eq(Some(now)),
                ))
                .execute(conn)
            })
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))??;

        Ok(updated > 0)
    }

    /// The most recent records regardless of processed state, newest first.
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<Notification>, StoreError> {
        let conn = self
            .dal
            .database
            .get_connection()
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))?;

        let rows: Vec<Notification> = conn
            .interact(move |conn| {
                notifications::table
                    .order(notifications::id.desc())
                    .limit(limit)
                    .load(conn)
            })
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))??;

        Ok(rows)
    }

    /// Counts unprocessed records (for monitoring).
    pub async fn count_pending(&self) -> Result<i64, StoreError> {
        let conn = self
            .dal
            .database
            .get_connection()
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))?;

        let count: i64 = conn
            .interact(|conn| {
                notifications::table
                    .filter(notifications::processed.eq(false))
                    .count()
                    .get_result(conn)
            })
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))??;

        Ok(count)
    }
}
