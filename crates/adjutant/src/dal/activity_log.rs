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

//! Activity Log DAL

use diesel::prelude::*;

use super::DAL;
use crate::database::schema::activity_log;
use crate::error::StoreError;
use crate::models::{ActivityEntry, NewActivityEntry};

/// Data access layer for the dashboard activity feed.
#[derive(Clone)]
pub struct ActivityLogDAL<'a> {
    dal: &'a DAL,
}

impl<'a> ActivityLogDAL<'a> {
    pub fn new(dal: &'a DAL) -> Self {
        Self { dal }
    }

    /// Appends an entry to the feed.
    pub async fn append(&self, entry: NewActivityEntry) -> Result<(), StoreError> {
        let conn = self
            .dal
            .database
            .get_connection()
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))?;

        conn.interact(move |conn| {
            diesel::insert_into(activity_log::table)
                .values(&entry)
                .execute(conn)
        })
        .await
        .map_err(|e| StoreError::ConnectionPool(e.to_string()))??;

        Ok(())
    }

    /// The most recent entries, newest first.
    pub async fn latest(&self, limit: i64) -> Result<Vec<ActivityEntry>, StoreError> {
        let conn = self
            .dal
            .database
            .get_connection()
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))?;

        let rows: Vec<ActivityEntry> = conn
            .interact(move |conn| {
                activity_log::table
                    .order(activity_log::id.desc())
                    .limit(limit)
                    .load(conn)
            })
            .await
            .map_err(|e| StoreError::ConnectionPool(e.to_string()))??;

        Ok(rows)
    }
}
