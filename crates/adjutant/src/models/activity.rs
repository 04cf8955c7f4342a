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

//! Activity Log Model
//!
//! Human-readable dashboard feed entries ("Project X created", "Task
//! toggled"). Append-only; the API serves the most recent entries.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::database::schema::activity_log;

/// An activity log row.
#[derive(Debug, Clone, Queryable, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: i64,
    pub logged_at: NaiveDateTime,
    pub level: String,
    pub message: String,
}

/// Structure for appending activity entries.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = activity_log)]
pub struct NewActivityEntry {
    pub logged_at: NaiveDateTime,
    pub level: String,
    pub message: String,
}

impl NewActivityEntry {
    pub fn new(level: &str, message: impl Into<String>) -> Self {
        Self {
            logged_at: chrono::Utc::now().naive_utc(),
            level: level.to_string(),
            message: message.into(),
        }
    }
}
