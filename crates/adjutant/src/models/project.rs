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

//! Project Model
//!
//! A project is the primary unit tracked on the dashboard. New projects are
//! created in `pending-review` status and surface through the notification
//! queue for evaluation.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::database::schema::projects;

/// Default status for newly created projects.
pub const DEFAULT_PROJECT_STATUS: &str = "pending-review";

/// A project row.
#[derive(Debug, Clone, Queryable, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Structure for creating new projects.
///
/// `id` may carry a client-supplied identifier; `None` lets SQLite assign
/// the next rowid.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = projects)]
pub struct NewProject {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewProject {
    /// Creates an insertable project with the given fields, stamping both
    /// timestamps with the current instant.
    pub fn new(id: Option<i64>, name: String, description: String, status: Option<String>) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id,
            name,
            description,
            status: status.unwrap_or_else(|| DEFAULT_PROJECT_STATUS.to_string()),
            created_at: now,
            updated_at: now,
        }
    }
}
