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

//! Idea Model
//!
//! Ideas start in `open` status and move to `approved` through the approval
//! endpoint, which also enqueues an `idea_approved` record.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::database::schema::ideas;

/// Status set by the approval operation.
pub const IDEA_STATUS_APPROVED: &str = "approved";

/// An idea row.
#[derive(Debug, Clone, Queryable, Serialize, Deserialize)]
pub struct Idea {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub assignee: String,
    pub created_by: String,
    pub created_at: NaiveDateTime,
}

/// Structure for creating new ideas.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = ideas)]
pub struct NewIdea {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub assignee: String,
    pub created_by: String,
    pub created_at: NaiveDateTime,
}

impl NewIdea {
    pub fn new(
        id: Option<i64>,
        title: String,
        description: String,
        priority: Option<String>,
        assignee: Option<String>,
        created_by: Option<String>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            priority: priority.unwrap_or_else(|| "medium".to_string()),
            status: "open".to_string(),
            assignee: assignee.unwrap_or_else(|| "team".to_string()),
            created_by: created_by.unwrap_or_default(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
