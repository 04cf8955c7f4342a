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

//! Task Model

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::database::schema::tasks;

/// A task row. `done` flips through the toggle operation.
#[derive(Debug, Clone, Queryable, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub project: String,
    pub priority: String,
    pub done: bool,
    pub created_at: NaiveDateTime,
}

/// Structure for creating new tasks.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTask {
    pub id: Option<i64>,
    pub title: String,
    pub project: String,
    pub priority: String,
    pub done: bool,
    pub created_at: NaiveDateTime,
}

impl NewTask {
    pub fn new(
        id: Option<i64>,
        title: String,
        project: Option<String>,
        priority: Option<String>,
        done: bool,
    ) -> Self {
        Self {
            id,
            title,
            project: project.unwrap_or_else(|| "General".to_string()),
            priority: priority.unwrap_or_else(|| "medium".to_string()),
            done,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
