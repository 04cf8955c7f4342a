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

//! Audit Log Model
//!
//! One append-only row per CRUD mutation, recording the entity, its id and
//! the action taken.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::database::schema::audit_log;

/// Audit action strings.
pub mod actions {
    pub const CREATED: &str = "created";
    pub const UPDATED: &str = "updated";
    pub const APPROVED: &str = "approved";
    pub const TOGGLED: &str = "toggled";
}

/// An audit log row.
#[derive(Debug, Clone, Queryable, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: i64,
    pub entity: String,
    pub entity_id: i64,
    pub action: String,
    pub detail: String,
    pub created_at: NaiveDateTime,
}

/// Structure for appending audit entries.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = audit_log)]
pub struct NewAuditEntry {
    pub entity: String,
    pub entity_id: i64,
    pub action: String,
    pub detail: String,
    pub created_at: NaiveDateTime,
}

impl NewAuditEntry {
    pub fn new(entity: &str, entity_id: i64, action: &str, detail: impl Into<String>) -> Self {
        Self {
            entity: entity.to_string(),
            entity_id,
            action: action.to_string(),
            detail: detail.into(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
