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

//! Notification Queue Model
//!
//! One row per pending event. Rows are appended by the CRUD API and the
//! change detector, and drained by the notification loop. The dedup key is
//! derived deterministically from the kind and the underlying entity, so the
//! same logical event enqueued by both producers collapses into a single row
//! through the table's UNIQUE constraint.
//!
//! `processed` transitions false -> true exactly once; rows are never
//! un-processed or deleted by the drain loop.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::database::schema::notifications;
use crate::models::{Idea, Project, Task};

/// Enumeration of the event kinds flowing through the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationKind {
    /// A new project row appeared.
    ProjectCreated,
    /// A new task row appeared.
    TaskCreated,
    /// A new idea row appeared.
    IdeaCreated,
    /// An idea was approved through the API.
    IdeaApproved,
    /// The email monitor saw a new inbound message.
    EmailReceived,
    /// A file landed in the upload store.
    FileUploaded,
}

impl NotificationKind {
    /// Returns the string representation stored in the queue.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::ProjectCreated => "project_created",
            NotificationKind::TaskCreated => "task_created",
            NotificationKind::IdeaCreated => "idea_created",
            NotificationKind::IdeaApproved => "idea_approved",
            NotificationKind::EmailReceived => "email_received",
            NotificationKind::FileUploaded => "file_uploaded",
        }
    }

    /// Parses a kind from its string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "project_created" => Some(NotificationKind::ProjectCreated),
            "task_created" => Some(NotificationKind::TaskCreated),
            "idea_created" => Some(NotificationKind::IdeaCreated),
            "idea_approved" => Some(NotificationKind::IdeaApproved),
            "email_received" => Some(NotificationKind::EmailReceived),
            "file_uploaded" => Some(NotificationKind::FileUploaded),
            _ => None,
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payload for project-backed records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectPayload {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub status: String,
}

/// Payload for idea-backed records. `plan` is present on approvals when the
/// approver attached one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdeaPayload {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
}

/// Payload for task-backed records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskPayload {
    pub id: i64,
    pub title: String,
    pub project: String,
    pub priority: String,
}

/// Payload for inbound email records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailPayload {
    pub message_id: String,
    pub from: String,
    pub subject: String,
}

/// Payload for upload records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilePayload {
    pub filename: String,
    pub stored_name: String,
    pub path: String,
    pub size: u64,
}

/// A queued notification row.
#[derive(Debug, Clone, Queryable, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub dedup_key: String,
    pub kind: String,
    pub payload: String,
    pub created_at: NaiveDateTime,
    pub processed: bool,
    pub processed_at: Option<NaiveDateTime>,
}

impl Notification {
    /// The parsed kind, or `None` for rows written by a newer producer.
    pub fn parsed_kind(&self) -> Option<NotificationKind> {
        NotificationKind::parse(&self.kind)
    }

    /// Deserializes the payload into the kind-specific structure.
    pub fn payload_as<T: DeserializeOwned>(&self) -> Option<T> {
        serde_json::from_str(&self.payload).ok()
    }

    /// The payload as loosely-typed JSON, for API listings.
    pub fn payload_value(&self) -> serde_json::Value {
        serde_json::from_str(&self.payload).unwrap_or(serde_json::Value::Null)
    }
}

/// Structure for enqueuing new notifications.
///
/// All construction goes through the kind-specific constructors below so the
/// dedup-key derivation has a single home.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = notifications)]
pub struct NewNotification {
    pub dedup_key: String,
    pub kind: String,
    pub payload: String,
    pub created_at: NaiveDateTime,
    pub processed: bool,
}

impl NewNotification {
    fn record<P: Serialize>(kind: NotificationKind, dedup_suffix: &str, payload: &P) -> Self {
        Self {
            dedup_key: format!("{}:{}", kind.as_str(), dedup_suffix),
            kind: kind.as_str().to_string(),
            payload: serde_json::to_string(payload).unwrap_or_else(|_| String::from("{}")),
            created_at: chrono::Utc::now().naive_utc(),
            processed: false,
        }
    }

    pub fn project_created(project: &Project) -> Self {
        Self::record(
            NotificationKind::ProjectCreated,
            &project.id.to_string(),
            &ProjectPayload {
                id: project.id,
                name: project.name.clone(),
                description: project.description.clone(),
                status: project.status.clone(),
            },
        )
    }

    pub fn task_created(task: &Task) -> Self {
        Self::record(
            NotificationKind::TaskCreated,
            &task.id.to_string(),
            &TaskPayload {
                id: task.id,
                title: task.title.clone(),
                project: task.project.clone(),
                priority: task.priority.clone(),
            },
        )
    }

    pub fn idea_created(idea: &Idea) -> Self {
        Self::record(
            NotificationKind::IdeaCreated,
            &idea.id.to_string(),
            &Self::idea_payload(idea, None),
        )
    }

    pub fn idea_approved(idea: &Idea, plan: Option<String>) -> Self {
        Self::record(
            NotificationKind::IdeaApproved,
            &idea.id.to_string(),
            &Self::idea_payload(idea, plan),
        )
    }

    pub fn email_received(message_id: &str, from: &str, subject: &str) -> Self {
        Self::record(
            NotificationKind::EmailReceived,
            message_id,
            &EmailPayload {
                message_id: message_id.to_string(),
                from: from.to_string(),
                subject: subject.to_string(),
            },
        )
    }

    pub fn file_uploaded(filename: &str, stored_name: &str, path: &str, size: u64) -> Self {
        Self::record(
            NotificationKind::FileUploaded,
            stored_name,
            &FilePayload {
                filename: filename.to_string(),
                stored_name: stored_name.to_string(),
                path: path.to_string(),
                size,
            },
        )
    }

    fn idea_payload(idea: &Idea, plan: Option<String>) -> IdeaPayload {
        IdeaPayload {
            id: idea.id,
            title: idea.title.clone(),
            description: idea.description.clone(),
            priority: idea.priority.clone(),
            status: idea.status.clone(),
            plan,
        }
    }
}
