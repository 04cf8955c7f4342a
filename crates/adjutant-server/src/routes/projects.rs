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

//! Project endpoints.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use adjutant::models::audit::actions;
use adjutant::models::{NewActivityEntry, NewAuditEntry, NewNotification, NewProject, Project};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateProject {
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProject {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub status: String,
}

/// `GET /api/projects`
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    Ok(Json(state.dal.projects().list().await?))
}

/// `POST /api/projects`
///
/// Creates the row, enqueues a `project_created` record and writes activity
/// and audit entries.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateProject>,
) -> Result<Json<Value>, ApiError> {
    if body.name.trim().is_empty() {
        return Err(ApiError::bad_request("name is required"));
    }

    let project = state
        .dal
        .projects()
        .create(NewProject::new(
            body.id,
            body.name,
            body.description,
            body.status,
        ))
        .await?;

    enqueue(&state, NewNotification::project_created(&project)).await;
    log_activity(
        &state,
        "success",
        format!(
            "Project \"{}\" created - awaiting evaluation",
            project.name
        ),
    )
    .await;
    audit(&state, "project", project.id, actions::CREATED, &project.name).await;

    Ok(Json(json!({ "status": "created", "id": project.id })))
}

/// `PUT /api/projects/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateProject>,
) -> Result<Json<Value>, ApiError> {
    let project = state
        .dal
        .projects()
        .update(id, body.name, body.description, body.status)
        .await?;

    audit(&state, "project", project.id, actions::UPDATED, &project.name).await;

    Ok(Json(json!({ "status": "updated" })))
}

/// Enqueues a record, logging (not failing the request) on queue errors: the
/// change detector provides the redundant path for dropped records.
pub(crate) async fn enqueue(state: &AppState, record: NewNotification) {
    if let Err(e) = state.dal.notification_queue().enqueue(record).await {
        warn!(error = %e, "Failed to enqueue notification");
    }
}

pub(crate) async fn log_activity(state: &AppState, level: &str, message: String) {
    if let Err(e) = state
        .dal
        .activity_log()
        .append(NewActivityEntry::new(level, message))
        .await
    {
        warn!(error = %e, "Failed to append activity entry");
    }
}

pub(crate) async fn audit(
    state: &AppState,
    entity: &str,
    entity_id: i64,
    action: &str,
    detail: &str,
) {
    if let Err(e) = state
        .dal
        .audit_log()
        .record(NewAuditEntry::new(entity, entity_id, action, detail))
        .await
    {
        warn!(error = %e, "Failed to record audit entry");
    }
}
