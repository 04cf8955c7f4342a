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

//! Task endpoints.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use adjutant::models::audit::actions;
use adjutant::models::{NewNotification, NewTask, Task};

use super::projects::{audit, enqueue, log_activity};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateTask {
    pub id: Option<i64>,
    pub title: String,
    pub project: Option<String>,
    pub priority: Option<String>,
    #[serde(default)]
    pub done: bool,
}

/// `GET /api/tasks`
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    Ok(Json(state.dal.tasks().list().await?))
}

/// `POST /api/tasks`
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateTask>,
) -> Result<Json<Value>, ApiError> {
    if body.title.trim().is_empty() {
        return Err(ApiError::bad_request("title is required"));
    }

    let task = state
        .dal
        .tasks()
        .create(NewTask::new(
            body.id,
            body.title,
            body.project,
            body.priority,
            body.done,
        ))
        .await?;

    enqueue(&state, NewNotification::task_created(&task)).await;
    audit(&state, "task", task.id, actions::CREATED, &task.title).await;

    Ok(Json(json!({ "status": "created", "id": task.id })))
}

/// `POST /api/tasks/{id}/toggle`
pub async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let task = state.dal.tasks().toggle(id).await?;

    let status = if task.done { "completed" } else { "reopened" };
    log_activity(
        &state,
        if task.done { "info" } else { "success" },
        format!("Task \"{}\" toggled - now {}", task.title, status),
    )
    .await;
    audit(&state, "task", task.id, actions::TOGGLED, &task.title).await;

    Ok(Json(json!({ "status": "toggled", "done": task.done })))
}
