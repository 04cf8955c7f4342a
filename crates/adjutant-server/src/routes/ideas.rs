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

//! Idea endpoints.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use adjutant::models::audit::actions;
use adjutant::models::{NewIdea, NewNotification};

use super::projects::{audit, enqueue, log_activity};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateIdea {
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: Option<String>,
    pub assignee: Option<String>,
    #[serde(rename = "createdBy")]
    pub created_by: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApproveIdea {
    #[serde(default)]
    pub plan: Option<String>,
}

/// `GET /api/ideas`
///
/// The listing is wrapped in an `ideas` object (dashboard UI contract).
pub async fn list(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let ideas = state.dal.ideas().list().await?;
    Ok(Json(json!({ "ideas": ideas })))
}

/// `POST /api/ideas`
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateIdea>,
) -> Result<Json<Value>, ApiError> {
    if body.title.trim().is_empty() {
        return Err(ApiError::bad_request("title is required"));
    }

    let idea = state
        .dal
        .ideas()
        .create(NewIdea::new(
            body.id,
            body.title,
            body.description,
            body.priority,
            body.assignee,
            body.created_by,
        ))
        .await?;

    enqueue(&state, NewNotification::idea_created(&idea)).await;
    log_activity(
        &state,
        "success",
        format!("New idea created: \"{}\"", idea.title),
    )
    .await;
    audit(&state, "idea", idea.id, actions::CREATED, &idea.title).await;

    Ok(Json(json!({ "status": "created", "id": idea.id })))
}

/// `POST /api/ideas/{id}/approve`
///
/// Flips the status and enqueues exactly one `idea_approved` record carrying
/// the idea payload (and the optional plan from the request body).
pub async fn approve(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Option<Json<ApproveIdea>>,
) -> Result<Json<Value>, ApiError> {
    let idea = state.dal.ideas().approve(id).await?;
    let plan = body.and_then(|Json(b)| b.plan).filter(|p| !p.is_empty());

    enqueue(&state, NewNotification::idea_approved(&idea, plan)).await;
    log_activity(
        &state,
        "success",
        format!("Idea \"{}\" approved", idea.title),
    )
    .await;
    audit(&state, "idea", idea.id, actions::APPROVED, &idea.title).await;

    Ok(Json(json!({ "status": "approved" })))
}
