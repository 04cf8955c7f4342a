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

//! Notification queue read endpoint.

use axum::extract::State;
use axum::Json;
use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;

/// Records served per request.
const NOTIFICATION_LIMIT: i64 = 100;

#[derive(Debug, Serialize)]
pub struct NotificationView {
    pub id: i64,
    pub kind: String,
    pub timestamp: NaiveDateTime,
    pub payload: Value,
    pub processed: bool,
}

/// `GET /api/notifications`
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<NotificationView>>, ApiError> {
    let records = state
        .dal
        .notification_queue()
        .list_recent(NOTIFICATION_LIMIT)
        .await?;

    let views = records
        .into_iter()
        .map(|record| NotificationView {
            id: record.id,
            kind: record.kind.clone(),
            timestamp: record.created_at,
            payload: record.payload_value(),
            processed: record.processed,
        })
        .collect();

    Ok(Json(views))
}
