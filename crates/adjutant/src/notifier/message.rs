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

//! Rendering of queued records into outbound chat messages.
//!
//! Project, idea and task records run through the keyword classifier; email
//! and upload records render as one-line summaries. Returns `None` for rows
//! whose kind or payload no longer parses.

use crate::classify::classify;
use crate::models::{
    EmailPayload, FilePayload, IdeaPayload, Notification, NotificationKind, ProjectPayload,
    TaskPayload,
};
use crate::util::format_size;

/// Renders the chat message for a queued record.
pub fn render(record: &Notification) -> Option<String> {
    let kind = record.parsed_kind()?;
    match kind {
        NotificationKind::ProjectCreated => {
            let payload: ProjectPayload = record.payload_as()?;
            Some(render_project(&payload))
        }
        NotificationKind::IdeaCreated => {
            let payload: IdeaPayload = record.payload_as()?;
            Some(render_idea_created(&payload))
        }
        NotificationKind::IdeaApproved => {
            let payload: IdeaPayload = record.payload_as()?;
            Some(render_idea_approved(&payload))
        }
        NotificationKind::TaskCreated => {
            let payload: TaskPayload = record.payload_as()?;
            Some(render_task(&payload))
        }
        NotificationKind::EmailReceived => {
            let payload: EmailPayload = record.payload_as()?;
            Some(format!(
                "Email from {}: {}",
                payload.from, payload.subject
            ))
        }
        NotificationKind::FileUploaded => {
            let payload: FilePayload = record.payload_as()?;
            Some(format!(
                "File uploaded: {} ({})",
                payload.filename,
                format_size(payload.size)
            ))
        }
    }
}

fn render_project(payload: &ProjectPayload) -> String {
    let assessment = classify(&format!("{} {}", payload.name, payload.description));
    format!(
        "**NEW PROJECT FOR REVIEW**\n\n\
         **{}**\n\
         Status: {}\n\n\
         **Evaluation:**\n{}\n\n\
         **Complexity:** {}\n\
         **Priority:** {}\n\n\
         Reply \"go\" to start or suggest changes!",
        payload.name,
        payload.status,
        assessment.opinion,
        assessment.complexity.as_str().to_uppercase(),
        assessment.priority.as_str().to_uppercase(),
    )
}

fn render_idea_created(payload: &IdeaPayload) -> String {
    let assessment = classify(&format!("{} {}", payload.title, payload.description));
    format!(
        "**NEW IDEA SUBMITTED**\n\n\
         **{}**\n\
         Priority: {}\n\n\
         {}\n\n\
         Approve it in the dashboard to add it to the roadmap!",
        payload.title,
        payload.priority.to_uppercase(),
        assessment.opinion,
    )
}

fn render_idea_approved(payload: &IdeaPayload) -> String {
    let mut message = format!(
        "**IDEA APPROVED**\n\n\
         **{}**\n\
         Priority: {}",
        payload.title,
        payload.priority.to_uppercase(),
    );
    if let Some(plan) = payload.plan.as_deref().filter(|p| !p.is_empty()) {
        message.push_str("\n\n**Plan:**\n");
        message.push_str(plan);
    }
    message
}

fn render_task(payload: &TaskPayload) -> String {
    format!(
        "**NEW TASK CREATED**\n\n\
         **{}**\n\
         Project: {}\n\
         Priority: {}\n\n\
         Task for {} project. {} priority.",
        payload.title,
        payload.project,
        payload.priority.to_uppercase(),
        payload.project,
        payload.priority.to_uppercase(),
    )
}
