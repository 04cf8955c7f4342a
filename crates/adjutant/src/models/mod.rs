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

//! Row and domain models for the dashboard store.

pub mod activity;
pub mod audit;
pub mod idea;
pub mod notification;
pub mod project;
pub mod task;

pub use activity::{ActivityEntry, NewActivityEntry};
pub use audit::{AuditEntry, NewAuditEntry};
pub use idea::{Idea, NewIdea};
pub use notification::{
    EmailPayload, FilePayload, IdeaPayload, NewNotification, Notification, NotificationKind,
    ProjectPayload, TaskPayload,
};
pub use project::{NewProject, Project};
pub use task::{NewTask, Task};
