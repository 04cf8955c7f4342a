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

//! Adjutant core library.
//!
//! Adjutant is a personal-assistant dashboard stack. This crate holds the
//! pieces shared by the HTTP server and the monitor processes:
//!
//! - A SQLite-backed store for projects, ideas, tasks and log tables,
//!   accessed through a data access layer ([`dal::DAL`]).
//! - The notification queue: an append-only table of pending events with a
//!   unique dedup key per logical event.
//! - The change detector ([`watcher::Watcher`]) that diffs store tables
//!   against persisted high-water marks and enqueues records for new rows.
//! - The keyword classifier ([`classify::classify`]) producing a
//!   (complexity, priority, opinion) assessment from free text.
//! - The drain loop ([`notifier::DrainLoop`]) that turns queued records into
//!   outbound chat messages through a [`notifier::Messenger`].
//! - The email monitor ([`mailbox::EmailMonitor`]) polling a mail provider
//!   and feeding `email_received` records into the queue.
//!
//! Processes coordinate only through the store; the queue is a table, so
//! concurrent producers are serialized by SQLite rather than by file locks.

pub mod classify;
pub mod config;
pub mod dal;
pub mod database;
pub mod error;
pub mod mailbox;
pub mod models;
pub mod notifier;
pub mod shutdown;
pub mod util;
pub mod watcher;

pub use config::MonitorConfig;
pub use dal::DAL;
pub use database::connection::Database;
pub use error::{MailboxError, NotifyError, StoreError, WatcherError};
pub use shutdown::ShutdownSignal;
