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

//! Error types for the core library, one enum per concern.

use thiserror::Error;

/// Errors from the data access layer and the underlying store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database query or constraint error.
    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),

    /// Failed to obtain a connection or to run a pooled operation.
    #[error("Connection pool error: {0}")]
    ConnectionPool(String),

    /// Migration failure at startup.
    #[error("Migration error: {0}")]
    Migration(String),
}

impl StoreError {
    /// True when the error is a plain row-not-found lookup miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Database(diesel::result::Error::NotFound))
    }
}

/// Errors from the change detector's persisted cursor state.
#[derive(Error, Debug)]
pub enum WatcherError {
    #[error("Failed to write cursor state to {path}: {source}")]
    StateWrite {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to encode cursor state: {0}")]
    StateEncode(#[from] serde_json::Error),
}

/// Errors from the outbound messaging collaborator.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Transport-level failure (connect, timeout, TLS).
    #[error("Message transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The collaborator accepted the request but refused the message.
    #[error("Message delivery rejected with status {status}")]
    Delivery { status: u16 },
}

/// Errors from the mail provider collaborator.
#[derive(Error, Debug)]
pub enum MailboxError {
    #[error("Mail API transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Mail API request failed with status {status}")]
    Api { status: u16 },

    #[error("Mail API credentials are not configured")]
    MissingCredentials,
}
