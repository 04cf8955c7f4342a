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

//! Data Access Layer
//!
//! All store reads and writes go through this module. The [`DAL`] struct is
//! a thin facade over the connection pool; per-entity accessors hand out
//! lightweight sub-DALs borrowing it.

pub mod activity_log;
pub mod audit_log;
pub mod ideas;
pub mod notification_queue;
pub mod projects;
pub mod tasks;

use crate::database::connection::Database;

pub use activity_log::ActivityLogDAL;
pub use audit_log::AuditLogDAL;
pub use ideas::IdeaDAL;
pub use notification_queue::NotificationQueueDAL;
pub use projects::ProjectDAL;
pub use tasks::TaskDAL;

/// The main Data Access Layer struct.
#[derive(Clone)]
pub struct DAL {
    pub database: Database,
}

impl DAL {
    /// Creates a new DAL instance over the given database.
    pub fn new(database: Database) -> Self {
        DAL { database }
    }

    pub fn projects(&self) -> ProjectDAL {
        ProjectDAL::new(self)
    }

    pub fn ideas(&self) -> IdeaDAL {
        IdeaDAL::new(self)
    }

    pub fn tasks(&self) -> TaskDAL {
        TaskDAL::new(self)
    }

    pub fn activity_log(&self) -> ActivityLogDAL {
        ActivityLogDAL::new(self)
    }

    pub fn audit_log(&self) -> AuditLogDAL {
        AuditLogDAL::new(self)
    }

    pub fn notification_queue(&self) -> NotificationQueueDAL {
        NotificationQueueDAL::new(self)
    }
}
