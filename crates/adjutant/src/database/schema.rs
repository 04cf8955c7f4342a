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

//! Diesel table definitions for the dashboard store.
//!
//! Column order must match the field order of the corresponding structs in
//! [`crate::models`].

diesel::table! {
    projects (id) {
        id -> BigInt,
        name -> Text,
        description -> Text,
        status -> Text,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::table! {
    ideas (id) {
        id -> BigInt,
        title -> Text,
        description -> Text,
        priority -> Text,
        status -> Text,
        assignee -> Text,
        created_by -> Text,
        created_at -> Timestamp,
    }
}

diesel::table! {
    tasks (id) {
        id -> BigInt,
        title -> Text,
        project -> Text,
        priority -> Text,
        done -> Bool,
        created_at -> Timestamp,
    }
}

diesel::table! {
    activity_log (id) {
        id -> BigInt,
        logged_at -> Timestamp,
        level -> Text,
        message -> Text,
    }
}

diesel::table! {
    audit_log (id) {
        id -> BigInt,
        entity -> Text,
        entity_id -> BigInt,
        action -> Text,
        detail -> Text,
        created_at -> Timestamp,
    }
}

diesel::table! {
    notifications (id) {
        id -> BigInt,
        dedup_key -> Text,
        kind -> Text,
        payload -> Text,
        created_at -> Timestamp,
        processed -> Bool,
        processed_at -> Nullable<Timestamp>,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    projects,
    ideas,
    tasks,
    activity_log,
    audit_log,
    notifications,
);
