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

//! Change detector integration tests.

use std::time::Duration;

use adjutant::watcher::{CursorStore, Watcher};

use crate::fixtures::{idea, project, task, TestStore};

const POLL: Duration = Duration::from_secs(30);

#[tokio::test]
async fn test_new_project_row_emits_one_record() {
    let store = TestStore::init().await;
    let dal = store.dal();
    let cursors = CursorStore::new(store.dir().join("cursors.json"));

    dal.projects()
        .create(project(5, "Bot for Discord integration", "integration with webhook api"))
        .await
        .expect("create should succeed");

    let mut watcher = Watcher::new(dal.clone(), cursors, POLL);
    let records = watcher.poll().await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind, "project_created");
    assert_eq!(records[0].dedup_key, "project_created:5");
    assert_eq!(watcher.cursors().last_project_id, 5);

    // The record landed in the queue.
    let pending = dal
        .notification_queue()
        .dequeue_unprocessed()
        .await
        .expect("dequeue should succeed");
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].kind, "project_created");
}

#[tokio::test]
async fn test_poll_covers_all_watched_tables() {
    let store = TestStore::init().await;
    let dal = store.dal();
    let cursors = CursorStore::new(store.dir().join("cursors.json"));

    dal.projects()
        .create(project(1, "P", ""))
        .await
        .expect("create project");
    dal.tasks().create(task(2, "T")).await.expect("create task");
    dal.ideas()
        .create(idea(3, "I", ""))
        .await
        .expect("create idea");

    let mut watcher = Watcher::new(dal, cursors, POLL);
    let records = watcher.poll().await;

    let mut kinds: Vec<&str> = records.iter().map(|r| r.kind.as_str()).collect();
    kinds.sort();
    assert_eq!(kinds, ["idea_created", "project_created", "task_created"]);
    assert_eq!(watcher.cursors().last_project_id, 1);
    assert_eq!(watcher.cursors().last_task_id, 2);
    assert_eq!(watcher.cursors().last_idea_id, 3);
}

#[tokio::test]
async fn test_second_poll_emits_nothing_new() {
    let store = TestStore::init().await;
    let dal = store.dal();
    let cursors = CursorStore::new(store.dir().join("cursors.json"));

    dal.projects()
        .create(project(1, "P", ""))
        .await
        .expect("create project");

    let mut watcher = Watcher::new(dal, cursors, POLL);
    assert_eq!(watcher.poll().await.len(), 1);
    assert!(watcher.poll().await.is_empty());
}

#[tokio::test]
async fn test_restart_does_not_re_emit_below_persisted_mark() {
    let store = TestStore::init().await;
    let dal = store.dal();
    let state_path = store.dir().join("cursors.json");

    dal.projects()
        .create(project(4, "Before restart", ""))
        .await
        .expect("create project");

    let mut watcher = Watcher::new(dal.clone(), CursorStore::new(&state_path), POLL);
    assert_eq!(watcher.poll().await.len(), 1);
    drop(watcher);

    // A fresh watcher reloads the persisted mark and stays quiet.
    let mut restarted = Watcher::new(dal.clone(), CursorStore::new(&state_path), POLL);
    assert_eq!(restarted.cursors().last_project_id, 4);
    assert!(restarted.poll().await.is_empty());

    // A row above the mark is picked up.
    dal.projects()
        .create(project(9, "After restart", ""))
        .await
        .expect("create project");
    let records = restarted.poll().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].dedup_key, "project_created:9");
}

#[tokio::test]
async fn test_watcher_and_api_enqueue_collapse_to_one_record() {
    let store = TestStore::init().await;
    let dal = store.dal();
    let cursors = CursorStore::new(store.dir().join("cursors.json"));

    let created = dal
        .projects()
        .create(project(6, "Dup check", ""))
        .await
        .expect("create project");

    // The CRUD API enqueues at create time...
    dal.notification_queue()
        .enqueue(adjutant::models::NewNotification::project_created(&created))
        .await
        .expect("enqueue should succeed");

    // ...and the change detector independently sees the same row.
    let mut watcher = Watcher::new(dal.clone(), cursors, POLL);
    watcher.poll().await;

    let pending = dal
        .notification_queue()
        .dequeue_unprocessed()
        .await
        .expect("dequeue should succeed");
    assert_eq!(pending.len(), 1, "dedup key must collapse both producers");
}
