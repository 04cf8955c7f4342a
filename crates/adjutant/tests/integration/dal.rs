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

//! DAL integration tests: entity CRUD and the notification queue contract.

use adjutant::models::{NewActivityEntry, NewAuditEntry, NewNotification};

use crate::fixtures::{idea, project, task, TestStore};

#[tokio::test]
async fn test_project_create_and_list() {
    let store = TestStore::init().await;
    let dal = store.dal();

    let created = dal
        .projects()
        .create(project(1, "First", "a description"))
        .await
        .expect("create should succeed");
    assert_eq!(created.id, 1);
    assert_eq!(created.status, "pending-review");

    dal.projects()
        .create(project(2, "Second", ""))
        .await
        .expect("create should succeed");

    let listed = dal.projects().list().await.expect("list should succeed");
    assert_eq!(listed.len(), 2);
    // Newest id first.
    assert_eq!(listed[0].id, 2);
    assert_eq!(listed[1].id, 1);
}

#[tokio::test]
async fn test_project_create_without_id_autoassigns() {
    let store = TestStore::init().await;
    let dal = store.dal();

    let created = dal
        .projects()
        .create(adjutant::models::NewProject::new(
            None,
            "Auto".to_string(),
            String::new(),
            None,
        ))
        .await
        .expect("create should succeed");
    assert!(created.id >= 1);
}

#[tokio::test]
async fn test_project_update_changes_fields() {
    let store = TestStore::init().await;
    let dal = store.dal();

    dal.projects()
        .create(project(3, "Old name", "old"))
        .await
        .expect("create should succeed");

    let updated = dal
        .projects()
        .update(
            3,
            "New name".to_string(),
            "new".to_string(),
            "active".to_string(),
        )
        .await
        .expect("update should succeed");
    assert_eq!(updated.name, "New name");
    assert_eq!(updated.status, "active");
}

#[tokio::test]
async fn test_project_get_missing_is_not_found() {
    let store = TestStore::init().await;
    let dal = store.dal();

    let err = dal.projects().get(99).await.expect_err("should miss");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_idea_approve_sets_status() {
    let store = TestStore::init().await;
    let dal = store.dal();

    dal.ideas()
        .create(idea(7, "Weekly digest", "send a summary"))
        .await
        .expect("create should succeed");

    let approved = dal.ideas().approve(7).await.expect("approve should succeed");
    assert_eq!(approved.id, 7);
    assert_eq!(approved.status, "approved");
}

#[tokio::test]
async fn test_task_toggle_flips_done() {
    let store = TestStore::init().await;
    let dal = store.dal();

    dal.tasks()
        .create(task(1, "write docs"))
        .await
        .expect("create should succeed");

    let toggled = dal.tasks().toggle(1).await.expect("toggle should succeed");
    assert!(toggled.done);
    let toggled = dal.tasks().toggle(1).await.expect("toggle should succeed");
    assert!(!toggled.done);
}

#[tokio::test]
async fn test_activity_log_latest_is_capped_and_newest_first() {
    let store = TestStore::init().await;
    let dal = store.dal();

    for i in 0..5 {
        dal.activity_log()
            .append(NewActivityEntry::new("info", format!("entry {}", i)))
            .await
            .expect("append should succeed");
    }

    let latest = dal
        .activity_log()
        .latest(3)
        .await
        .expect("latest should succeed");
    assert_eq!(latest.len(), 3);
    assert_eq!(latest[0].message, "entry 4");
}

#[tokio::test]
async fn test_audit_log_records_mutations() {
    let store = TestStore::init().await;
    let dal = store.dal();

    dal.audit_log()
        .record(NewAuditEntry::new("project", 5, "created", "First"))
        .await
        .expect("record should succeed");

    let rows = dal.audit_log().latest(10).await.expect("latest");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].entity, "project");
    assert_eq!(rows[0].entity_id, 5);
    assert_eq!(rows[0].action, "created");
}

// =============================================================================
// Notification queue contract
// =============================================================================

#[tokio::test]
async fn test_enqueue_then_dequeue_round_trip() {
    let store = TestStore::init().await;
    let dal = store.dal();

    let created = dal
        .projects()
        .create(project(5, "Bot for Discord integration", "integration with webhook api"))
        .await
        .expect("create should succeed");

    let inserted = dal
        .notification_queue()
        .enqueue(NewNotification::project_created(&created))
        .await
        .expect("enqueue should succeed");
    assert!(inserted);

    let pending = dal
        .notification_queue()
        .dequeue_unprocessed()
        .await
        .expect("dequeue should succeed");
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].dedup_key, "project_created:5");
    assert!(!pending[0].processed);
}

#[tokio::test]
async fn test_duplicate_enqueue_is_dropped() {
    let store = TestStore::init().await;
    let dal = store.dal();

    let created = dal
        .projects()
        .create(project(5, "Bot", "monitor things"))
        .await
        .expect("create should succeed");

    // Both producers enqueue the same logical event.
    let first = dal
        .notification_queue()
        .enqueue(NewNotification::project_created(&created))
        .await
        .expect("enqueue should succeed");
    let second = dal
        .notification_queue()
        .enqueue(NewNotification::project_created(&created))
        .await
        .expect("enqueue should succeed");
    assert!(first);
    assert!(!second);

    let pending = dal
        .notification_queue()
        .dequeue_unprocessed()
        .await
        .expect("dequeue should succeed");
    assert_eq!(pending.len(), 1);
}

#[tokio::test]
async fn test_mark_processed_removes_from_pending() {
    let store = TestStore::init().await;
    let dal = store.dal();

    dal.notification_queue()
        .enqueue(NewNotification::email_received("m-1", "a@b.c", "subject"))
        .await
        .expect("enqueue should succeed");

    let marked = dal
        .notification_queue()
        .mark_processed("email_received:m-1")
        .await
        .expect("mark should succeed");
    assert!(marked);

    let pending = dal
        .notification_queue()
        .dequeue_unprocessed()
        .await
        .expect("dequeue should succeed");
    assert!(pending.is_empty());

    // Still visible in the full listing, flagged processed.
    let recent = dal
        .notification_queue()
        .list_recent(10)
        .await
        .expect("list should succeed");
    assert_eq!(recent.len(), 1);
    assert!(recent[0].processed);
    assert!(recent[0].processed_at.is_some());
}

#[tokio::test]
async fn test_mark_processed_is_idempotent() {
    let store = TestStore::init().await;
    let dal = store.dal();

    dal.notification_queue()
        .enqueue(NewNotification::email_received("m-2", "a@b.c", "subject"))
        .await
        .expect("enqueue should succeed");

    assert!(dal
        .notification_queue()
        .mark_processed("email_received:m-2")
        .await
        .expect("first mark should succeed"));
    // Second call is a no-op, not an error.
    assert!(!dal
        .notification_queue()
        .mark_processed("email_received:m-2")
        .await
        .expect("second mark should succeed"));
    // Unknown keys are also a no-op.
    assert!(!dal
        .notification_queue()
        .mark_processed("email_received:missing")
        .await
        .expect("missing key should be a no-op"));
}

#[tokio::test]
async fn test_dequeue_preserves_insertion_order() {
    let store = TestStore::init().await;
    let dal = store.dal();

    for i in 0..3 {
        dal.notification_queue()
            .enqueue(NewNotification::email_received(
                &format!("m-{}", i),
                "a@b.c",
                "subject",
            ))
            .await
            .expect("enqueue should succeed");
    }

    let pending = dal
        .notification_queue()
        .dequeue_unprocessed()
        .await
        .expect("dequeue should succeed");
    let keys: Vec<&str> = pending.iter().map(|n| n.dedup_key.as_str()).collect();
    assert_eq!(
        keys,
        ["email_received:m-0", "email_received:m-1", "email_received:m-2"]
    );
}

#[tokio::test]
async fn test_count_pending_tracks_marks() {
    let store = TestStore::init().await;
    let dal = store.dal();

    dal.notification_queue()
        .enqueue(NewNotification::email_received("m-1", "a@b.c", "s"))
        .await
        .expect("enqueue should succeed");
    dal.notification_queue()
        .enqueue(NewNotification::email_received("m-2", "a@b.c", "s"))
        .await
        .expect("enqueue should succeed");

    assert_eq!(
        dal.notification_queue().count_pending().await.expect("count"),
        2
    );
    dal.notification_queue()
        .mark_processed("email_received:m-1")
        .await
        .expect("mark should succeed");
    assert_eq!(
        dal.notification_queue().count_pending().await.expect("count"),
        1
    );
}
