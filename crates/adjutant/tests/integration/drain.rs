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

//! Drain loop integration tests, using an in-memory messenger double.

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use adjutant::config::MonitorConfig;
use adjutant::error::NotifyError;
use adjutant::models::NewNotification;
use adjutant::notifier::{DrainLoop, Messenger};

use crate::fixtures::{idea, TestStore};

#[derive(Default)]
struct RecordingMessenger {
    sent: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send(
        &self,
        channel_id: &str,
        text: &str,
        _mentions: &[String],
    ) -> Result<(), NotifyError> {
        self.sent
            .lock()
            .expect("lock poisoned")
            .push((channel_id.to_string(), text.to_string()));
        Ok(())
    }
}

struct FailingMessenger;

#[async_trait]
impl Messenger for FailingMessenger {
    async fn send(&self, _: &str, _: &str, _: &[String]) -> Result<(), NotifyError> {
        Err(NotifyError::Delivery { status: 503 })
    }
}

fn monitor_config() -> MonitorConfig {
    MonitorConfig::builder().channel_id("chan-1").build()
}

#[tokio::test]
async fn test_successful_send_marks_processed() {
    let store = TestStore::init().await;
    let dal = store.dal();

    dal.notification_queue()
        .enqueue(NewNotification::email_received("m-1", "a@b.c", "hi"))
        .await
        .expect("enqueue should succeed");

    let messenger = Arc::new(RecordingMessenger::default());
    let drain = DrainLoop::new(dal.clone(), messenger.clone(), &monitor_config());

    assert_eq!(drain.drain_once().await, 1);

    let sent = messenger.sent.lock().expect("lock poisoned");
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "chan-1");
    assert_eq!(sent[0].1, "Email from a@b.c: hi");
    drop(sent);

    assert!(dal
        .notification_queue()
        .dequeue_unprocessed()
        .await
        .expect("dequeue should succeed")
        .is_empty());
}

#[tokio::test]
async fn test_failed_send_leaves_record_pending() {
    let store = TestStore::init().await;
    let dal = store.dal();

    dal.notification_queue()
        .enqueue(NewNotification::email_received("m-1", "a@b.c", "hi"))
        .await
        .expect("enqueue should succeed");

    let drain = DrainLoop::new(dal.clone(), Arc::new(FailingMessenger), &monitor_config());
    assert_eq!(drain.drain_once().await, 0);

    let pending = dal
        .notification_queue()
        .dequeue_unprocessed()
        .await
        .expect("dequeue should succeed");
    assert_eq!(pending.len(), 1, "failed delivery must stay pending");
    assert!(!pending[0].processed);
}

#[tokio::test]
async fn test_retry_after_failure_delivers() {
    let store = TestStore::init().await;
    let dal = store.dal();

    dal.notification_queue()
        .enqueue(NewNotification::email_received("m-1", "a@b.c", "hi"))
        .await
        .expect("enqueue should succeed");

    // First pass fails, record stays pending.
    DrainLoop::new(dal.clone(), Arc::new(FailingMessenger), &monitor_config())
        .drain_once()
        .await;

    // Next pass (collaborator recovered) delivers it.
    let messenger = Arc::new(RecordingMessenger::default());
    let drain = DrainLoop::new(dal.clone(), messenger.clone(), &monitor_config());
    assert_eq!(drain.drain_once().await, 1);
    assert_eq!(messenger.sent.lock().expect("lock poisoned").len(), 1);
}

#[tokio::test]
async fn test_approved_idea_record_renders_with_payload_id() {
    let store = TestStore::init().await;
    let dal = store.dal();

    dal.ideas()
        .create(idea(7, "Weekly digest", "send a summary"))
        .await
        .expect("create should succeed");
    let approved = dal.ideas().approve(7).await.expect("approve should succeed");

    dal.notification_queue()
        .enqueue(NewNotification::idea_approved(&approved, None))
        .await
        .expect("enqueue should succeed");

    let pending = dal
        .notification_queue()
        .dequeue_unprocessed()
        .await
        .expect("dequeue should succeed");
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].dedup_key, "idea_approved:7");
    let payload: adjutant::models::IdeaPayload =
        pending[0].payload_as().expect("payload should parse");
    assert_eq!(payload.id, 7);

    let messenger = Arc::new(RecordingMessenger::default());
    let drain = DrainLoop::new(dal.clone(), messenger.clone(), &monitor_config());
    assert_eq!(drain.drain_once().await, 1);

    let sent = messenger.sent.lock().expect("lock poisoned");
    assert!(sent[0].1.contains("IDEA APPROVED"));
    assert!(sent[0].1.contains("Weekly digest"));
}

#[tokio::test]
async fn test_unrenderable_record_is_discarded_not_retried() {
    let store = TestStore::init().await;
    let dal = store.dal();

    let mut bogus = NewNotification::email_received("m-1", "a@b.c", "hi");
    bogus.kind = "mystery_kind".to_string();
    dal.notification_queue()
        .enqueue(bogus)
        .await
        .expect("enqueue should succeed");

    let messenger = Arc::new(RecordingMessenger::default());
    let drain = DrainLoop::new(dal.clone(), messenger.clone(), &monitor_config());
    assert_eq!(drain.drain_once().await, 0);

    // Nothing was sent, but the record no longer blocks the queue.
    assert!(messenger.sent.lock().expect("lock poisoned").is_empty());
    assert!(dal
        .notification_queue()
        .dequeue_unprocessed()
        .await
        .expect("dequeue should succeed")
        .is_empty());
}
