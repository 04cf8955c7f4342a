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

//! Email monitor integration tests, using a fake mail provider.

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use adjutant::error::MailboxError;
use adjutant::mailbox::{EmailMonitor, MailMessage, Mailbox};

use crate::fixtures::TestStore;

const OWN_ADDRESS: &str = "assistant@example.com";

struct FakeMailbox {
    messages: Vec<MailMessage>,
    replies: Mutex<Vec<(String, String)>>,
    read: Mutex<Vec<String>>,
}

impl FakeMailbox {
    fn new(messages: Vec<MailMessage>) -> Self {
        Self {
            messages,
            replies: Mutex::new(Vec::new()),
            read: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Mailbox for FakeMailbox {
    async fn recent_messages(&self, _limit: usize) -> Result<Vec<MailMessage>, MailboxError> {
        Ok(self.messages.clone())
    }

    async fn send_reply(&self, to: &str, subject: &str, _body: &str) -> Result<(), MailboxError> {
        self.replies
            .lock()
            .expect("lock poisoned")
            .push((to.to_string(), subject.to_string()));
        Ok(())
    }

    async fn mark_read(&self, message_id: &str) -> Result<(), MailboxError> {
        self.read
            .lock()
            .expect("lock poisoned")
            .push(message_id.to_string());
        Ok(())
    }
}

fn inbound(id: &str, from: &str, subject: &str) -> MailMessage {
    MailMessage {
        message_id: id.to_string(),
        from_address: from.to_string(),
        subject: subject.to_string(),
        text: String::new(),
        folder: "inbox".to_string(),
    }
}

#[tokio::test]
async fn test_new_email_replies_marks_read_and_enqueues() {
    let store = TestStore::init().await;
    let dal = store.dal();

    let mailbox = Arc::new(FakeMailbox::new(vec![inbound(
        "m-1",
        "someone@example.com",
        "Quick question",
    )]));
    let mut monitor = EmailMonitor::new(
        dal.clone(),
        mailbox.clone(),
        store.dir().join("email-state.json"),
        OWN_ADDRESS,
        Duration::from_secs(30),
    );

    assert_eq!(monitor.check_once().await, 1);

    let replies = mailbox.replies.lock().expect("lock poisoned");
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].0, "someone@example.com");
    assert_eq!(replies[0].1, "Re: Quick question");
    drop(replies);

    assert_eq!(
        mailbox.read.lock().expect("lock poisoned").as_slice(),
        ["m-1".to_string()]
    );

    let pending = dal
        .notification_queue()
        .dequeue_unprocessed()
        .await
        .expect("dequeue should succeed");
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].dedup_key, "email_received:m-1");
}

#[tokio::test]
async fn test_processed_ids_survive_restart() {
    let store = TestStore::init().await;
    let dal = store.dal();
    let state_path = store.dir().join("email-state.json");

    let mailbox = Arc::new(FakeMailbox::new(vec![inbound(
        "m-1",
        "someone@example.com",
        "Quick question",
    )]));

    let mut monitor = EmailMonitor::new(
        dal.clone(),
        mailbox.clone(),
        &state_path,
        OWN_ADDRESS,
        Duration::from_secs(30),
    );
    assert_eq!(monitor.check_once().await, 1);
    drop(monitor);

    // A restarted monitor sees the same provider listing but stays quiet.
    let mut restarted = EmailMonitor::new(
        dal.clone(),
        mailbox.clone(),
        &state_path,
        OWN_ADDRESS,
        Duration::from_secs(30),
    );
    assert_eq!(restarted.check_once().await, 0);
    assert_eq!(mailbox.replies.lock().expect("lock poisoned").len(), 1);
}

#[tokio::test]
async fn test_sent_folder_and_self_mail_are_skipped() {
    let store = TestStore::init().await;
    let dal = store.dal();

    let mut own = inbound("m-own", OWN_ADDRESS, "note to self");
    own.folder = "inbox".to_string();
    let mut sent = inbound("m-sent", "someone@example.com", "our reply");
    sent.folder = "sent".to_string();

    let mailbox = Arc::new(FakeMailbox::new(vec![own, sent]));
    let mut monitor = EmailMonitor::new(
        dal.clone(),
        mailbox.clone(),
        store.dir().join("email-state.json"),
        OWN_ADDRESS,
        Duration::from_secs(30),
    );

    // The self-addressed message still counts as processed (logged, no
    // reply); the sent-folder message is silently recorded.
    assert_eq!(monitor.check_once().await, 1);
    assert!(mailbox.replies.lock().expect("lock poisoned").is_empty());

    let pending = dal
        .notification_queue()
        .dequeue_unprocessed()
        .await
        .expect("dequeue should succeed");
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].dedup_key, "email_received:m-own");
}
