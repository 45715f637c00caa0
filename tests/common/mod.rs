#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use sqs_bridge::channel::{Channel, Transaction};
use sqs_bridge::clients::QueueClient;
use sqs_bridge::core::models::{Event, SendReceipt};
use sqs_bridge::errors::{ChannelError, SendError};

pub const QUEUE_URL: &str = "https://some-fake/url";
pub const REGION: &str = "us-east-1";

/// Queue client that records every send and replays scripted outcomes.
/// Once the script runs out every send succeeds.
#[derive(Default)]
pub struct MockQueueClient {
    script: Mutex<VecDeque<Result<SendReceipt, SendError>>>,
    sent: Mutex<Vec<(String, String)>>,
}

impl MockQueueClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_with(error: SendError) -> Self {
        let client = Self::new();
        client.push_outcome(Err(error));
        client
    }

    pub fn push_outcome(&self, outcome: Result<SendReceipt, SendError>) {
        self.script.lock().unwrap().push_back(outcome);
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn send_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl QueueClient for MockQueueClient {
    async fn send(&self, queue_url: &str, message_body: &str) -> Result<SendReceipt, SendError> {
        self.sent
            .lock()
            .unwrap()
            .push((queue_url.to_string(), message_body.to_string()));
        self.script.lock().unwrap().pop_front().unwrap_or_else(|| {
            Ok(SendReceipt {
                message_id: Some("mock-message-id".to_string()),
                md5_of_body: None,
            })
        })
    }
}

/// Queue client whose sends never complete.
pub struct HangingQueueClient;

#[async_trait]
impl QueueClient for HangingQueueClient {
    async fn send(&self, _queue_url: &str, _message_body: &str) -> Result<SendReceipt, SendError> {
        std::future::pending().await
    }
}

pub fn service_error() -> SendError {
    SendError::Service {
        code: Some("InvalidMessageContents".to_string()),
        source: "Mock service exception".into(),
    }
}

pub fn transport_error() -> SendError {
    SendError::Transport {
        source: "Mock client exception".into(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultAt {
    Begin,
    Take,
    Commit,
    Rollback,
}

/// Single-event channel that fails at a chosen step.
pub struct FaultyChannel {
    fault: FaultAt,
    event: Option<Event>,
    pub rollbacks: AtomicUsize,
    pub commits: AtomicUsize,
}

impl FaultyChannel {
    pub fn new(fault: FaultAt, event: Option<Event>) -> Self {
        Self {
            fault,
            event,
            rollbacks: AtomicUsize::new(0),
            commits: AtomicUsize::new(0),
        }
    }

    pub fn rollback_count(&self) -> usize {
        self.rollbacks.load(Ordering::SeqCst)
    }

    pub fn commit_count(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }
}

impl Channel for FaultyChannel {
    fn begin_transaction(&self) -> Result<Box<dyn Transaction + '_>, ChannelError> {
        if self.fault == FaultAt::Begin {
            return Err(ChannelError::Begin("mock begin failure".to_string()));
        }
        Ok(Box::new(FaultyTransaction { channel: self }))
    }
}

struct FaultyTransaction<'a> {
    channel: &'a FaultyChannel,
}

impl Transaction for FaultyTransaction<'_> {
    fn take(&mut self) -> Result<Option<Event>, ChannelError> {
        if self.channel.fault == FaultAt::Take {
            return Err(ChannelError::Take("mock take failure".to_string()));
        }
        Ok(self.channel.event.clone())
    }

    fn commit(&mut self) -> Result<(), ChannelError> {
        if self.channel.fault == FaultAt::Commit {
            return Err(ChannelError::Commit("mock commit failure".to_string()));
        }
        self.channel.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn rollback(&mut self) -> Result<(), ChannelError> {
        self.channel.rollbacks.fetch_add(1, Ordering::SeqCst);
        if self.channel.fault == FaultAt::Rollback {
            return Err(ChannelError::Rollback("mock rollback failure".to_string()));
        }
        Ok(())
    }
}
