use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::{Channel, Transaction};
use crate::core::models::Event;
use crate::errors::ChannelError;

/// In-process FIFO channel.
///
/// Events taken inside a transaction stay owned by that transaction until it
/// commits; a rollback puts them back at the head of the queue in their
/// original order.
#[derive(Debug, Default)]
pub struct MemoryChannel {
    queue: Mutex<VecDeque<Event>>,
    capacity: Option<usize>,
    commits: AtomicUsize,
    rollbacks: AtomicUsize,
}

impl MemoryChannel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::default()
        }
    }

    /// Appends an event to the tail of the queue.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel is at capacity.
    pub fn put(&self, event: Event) -> Result<(), ChannelError> {
        let mut queue = self.lock();
        if self.capacity.is_some_and(|cap| queue.len() >= cap) {
            return Err(ChannelError::Full(queue.len()));
        }
        queue.push_back(event);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    #[must_use]
    pub fn commit_count(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn rollback_count(&self) -> usize {
        self.rollbacks.load(Ordering::SeqCst)
    }

    // Every mutation is a single push or pop, so a poisoned queue is still consistent.
    fn lock(&self) -> MutexGuard<'_, VecDeque<Event>> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Channel for MemoryChannel {
    fn begin_transaction(&self) -> Result<Box<dyn Transaction + '_>, ChannelError> {
        Ok(Box::new(MemoryTransaction {
            channel: self,
            taken: Vec::new(),
        }))
    }
}

struct MemoryTransaction<'a> {
    channel: &'a MemoryChannel,
    taken: Vec<Event>,
}

impl Transaction for MemoryTransaction<'_> {
    fn take(&mut self) -> Result<Option<Event>, ChannelError> {
        let event = self.channel.lock().pop_front();
        if let Some(event) = &event {
            self.taken.push(event.clone());
        }
        Ok(event)
    }

    fn commit(&mut self) -> Result<(), ChannelError> {
        self.taken.clear();
        self.channel.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn rollback(&mut self) -> Result<(), ChannelError> {
        let mut queue = self.channel.lock();
        for event in self.taken.drain(..).rev() {
            queue.push_front(event);
        }
        drop(queue);
        self.channel.rollbacks.fetch_add(1, Ordering::SeqCst);
        debug!("Rolled back memory channel transaction");
        Ok(())
    }
}
