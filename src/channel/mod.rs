//! Transactional event channel seam.
//!
//! The host owns the channel; the sender only needs to open a transaction,
//! take at most one event from it, and then commit or roll back.

pub mod memory;

pub use memory::MemoryChannel;

use crate::core::models::Event;
use crate::errors::ChannelError;

/// Source of events with transactional take semantics.
pub trait Channel: Send + Sync {
    /// Opens a new transaction. Each call returns an independent scope.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel cannot provide a transaction.
    fn begin_transaction(&self) -> Result<Box<dyn Transaction + '_>, ChannelError>;
}

/// One open channel transaction.
///
/// Events taken inside it are removed for good by `commit` and offered again
/// by `rollback`.
pub trait Transaction: Send {
    /// Takes the next event, or `None` when the channel is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel fails while reading.
    fn take(&mut self) -> Result<Option<Event>, ChannelError>;

    /// # Errors
    ///
    /// Returns an error if the channel cannot make the take durable.
    fn commit(&mut self) -> Result<(), ChannelError>;

    /// # Errors
    ///
    /// Returns an error if the channel cannot restore the taken events.
    fn rollback(&mut self) -> Result<(), ChannelError>;
}
