use tracing::error;

use crate::channel::{Channel, Transaction};
use crate::core::models::Event;
use crate::errors::ChannelError;

/// An open channel transaction that ends in exactly one commit or rollback.
///
/// `commit` and `rollback` consume the scope. A scope dropped while still
/// open (early `?` return, panic, cancelled future) is rolled back, and so is
/// one whose commit failed.
pub struct TransactionScope<'a> {
    tx: Box<dyn Transaction + 'a>,
    open: bool,
}

impl<'a> TransactionScope<'a> {
    /// # Errors
    ///
    /// Returns an error if the channel cannot open a transaction.
    pub fn begin<C>(channel: &'a C) -> Result<Self, ChannelError>
    where
        C: Channel + ?Sized,
    {
        Ok(Self {
            tx: channel.begin_transaction()?,
            open: true,
        })
    }

    /// # Errors
    ///
    /// Returns an error if the channel fails while reading.
    pub fn take(&mut self) -> Result<Option<Event>, ChannelError> {
        self.tx.take()
    }

    /// # Errors
    ///
    /// Returns the commit failure; the scope is rolled back before returning.
    pub fn commit(mut self) -> Result<(), ChannelError> {
        self.tx.commit()?;
        self.open = false;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the channel could not restore the taken event.
    pub fn rollback(mut self) -> Result<(), ChannelError> {
        self.open = false;
        self.tx.rollback()
    }
}

impl Drop for TransactionScope<'_> {
    fn drop(&mut self) {
        if self.open {
            self.open = false;
            if let Err(e) = self.tx.rollback() {
                error!("Failed to roll back abandoned channel transaction: {}", e);
            }
        }
    }
}
