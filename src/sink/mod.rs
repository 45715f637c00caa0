//! Moves events from a channel to the queue, one transaction per event.

pub mod sender;
pub mod transaction;
pub mod worker;

pub use sender::EventSender;
pub use transaction::TransactionScope;
pub use worker::drain;
