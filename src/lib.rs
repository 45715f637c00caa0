/// SQS bridge - drains events from a transactional channel into an Amazon SQS queue.
///
/// Each transfer cycle opens a channel transaction, takes at most one event,
/// sends its body to the queue and commits only once SQS has accepted the
/// message. Any failure rolls the transaction back so the channel offers the
/// same event again on a later cycle.
///
/// # Architecture
///
/// The crate is organised around:
/// - `channel` - the transactional channel seam and an in-memory channel
/// - `clients` - credential selection and the SQS client
/// - `sink` - the `EventSender` transfer cycle
/// - `core` - configuration and event types
///
/// # Example
///
/// ```no_run
/// use sqs_bridge::channel::MemoryChannel;
/// use sqs_bridge::clients::SqsClientFactory;
/// use sqs_bridge::core::models::Event;
/// use sqs_bridge::sink::EventSender;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     sqs_bridge::setup_logging();
///
///     // No explicit credentials: the default provider chain is used.
///     let factory = SqsClientFactory::new(None, None, None);
///     let sender = EventSender::from_factory(
///         &factory,
///         "https://sqs.us-east-1.amazonaws.com/123456789012/events",
///         "us-east-1",
///     )
///     .await;
///
///     let channel = MemoryChannel::new();
///     channel.put(Event::new("hello"))?;
///
///     let delivered = sender.transfer_once(&channel).await?;
///     println!("Delivered {delivered} event(s)");
///     Ok(())
/// }
/// ```
pub mod channel;
pub mod clients;
pub mod core;
pub mod errors;
pub mod sink;

pub use errors::{SendError, SinkError};
pub use sink::EventSender;

/// Configure structured logging with JSON format.
///
/// Sets up tracing-subscriber with a JSON formatter so each transfer cycle
/// is logged as one structured record. Calling it more than once is harmless;
/// only the first call installs the subscriber.
///
/// # Example
///
/// ```
/// sqs_bridge::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
