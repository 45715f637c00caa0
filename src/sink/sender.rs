use aws_sdk_sqs::Client as SqsClient;
use tracing::{debug, error, info, warn};

use super::transaction::TransactionScope;
use crate::channel::Channel;
use crate::clients::{QueueClient, SqsClientFactory};
use crate::errors::SinkError;

/// Forwards channel events to one SQS queue, one event per transaction.
///
/// The sender holds no per-cycle state, so a single instance can be shared by
/// any number of workers calling [`EventSender::transfer_once`].
#[derive(Debug)]
pub struct EventSender<Q> {
    client: Q,
    queue_url: String,
    region: String,
}

impl EventSender<SqsClient> {
    /// Builds the SQS client through `factory` and binds it to the queue.
    pub async fn from_factory(
        factory: &SqsClientFactory,
        queue_url: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        let region = region.into();
        let client = factory.create_client(&region).await;
        Self::new(client, queue_url, region)
    }
}

impl<Q: QueueClient> EventSender<Q> {
    pub fn new(client: Q, queue_url: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            client,
            queue_url: queue_url.into(),
            region: region.into(),
        }
    }

    #[must_use]
    pub fn queue_url(&self) -> &str {
        &self.queue_url
    }

    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    #[must_use]
    pub fn client(&self) -> &Q {
        &self.client
    }

    /// Moves at most one event from `channel` to the queue.
    ///
    /// Returns 1 when an event was delivered and committed, 0 when the channel
    /// was empty or the event body was empty (the transaction is committed in
    /// both cases and nothing is sent).
    ///
    /// # Errors
    ///
    /// Returns `SinkError::DeliveryFailed` if the queue rejected the message or
    /// the request did not complete; the transaction has been rolled back and
    /// the channel will offer the same event again. Returns
    /// `SinkError::Channel` if the channel itself failed.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(queue_url = %self.queue_url, region = %self.region)
    )]
    pub async fn transfer_once<C>(&self, channel: &C) -> Result<usize, SinkError>
    where
        C: Channel + ?Sized,
    {
        let mut tx = TransactionScope::begin(channel)?;

        let event = match tx.take()? {
            Some(event) if !event.is_empty() => event,
            Some(_) => {
                debug!("Skipping event with empty body");
                tx.commit()?;
                return Ok(0);
            }
            None => {
                debug!("No event available in channel");
                tx.commit()?;
                return Ok(0);
            }
        };

        let message_body = event.body_text();

        #[cfg(feature = "debug-logs")]
        debug!("Sending message body: {}", message_body);

        #[cfg(not(feature = "debug-logs"))]
        debug!("Sending message of {} bytes", message_body.len());

        match self.client.send(&self.queue_url, &message_body).await {
            Ok(receipt) => {
                tx.commit()?;
                info!(
                    message_id = receipt.message_id.as_deref().unwrap_or("<none>"),
                    "Delivered event to SQS"
                );
                Ok(1)
            }
            Err(cause) => {
                warn!(
                    failure = %cause.kind(),
                    code = cause.code().unwrap_or("<none>"),
                    "Failed to deliver event to SQS, rolling back: {}",
                    cause
                );
                if let Err(e) = tx.rollback() {
                    error!("Rollback after delivery failure also failed: {}", e);
                }
                Err(SinkError::DeliveryFailed(cause))
            }
        }
    }
}
