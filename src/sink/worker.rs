use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{info, warn};

use super::sender::EventSender;
use crate::channel::MemoryChannel;
use crate::clients::QueueClient;
use crate::errors::SinkError;

const MAX_RETRIES: usize = 5;
const INITIAL_BACKOFF_MS: u64 = 100;

/// Runs `transfer_once` until `channel` is empty, retrying delivery failures
/// with jittered exponential backoff.
///
/// A cycle that returns 0 only ends the loop once the channel has nothing
/// left; a skipped empty-body event is not the end of the input.
///
/// # Errors
///
/// Returns the last error once retries are exhausted, or the first
/// non-retryable (channel) error.
pub async fn drain<Q: QueueClient>(
    worker: usize,
    sender: &EventSender<Q>,
    channel: &MemoryChannel,
) -> Result<usize, SinkError> {
    let mut delivered = 0;

    loop {
        let strategy = ExponentialBackoff::from_millis(INITIAL_BACKOFF_MS)
            .map(jitter)
            .take(MAX_RETRIES);
        let sent = RetryIf::spawn(
            strategy,
            move || sender.transfer_once(channel),
            |e: &SinkError| {
                let retry = e.is_retryable();
                if retry {
                    warn!(worker, "Transfer failed, will retry: {}", e);
                }
                retry
            },
        )
        .await?;

        if sent == 0 && channel.is_empty() {
            break;
        }
        delivered += sent;
    }

    info!(worker, delivered, "Worker finished");
    Ok(delivered)
}
