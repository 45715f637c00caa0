// Entry point for the sqs-bridge binary: stdin lines in, SQS messages out.

use std::io::{self, BufRead};
use std::sync::Arc;

use anyhow::Context;
use sqs_bridge::channel::MemoryChannel;
use sqs_bridge::clients::SqsClientFactory;
use sqs_bridge::core::config::SinkConfig;
use sqs_bridge::core::models::Event;
use sqs_bridge::EventSender;
use sqs_bridge::sink::drain;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    sqs_bridge::setup_logging();

    let config = SinkConfig::from_env().context("Failed to load bridge configuration")?;
    info!(?config, "Starting SQS bridge");

    let factory = SqsClientFactory::from_config(&config);
    let sender = Arc::new(
        EventSender::from_factory(&factory, config.queue_url.clone(), config.region.clone()).await,
    );

    let channel = Arc::new(MemoryChannel::new());
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read event from stdin")?;
        channel.put(Event::new(line))?;
    }
    info!(
        events = channel.len(),
        workers = config.workers,
        "Loaded events from stdin"
    );

    let handles: Vec<_> = (0..config.workers)
        .map(|worker| {
            let sender = Arc::clone(&sender);
            let channel = Arc::clone(&channel);
            tokio::spawn(async move { drain(worker, &sender, &channel).await })
        })
        .collect();

    let mut delivered = 0;
    let mut failed = 0;
    for handle in handles {
        match handle.await.context("Worker task panicked")? {
            Ok(count) => delivered += count,
            Err(e) => {
                error!("Worker stopped: {}", e);
                failed += 1;
            }
        }
    }

    println!(
        "Delivered {} event(s), {} left in channel",
        delivered,
        channel.len()
    );

    if failed > 0 {
        anyhow::bail!("{failed} worker(s) stopped before the channel was drained");
    }
    if !channel.is_empty() {
        anyhow::bail!("{} event(s) were left undelivered", channel.len());
    }
    Ok(())
}
