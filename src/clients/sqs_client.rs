use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_sqs::Client as SqsClient;
use aws_sdk_sqs::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_sqs::operation::send_message::SendMessageError;
use tracing::{debug, info};

use super::credentials::AwsCredentials;
use crate::core::config::SinkConfig;
use crate::core::models::SendReceipt;
use crate::errors::SendError;

/// Delivers a single message body to a queue.
#[async_trait]
pub trait QueueClient: Send + Sync {
    /// # Errors
    ///
    /// Returns `SendError::Service` if the queue rejected the message and
    /// `SendError::Transport` if the request did not complete.
    async fn send(&self, queue_url: &str, message_body: &str) -> Result<SendReceipt, SendError>;
}

#[async_trait]
impl QueueClient for SqsClient {
    async fn send(&self, queue_url: &str, message_body: &str) -> Result<SendReceipt, SendError> {
        let output = self
            .send_message()
            .queue_url(queue_url)
            .message_body(message_body)
            .send()
            .await
            .map_err(classify)?;

        Ok(SendReceipt {
            message_id: output.message_id().map(str::to_owned),
            md5_of_body: output.md5_of_message_body().map(str::to_owned),
        })
    }
}

fn classify<R>(error: SdkError<SendMessageError, R>) -> SendError
where
    R: std::fmt::Debug + Send + Sync + 'static,
{
    debug!("SQS send_message failed: {}", DisplayErrorContext(&error));
    match error.as_service_error().map(|e| e.code().map(str::to_owned)) {
        Some(code) => SendError::Service {
            code,
            source: Box::new(error),
        },
        None => SendError::Transport {
            source: Box::new(error),
        },
    }
}

/// Builds SQS clients with credentials selected once at construction.
#[derive(Debug, Clone)]
pub struct SqsClientFactory {
    credentials: AwsCredentials,
}

impl SqsClientFactory {
    #[must_use]
    pub fn new(
        access_key: Option<&str>,
        secret_key: Option<&str>,
        session_token: Option<&str>,
    ) -> Self {
        Self {
            credentials: AwsCredentials::select(access_key, secret_key, session_token),
        }
    }

    #[must_use]
    pub fn from_config(config: &SinkConfig) -> Self {
        Self::new(
            config.aws_access_key.as_deref(),
            config.aws_secret_key.as_deref(),
            config.aws_session_token.as_deref(),
        )
    }

    #[must_use]
    pub fn credentials(&self) -> &AwsCredentials {
        &self.credentials
    }

    /// Builds a client bound to `region`. No request is made until the first send.
    pub async fn create_client(&self, region: &str) -> SqsClient {
        let loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(region.to_string()));

        let loader = match self.credentials.to_sdk_credentials() {
            Some(credentials) => {
                debug!(
                    credentials = self.credentials.variant_name(),
                    region, "Creating SQS client with explicit credentials"
                );
                loader.credentials_provider(credentials)
            }
            None => {
                info!(
                    "Either awsAccessKey or awsSecretKey not specified. Will use the default AWS credential provider chain to look for AWS credentials."
                );
                loader
            }
        };

        SqsClient::new(&loader.load().await)
    }
}
