//! Client modules for the remote queue

pub mod credentials;
pub mod sqs_client;

pub use credentials::AwsCredentials;
pub use sqs_client::{QueueClient, SqsClientFactory};
