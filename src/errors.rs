use std::fmt;

use thiserror::Error;

/// Boxed cause carried by queue failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Faults raised by the host channel itself.
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("Failed to begin channel transaction: {0}")]
    Begin(String),

    #[error("Failed to take event from channel: {0}")]
    Take(String),

    #[error("Failed to commit channel transaction: {0}")]
    Commit(String),

    #[error("Failed to roll back channel transaction: {0}")]
    Rollback(String),

    #[error("Channel is full ({0} events)")]
    Full(usize),
}

/// Which side of the queue call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The queue service received the request and rejected it.
    Service,
    /// The request never completed: dispatch, timeout, or an unreadable response.
    Transport,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Service => f.write_str("service"),
            FailureKind::Transport => f.write_str("transport"),
        }
    }
}

/// Failure returned by a [`QueueClient`](crate::clients::QueueClient) send.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("SQS rejected the request: {source}")]
    Service {
        code: Option<String>,
        #[source]
        source: BoxError,
    },

    #[error("SQS request did not complete: {source}")]
    Transport {
        #[source]
        source: BoxError,
    },
}

impl SendError {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            SendError::Service { .. } => FailureKind::Service,
            SendError::Transport { .. } => FailureKind::Transport,
        }
    }

    /// Service error code (e.g. `InvalidMessageContents`) when the queue reported one.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            SendError::Service { code, .. } => code.as_deref(),
            SendError::Transport { .. } => None,
        }
    }
}

/// Error surfaced by [`EventSender::transfer_once`](crate::sink::EventSender::transfer_once).
///
/// Service and transport failures both collapse into `DeliveryFailed`; the
/// original category stays reachable through [`SinkError::failure_kind`].
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to deliver event to SQS: {0}")]
    DeliveryFailed(#[source] SendError),

    #[error("Channel failure: {0}")]
    Channel(#[from] ChannelError),
}

impl SinkError {
    #[must_use]
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            SinkError::DeliveryFailed(cause) => Some(cause.kind()),
            SinkError::Channel(_) => None,
        }
    }

    /// Whether a later cycle can be expected to succeed. When this returns
    /// true the transaction was rolled back, or a rollback was attempted.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, SinkError::DeliveryFailed(_))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required setting: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}
