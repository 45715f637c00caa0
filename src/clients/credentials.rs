//! Credential selection for the SQS client.

use aws_credential_types::Credentials;

const PROVIDER_NAME: &str = "SqsBridgeConfig";

/// Credentials to build the queue client with, chosen once per client.
#[derive(Clone, PartialEq, Eq)]
pub enum AwsCredentials {
    /// Temporary credentials: key pair plus session token.
    Session {
        access_key: String,
        secret_key: String,
        session_token: String,
    },
    /// Long-lived key pair.
    Static {
        access_key: String,
        secret_key: String,
    },
    /// Nothing explicit was configured; the SDK default provider chain resolves credentials.
    DefaultChain,
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl AwsCredentials {
    /// Picks the credential variant from the configured values.
    ///
    /// All three present selects `Session`, a key pair alone selects `Static`,
    /// and anything else falls back to `DefaultChain`. Blank values count as absent.
    #[must_use]
    pub fn select(
        access_key: Option<&str>,
        secret_key: Option<&str>,
        session_token: Option<&str>,
    ) -> Self {
        match (
            present(access_key),
            present(secret_key),
            present(session_token),
        ) {
            (Some(access_key), Some(secret_key), Some(session_token)) => AwsCredentials::Session {
                access_key: access_key.to_string(),
                secret_key: secret_key.to_string(),
                session_token: session_token.to_string(),
            },
            (Some(access_key), Some(secret_key), None) => AwsCredentials::Static {
                access_key: access_key.to_string(),
                secret_key: secret_key.to_string(),
            },
            _ => AwsCredentials::DefaultChain,
        }
    }

    #[must_use]
    pub fn variant_name(&self) -> &'static str {
        match self {
            AwsCredentials::Session { .. } => "session",
            AwsCredentials::Static { .. } => "static",
            AwsCredentials::DefaultChain => "default-chain",
        }
    }

    /// Explicit SDK credentials, or `None` for the default chain.
    #[must_use]
    pub fn to_sdk_credentials(&self) -> Option<Credentials> {
        match self {
            AwsCredentials::Session {
                access_key,
                secret_key,
                session_token,
            } => Some(Credentials::new(
                access_key,
                secret_key,
                Some(session_token.clone()),
                None,
                PROVIDER_NAME,
            )),
            AwsCredentials::Static {
                access_key,
                secret_key,
            } => Some(Credentials::new(
                access_key,
                secret_key,
                None,
                None,
                PROVIDER_NAME,
            )),
            AwsCredentials::DefaultChain => None,
        }
    }
}

impl std::fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AwsCredentials::Session { access_key, .. } => f
                .debug_struct("Session")
                .field("access_key", access_key)
                .field("secret_key", &"***")
                .field("session_token", &"***")
                .finish(),
            AwsCredentials::Static { access_key, .. } => f
                .debug_struct("Static")
                .field("access_key", access_key)
                .field("secret_key", &"***")
                .finish(),
            AwsCredentials::DefaultChain => f.write_str("DefaultChain"),
        }
    }
}
