use std::collections::HashMap;
use std::env;

use crate::errors::ConfigError;

pub const QUEUE_URL_KEY: &str = "queueUrl";
pub const REGION_KEY: &str = "region";
pub const AWS_ACCESS_KEY_KEY: &str = "awsAccessKey";
pub const AWS_SECRET_KEY_KEY: &str = "awsSecretKey";
pub const AWS_SESSION_TOKEN_KEY: &str = "awsSessionToken";
pub const WORKERS_KEY: &str = "workers";

const ENV_PREFIX: &str = "env.";

/// Resolves a configured value against the process environment.
///
/// `env.NAME` reads the environment variable `NAME`; any other value is
/// returned unchanged. Blank or absent values resolve to `None`.
#[must_use]
pub fn resolve(value: Option<&str>) -> Option<String> {
    resolve_with(value, |name| env::var(name).ok())
}

/// Same as [`resolve`], with the environment lookup supplied by the caller.
pub fn resolve_with<F>(value: Option<&str>, lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let value = value.filter(|v| !v.trim().is_empty())?;
    match value.strip_prefix(ENV_PREFIX) {
        Some(name) => lookup(name),
        None => Some(value.to_string()),
    }
}

#[derive(Clone)]
pub struct SinkConfig {
    pub queue_url: String,
    pub region: String,
    pub aws_access_key: Option<String>,
    pub aws_secret_key: Option<String>,
    pub aws_session_token: Option<String>,
    pub workers: usize,
}

// Credentials are masked so the config can be logged.
impl std::fmt::Debug for SinkConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mask = |v: &Option<String>| v.as_ref().map(|_| "***");
        f.debug_struct("SinkConfig")
            .field("queue_url", &self.queue_url)
            .field("region", &self.region)
            .field("aws_access_key", &mask(&self.aws_access_key))
            .field("aws_secret_key", &mask(&self.aws_secret_key))
            .field("aws_session_token", &mask(&self.aws_session_token))
            .field("workers", &self.workers)
            .finish()
    }
}

impl SinkConfig {
    /// Builds the config from a key/value context, resolving `env.` references.
    ///
    /// # Errors
    ///
    /// Returns an error if `queueUrl` or `region` is missing, or `workers` is
    /// not a positive integer.
    pub fn from_context(context: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_context_with(context, |name| env::var(name).ok())
    }

    /// # Errors
    ///
    /// See [`SinkConfig::from_context`].
    pub fn from_context_with<F>(
        context: &HashMap<String, String>,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| resolve_with(context.get(key).map(String::as_str), &lookup);

        let workers = match get(WORKERS_KEY) {
            None => 1,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: WORKERS_KEY,
                        value: raw,
                    });
                }
            },
        };

        Ok(Self {
            queue_url: get(QUEUE_URL_KEY).ok_or(ConfigError::Missing(QUEUE_URL_KEY))?,
            region: get(REGION_KEY).ok_or(ConfigError::Missing(REGION_KEY))?,
            aws_access_key: get(AWS_ACCESS_KEY_KEY),
            aws_secret_key: get(AWS_SECRET_KEY_KEY),
            aws_session_token: get(AWS_SESSION_TOKEN_KEY),
            workers,
        })
    }

    /// Reads the bridge settings from `SQS_QUEUE_URL`, `SQS_REGION` (or
    /// `AWS_REGION`), `SQS_BRIDGE_WORKERS` and the `AWS_ACCESS_KEY`,
    /// `AWS_SECRET_KEY`, `AWS_SESSION_TOKEN` variables.
    ///
    /// # Errors
    ///
    /// See [`SinkConfig::from_context`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_context(&env_context())
    }
}

fn env_context() -> HashMap<String, String> {
    let region = if env::var_os("SQS_REGION").is_some() {
        "env.SQS_REGION"
    } else {
        "env.AWS_REGION"
    };

    [
        (QUEUE_URL_KEY, "env.SQS_QUEUE_URL"),
        (REGION_KEY, region),
        (WORKERS_KEY, "env.SQS_BRIDGE_WORKERS"),
        (AWS_ACCESS_KEY_KEY, "env.AWS_ACCESS_KEY"),
        (AWS_SECRET_KEY_KEY, "env.AWS_SECRET_KEY"),
        (AWS_SESSION_TOKEN_KEY, "env.AWS_SESSION_TOKEN"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
