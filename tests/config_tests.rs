use std::collections::HashMap;

use sqs_bridge::core::config::{SinkConfig, resolve, resolve_with};
use sqs_bridge::errors::ConfigError;

fn context(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn fake_env(name: &str) -> Option<String> {
    match name {
        "AWS_ACCESS_KEY" => Some("env-access".to_string()),
        "AWS_SECRET_KEY" => Some("env-secret".to_string()),
        "QUEUE" => Some("https://sqs.us-east-1.amazonaws.com/1/q".to_string()),
        _ => None,
    }
}

#[test]
fn test_resolve_passes_literal_values_through() {
    assert_eq!(resolve(Some("AKIDLITERAL")), Some("AKIDLITERAL".to_string()));
}

#[test]
fn test_resolve_blank_values_are_absent() {
    assert_eq!(resolve(None), None);
    assert_eq!(resolve(Some("")), None);
    assert_eq!(resolve(Some("   ")), None);
}

#[test]
fn test_resolve_env_reference() {
    assert_eq!(
        resolve_with(Some("env.AWS_ACCESS_KEY"), fake_env),
        Some("env-access".to_string())
    );
    assert_eq!(resolve_with(Some("env.NOT_SET"), fake_env), None);
    assert_eq!(resolve(Some("env.PATH")), std::env::var("PATH").ok());
}

#[test]
fn test_from_context_resolves_all_keys() {
    let ctx = context(&[
        ("queueUrl", "env.QUEUE"),
        ("region", "us-east-1"),
        ("awsAccessKey", "env.AWS_ACCESS_KEY"),
        ("awsSecretKey", "env.AWS_SECRET_KEY"),
        ("awsSessionToken", "env.AWS_SESSION_TOKEN"),
        ("workers", "3"),
    ]);

    let config = SinkConfig::from_context_with(&ctx, fake_env).unwrap();

    assert_eq!(config.queue_url, "https://sqs.us-east-1.amazonaws.com/1/q");
    assert_eq!(config.region, "us-east-1");
    assert_eq!(config.aws_access_key.as_deref(), Some("env-access"));
    assert_eq!(config.aws_secret_key.as_deref(), Some("env-secret"));
    assert_eq!(config.aws_session_token, None);
    assert_eq!(config.workers, 3);
}

#[test]
fn test_from_context_defaults_workers_to_one() {
    let ctx = context(&[("queueUrl", "https://some-fake/url"), ("region", "us-east-1")]);
    let config = SinkConfig::from_context_with(&ctx, fake_env).unwrap();
    assert_eq!(config.workers, 1);
    assert_eq!(config.aws_access_key, None);
}

#[test]
fn test_from_context_requires_queue_url_and_region() {
    let err = SinkConfig::from_context_with(&context(&[("region", "us-east-1")]), fake_env)
        .unwrap_err();
    assert!(matches!(err, ConfigError::Missing("queueUrl")));

    let err = SinkConfig::from_context_with(&context(&[("queueUrl", "env.QUEUE")]), fake_env)
        .unwrap_err();
    assert!(matches!(err, ConfigError::Missing("region")));

    // An env reference that does not resolve counts as missing.
    let err = SinkConfig::from_context_with(
        &context(&[("queueUrl", "env.NOT_SET"), ("region", "us-east-1")]),
        fake_env,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Missing("queueUrl")));
}

#[test]
fn test_from_context_rejects_bad_worker_count() {
    for workers in ["0", "many", "-1"] {
        let ctx = context(&[
            ("queueUrl", "https://some-fake/url"),
            ("region", "us-east-1"),
            ("workers", workers),
        ]);
        let err = SinkConfig::from_context_with(&ctx, fake_env).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "workers", .. }));
    }
}

#[test]
fn test_config_debug_masks_credentials() {
    let ctx = context(&[
        ("queueUrl", "https://some-fake/url"),
        ("region", "us-east-1"),
        ("awsAccessKey", "AKIDVISIBLE"),
        ("awsSecretKey", "SUPERSECRET"),
    ]);
    let config = SinkConfig::from_context_with(&ctx, fake_env).unwrap();
    let debug = format!("{config:?}");
    assert!(debug.contains("https://some-fake/url"));
    assert!(!debug.contains("AKIDVISIBLE"));
    assert!(!debug.contains("SUPERSECRET"));
}
