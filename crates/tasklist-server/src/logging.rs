//! Tracing subscriber setup.

use anyhow::Context;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Environment;

/// Builds the filter. `RUST_LOG` wins when set; otherwise `level` applies to
/// this crate, the core crate and `tower_http`.
pub fn env_filter(level: &str) -> anyhow::Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => level_filter(level),
    }
}

/// Filter for `level` alone, ignoring `RUST_LOG`. An unknown level is an error.
pub fn level_filter(level: &str) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_new(format!(
        "warn,tasklist_server={level},tasklist_core={level},tower_http={level}"
    ))
    .with_context(|| format!("invalid log level {level:?}"))
}

/// Installs the global subscriber: human-readable in dev, JSON lines elsewhere.
pub fn init(environment: Environment, level: &str) -> anyhow::Result<()> {
    let json = environment.json_logs();
    tracing_subscriber::registry()
        .with(env_filter(level)?)
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .try_init()
        .context("failed to install tracing subscriber")
}
