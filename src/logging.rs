//! Tracing subscriber setup for hosts embedding the editor.

use crate::settings::EditorSettings;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install a formatted subscriber. `RUST_LOG` wins over `default_filter`.
///
/// Fails if the filter is invalid or a global subscriber is already set.
pub fn init(default_filter: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .with_context(|| format!("invalid log filter {default_filter:?}"))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    tracing::debug!("logging initialized");
    Ok(())
}

/// Install the subscriber with the filter from `settings`.
pub fn init_from_settings(settings: &EditorSettings) -> Result<()> {
    init(&settings.log_filter)
}
