//! Frontend configuration.
//!
//! Runtime environment first (native dev builds with a `.env`), then the
//! values baked in at compile time, then local defaults.

use anyhow::Result;
use std::time::Duration;
use techblog_client::ClientConfig;

const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_IDENTITY_URL: &str = "http://localhost:8180";

pub fn client_config() -> ClientConfig {
    match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::debug!(error = %e, "Runtime configuration unavailable, using build-time values");
            build_time_config()
        }
    }
}

fn build_time_config() -> ClientConfig {
    let mut config = ClientConfig::new(
        option_env!("TECHBLOG_API_URL").unwrap_or(DEFAULT_API_URL),
        option_env!("TECHBLOG_IDENTITY_URL").unwrap_or(DEFAULT_IDENTITY_URL),
    );
    if let Some(realm) = option_env!("TECHBLOG_REALM") {
        config = config.with_realm(realm);
    }
    if let Some(client_id) = option_env!("TECHBLOG_CLIENT_ID") {
        config = config.with_client_id(client_id);
    }
    if let Some(secs) = option_env!("TECHBLOG_HTTP_TIMEOUT_SECS").and_then(|s| s.parse().ok()) {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    config
}

/// Build the shared client, or explain why it could not be built.
pub fn build_client() -> Result<techblog_client::TechblogClient> {
    Ok(techblog_client::TechblogClient::new(client_config())?)
}
