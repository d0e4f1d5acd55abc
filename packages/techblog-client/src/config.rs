use std::env;
use std::time::Duration;

use crate::error::{ClientError, Result};

pub const DEFAULT_REALM: &str = "techblog";
pub const DEFAULT_CLIENT_ID: &str = "techblog-frontend";

/// Client configuration: where the two backend services live.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Application service base URL, e.g. `http://localhost:8080/api`
    pub api_url: String,
    /// Identity provider base URL, e.g. `http://localhost:8180`
    pub identity_url: String,
    pub realm: String,
    pub client_id: String,
    /// Overrides the transport default when set
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>, identity_url: impl Into<String>) -> Self {
        Self {
            api_url: trim_url(api_url.into()),
            identity_url: trim_url(identity_url.into()),
            realm: DEFAULT_REALM.to_string(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            timeout: None,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let api_url = env::var("TECHBLOG_API_URL")
            .map_err(|_| ClientError::Config("TECHBLOG_API_URL must be set".into()))?;
        let identity_url = env::var("TECHBLOG_IDENTITY_URL")
            .map_err(|_| ClientError::Config("TECHBLOG_IDENTITY_URL must be set".into()))?;

        let mut config = Self::new(api_url, identity_url);

        if let Ok(realm) = env::var("TECHBLOG_REALM") {
            config = config.with_realm(realm);
        }
        if let Ok(client_id) = env::var("TECHBLOG_CLIENT_ID") {
            config = config.with_client_id(client_id);
        }
        if let Ok(secs) = env::var("TECHBLOG_HTTP_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                ClientError::Config("TECHBLOG_HTTP_TIMEOUT_SECS must be a valid number".into())
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn with_realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = realm.into();
        self
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// OpenID Connect token endpoint (password and refresh grants).
    pub fn token_endpoint(&self) -> String {
        format!(
            "{}/realms/{}/protocol/openid-connect/token",
            self.identity_url, self.realm
        )
    }

    pub fn logout_endpoint(&self) -> String {
        format!(
            "{}/realms/{}/protocol/openid-connect/logout",
            self.identity_url, self.realm
        )
    }

    /// Base for the identity provider's admin REST API.
    pub fn admin_url(&self) -> String {
        format!("{}/admin/realms/{}", self.identity_url, self.realm)
    }

    pub(crate) fn http_client(&self) -> Result<reqwest::Client> {
        let builder = apply_timeout(reqwest::Client::builder(), self.timeout);
        Ok(builder.build()?)
    }
}

fn trim_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_timeout(
    builder: reqwest::ClientBuilder,
    timeout: Option<Duration>,
) -> reqwest::ClientBuilder {
    match timeout {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    }
}

// The browser fetch backend has no client-wide timeout.
#[cfg(target_arch = "wasm32")]
fn apply_timeout(
    builder: reqwest::ClientBuilder,
    _timeout: Option<Duration>,
) -> reqwest::ClientBuilder {
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_realm_scoped() {
        let config = ClientConfig::new("http://localhost:8080/api/", "http://localhost:8180/")
            .with_realm("blog");

        assert_eq!(config.api_url, "http://localhost:8080/api");
        assert_eq!(
            config.token_endpoint(),
            "http://localhost:8180/realms/blog/protocol/openid-connect/token"
        );
        assert_eq!(
            config.logout_endpoint(),
            "http://localhost:8180/realms/blog/protocol/openid-connect/logout"
        );
        assert_eq!(config.admin_url(), "http://localhost:8180/admin/realms/blog");
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("http://api", "http://idp");
        assert_eq!(config.realm, DEFAULT_REALM);
        assert_eq!(config.client_id, DEFAULT_CLIENT_ID);
        assert!(config.timeout.is_none());
    }
}
