//! Identity service client (realm-scoped OpenID Connect provider).

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use tracing::debug;

use crate::api::{IdentityApi, PasswordGrant};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{ensure_success, AuthenticatedClient};
use crate::id::AccountId;
use crate::session::Session;
use crate::types::{TokenResponse, UserAccount};

/// Identity service client.
///
/// Token and logout endpoints are called with a bare HTTP client so the
/// bearer header never reaches them; only the admin API goes through the
/// authenticated client.
#[derive(Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    config: ClientConfig,
    admin: AuthenticatedClient,
}

impl IdentityClient {
    pub fn new(http: reqwest::Client, config: ClientConfig, session: Session) -> Self {
        let admin = AuthenticatedClient::new(http.clone(), config.admin_url(), session);
        Self {
            http,
            config,
            admin,
        }
    }

    /// Token endpoint request. Built on the bare client, never the
    /// authenticated one.
    fn token_request(&self, form: &[(&str, &str)]) -> RequestBuilder {
        self.http.post(self.config.token_endpoint()).form(form)
    }

    fn logout_request(&self, refresh_token: &str) -> RequestBuilder {
        self.http.post(self.config.logout_endpoint()).form(&[
            ("client_id", self.config.client_id.as_str()),
            ("refresh_token", refresh_token),
        ])
    }

    async fn exchange(&self, form: &[(&str, &str)]) -> Result<TokenResponse> {
        debug!(url = %self.config.token_endpoint(), "Token request");

        let resp = self.token_request(form).send().await?;
        let resp = ensure_success(resp).await?;
        Ok(resp.json().await?)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl IdentityApi for IdentityClient {
    async fn login(&self, grant: &PasswordGrant) -> Result<TokenResponse> {
        self.exchange(&[
            ("grant_type", "password"),
            ("client_id", self.config.client_id.as_str()),
            ("username", grant.username.as_str()),
            ("password", grant.password.as_str()),
        ])
        .await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenResponse> {
        self.exchange(&[
            ("grant_type", "refresh_token"),
            ("client_id", self.config.client_id.as_str()),
            ("refresh_token", refresh_token),
        ])
        .await
    }

    async fn logout(&self, refresh_token: &str) -> Result<()> {
        let resp = self.logout_request(refresh_token).send().await?;
        ensure_success(resp).await?;
        Ok(())
    }

    async fn search_accounts(&self, username: &str) -> Result<Vec<UserAccount>> {
        let resp = self
            .admin
            .request(Method::GET, "/users")
            .await
            .query(&[("username", username)])
            .send()
            .await?;
        let resp = ensure_success(resp).await?;
        Ok(resp.json().await?)
    }

    async fn get_account(&self, account_id: AccountId) -> Result<UserAccount> {
        self.admin
            .get_json(&format!("/users/{}", account_id))
            .await
    }

    async fn reset_password(&self, account_id: AccountId) -> Result<()> {
        self.admin
            .execute(
                Method::PUT,
                &format!("/users/{}/execute-actions-email", account_id),
                Some(&["UPDATE_PASSWORD"]),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Token;

    async fn logged_in_client() -> IdentityClient {
        let session = Session::new();
        session.set_access_token(Token::new("access", 300)).await;
        IdentityClient::new(
            reqwest::Client::new(),
            ClientConfig::new("http://localhost:8080/api", "http://localhost:8180"),
            session,
        )
    }

    #[tokio::test]
    async fn test_token_requests_never_carry_bearer() {
        let client = logged_in_client().await;

        let request = client
            .token_request(&[("grant_type", "refresh_token"), ("refresh_token", "r")])
            .build()
            .unwrap();

        assert_eq!(
            request.url().as_str(),
            "http://localhost:8180/realms/techblog/protocol/openid-connect/token"
        );
        assert!(request.headers().get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_logout_request_never_carries_bearer() {
        let client = logged_in_client().await;

        let request = client.logout_request("r").build().unwrap();

        assert!(request.url().path().ends_with("/openid-connect/logout"));
        assert!(request.headers().get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_admin_requests_carry_bearer() {
        let client = logged_in_client().await;

        let request = client
            .admin
            .request(Method::GET, "/users")
            .await
            .build()
            .unwrap();

        assert_eq!(request.headers()["authorization"], "Bearer access");
    }
}
