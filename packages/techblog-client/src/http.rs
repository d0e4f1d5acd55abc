//! HTTP plumbing shared by the service clients.

use reqwest::{Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::session::Session;

/// HTTP client bound to a base URL and a session.
///
/// The bearer token is looked up in the session on every request, so a
/// login or logout takes effect for the next call without anyone having to
/// reconfigure the client.
#[derive(Clone)]
pub struct AuthenticatedClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl AuthenticatedClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, session: Session) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Start a request, attaching the session's current access token if any.
    pub async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "Request");

        let req = self.http.request(method, url);
        match self.session.access_token().await {
            Some(token) if !token.is_empty() => req.bearer_auth(token),
            _ => req,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self.request(Method::GET, path).await.send().await?;
        let resp = ensure_success(resp).await?;
        Ok(resp.json().await?)
    }

    pub async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self.request(method, path).await.json(body).send().await?;
        let resp = ensure_success(resp).await?;
        Ok(resp.json().await?)
    }

    /// Send a request whose response body is ignored.
    pub async fn execute<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let mut req = self.request(method, path).await;
        if let Some(body) = body {
            req = req.json(body);
        }
        let resp = req.send().await?;
        ensure_success(resp).await?;
        Ok(())
    }
}

/// Turn a non-2xx response into [`ClientError::Api`] carrying the body text.
pub(crate) async fn ensure_success(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    debug!(status = status.as_u16(), body = %body, "Request failed");
    Err(ClientError::Api {
        status: status.as_u16(),
        message: body,
    })
}
