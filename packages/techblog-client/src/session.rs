//! Session state shared by every component that talks to the backend.
//!
//! A [`Session`] is created once at application start and cloned into
//! whatever needs it. Clones share the same state. Logging out clears it in
//! place, so existing clones observe the unauthenticated state immediately.

use chrono::{DateTime, TimeDelta, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::id::UserId;
use crate::types::User;

/// Realm role names carried in the access token.
pub mod roles {
    pub const ADMINISTRATOR: &str = "administrator";
    pub const LOGGED_USER: &str = "logged_user";
    pub const REVIEWER: &str = "reviewer";
}

/// A token with its lifetime in seconds, as handed out by the identity service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token: String,
    pub expires_in: i64,
}

impl Token {
    pub fn new(token: impl Into<String>, expires_in: i64) -> Self {
        Self {
            token: token.into(),
            expires_in,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub access_token: Option<String>,
    pub access_token_expires_at: Option<DateTime<Utc>>,
    pub refresh_token: Option<String>,
    pub refresh_token_expires_at: Option<DateTime<Utc>>,
    pub authenticated: bool,
    pub username: String,
    pub roles: Vec<String>,
    /// Application-service profile of the logged-in user
    pub user: Option<User>,
}

impl SessionState {
    pub fn viewer(&self) -> Viewer {
        Viewer {
            user_id: self.user.as_ref().map(|u| u.id),
            roles: self.roles.clone(),
        }
    }

    pub fn access_token_expired(&self, now: DateTime<Utc>) -> bool {
        self.access_token_expires_at.is_some_and(|at| at <= now)
    }

    pub fn refresh_token_expired(&self, now: DateTime<Utc>) -> bool {
        self.refresh_token_expires_at.is_some_and(|at| at <= now)
    }
}

/// Who is looking at the page. Used for display-layer authorization gates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewer {
    pub user_id: Option<UserId>,
    pub roles: Vec<String>,
}

impl Viewer {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn new(user_id: UserId, roles: &[&str]) -> Self {
        Self {
            user_id: Some(user_id),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(roles::ADMINISTRATOR)
    }

    pub fn is(&self, user_id: UserId) -> bool {
        self.user_id == Some(user_id)
    }
}

/// Shared handle to the session state.
#[derive(Clone, Default)]
pub struct Session {
    state: Arc<RwLock<SessionState>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// Current access token, read at call time by the authenticated client.
    pub async fn access_token(&self) -> Option<String> {
        self.state.read().await.access_token.clone()
    }

    pub async fn refresh_token(&self) -> Option<String> {
        self.state.read().await.refresh_token.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.authenticated
    }

    pub async fn viewer(&self) -> Viewer {
        self.state.read().await.viewer()
    }

    pub async fn user_id(&self) -> Option<UserId> {
        self.state.read().await.user.as_ref().map(|u| u.id)
    }

    /// Store the access token. Holding one is what makes the session
    /// authenticated.
    pub async fn set_access_token(&self, token: Token) {
        let mut state = self.state.write().await;
        state.access_token = Some(token.token);
        state.access_token_expires_at = expires_at(Utc::now(), token.expires_in);
        state.authenticated = true;
    }

    pub async fn set_refresh_token(&self, token: Token) {
        let mut state = self.state.write().await;
        state.refresh_token = Some(token.token);
        state.refresh_token_expires_at = expires_at(Utc::now(), token.expires_in);
    }

    pub async fn set_roles(&self, roles: Vec<String>) {
        self.state.write().await.roles = roles;
    }

    pub async fn set_username(&self, username: impl Into<String>) {
        self.state.write().await.username = username.into();
    }

    pub async fn set_user(&self, user: User) {
        self.state.write().await.user = Some(user);
    }

    /// Reset every field to the unauthenticated state. Returns the refresh
    /// token that was held, so the caller can invalidate it server-side.
    pub async fn clear(&self) -> Option<String> {
        let mut state = self.state.write().await;
        let refresh_token = state.refresh_token.take();
        *state = SessionState::default();
        refresh_token
    }
}

/// `None` when the lifetime does not fit a timestamp; such a token is
/// treated as not expiring.
fn expires_at(now: DateTime<Utc>, expires_in: i64) -> Option<DateTime<Utc>> {
    TimeDelta::try_seconds(expires_in.max(0)).and_then(|lifetime| now.checked_add_signed(lifetime))
}
