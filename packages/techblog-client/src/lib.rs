//! Techblog platform client.
//!
//! REST access to the identity service and the application service, plus the
//! small amount of client-side state the frontend keeps in sync with them:
//!
//! - [`session`]: access/refresh tokens, roles and the logged-in profile
//! - [`acceptance`]: per-opinion up/down vote reconciliation
//! - [`article`]: article status workflow and two-phase deletion
//! - [`comment`]: discussion threads under articles
//! - [`auth`]: login, logout, token refresh and first-login password setup
//! - [`notification`]: the single transient notification channel
//! - [`users`]: administrative user search, details and password reset
//!
//! # Example
//!
//! ```rust,ignore
//! use techblog_client::{ClientConfig, Credentials, TechblogClient};
//!
//! let client = TechblogClient::new(ClientConfig::from_env()?)?;
//!
//! let outcome = client
//!     .auth()
//!     .login(&Credentials::new("jan", "Secret123"))
//!     .await?;
//!
//! let article = client.api().get_article(&article_id).await?;
//! ```

pub mod acceptance;
pub mod api;
pub mod article;
pub mod auth;
pub mod comment;
pub mod config;
pub mod error;
pub mod http;
pub mod id;
pub mod identity;
pub mod notification;
pub mod opinion;
pub mod session;
pub mod token;
pub mod types;
pub mod users;
pub mod validation;

pub use acceptance::{OpinionVotes, SkipReason, VoteOutcome};
pub use api::{
    AcceptanceApi, ApiClient, ArticleApi, CommentApi, IdentityApi, OpinionApi, UserApi,
};
pub use article::{DeleteOutcome, DeletionConfirmation, Navigation, WorkflowOutcome};
pub use auth::{AuthService, Credentials, LoginError, LoginOutcome};
pub use comment::CommentThread;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use http::AuthenticatedClient;
pub use id::{AccountId, ArticleId, CommentId, Id, OpinionId, UserId};
pub use identity::IdentityClient;
pub use notification::{Notification, Notifier, Severity};
pub use session::{Session, SessionState, Token, Viewer};
pub use types::*;
pub use users::UserRow;

/// Everything the frontend needs, built once at startup and handed to every
/// component that talks to the backend.
///
/// Cloning is cheap: the session, notifier and HTTP connection pools are
/// shared between clones.
#[derive(Clone)]
pub struct TechblogClient {
    config: ClientConfig,
    session: Session,
    notifier: Notifier,
    api: ApiClient,
    identity: IdentityClient,
}

impl TechblogClient {
    /// Build the clients around a fresh, unauthenticated session.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let session = Session::new();
        let http = config.http_client()?;

        let api = ApiClient::new(AuthenticatedClient::new(
            http.clone(),
            config.api_url.clone(),
            session.clone(),
        ));
        let identity = IdentityClient::new(http, config.clone(), session.clone());

        tracing::info!(
            api_url = %config.api_url,
            identity_url = %config.identity_url,
            realm = %config.realm,
            "Techblog client initialized"
        );

        Ok(Self {
            config,
            session,
            notifier: Notifier::new(),
            api,
            identity,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Application service client (articles, opinions, comments, acceptances,
    /// users).
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Identity service client (tokens, account search, password reset).
    pub fn identity(&self) -> &IdentityClient {
        &self.identity
    }

    /// Login/logout flows bound to this client's session and notifier.
    pub fn auth(&self) -> AuthService<'_, IdentityClient, ApiClient> {
        AuthService::new(&self.identity, &self.api, &self.session, &self.notifier)
    }
}
