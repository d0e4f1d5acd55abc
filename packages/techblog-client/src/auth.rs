//! Login, logout, token refresh and first-login password setup.

use thiserror::Error;
use tracing::{info, warn};

use crate::api::{IdentityApi, PasswordGrant, UserApi};
use crate::article::Navigation;
use crate::error::{ClientError, Result};
use crate::notification::Notifier;
use crate::session::{Session, Token};
use crate::token::decode_access_token;
use crate::types::{TokenResponse, User};
use crate::validation::{self, LoginFormErrors};

pub const LOGIN_SUCCESS_MESSAGE: &str = "Logged in successfully";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Login/e-mail or password is incorrect";
pub const PASSWORD_SET_MESSAGE: &str = "Password set";

/// Sent instead of an empty password. Accounts created by an administrator
/// start with this password and must choose their own after logging in.
pub const PLACEHOLDER_PASSWORD: &str = "1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Login or e-mail
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    fn is_first_login(&self) -> bool {
        self.password.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum LoginError {
    #[error("Invalid login form")]
    Invalid(LoginFormErrors),

    #[error(transparent)]
    Rejected(#[from] ClientError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    /// Profile of the logged-in user, if it could be fetched
    pub user: Option<User>,
    pub next: Navigation,
}

/// Authentication flows over an injected session.
pub struct AuthService<'a, I: ?Sized, U: ?Sized> {
    identity: &'a I,
    users: &'a U,
    session: &'a Session,
    notifier: &'a Notifier,
}

impl<'a, I, U> AuthService<'a, I, U>
where
    I: IdentityApi + ?Sized,
    U: UserApi + ?Sized,
{
    pub fn new(identity: &'a I, users: &'a U, session: &'a Session, notifier: &'a Notifier) -> Self {
        Self {
            identity,
            users,
            session,
            notifier,
        }
    }

    pub async fn login(&self, credentials: &Credentials) -> std::result::Result<LoginOutcome, LoginError> {
        validation::validate_login(&credentials.username, &credentials.password)
            .map_err(LoginError::Invalid)?;

        let grant = PasswordGrant {
            username: credentials.username.clone(),
            password: if credentials.is_first_login() {
                PLACEHOLDER_PASSWORD.to_string()
            } else {
                credentials.password.clone()
            },
        };

        let tokens = match self.identity.login(&grant).await {
            Ok(tokens) => tokens,
            Err(e) => {
                if e.is_unauthorized() {
                    self.notifier.error(INVALID_CREDENTIALS_MESSAGE);
                }
                warn!(username = %credentials.username, error = %e, "Login rejected");
                return Err(e.into());
            }
        };

        // Nothing is stored until the token is readable.
        let claims = match decode_access_token(&tokens.access_token) {
            Ok(claims) => claims,
            Err(e) => {
                warn!(username = %credentials.username, error = %e, "Unreadable access token");
                self.notifier.error(e.user_message());
                return Err(e.into());
            }
        };

        self.store_tokens(tokens).await;
        self.session.set_roles(claims.realm_access.roles).await;
        self.notifier.success(LOGIN_SUCCESS_MESSAGE);
        info!(username = %credentials.username, account_id = %claims.sub, "Logged in");

        match self.users.get_user_by_account(claims.sub).await {
            Ok(user) => {
                self.session.set_user(user.clone()).await;
                self.session.set_username(credentials.username.clone()).await;

                let next = if credentials.is_first_login() {
                    Navigation::SetPassword
                } else {
                    Navigation::Stay
                };
                Ok(LoginOutcome {
                    user: Some(user),
                    next,
                })
            }
            Err(e) => {
                // Tokens stay; the profile can be fetched again later.
                warn!(account_id = %claims.sub, error = %e, "Failed to fetch user profile");
                self.notifier.error(e.user_message());
                Ok(LoginOutcome {
                    user: None,
                    next: Navigation::Stay,
                })
            }
        }
    }

    /// Clear the session, then invalidate the refresh token server-side.
    /// The local clear never waits on or depends on the server.
    pub async fn logout(&self) {
        let refresh_token = self.session.clear().await;
        info!("Logged out");

        if let Some(refresh_token) = refresh_token {
            if let Err(e) = self.identity.logout(&refresh_token).await {
                warn!(error = %e, "Refresh token invalidation failed");
            }
        }
    }

    /// Exchange the refresh token for new tokens. A rejected refresh ends
    /// the session.
    pub async fn refresh(&self) -> Result<()> {
        let Some(refresh_token) = self.session.refresh_token().await else {
            return Err(ClientError::Token("No refresh token".into()));
        };

        match self.identity.refresh(&refresh_token).await {
            Ok(tokens) => {
                let claims = decode_access_token(&tokens.access_token)?;
                self.store_tokens(tokens).await;
                self.session.set_roles(claims.realm_access.roles).await;
                info!("Tokens refreshed");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Token refresh failed, clearing session");
                self.session.clear().await;
                Err(e)
            }
        }
    }

    /// Replace the placeholder password after a first login.
    pub async fn set_password(&self, password: &str) -> Result<()> {
        validation::validate_password(password)
            .map_err(|m| ClientError::Validation(m.to_string()))?;

        let Some(account_id) = self
            .session
            .snapshot()
            .await
            .user
            .map(|u| u.user_account_id)
        else {
            return Err(ClientError::Validation("Not logged in".into()));
        };

        match self.users.set_password(account_id, password).await {
            Ok(()) => {
                self.notifier.success(PASSWORD_SET_MESSAGE);
                Ok(())
            }
            Err(e) => {
                self.notifier.error(e.user_message());
                Err(e)
            }
        }
    }

    async fn store_tokens(&self, tokens: TokenResponse) {
        self.session
            .set_refresh_token(Token::new(tokens.refresh_token, tokens.refresh_expires_in))
            .await;
        self.session
            .set_access_token(Token::new(tokens.access_token, tokens.expires_in))
            .await;
    }
}
