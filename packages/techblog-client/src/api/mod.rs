//! Service traits.
//!
//! The state machines in this crate talk to the backend only through these
//! traits. [`ApiClient`] and [`IdentityClient`](crate::IdentityClient)
//! implement them over HTTP; tests implement them in memory.
//!
//! Browser futures are not `Send`, so on wasm the traits drop that bound.

mod client;

pub use client::ApiClient;

use async_trait::async_trait;

use crate::error::Result;
use crate::id::{AccountId, ArticleId, CommentId, OpinionId, UserId};
use crate::types::{
    AcceptanceKey, Article, Comment, CreateAcceptance, CreateComment, CreateOpinion, Opinion,
    TokenResponse, UpdateOpinion, User, UserAccount, VerificationMessage,
};

/// Username/password pair sent to the token endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordGrant {
    pub username: String,
    pub password: String,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AcceptanceApi {
    async fn create_acceptance(&self, request: &CreateAcceptance) -> Result<()>;

    async fn delete_acceptance(&self, key: &AcceptanceKey) -> Result<()>;
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ArticleApi {
    async fn get_article(&self, id: &ArticleId) -> Result<Article>;

    async fn delete_article(&self, id: &ArticleId) -> Result<()>;

    async fn send_to_verification(&self, id: &ArticleId) -> Result<()>;

    async fn get_verification_message(&self, id: &ArticleId) -> Result<VerificationMessage>;
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait OpinionApi {
    async fn list_opinions(&self, article_id: &ArticleId) -> Result<Vec<Opinion>>;

    async fn create_opinion(&self, request: &CreateOpinion) -> Result<Opinion>;

    async fn update_opinion(&self, id: OpinionId, request: &UpdateOpinion) -> Result<Opinion>;

    async fn delete_opinion(&self, id: OpinionId) -> Result<()>;
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait CommentApi {
    /// Oldest first.
    async fn list_comments(&self, article_id: &ArticleId) -> Result<Vec<Comment>>;

    async fn create_comment(&self, request: &CreateComment) -> Result<Comment>;

    async fn delete_comment(&self, id: CommentId) -> Result<()>;
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait UserApi {
    async fn get_user(&self, id: UserId) -> Result<User>;

    async fn get_user_by_account(&self, account_id: AccountId) -> Result<User>;

    async fn set_password(&self, account_id: AccountId, password: &str) -> Result<()>;
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait IdentityApi {
    /// Resource-owner password grant. Never carries a bearer token.
    async fn login(&self, grant: &PasswordGrant) -> Result<TokenResponse>;

    async fn refresh(&self, refresh_token: &str) -> Result<TokenResponse>;

    /// Invalidate a refresh token server-side.
    async fn logout(&self, refresh_token: &str) -> Result<()>;

    async fn search_accounts(&self, username: &str) -> Result<Vec<UserAccount>>;

    async fn get_account(&self, account_id: AccountId) -> Result<UserAccount>;

    /// Force a password reset for an account (admin action).
    async fn reset_password(&self, account_id: AccountId) -> Result<()>;
}
