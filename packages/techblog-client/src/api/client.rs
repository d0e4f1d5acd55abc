use async_trait::async_trait;
use reqwest::Method;

use super::{AcceptanceApi, ArticleApi, CommentApi, OpinionApi, UserApi};
use crate::error::Result;
use crate::http::AuthenticatedClient;
use crate::id::{AccountId, ArticleId, CommentId, OpinionId, UserId};
use crate::types::{
    AcceptanceKey, Article, Comment, CreateAcceptance, CreateComment, CreateOpinion, Opinion,
    UpdateOpinion, User, VerificationMessage,
};

/// Application service client.
#[derive(Clone)]
pub struct ApiClient {
    http: AuthenticatedClient,
}

impl ApiClient {
    pub fn new(http: AuthenticatedClient) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &AuthenticatedClient {
        &self.http
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl AcceptanceApi for ApiClient {
    async fn create_acceptance(&self, request: &CreateAcceptance) -> Result<()> {
        self.http
            .execute(Method::POST, "/acceptances", Some(request))
            .await
    }

    async fn delete_acceptance(&self, key: &AcceptanceKey) -> Result<()> {
        self.http
            .execute(Method::DELETE, "/acceptances", Some(key))
            .await
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ArticleApi for ApiClient {
    async fn get_article(&self, id: &ArticleId) -> Result<Article> {
        self.http.get_json(&format!("/articles/{}", id)).await
    }

    async fn delete_article(&self, id: &ArticleId) -> Result<()> {
        self.http
            .execute::<()>(Method::DELETE, &format!("/articles/{}", id), None)
            .await
    }

    async fn send_to_verification(&self, id: &ArticleId) -> Result<()> {
        self.http
            .execute::<()>(
                Method::PUT,
                &format!("/articles/{}/send-to-verification", id),
                None,
            )
            .await
    }

    async fn get_verification_message(&self, id: &ArticleId) -> Result<VerificationMessage> {
        self.http
            .get_json(&format!("/articles/{}/verification-message", id))
            .await
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl OpinionApi for ApiClient {
    async fn list_opinions(&self, article_id: &ArticleId) -> Result<Vec<Opinion>> {
        self.http
            .get_json(&format!("/articles/{}/opinions", article_id))
            .await
    }

    async fn create_opinion(&self, request: &CreateOpinion) -> Result<Opinion> {
        self.http.send_json(Method::POST, "/opinions", request).await
    }

    async fn update_opinion(&self, id: OpinionId, request: &UpdateOpinion) -> Result<Opinion> {
        self.http
            .send_json(Method::PUT, &format!("/opinions/{}", id), request)
            .await
    }

    async fn delete_opinion(&self, id: OpinionId) -> Result<()> {
        self.http
            .execute::<()>(Method::DELETE, &format!("/opinions/{}", id), None)
            .await
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CommentApi for ApiClient {
    async fn list_comments(&self, article_id: &ArticleId) -> Result<Vec<Comment>> {
        self.http
            .get_json(&format!("/articles/{}/comments", article_id))
            .await
    }

    async fn create_comment(&self, request: &CreateComment) -> Result<Comment> {
        self.http.send_json(Method::POST, "/comments", request).await
    }

    async fn delete_comment(&self, id: CommentId) -> Result<()> {
        self.http
            .execute::<()>(Method::DELETE, &format!("/comments/{}", id), None)
            .await
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl UserApi for ApiClient {
    async fn get_user(&self, id: UserId) -> Result<User> {
        self.http.get_json(&format!("/users/{}", id)).await
    }

    async fn get_user_by_account(&self, account_id: AccountId) -> Result<User> {
        self.http
            .get_json(&format!("/users/user-account/{}", account_id))
            .await
    }

    async fn set_password(&self, account_id: AccountId, password: &str) -> Result<()> {
        #[derive(serde::Serialize)]
        struct Body<'a> {
            password: &'a str,
        }

        self.http
            .execute(
                Method::PUT,
                &format!("/users/{}/password", account_id),
                Some(&Body { password }),
            )
            .await
    }
}
