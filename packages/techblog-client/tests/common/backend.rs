//! In-memory stand-in for the identity and application services.
//!
//! Records every call it receives and fails the operations it is told to
//! fail, so tests can assert both on state and on what went over the wire.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use techblog_client::api::PasswordGrant;
use techblog_client::{
    AcceptanceApi, AcceptanceKey, AccountId, Article, ArticleApi, ArticleId, ClientError, Comment,
    CommentApi, CommentId, CreateAcceptance, CreateComment, CreateOpinion, IdentityApi, Opinion,
    OpinionApi, OpinionId, Result, TokenResponse, UpdateOpinion, User, UserAccount, UserApi,
    UserId, VerificationMessage,
};

/// A request the backend received.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Login { username: String, password: String },
    Refresh(String),
    Logout(String),
    SearchAccounts(String),
    GetAccount(AccountId),
    ResetPassword(AccountId),
    CreateAcceptance(CreateAcceptance),
    DeleteAcceptance(AcceptanceKey),
    GetArticle(ArticleId),
    DeleteArticle(ArticleId),
    SendToVerification(ArticleId),
    GetVerificationMessage(ArticleId),
    ListOpinions(ArticleId),
    CreateOpinion(CreateOpinion),
    UpdateOpinion(OpinionId),
    DeleteOpinion(OpinionId),
    ListComments(ArticleId),
    CreateComment(CreateComment),
    DeleteComment(CommentId),
    GetUser(UserId),
    GetUserByAccount(AccountId),
    SetPassword(AccountId, String),
}

#[derive(Default)]
struct State {
    calls: Vec<Call>,
    /// Operation name -> (status, body)
    failures: HashMap<&'static str, (u16, String)>,
    token: Option<TokenResponse>,
    users: Vec<User>,
    accounts: Vec<UserAccount>,
    articles: Vec<Article>,
    opinions: Vec<Opinion>,
    comments: Vec<Comment>,
    verification_message: Option<VerificationMessage>,
}

#[derive(Default)]
pub struct FakeBackend {
    state: Mutex<State>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokens handed out by login and refresh.
    pub fn with_token(self, token: TokenResponse) -> Self {
        self.state.lock().unwrap().token = Some(token);
        self
    }

    pub fn with_user(self, user: User, account: UserAccount) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.users.push(user);
            state.accounts.push(account);
        }
        self
    }

    /// An identity account with no application profile.
    pub fn with_orphan_account(self, account: UserAccount) -> Self {
        self.state.lock().unwrap().accounts.push(account);
        self
    }

    pub fn with_article(self, article: Article) -> Self {
        self.state.lock().unwrap().articles.push(article);
        self
    }

    pub fn with_opinion(self, opinion: Opinion) -> Self {
        self.state.lock().unwrap().opinions.push(opinion);
        self
    }

    pub fn with_comment(self, comment: Comment) -> Self {
        self.state.lock().unwrap().comments.push(comment);
        self
    }

    pub fn with_verification_message(self, message: &str) -> Self {
        self.state.lock().unwrap().verification_message = Some(VerificationMessage {
            message: message.to_string(),
            creation_date: None,
        });
        self
    }

    /// Make `operation` fail with the given status and body.
    pub fn fail(&self, operation: &'static str, status: u16, body: &str) {
        self.state
            .lock()
            .unwrap()
            .failures
            .insert(operation, (status, body.to_string()));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    fn record(&self, operation: &'static str, call: Call) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        match state.failures.get(operation) {
            Some((status, message)) => Err(ClientError::Api {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn not_found() -> ClientError {
        ClientError::Api {
            status: 404,
            message: String::new(),
        }
    }

    fn token(&self) -> Result<TokenResponse> {
        self.state
            .lock()
            .unwrap()
            .token
            .clone()
            .ok_or_else(Self::not_found)
    }
}

#[async_trait]
impl IdentityApi for FakeBackend {
    async fn login(&self, grant: &PasswordGrant) -> Result<TokenResponse> {
        self.record(
            "login",
            Call::Login {
                username: grant.username.clone(),
                password: grant.password.clone(),
            },
        )?;
        self.token()
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenResponse> {
        self.record("refresh", Call::Refresh(refresh_token.to_string()))?;
        self.token()
    }

    async fn logout(&self, refresh_token: &str) -> Result<()> {
        self.record("logout", Call::Logout(refresh_token.to_string()))
    }

    async fn search_accounts(&self, username: &str) -> Result<Vec<UserAccount>> {
        self.record("search_accounts", Call::SearchAccounts(username.to_string()))?;
        let state = self.state.lock().unwrap();
        Ok(state
            .accounts
            .iter()
            .filter(|a| a.username.contains(username))
            .cloned()
            .collect())
    }

    async fn get_account(&self, account_id: AccountId) -> Result<UserAccount> {
        self.record("get_account", Call::GetAccount(account_id))?;
        let state = self.state.lock().unwrap();
        state
            .accounts
            .iter()
            .find(|a| a.id == account_id)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    async fn reset_password(&self, account_id: AccountId) -> Result<()> {
        self.record("reset_password", Call::ResetPassword(account_id))
    }
}

#[async_trait]
impl AcceptanceApi for FakeBackend {
    async fn create_acceptance(&self, request: &CreateAcceptance) -> Result<()> {
        self.record("create_acceptance", Call::CreateAcceptance(*request))
    }

    async fn delete_acceptance(&self, key: &AcceptanceKey) -> Result<()> {
        self.record("delete_acceptance", Call::DeleteAcceptance(*key))
    }
}

#[async_trait]
impl ArticleApi for FakeBackend {
    async fn get_article(&self, id: &ArticleId) -> Result<Article> {
        self.record("get_article", Call::GetArticle(id.clone()))?;
        let state = self.state.lock().unwrap();
        state
            .articles
            .iter()
            .find(|a| &a.id == id)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    async fn delete_article(&self, id: &ArticleId) -> Result<()> {
        self.record("delete_article", Call::DeleteArticle(id.clone()))?;
        self.state.lock().unwrap().articles.retain(|a| &a.id != id);
        Ok(())
    }

    async fn send_to_verification(&self, id: &ArticleId) -> Result<()> {
        self.record("send_to_verification", Call::SendToVerification(id.clone()))
    }

    async fn get_verification_message(&self, id: &ArticleId) -> Result<VerificationMessage> {
        self.record(
            "get_verification_message",
            Call::GetVerificationMessage(id.clone()),
        )?;
        self.state
            .lock()
            .unwrap()
            .verification_message
            .clone()
            .ok_or_else(Self::not_found)
    }
}

#[async_trait]
impl OpinionApi for FakeBackend {
    async fn list_opinions(&self, article_id: &ArticleId) -> Result<Vec<Opinion>> {
        self.record("list_opinions", Call::ListOpinions(article_id.clone()))?;
        let state = self.state.lock().unwrap();
        Ok(state
            .opinions
            .iter()
            .filter(|o| &o.article_id == article_id)
            .cloned()
            .collect())
    }

    async fn create_opinion(&self, request: &CreateOpinion) -> Result<Opinion> {
        self.record("create_opinion", Call::CreateOpinion(request.clone()))?;
        let mut state = self.state.lock().unwrap();
        let id = OpinionId::new(100 + state.opinions.len() as i64);
        let opinion = super::fixtures::opinion(id, request.author_id, &request.article_id);
        let opinion = Opinion {
            rating: request.rating,
            content: request.content.clone(),
            positive_acceptances_count: 0,
            negative_acceptances_count: 0,
            ..opinion
        };
        state.opinions.push(opinion.clone());
        Ok(opinion)
    }

    async fn update_opinion(&self, id: OpinionId, request: &UpdateOpinion) -> Result<Opinion> {
        self.record("update_opinion", Call::UpdateOpinion(id))?;
        let mut state = self.state.lock().unwrap();
        let opinion = state
            .opinions
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(Self::not_found)?;
        opinion.rating = request.rating;
        opinion.content = request.content.clone();
        Ok(opinion.clone())
    }

    async fn delete_opinion(&self, id: OpinionId) -> Result<()> {
        self.record("delete_opinion", Call::DeleteOpinion(id))?;
        self.state.lock().unwrap().opinions.retain(|o| o.id != id);
        Ok(())
    }
}

#[async_trait]
impl CommentApi for FakeBackend {
    async fn list_comments(&self, article_id: &ArticleId) -> Result<Vec<Comment>> {
        self.record("list_comments", Call::ListComments(article_id.clone()))?;
        let state = self.state.lock().unwrap();
        Ok(state
            .comments
            .iter()
            .filter(|c| &c.article_id == article_id)
            .cloned()
            .collect())
    }

    async fn create_comment(&self, request: &CreateComment) -> Result<Comment> {
        self.record("create_comment", Call::CreateComment(request.clone()))?;
        let mut state = self.state.lock().unwrap();
        let id = CommentId::new(500 + state.comments.len() as i64);
        let comment = Comment {
            content: request.content.clone(),
            ..super::fixtures::comment(id, request.author_id, &request.article_id)
        };
        state.comments.push(comment.clone());
        Ok(comment)
    }

    async fn delete_comment(&self, id: CommentId) -> Result<()> {
        self.record("delete_comment", Call::DeleteComment(id))?;
        self.state.lock().unwrap().comments.retain(|c| c.id != id);
        Ok(())
    }
}

#[async_trait]
impl UserApi for FakeBackend {
    async fn get_user(&self, id: UserId) -> Result<User> {
        self.record("get_user", Call::GetUser(id))?;
        let state = self.state.lock().unwrap();
        state
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    async fn get_user_by_account(&self, account_id: AccountId) -> Result<User> {
        self.record("get_user_by_account", Call::GetUserByAccount(account_id))?;
        let state = self.state.lock().unwrap();
        state
            .users
            .iter()
            .find(|u| u.user_account_id == account_id)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    async fn set_password(&self, account_id: AccountId, password: &str) -> Result<()> {
        self.record(
            "set_password",
            Call::SetPassword(account_id, password.to_string()),
        )
    }
}
