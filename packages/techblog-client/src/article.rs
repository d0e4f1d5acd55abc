//! Article verification workflow.
//!
//! Status is server-authoritative. The local copy changes only after the
//! server confirms a transition.

use serde::{Deserialize, Serialize};
use std::future::Future;
use tracing::{info, warn};

use crate::api::ArticleApi;
use crate::error::Result;
use crate::id::UserId;
use crate::notification::Notifier;
use crate::session::Viewer;
use crate::types::{Article, VerificationMessage};

pub const SENT_TO_VERIFICATION_MESSAGE: &str = "Article sent to verification";
pub const ARTICLE_DELETED_MESSAGE: &str = "Article deleted";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArticleStatus {
    New,
    AssigningToVerification,
    Verification,
    ExpiredVerification,
    Refused,
    Published,
    Edited,
}

impl ArticleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ArticleStatus::New => "Created",
            ArticleStatus::AssigningToVerification => "Assigning to verification",
            ArticleStatus::Verification => "In verification",
            ArticleStatus::ExpiredVerification => "Verification expired",
            ArticleStatus::Refused => "Refused",
            ArticleStatus::Published => "Published",
            ArticleStatus::Edited => "Edited",
        }
    }

    pub fn can_send_to_verification(&self) -> bool {
        matches!(self, ArticleStatus::New | ArticleStatus::Edited)
    }

    /// A reviewer's message exists once verification has concluded.
    pub fn has_verification_message(&self) -> bool {
        matches!(self, ArticleStatus::Refused | ArticleStatus::Published)
    }
}

/// Where the UI should go after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Stay,
    /// Back to the listing the resource was opened from
    Back,
    /// First-login password setup screen
    SetPassword,
}

/// Display-layer gate for mutating an article (send to verification, edit,
/// delete). The server enforces the real rule.
pub fn can_manage_article(viewer: &Viewer, author_id: UserId) -> bool {
    viewer.user_id.is_some() && (viewer.is(author_id) || viewer.is_admin())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowOutcome {
    Applied,
    /// Transition not available from this status; nothing was sent
    NotAllowed(ArticleStatus),
    Failed,
}

pub async fn send_to_verification<A>(
    api: &A,
    notifier: &Notifier,
    article: &mut Article,
) -> WorkflowOutcome
where
    A: ArticleApi + ?Sized,
{
    if !article.status.can_send_to_verification() {
        warn!(article_id = %article.id, status = ?article.status, "Send to verification not allowed");
        return WorkflowOutcome::NotAllowed(article.status);
    }

    match api.send_to_verification(&article.id).await {
        Ok(()) => {
            article.status = ArticleStatus::AssigningToVerification;
            info!(article_id = %article.id, "Article sent to verification");
            notifier.success(SENT_TO_VERIFICATION_MESSAGE);
            WorkflowOutcome::Applied
        }
        Err(e) => {
            notifier.error(e.user_message());
            WorkflowOutcome::Failed
        }
    }
}

/// Fetch the reviewer's message, or `None` when the status has none.
pub async fn verification_message<A>(
    api: &A,
    article: &Article,
) -> Result<Option<VerificationMessage>>
where
    A: ArticleApi + ?Sized,
{
    if !article.status.has_verification_message() {
        return Ok(None);
    }
    api.get_verification_message(&article.id).await.map(Some)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// `accept` without an open confirmation; nothing was sent
    NotConfirmed,
    Failed,
}

impl DeleteOutcome {
    pub fn navigation(&self) -> Navigation {
        match self {
            DeleteOutcome::Deleted => Navigation::Back,
            _ => Navigation::Stay,
        }
    }
}

/// Two-phase guard in front of a destructive request: open, then accept or
/// cancel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeletionConfirmation {
    open: bool,
}

impl DeletionConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn request(&mut self) {
        self.open = true;
    }

    pub fn cancel(&mut self) {
        self.open = false;
    }

    /// Close the confirmation and issue `delete` if it was open.
    pub async fn accept<F, Fut>(
        &mut self,
        notifier: &Notifier,
        success_message: &str,
        delete: F,
    ) -> DeleteOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        if !std::mem::take(&mut self.open) {
            return DeleteOutcome::NotConfirmed;
        }

        match delete().await {
            Ok(()) => {
                notifier.success(success_message);
                DeleteOutcome::Deleted
            }
            Err(e) => {
                notifier.error(e.user_message());
                DeleteOutcome::Failed
            }
        }
    }
}

/// Confirmed article deletion. On success the caller navigates
/// [`Navigation::Back`].
pub async fn delete_article<A>(
    api: &A,
    notifier: &Notifier,
    confirmation: &mut DeletionConfirmation,
    article: &Article,
) -> DeleteOutcome
where
    A: ArticleApi + ?Sized,
{
    let outcome = confirmation
        .accept(notifier, ARTICLE_DELETED_MESSAGE, || api.delete_article(&article.id))
        .await;
    if outcome == DeleteOutcome::Deleted {
        info!(article_id = %article.id, "Article deleted");
    }
    outcome
}
