//! Comment threads: plain discussion under an article.

use tracing::info;

use crate::api::CommentApi;
use crate::article::{DeleteOutcome, DeletionConfirmation};
use crate::error::{ClientError, Result};
use crate::id::{ArticleId, UserId};
use crate::notification::Notifier;
use crate::session::{roles, Viewer};
use crate::types::{Comment, CreateComment};
use crate::validation;

pub const COMMENT_ADDED_MESSAGE: &str = "Comment added";
pub const COMMENT_DELETED_MESSAGE: &str = "Comment deleted";

/// Same gate as opinions: the author with the logged-user role, or an
/// administrator.
pub fn can_manage_comment(viewer: &Viewer, author_id: UserId) -> bool {
    (viewer.has_role(roles::LOGGED_USER) && viewer.is(author_id)) || viewer.is_admin()
}

/// The comments shown under one article, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentThread {
    comments: Vec<Comment>,
}

impl CommentThread {
    pub fn new(comments: Vec<Comment>) -> Self {
        Self { comments }
    }

    pub async fn load<A>(api: &A, article_id: &ArticleId) -> Result<Self>
    where
        A: CommentApi + ?Sized,
    {
        api.list_comments(article_id).await.map(Self::new)
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Any identified viewer may comment, any number of times.
    pub fn can_add(viewer: &Viewer) -> bool {
        viewer.user_id.is_some()
    }

    /// Post a comment and append it once the server has stored it.
    pub async fn add<A>(
        &mut self,
        api: &A,
        notifier: &Notifier,
        article_id: &ArticleId,
        author_id: UserId,
        content: &str,
    ) -> Result<()>
    where
        A: CommentApi + ?Sized,
    {
        if !validation::is_present(content) {
            return Err(ClientError::Validation(validation::REQUIRED_MESSAGE.to_string()));
        }

        let request = CreateComment {
            article_id: article_id.clone(),
            author_id,
            content: content.trim().to_string(),
        };
        match api.create_comment(&request).await {
            Ok(comment) => {
                info!(%article_id, comment_id = %comment.id, "Comment added");
                self.comments.push(comment);
                notifier.success(COMMENT_ADDED_MESSAGE);
                Ok(())
            }
            Err(e) => {
                notifier.error(e.user_message());
                Err(e)
            }
        }
    }

    pub async fn delete<A>(
        &mut self,
        api: &A,
        notifier: &Notifier,
        confirmation: &mut DeletionConfirmation,
        index: usize,
    ) -> DeleteOutcome
    where
        A: CommentApi + ?Sized,
    {
        let Some(id) = self.comments.get(index).map(|c| c.id) else {
            confirmation.cancel();
            return DeleteOutcome::NotConfirmed;
        };

        let outcome = confirmation
            .accept(notifier, COMMENT_DELETED_MESSAGE, || api.delete_comment(id))
            .await;
        if outcome == DeleteOutcome::Deleted {
            self.comments.remove(index);
            info!(comment_id = %id, "Comment deleted");
        }
        outcome
    }
}
