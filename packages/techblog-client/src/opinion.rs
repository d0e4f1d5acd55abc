//! Opinion threads: listing, gating and confirmed deletion.

use tracing::info;

use crate::api::OpinionApi;
use crate::article::{DeleteOutcome, DeletionConfirmation};
use crate::error::{ClientError, Result};
use crate::id::{ArticleId, UserId};
use crate::notification::Notifier;
use crate::session::{roles, Viewer};
use crate::types::{CreateOpinion, Opinion, UpdateOpinion};
use crate::validation;

pub const OPINION_DELETED_MESSAGE: &str = "Opinion deleted";

/// Owners need the logged-user role to manage their own opinion;
/// administrators can manage any.
pub fn can_manage_opinion(viewer: &Viewer, author_id: UserId) -> bool {
    (viewer.has_role(roles::LOGGED_USER) && viewer.is(author_id)) || viewer.is_admin()
}

/// Text and rating of an opinion being written or edited.
#[derive(Debug, Clone, PartialEq)]
pub struct OpinionDraft {
    pub rating: f64,
    pub content: String,
}

impl OpinionDraft {
    pub fn validate(&self) -> std::result::Result<(), &'static str> {
        validation::validate_rating(self.rating)?;
        if !validation::is_present(&self.content) {
            return Err(validation::REQUIRED_MESSAGE);
        }
        Ok(())
    }
}

/// The opinions shown under one article.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpinionThread {
    opinions: Vec<Opinion>,
}

impl OpinionThread {
    pub fn new(opinions: Vec<Opinion>) -> Self {
        Self { opinions }
    }

    pub async fn load<A>(api: &A, article_id: &ArticleId) -> Result<Self>
    where
        A: OpinionApi + ?Sized,
    {
        api.list_opinions(article_id).await.map(Self::new)
    }

    pub fn opinions(&self) -> &[Opinion] {
        &self.opinions
    }

    pub fn len(&self) -> usize {
        self.opinions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opinions.is_empty()
    }

    /// Whether the viewer may still post (one opinion per author per article).
    pub fn can_add(&self, viewer: &Viewer) -> bool {
        match viewer.user_id {
            Some(user_id) => !self.opinions.iter().any(|o| o.author.id == user_id),
            None => false,
        }
    }

    pub async fn add<A>(
        &mut self,
        api: &A,
        notifier: &Notifier,
        article_id: &ArticleId,
        author_id: UserId,
        draft: OpinionDraft,
    ) -> Result<()>
    where
        A: OpinionApi + ?Sized,
    {
        draft
            .validate()
            .map_err(|m| ClientError::Validation(m.to_string()))?;

        let request = CreateOpinion {
            article_id: article_id.clone(),
            author_id,
            rating: draft.rating,
            content: draft.content,
        };
        match api.create_opinion(&request).await {
            Ok(opinion) => {
                self.opinions.insert(0, opinion);
                notifier.success("Opinion added");
                Ok(())
            }
            Err(e) => {
                notifier.error(e.user_message());
                Err(e)
            }
        }
    }

    pub async fn edit<A>(
        &mut self,
        api: &A,
        notifier: &Notifier,
        index: usize,
        draft: OpinionDraft,
    ) -> Result<()>
    where
        A: OpinionApi + ?Sized,
    {
        draft
            .validate()
            .map_err(|m| ClientError::Validation(m.to_string()))?;
        let Some(id) = self.opinions.get(index).map(|o| o.id) else {
            return Ok(());
        };

        let request = UpdateOpinion {
            rating: draft.rating,
            content: draft.content,
        };
        match api.update_opinion(id, &request).await {
            Ok(updated) => {
                if let Some(slot) = self.opinions.get_mut(index) {
                    *slot = updated;
                }
                notifier.success("Opinion updated");
                Ok(())
            }
            Err(e) => {
                notifier.error(e.user_message());
                Err(e)
            }
        }
    }

    /// Confirmed deletion of the opinion at `index`. Removes it locally once
    /// the server agrees.
    pub async fn delete<A>(
        &mut self,
        api: &A,
        notifier: &Notifier,
        confirmation: &mut DeletionConfirmation,
        index: usize,
    ) -> DeleteOutcome
    where
        A: OpinionApi + ?Sized,
    {
        let Some(id) = self.opinions.get(index).map(|o| o.id) else {
            confirmation.cancel();
            return DeleteOutcome::NotConfirmed;
        };

        let outcome = confirmation
            .accept(notifier, OPINION_DELETED_MESSAGE, || api.delete_opinion(id))
            .await;
        if outcome == DeleteOutcome::Deleted {
            self.opinions.remove(index);
            info!(opinion_id = %id, "Opinion deleted");
        }
        outcome
    }
}
