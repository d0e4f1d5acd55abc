//! Integration tests for comment threads under articles.

mod common;

use common::{comment, Call, FakeBackend};
use techblog_client::comment::{COMMENT_ADDED_MESSAGE, COMMENT_DELETED_MESSAGE};
use techblog_client::validation::REQUIRED_MESSAGE;
use techblog_client::{
    ArticleId, ClientError, CommentId, CommentThread, CreateComment, DeleteOutcome,
    DeletionConfirmation, Notifier, Severity, UserId,
};

const COMMENTER: UserId = UserId::new(30);

fn discussion(article_id: &ArticleId) -> FakeBackend {
    FakeBackend::new()
        .with_comment(comment(CommentId::new(1), UserId::new(20), article_id))
        .with_comment(comment(CommentId::new(2), UserId::new(21), &ArticleId::new("other")))
        .with_comment(comment(CommentId::new(3), UserId::new(22), article_id))
}

#[tokio::test]
async fn test_load_keeps_only_this_article_in_order() {
    let article_id = ArticleId::new("a-1");
    let backend = discussion(&article_id);

    let thread = CommentThread::load(&backend, &article_id).await.unwrap();

    let ids: Vec<CommentId> = thread.comments().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![CommentId::new(1), CommentId::new(3)]);
    assert_eq!(backend.calls(), vec![Call::ListComments(article_id)]);
}

#[tokio::test]
async fn test_added_comment_is_appended_after_confirmation() {
    let article_id = ArticleId::new("a-1");
    let backend = discussion(&article_id);
    let notifier = Notifier::new();
    let mut thread = CommentThread::load(&backend, &article_id).await.unwrap();

    thread
        .add(&backend, &notifier, &article_id, COMMENTER, "  Yes, with Send bounds.  ")
        .await
        .unwrap();

    assert_eq!(thread.len(), 3);
    let last = &thread.comments()[2];
    assert_eq!(last.content, "Yes, with Send bounds.");
    assert_eq!(last.author.id, COMMENTER);
    assert_eq!(notifier.current().message, COMMENT_ADDED_MESSAGE);
    assert_eq!(
        backend.calls().last(),
        Some(&Call::CreateComment(CreateComment {
            article_id: article_id.clone(),
            author_id: COMMENTER,
            content: "Yes, with Send bounds.".to_string(),
        }))
    );
}

#[tokio::test]
async fn test_blank_comment_is_not_sent() {
    let backend = FakeBackend::new();
    let notifier = Notifier::new();
    let mut thread = CommentThread::default();

    let result = thread
        .add(&backend, &notifier, &ArticleId::new("a-1"), COMMENTER, "   ")
        .await;

    assert!(matches!(result, Err(ClientError::Validation(ref m)) if m == REQUIRED_MESSAGE));
    assert!(thread.is_empty());
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_rejected_comment_leaves_thread_unchanged() {
    let article_id = ArticleId::new("a-1");
    let backend = discussion(&article_id);
    backend.fail("create_comment", 400, "Comment is too long");
    let notifier = Notifier::new();
    let mut thread = CommentThread::load(&backend, &article_id).await.unwrap();

    let result = thread
        .add(&backend, &notifier, &article_id, COMMENTER, "text")
        .await;

    assert!(result.is_err());
    assert_eq!(thread.len(), 2);
    assert_eq!(notifier.current().severity, Severity::Error);
    assert_eq!(notifier.current().message, "Comment is too long");
}

#[tokio::test]
async fn test_comment_deletion_requires_confirmation() {
    let article_id = ArticleId::new("a-1");
    let backend = discussion(&article_id);
    let notifier = Notifier::new();
    let mut thread = CommentThread::load(&backend, &article_id).await.unwrap();
    let mut confirmation = DeletionConfirmation::new();

    let outcome = thread.delete(&backend, &notifier, &mut confirmation, 0).await;
    assert_eq!(outcome, DeleteOutcome::NotConfirmed);
    assert_eq!(thread.len(), 2);

    confirmation.request();
    let outcome = thread.delete(&backend, &notifier, &mut confirmation, 0).await;

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(thread.comments()[0].id, CommentId::new(3));
    assert_eq!(notifier.current().message, COMMENT_DELETED_MESSAGE);
    assert_eq!(
        backend.calls().last(),
        Some(&Call::DeleteComment(CommentId::new(1)))
    );
}

#[tokio::test]
async fn test_failed_comment_deletion_keeps_comment() {
    let article_id = ArticleId::new("a-1");
    let backend = discussion(&article_id);
    backend.fail("delete_comment", 403, "");
    let notifier = Notifier::new();
    let mut thread = CommentThread::load(&backend, &article_id).await.unwrap();
    let mut confirmation = DeletionConfirmation::new();
    confirmation.request();

    let outcome = thread.delete(&backend, &notifier, &mut confirmation, 1).await;

    assert_eq!(outcome, DeleteOutcome::Failed);
    assert_eq!(thread.len(), 2);
    assert!(!confirmation.is_open());
    assert_eq!(notifier.current().severity, Severity::Error);
}
