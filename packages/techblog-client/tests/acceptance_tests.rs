//! Integration tests for opinion acceptance voting.
//!
//! Counters only move once the backend confirms, and guarded actions never
//! reach the backend.

mod common;

use common::{opinion, Call, FakeBackend};
use techblog_client::acceptance::{add_acceptance, remove_acceptance};
use techblog_client::{
    AcceptanceKey, ArticleId, CreateAcceptance, Notifier, OpinionId, OpinionVotes, Severity,
    SkipReason, UserId, Vote, VoteOutcome,
};

const AUTHOR: UserId = UserId::new(1);
const VIEWER: UserId = UserId::new(2);

fn fresh_votes() -> OpinionVotes {
    let opinion = opinion(OpinionId::new(7), AUTHOR, &ArticleId::new("a-1"));
    OpinionVotes::from_opinion(&opinion)
}

fn counts(votes: &OpinionVotes) -> (u32, u32, Option<Vote>) {
    (votes.positive(), votes.negative(), votes.vote())
}

#[tokio::test]
async fn test_up_vote_then_retract_is_net_zero() {
    let backend = FakeBackend::new();
    let notifier = Notifier::new();
    let mut votes = fresh_votes();
    assert_eq!(counts(&votes), (3, 1, None));

    let outcome = add_acceptance(&backend, &notifier, &mut votes, Some(VIEWER), Vote::Up).await;
    assert_eq!(outcome, VoteOutcome::Applied);
    assert_eq!(counts(&votes), (4, 1, Some(Vote::Up)));

    let outcome = remove_acceptance(&backend, &notifier, &mut votes, Some(VIEWER)).await;
    assert_eq!(outcome, VoteOutcome::Applied);
    assert_eq!(counts(&votes), (3, 1, None));

    assert_eq!(
        backend.calls(),
        vec![
            Call::CreateAcceptance(CreateAcceptance {
                opinion_id: OpinionId::new(7),
                user_id: VIEWER,
                value: Vote::Up,
            }),
            Call::DeleteAcceptance(AcceptanceKey {
                opinion_id: OpinionId::new(7),
                user_id: VIEWER,
            }),
        ]
    );
}

#[tokio::test]
async fn test_guarded_votes_send_nothing() {
    let backend = FakeBackend::new();
    let notifier = Notifier::new();

    let mut votes = fresh_votes();
    let outcome = add_acceptance(&backend, &notifier, &mut votes, None, Vote::Up).await;
    assert_eq!(outcome, VoteOutcome::Skipped(SkipReason::Anonymous));

    let outcome = add_acceptance(&backend, &notifier, &mut votes, Some(AUTHOR), Vote::Down).await;
    assert_eq!(outcome, VoteOutcome::Skipped(SkipReason::OwnOpinion));

    let mut voted = OpinionVotes::new(OpinionId::new(7), AUTHOR, 3, 1, Some(Vote::Up));
    let outcome = add_acceptance(&backend, &notifier, &mut voted, Some(VIEWER), Vote::Down).await;
    assert_eq!(outcome, VoteOutcome::Skipped(SkipReason::AlreadyVoted));

    let outcome = remove_acceptance(&backend, &notifier, &mut votes, Some(VIEWER)).await;
    assert_eq!(outcome, VoteOutcome::Skipped(SkipReason::NoVote));

    assert_eq!(backend.call_count(), 0);
    assert_eq!(counts(&votes), (3, 1, None));
    assert_eq!(counts(&voted), (3, 1, Some(Vote::Up)));
}

#[tokio::test]
async fn test_rejected_vote_keeps_counts_and_notifies() {
    let backend = FakeBackend::new();
    backend.fail("create_acceptance", 400, "Opinion already accepted");
    let notifier = Notifier::new();
    let mut votes = fresh_votes();

    let outcome = add_acceptance(&backend, &notifier, &mut votes, Some(VIEWER), Vote::Down).await;

    assert_eq!(outcome, VoteOutcome::Failed);
    assert_eq!(counts(&votes), (3, 1, None));
    assert!(!votes.is_in_flight());

    let notification = notifier.current();
    assert!(notification.visible);
    assert_eq!(notification.severity, Severity::Error);
    assert_eq!(notification.message, "Opinion already accepted");
}

#[tokio::test]
async fn test_rejected_retraction_keeps_vote() {
    let backend = FakeBackend::new();
    backend.fail("delete_acceptance", 500, "");
    let notifier = Notifier::new();
    let mut votes = OpinionVotes::new(OpinionId::new(7), AUTHOR, 4, 1, Some(Vote::Up));

    let outcome = remove_acceptance(&backend, &notifier, &mut votes, Some(VIEWER)).await;

    assert_eq!(outcome, VoteOutcome::Failed);
    assert_eq!(counts(&votes), (4, 1, Some(Vote::Up)));
    assert_eq!(
        notifier.current().message,
        techblog_client::error::GENERIC_ERROR_MESSAGE
    );
}

#[tokio::test]
async fn test_split_mutation_skips_overlapping_trigger() {
    let backend = FakeBackend::new();
    let notifier = Notifier::new();
    let mut votes = fresh_votes();

    // First click: request built, response not yet applied.
    let request = votes.begin_add(Some(VIEWER), Vote::Up).unwrap();

    // Second click while the first is pending.
    let outcome = add_acceptance(&backend, &notifier, &mut votes, Some(VIEWER), Vote::Down).await;
    assert_eq!(outcome, VoteOutcome::Skipped(SkipReason::InFlight));
    assert_eq!(backend.call_count(), 0);

    let result = techblog_client::AcceptanceApi::create_acceptance(&backend, &request).await;
    let outcome = votes.finish_add(request.value, result, &notifier);

    assert_eq!(outcome, VoteOutcome::Applied);
    assert_eq!(counts(&votes), (4, 1, Some(Vote::Up)));
    assert_eq!(backend.call_count(), 1);
}
