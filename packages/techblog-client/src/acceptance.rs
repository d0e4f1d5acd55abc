//! Opinion acceptance (up/down vote) reconciliation.
//!
//! [`OpinionVotes`] mirrors the server's counters for one opinion plus the
//! viewer's own vote. Counters move by exactly one per confirmed request and
//! are never recomputed, so the opinion never has to be refetched to show an
//! up-to-date tally.
//!
//! A mutation is split into `begin_*` (guard checks, marks the opinion busy,
//! yields the request) and `finish_*` (applies or discards the confirmation).
//! UI code that cannot hold `&mut` across the network call uses the two
//! halves directly; everything else uses [`add_acceptance`] and
//! [`remove_acceptance`].
//!
//! While one mutation is in flight, further ones on the same opinion are
//! skipped, so two confirmations for the same counter never interleave.

use tracing::{debug, info};

use crate::api::AcceptanceApi;
use crate::error::Result;
use crate::id::{OpinionId, UserId};
use crate::notification::Notifier;
use crate::types::{AcceptanceKey, CreateAcceptance, Opinion, Vote};

/// Why a vote action was a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Viewer is not identified
    Anonymous,
    /// Viewer already has a non-zero vote on this opinion
    AlreadyVoted,
    /// Viewer wrote this opinion
    OwnOpinion,
    /// Nothing to retract
    NoVote,
    /// Another vote request on this opinion has not come back yet
    InFlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    /// Server confirmed, mirror updated
    Applied,
    /// Guard refused, no request was sent
    Skipped(SkipReason),
    /// Request failed, error notified, mirror unchanged
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpinionVotes {
    opinion_id: OpinionId,
    author_id: UserId,
    positive: u32,
    negative: u32,
    vote: Option<Vote>,
    in_flight: bool,
}

impl OpinionVotes {
    pub fn new(
        opinion_id: OpinionId,
        author_id: UserId,
        positive: u32,
        negative: u32,
        vote: Option<Vote>,
    ) -> Self {
        Self {
            opinion_id,
            author_id,
            positive,
            negative,
            vote,
            in_flight: false,
        }
    }

    pub fn from_opinion(opinion: &Opinion) -> Self {
        Self::new(
            opinion.id,
            opinion.author.id,
            opinion.positive_acceptances_count,
            opinion.negative_acceptances_count,
            opinion.viewer_vote(),
        )
    }

    pub fn opinion_id(&self) -> OpinionId {
        self.opinion_id
    }

    pub fn positive(&self) -> u32 {
        self.positive
    }

    pub fn negative(&self) -> u32 {
        self.negative
    }

    pub fn vote(&self) -> Option<Vote> {
        self.vote
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Check the add guards and mark the opinion busy.
    pub fn begin_add(
        &mut self,
        user_id: Option<UserId>,
        vote: Vote,
    ) -> std::result::Result<CreateAcceptance, SkipReason> {
        if self.in_flight {
            return Err(SkipReason::InFlight);
        }
        let user_id = user_id.ok_or(SkipReason::Anonymous)?;
        if self.vote.is_some() {
            return Err(SkipReason::AlreadyVoted);
        }
        if user_id == self.author_id {
            return Err(SkipReason::OwnOpinion);
        }

        self.in_flight = true;
        Ok(CreateAcceptance {
            opinion_id: self.opinion_id,
            user_id,
            value: vote,
        })
    }

    /// Apply the outcome of a create request started with [`begin_add`](Self::begin_add).
    pub fn finish_add(&mut self, vote: Vote, result: Result<()>, notifier: &Notifier) -> VoteOutcome {
        self.in_flight = false;

        match result {
            Ok(()) => {
                match vote {
                    Vote::Up => self.positive += 1,
                    Vote::Down => self.negative += 1,
                }
                self.vote = Some(vote);
                info!(opinion_id = %self.opinion_id, ?vote, "Acceptance added");
                VoteOutcome::Applied
            }
            Err(e) => {
                notifier.error(e.user_message());
                VoteOutcome::Failed
            }
        }
    }

    /// Check the retract guards and mark the opinion busy. Returns the
    /// request key and the vote being retracted.
    pub fn begin_remove(
        &mut self,
        user_id: Option<UserId>,
    ) -> std::result::Result<(AcceptanceKey, Vote), SkipReason> {
        if self.in_flight {
            return Err(SkipReason::InFlight);
        }
        let user_id = user_id.ok_or(SkipReason::Anonymous)?;
        let previous = self.vote.ok_or(SkipReason::NoVote)?;

        self.in_flight = true;
        Ok((
            AcceptanceKey {
                opinion_id: self.opinion_id,
                user_id,
            },
            previous,
        ))
    }

    /// Apply the outcome of a delete request started with
    /// [`begin_remove`](Self::begin_remove). `previous` decides which counter drops.
    pub fn finish_remove(
        &mut self,
        previous: Vote,
        result: Result<()>,
        notifier: &Notifier,
    ) -> VoteOutcome {
        self.in_flight = false;

        match result {
            Ok(()) => {
                match previous {
                    Vote::Up => self.positive = self.positive.saturating_sub(1),
                    Vote::Down => self.negative = self.negative.saturating_sub(1),
                }
                self.vote = None;
                info!(opinion_id = %self.opinion_id, ?previous, "Acceptance removed");
                VoteOutcome::Applied
            }
            Err(e) => {
                notifier.error(e.user_message());
                VoteOutcome::Failed
            }
        }
    }
}

/// Vote on an opinion. Counters change only once the server confirms.
pub async fn add_acceptance<A>(
    api: &A,
    notifier: &Notifier,
    votes: &mut OpinionVotes,
    user_id: Option<UserId>,
    vote: Vote,
) -> VoteOutcome
where
    A: AcceptanceApi + ?Sized,
{
    let request = match votes.begin_add(user_id, vote) {
        Ok(request) => request,
        Err(reason) => {
            debug!(opinion_id = %votes.opinion_id, ?reason, "Acceptance add skipped");
            return VoteOutcome::Skipped(reason);
        }
    };

    let result = api.create_acceptance(&request).await;
    votes.finish_add(vote, result, notifier)
}

/// Retract the viewer's vote on an opinion.
pub async fn remove_acceptance<A>(
    api: &A,
    notifier: &Notifier,
    votes: &mut OpinionVotes,
    user_id: Option<UserId>,
) -> VoteOutcome
where
    A: AcceptanceApi + ?Sized,
{
    let (key, previous) = match votes.begin_remove(user_id) {
        Ok(started) => started,
        Err(reason) => {
            debug!(opinion_id = %votes.opinion_id, ?reason, "Acceptance removal skipped");
            return VoteOutcome::Skipped(reason);
        }
    };

    let result = api.delete_acceptance(&key).await;
    votes.finish_remove(previous, result, notifier)
}
