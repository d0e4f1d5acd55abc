//! A single opinion with its acceptance counters

use dioxus::prelude::*;
use techblog_client::acceptance::OpinionVotes;
use techblog_client::{AcceptanceApi, Opinion, Vote, VoteOutcome};

use crate::auth::use_auth;

#[derive(Props, Clone, PartialEq)]
pub struct OpinionCardProps {
    pub opinion: Opinion,
    /// Viewer may edit or delete this opinion
    pub can_manage: bool,
    pub on_edit: EventHandler<()>,
    pub on_delete: EventHandler<()>,
}

#[component]
pub fn OpinionCard(props: OpinionCardProps) -> Element {
    let auth = use_auth();
    let opinion = &props.opinion;
    let on_edit = props.on_edit;
    let on_delete = props.on_delete;
    let votes = use_signal(|| OpinionVotes::from_opinion(opinion));

    let vote = {
        let auth = auth.clone();
        move |vote: Vote| {
            let auth = auth.clone();
            spawn(async move {
                let outcome = add_vote(&auth.client, votes, vote).await;
                tracing::debug!(?outcome, "Vote");
            });
        }
    };

    let retract = {
        let auth = auth.clone();
        move |_| {
            let auth = auth.clone();
            spawn(async move {
                let outcome = retract_vote(&auth.client, votes).await;
                tracing::debug!(?outcome, "Vote retraction");
            });
        }
    };

    let current = votes();
    let busy = current.is_in_flight();
    let up_class = vote_class(current.vote() == Some(Vote::Up));
    let down_class = vote_class(current.vote() == Some(Vote::Down));
    let created = opinion.creation_date.format("%Y-%m-%d %H:%M").to_string();
    let rating = format!("{:.1}", opinion.rating);

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-4",
            div {
                class: "flex items-center justify-between mb-2",
                div {
                    span { class: "font-medium text-gray-900 mr-3", "{opinion.author.nickname}" }
                    span { class: "text-sm text-gray-500", "{created}" }
                }
                span { class: "text-sm text-amber-600", "Rating: {rating}" }
            }
            p { class: "text-gray-700 mb-3", "{opinion.content}" }
            div {
                class: "flex items-center gap-3",
                button {
                    class: up_class,
                    disabled: busy,
                    onclick: {
                        let vote = vote.clone();
                        move |_| vote(Vote::Up)
                    },
                    "\u{1F44D} {current.positive()}"
                }
                button {
                    class: down_class,
                    disabled: busy,
                    onclick: {
                        let vote = vote.clone();
                        move |_| vote(Vote::Down)
                    },
                    "\u{1F44E} {current.negative()}"
                }
                if current.vote().is_some() {
                    button {
                        class: "text-sm text-gray-500 hover:text-gray-800",
                        disabled: busy,
                        onclick: retract,
                        "Withdraw"
                    }
                }
                if props.can_manage {
                    div {
                        class: "ml-auto flex gap-2",
                        button {
                            class: "text-sm text-indigo-700 hover:underline",
                            onclick: move |_| on_edit.call(()),
                            "Edit"
                        }
                        button {
                            class: "text-sm text-red-700 hover:underline",
                            onclick: move |_| on_delete.call(()),
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}

fn vote_class(selected: bool) -> &'static str {
    if selected {
        "px-2 py-1 rounded bg-indigo-100 text-indigo-800 text-sm"
    } else {
        "px-2 py-1 rounded hover:bg-gray-100 text-gray-700 text-sm"
    }
}

/// The signal is never borrowed across the request; the in-flight flag
/// keeps a second click from starting another one.
async fn add_vote(
    client: &techblog_client::TechblogClient,
    mut votes: Signal<OpinionVotes>,
    vote: Vote,
) -> VoteOutcome {
    let user_id = client.session().user_id().await;
    let started = votes.write().begin_add(user_id, vote);
    let request = match started {
        Ok(request) => request,
        Err(reason) => return VoteOutcome::Skipped(reason),
    };

    let result = client.api().create_acceptance(&request).await;
    let outcome = votes.write().finish_add(vote, result, client.notifier());
    outcome
}

async fn retract_vote(
    client: &techblog_client::TechblogClient,
    mut votes: Signal<OpinionVotes>,
) -> VoteOutcome {
    let user_id = client.session().user_id().await;
    let started = votes.write().begin_remove(user_id);
    let (key, previous) = match started {
        Ok(started) => started,
        Err(reason) => return VoteOutcome::Skipped(reason),
    };

    let result = client.api().delete_acceptance(&key).await;
    let outcome = votes.write().finish_remove(previous, result, client.notifier());
    outcome
}
