//! Article page: header, verification workflow, deletion and the
//! comments/opinions tabs

use dioxus::prelude::*;
use techblog_client::article::{
    can_manage_article, delete_article, send_to_verification, verification_message,
};
use techblog_client::{Article, ArticleApi, ArticleId, DeletionConfirmation, Navigation};

use crate::auth::use_auth;
use crate::components::{ConfirmationDialog, LoadingSpinner};
use crate::routes::Route;
use super::comments::Comments;
use super::opinions::Opinions;

#[component]
pub fn ArticleView(id: String) -> Element {
    let auth = use_auth();
    let navigator = use_navigator();
    let mut article = use_signal(|| None::<Article>);
    let mut confirmation = use_signal(DeletionConfirmation::new);
    let mut tab = use_signal(|| DiscussionTab::Comments);

    use_effect({
        let auth = auth.clone();
        let id = id.clone();
        move || {
            let auth = auth.clone();
            let article_id = ArticleId::new(id.clone());
            spawn(async move {
                match auth.client.api().get_article(&article_id).await {
                    Ok(loaded) => article.set(Some(loaded)),
                    Err(e) => {
                        tracing::warn!(%article_id, error = %e, "Failed to load article");
                        auth.client.notifier().error(e.user_message());
                        navigator.go_back();
                    }
                }
            });
        }
    });

    let Some(current) = article() else {
        return rsx! { LoadingSpinner {} };
    };

    let handle_send = {
        let auth = auth.clone();
        move |_| {
            let auth = auth.clone();
            spawn(async move {
                let Some(mut updated) = article() else {
                    return;
                };
                send_to_verification(auth.client.api(), auth.client.notifier(), &mut updated).await;
                article.set(Some(updated));
            });
        }
    };

    let handle_delete = {
        let auth = auth.clone();
        move |_| {
            let auth = auth.clone();
            spawn(async move {
                let Some(target) = article() else {
                    return;
                };
                let mut pending = confirmation();
                let outcome =
                    delete_article(auth.client.api(), auth.client.notifier(), &mut pending, &target)
                        .await;
                confirmation.set(pending);

                if outcome.navigation() == Navigation::Back {
                    navigator.go_back();
                }
            });
        }
    };

    let can_manage = can_manage_article(&auth.viewer(), current.author.id);
    let category_path = current.technology.category.path().join(" -> ");
    let created = current.creation_date.format("%Y-%m-%d %H:%M").to_string();
    let modified = current.modification_date.format("%Y-%m-%d %H:%M").to_string();
    let status = current.status.label();
    let average_rating = current.average_rating.map(|r| format!("{:.1}", r));

    rsx! {
        div {
            class: "space-y-8",

            div {
                class: "flex items-start justify-between gap-6",
                div {
                    class: "space-y-1",
                    p { class: "font-medium text-gray-900", "{current.author.nickname}" }
                    p { class: "text-sm text-gray-600", "Created: {created}" }
                    p { class: "text-sm text-gray-600", "Modified: {modified}" }
                    p { class: "text-sm text-gray-600", "{category_path} -> {current.technology.name}" }
                }

                if can_manage {
                    div {
                        class: "flex flex-wrap items-center justify-end gap-3",
                        span { class: "text-sm font-medium text-gray-700", "Status: {status}" }
                        if current.status.can_send_to_verification() {
                            button {
                                class: "px-3 py-1.5 bg-indigo-100 text-indigo-800 text-sm rounded hover:bg-indigo-200",
                                onclick: handle_send,
                                "Send to verification"
                            }
                        }
                        if current.status.has_verification_message() {
                            VerificationMessageView { article: current.clone() }
                        }
                        button {
                            class: "px-3 py-1.5 bg-red-100 text-red-700 text-sm rounded hover:bg-red-200",
                            onclick: move |_| confirmation.write().request(),
                            "Delete article"
                        }
                        ConfirmationDialog {
                            open: confirmation().is_open(),
                            title: "Are you sure this article should be deleted?".to_string(),
                            on_accept: handle_delete,
                            on_cancel: move |_| confirmation.write().cancel(),
                        }
                    }
                }
            }

            div {
                class: "space-y-2",
                h2 { class: "text-xl font-semibold text-gray-900", "About the technology" }
                if let Some(provider) = &current.technology.provider {
                    p { class: "text-gray-700", "Provider: {provider}" }
                }
                p { class: "text-gray-700", "{current.technology.description}" }
            }

            div {
                h1 { class: "text-3xl font-bold text-gray-900 mb-4", "{current.title}" }
                div { class: "prose max-w-none", dangerous_inner_html: "{current.content}" }
                if let Some(rating) = average_rating {
                    p { class: "mt-4 text-amber-600", "Average rating: {rating}" }
                }
            }

            div {
                class: "flex gap-3",
                button {
                    class: tab_class(tab() == DiscussionTab::Comments),
                    onclick: move |_| tab.set(DiscussionTab::Comments),
                    "Comments"
                }
                button {
                    class: tab_class(tab() == DiscussionTab::Opinions),
                    onclick: move |_| tab.set(DiscussionTab::Opinions),
                    "Opinions"
                }
            }

            match tab() {
                DiscussionTab::Comments => rsx! { Comments { article_id: current.id.clone() } },
                DiscussionTab::Opinions => rsx! { Opinions { article_id: current.id.clone() } },
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DiscussionTab {
    Comments,
    Opinions,
}

fn tab_class(selected: bool) -> &'static str {
    if selected {
        "px-4 py-1.5 rounded-md bg-green-700 text-white"
    } else {
        "px-4 py-1.5 rounded-md bg-stone-200 text-stone-800 hover:bg-stone-300"
    }
}

/// Reviewer's message, loaded on demand.
#[component]
fn VerificationMessageView(article: Article) -> Element {
    let auth = use_auth();
    let mut message = use_signal(|| None::<String>);
    let mut open = use_signal(|| false);

    let handle_open = move |_| {
        let auth = auth.clone();
        let article = article.clone();
        open.set(true);
        spawn(async move {
            match verification_message(auth.client.api(), &article).await {
                Ok(Some(loaded)) => message.set(Some(loaded.message)),
                Ok(None) => message.set(None),
                Err(e) => auth.client.notifier().error(e.user_message()),
            }
        });
    };

    rsx! {
        button {
            class: "px-3 py-1.5 bg-stone-100 text-stone-700 text-sm rounded hover:bg-stone-200",
            onclick: handle_open,
            "Verification message"
        }
        if open() {
            div {
                class: "fixed inset-0 bg-black/40 flex items-center justify-center z-50",
                onclick: move |_| open.set(false),
                div {
                    class: "bg-white rounded-lg shadow-lg p-6 max-w-lg w-full",
                    h3 { class: "font-semibold text-gray-900 mb-3", "Reviewer's message" }
                    match message() {
                        Some(text) => rsx! { p { class: "text-gray-700", "{text}" } },
                        None => rsx! { p { class: "text-gray-500", "No message." } },
                    }
                }
            }
        }
    }
}
