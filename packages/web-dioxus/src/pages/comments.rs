//! Comments under an article

use dioxus::prelude::*;
use techblog_client::comment::can_manage_comment;
use techblog_client::{ArticleId, CommentThread, DeletionConfirmation};

use crate::auth::use_auth;
use crate::components::{ConfirmationDialog, LoadingSpinner};

#[component]
pub fn Comments(article_id: ArticleId) -> Element {
    let auth = use_auth();
    let mut thread = use_signal(|| None::<CommentThread>);
    let mut confirmation = use_signal(DeletionConfirmation::new);
    let mut pending_delete = use_signal(|| None::<usize>);
    let mut content = use_signal(String::new);
    let mut form_error = use_signal(|| None::<String>);

    use_effect({
        let auth = auth.clone();
        let article_id = article_id.clone();
        move || {
            let auth = auth.clone();
            let article_id = article_id.clone();
            spawn(async move {
                match CommentThread::load(auth.client.api(), &article_id).await {
                    Ok(loaded) => thread.set(Some(loaded)),
                    Err(e) => {
                        tracing::warn!(%article_id, error = %e, "Failed to load comments");
                        auth.client.notifier().error(e.user_message());
                        thread.set(Some(CommentThread::default()));
                    }
                }
            });
        }
    });

    let handle_submit = {
        let auth = auth.clone();
        let article_id = article_id.clone();
        move |e: FormEvent| {
            e.prevent_default();
            let text = content();
            if text.trim().is_empty() {
                form_error.set(Some(techblog_client::validation::REQUIRED_MESSAGE.to_string()));
                return;
            }

            let auth = auth.clone();
            let article_id = article_id.clone();
            spawn(async move {
                let Some(mut updated) = thread() else {
                    return;
                };
                let Some(author_id) = auth.client.session().user_id().await else {
                    return;
                };

                let result = updated
                    .add(auth.client.api(), auth.client.notifier(), &article_id, author_id, &text)
                    .await;
                if result.is_ok() {
                    thread.set(Some(updated));
                    content.set(String::new());
                    form_error.set(None);
                }
            });
        }
    };

    let handle_delete = {
        let auth = auth.clone();
        move |_| {
            let auth = auth.clone();
            spawn(async move {
                let (Some(mut updated), Some(index)) = (thread(), pending_delete()) else {
                    confirmation.write().cancel();
                    return;
                };
                let mut pending = confirmation();
                updated
                    .delete(auth.client.api(), auth.client.notifier(), &mut pending, index)
                    .await;
                confirmation.set(pending);
                pending_delete.set(None);
                thread.set(Some(updated));
            });
        }
    };

    let Some(current) = thread() else {
        return rsx! { LoadingSpinner {} };
    };

    let viewer = auth.viewer();

    rsx! {
        div {
            class: "space-y-4",
            h2 { class: "text-xl font-semibold text-gray-900", "Comments" }

            if current.is_empty() {
                p { class: "text-gray-500", "No comments yet." }
            }

            for (index, comment) in current.comments().iter().enumerate() {
                div {
                    key: "{comment.id}",
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-4",
                    div {
                        class: "flex items-center justify-between mb-2",
                        span { class: "font-medium text-gray-900", "{comment.author.nickname}" }
                        span {
                            class: "text-xs text-gray-500",
                            {comment.creation_date.format("%Y-%m-%d %H:%M").to_string()}
                        }
                    }
                    p { class: "text-gray-700 whitespace-pre-line", "{comment.content}" }
                    if can_manage_comment(&viewer, comment.author.id) {
                        button {
                            class: "mt-2 text-sm text-red-700 hover:underline",
                            onclick: move |_| {
                                pending_delete.set(Some(index));
                                confirmation.write().request();
                            },
                            "Delete"
                        }
                    }
                }
            }

            if CommentThread::can_add(&viewer) {
                form {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-4 space-y-3",
                    onsubmit: handle_submit,
                    textarea {
                        value: "{content}",
                        oninput: move |e| content.set(e.value()),
                        placeholder: "Write a comment",
                        class: "w-full px-3 py-2 border border-gray-300 rounded-md",
                        rows: "3"
                    }
                    if let Some(err) = form_error() {
                        p { class: "text-xs text-red-600", "{err}" }
                    }
                    button {
                        r#type: "submit",
                        class: "bg-indigo-700 text-white py-1.5 px-4 rounded-md hover:bg-indigo-800",
                        "Add comment"
                    }
                }
            }

            ConfirmationDialog {
                open: confirmation().is_open(),
                title: "Are you sure this comment should be deleted?".to_string(),
                on_accept: handle_delete,
                on_cancel: move |_| {
                    pending_delete.set(None);
                    confirmation.write().cancel();
                },
            }
        }
    }
}
