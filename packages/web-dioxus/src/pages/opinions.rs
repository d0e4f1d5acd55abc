//! Opinions under an article

use dioxus::prelude::*;
use techblog_client::opinion::{can_manage_opinion, OpinionDraft, OpinionThread};
use techblog_client::{ArticleId, DeletionConfirmation};

use crate::auth::use_auth;
use crate::components::{ConfirmationDialog, LoadingSpinner, OpinionCard};

#[component]
pub fn Opinions(article_id: ArticleId) -> Element {
    let auth = use_auth();
    let mut thread = use_signal(|| None::<OpinionThread>);
    let mut confirmation = use_signal(DeletionConfirmation::new);
    let mut pending_delete = use_signal(|| None::<usize>);
    // Index being edited, or None when the form adds a new opinion
    let mut editing = use_signal(|| None::<usize>);
    let mut rating = use_signal(|| "5".to_string());
    let mut content = use_signal(String::new);
    let mut form_error = use_signal(|| None::<String>);

    use_effect({
        let auth = auth.clone();
        let article_id = article_id.clone();
        move || {
            let auth = auth.clone();
            let article_id = article_id.clone();
            spawn(async move {
                match OpinionThread::load(auth.client.api(), &article_id).await {
                    Ok(loaded) => thread.set(Some(loaded)),
                    Err(e) => {
                        tracing::warn!(%article_id, error = %e, "Failed to load opinions");
                        auth.client.notifier().error(e.user_message());
                        thread.set(Some(OpinionThread::default()));
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
            let Ok(parsed_rating) = rating().trim().parse::<f64>() else {
                form_error.set(Some(techblog_client::validation::RATING_MESSAGE.to_string()));
                return;
            };
            let draft = OpinionDraft {
                rating: parsed_rating,
                content: content(),
            };
            if let Err(message) = draft.validate() {
                form_error.set(Some(message.to_string()));
                return;
            }

            let auth = auth.clone();
            let article_id = article_id.clone();
            spawn(async move {
                let Some(mut updated) = thread() else {
                    return;
                };
                let api = auth.client.api();
                let notifier = auth.client.notifier();

                let result = match editing() {
                    Some(index) => updated.edit(api, notifier, index, draft).await,
                    None => match auth.client.session().user_id().await {
                        Some(author_id) => {
                            updated.add(api, notifier, &article_id, author_id, draft).await
                        }
                        None => return,
                    },
                };

                if result.is_ok() {
                    thread.set(Some(updated));
                    editing.set(None);
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
    let show_form = editing().is_some() || current.can_add(&viewer);

    rsx! {
        div {
            class: "space-y-4",
            h2 { class: "text-xl font-semibold text-gray-900", "Opinions" }

            if show_form {
                form {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-4 space-y-3",
                    onsubmit: handle_submit,
                    div {
                        class: "flex items-center gap-3",
                        label { class: "text-sm text-gray-700", "Rating" }
                        input {
                            r#type: "number",
                            min: "0",
                            max: "5",
                            step: "0.5",
                            value: "{rating}",
                            oninput: move |e| rating.set(e.value()),
                            class: "w-24 px-2 py-1 border border-gray-300 rounded-md"
                        }
                    }
                    textarea {
                        value: "{content}",
                        oninput: move |e| content.set(e.value()),
                        placeholder: "Your opinion",
                        class: "w-full px-3 py-2 border border-gray-300 rounded-md",
                        rows: "3"
                    }
                    if let Some(err) = form_error() {
                        p { class: "text-xs text-red-600", "{err}" }
                    }
                    div {
                        class: "flex gap-2",
                        button {
                            r#type: "submit",
                            class: "bg-indigo-700 text-white py-1.5 px-4 rounded-md hover:bg-indigo-800",
                            if editing().is_some() { "Save opinion" } else { "Add opinion" }
                        }
                        if editing().is_some() {
                            button {
                                r#type: "button",
                                class: "bg-stone-100 text-stone-700 py-1.5 px-4 rounded-md hover:bg-stone-200",
                                onclick: move |_| {
                                    editing.set(None);
                                    content.set(String::new());
                                },
                                "Cancel"
                            }
                        }
                    }
                }
            }

            if current.is_empty() {
                p { class: "text-gray-500", "No opinions yet." }
            }

            for (index, opinion) in current.opinions().iter().enumerate() {
                OpinionCard {
                    key: "{opinion.id}",
                    opinion: opinion.clone(),
                    can_manage: can_manage_opinion(&viewer, opinion.author.id),
                    on_edit: {
                        let existing = opinion.clone();
                        move |_| {
                            editing.set(Some(index));
                            rating.set(existing.rating.to_string());
                            content.set(existing.content.clone());
                        }
                    },
                    on_delete: move |_| {
                        pending_delete.set(Some(index));
                        confirmation.write().request();
                    },
                }
            }

            ConfirmationDialog {
                open: confirmation().is_open(),
                title: "Are you sure this opinion should be deleted?".to_string(),
                on_accept: handle_delete,
                on_cancel: move |_| {
                    pending_delete.set(None);
                    confirmation.write().cancel();
                },
            }
        }
    }
}
