//! User search

use dioxus::prelude::*;
use techblog_client::users::{search_users, UserRow};

use crate::auth::use_auth;
use crate::components::LoadingSpinner;
use crate::routes::Route;

#[component]
pub fn SearchUsers() -> Element {
    let auth = use_auth();
    let mut query = use_signal(String::new);
    let mut rows = use_signal(|| None::<Vec<UserRow>>);

    let mut run_search = {
        let auth = auth.clone();
        move || {
            let auth = auth.clone();
            let username = query().trim().to_string();
            spawn(async move {
                match search_users(auth.client.identity(), auth.client.api(), &username).await {
                    Ok(found) => rows.set(Some(found)),
                    Err(e) => {
                        auth.client.notifier().error(e.user_message());
                        rows.set(Some(Vec::new()));
                    }
                }
            });
        }
    };

    use_hook({
        let mut run_search = run_search.clone();
        move || run_search()
    });

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Users" }

            form {
                class: "flex gap-2 mb-6",
                onsubmit: move |e: FormEvent| {
                    e.prevent_default();
                    run_search();
                },
                input {
                    r#type: "text",
                    value: "{query}",
                    oninput: move |e| query.set(e.value()),
                    placeholder: "Username",
                    class: "flex-1 px-3 py-2 border border-gray-300 rounded-md"
                }
                button {
                    r#type: "submit",
                    class: "bg-indigo-700 text-white py-2 px-4 rounded-md hover:bg-indigo-800",
                    "Search"
                }
            }

            match rows() {
                Some(found) if !found.is_empty() => rsx! {
                    table {
                        class: "w-full bg-white rounded-lg shadow-sm border border-gray-200 text-sm",
                        thead {
                            tr {
                                class: "text-left text-gray-500",
                                th { class: "p-3", "No." }
                                th { class: "p-3", "Username" }
                                th { class: "p-3", "Nickname" }
                                th { class: "p-3", "Full name" }
                            }
                        }
                        tbody {
                            for row in found {
                                UserRowView { key: "{row.user_id}", row: row.clone() }
                            }
                        }
                    }
                },
                Some(_) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                        p { class: "text-gray-500", "No users found." }
                    }
                },
                None => rsx! { LoadingSpinner {} },
            }
        }
    }
}

#[component]
fn UserRowView(row: UserRow) -> Element {
    let navigator = use_navigator();
    let full_name = row.full_name();
    let target = Route::UserDetails {
        user_id: row.user_id.get(),
        account_id: row.user_account_id.to_string(),
    };

    rsx! {
        tr {
            class: "border-t border-gray-100 hover:bg-gray-50 cursor-pointer",
            onclick: move |_| {
                navigator.push(target.clone());
            },
            td { class: "p-3", "{row.row}" }
            td { class: "p-3", "{row.username}" }
            td { class: "p-3", "{row.nickname}" }
            td { class: "p-3", "{full_name}" }
        }
    }
}
