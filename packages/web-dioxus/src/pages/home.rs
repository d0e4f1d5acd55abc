//! Landing page

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();
    let mut article_id = use_signal(String::new);

    let open_article = move |e: FormEvent| {
        e.prevent_default();
        let id = article_id().trim().to_string();
        if !id.is_empty() {
            navigator.push(Route::ArticleView { id });
        }
    };

    let greeting = auth
        .session
        .read()
        .user
        .as_ref()
        .map(|u| format!("Welcome back, {}", u.nickname))
        .unwrap_or_else(|| "Welcome to Techblog".to_string());

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-8",
            h1 { class: "text-2xl font-bold text-gray-900 mb-2", "{greeting}" }
            p { class: "text-gray-600 mb-6", "Articles about the technologies we work with, reviewed by the community." }

            form {
                class: "flex gap-2",
                onsubmit: open_article,
                input {
                    r#type: "text",
                    value: "{article_id}",
                    oninput: move |e| article_id.set(e.value()),
                    placeholder: "Article id",
                    class: "flex-1 px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500"
                }
                button {
                    r#type: "submit",
                    class: "bg-indigo-700 text-white py-2 px-4 rounded-md hover:bg-indigo-800",
                    "Open"
                }
            }
        }
    }
}
