//! First-login password setup

use dioxus::prelude::*;
use techblog_client::validation;

use crate::auth::use_auth;
use crate::routes::Route;

const MISMATCH_MESSAGE: &str = "Passwords do not match";

#[component]
pub fn SetPassword() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let mut password = use_signal(String::new);
    let mut repeated = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    if !auth.is_authenticated() {
        return rsx! {
            Redirect { to: Route::Login {} }
        };
    }

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let new_password = password();

        if let Err(message) = validation::validate_password(&new_password) {
            error.set(Some(message.to_string()));
            return;
        }
        if new_password != repeated() {
            error.set(Some(MISMATCH_MESSAGE.to_string()));
            return;
        }

        let auth = auth.clone();
        spawn(async move {
            is_pending.set(true);
            error.set(None);

            if auth.set_password(&new_password).await.is_ok() {
                navigator.push(Route::Home {});
            }

            is_pending.set(false);
        });
    };

    rsx! {
        div {
            class: "flex items-center justify-center py-12",
            div {
                class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full",
                h1 { class: "text-2xl font-bold text-gray-900 mb-2 text-center", "Set your password" }
                p {
                    class: "text-gray-600 text-sm mb-6 text-center",
                    "At least 8 characters with a lowercase letter, an uppercase letter and a digit."
                }

                if let Some(err) = error() {
                    div {
                        class: "mb-4 p-3 bg-red-50 border border-red-200 text-red-800 rounded text-sm",
                        "{err}"
                    }
                }

                form {
                    onsubmit: handle_submit,
                    input {
                        r#type: "password",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                        placeholder: "New password",
                        class: "w-full mb-3 px-3 py-2 border border-gray-300 rounded-md",
                        disabled: is_pending()
                    }
                    input {
                        r#type: "password",
                        value: "{repeated}",
                        oninput: move |e| repeated.set(e.value()),
                        placeholder: "Repeat password",
                        class: "w-full mb-6 px-3 py-2 border border-gray-300 rounded-md",
                        disabled: is_pending()
                    }
                    button {
                        r#type: "submit",
                        class: "w-full bg-indigo-700 text-white py-2 px-4 rounded-md hover:bg-indigo-800 disabled:opacity-50",
                        disabled: is_pending(),
                        "Save"
                    }
                }
            }
        }
    }
}
