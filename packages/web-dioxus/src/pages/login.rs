//! Login page

use dioxus::prelude::*;
use techblog_client::validation::LoginFormErrors;
use techblog_client::{Credentials, LoginError, Navigation};

use crate::auth::use_auth;
use crate::routes::Route;

/// Login with a username or e-mail. Leaving the password empty starts the
/// first-login flow for accounts created by an administrator.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(LoginFormErrors::default);
    let mut is_pending = use_signal(|| false);

    if auth.is_authenticated() {
        return rsx! {
            Redirect { to: Route::Home {} }
        };
    }

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let credentials = Credentials::new(username().trim(), password());
        let auth = auth.clone();

        spawn(async move {
            is_pending.set(true);

            match auth.login(credentials).await {
                Ok(outcome) => match outcome.next {
                    Navigation::SetPassword => {
                        navigator.push(Route::SetPassword {});
                    }
                    _ => {
                        navigator.push(Route::Home {});
                    }
                },
                Err(LoginError::Invalid(form_errors)) => errors.set(form_errors),
                // Already surfaced through the notifier
                Err(LoginError::Rejected(_)) => password.set(String::new()),
            }

            is_pending.set(false);
        });
    };

    let field_errors = errors();

    rsx! {
        div {
            class: "flex items-center justify-center py-12",

            div {
                class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full",

                h1 { class: "text-2xl font-bold text-gray-900 mb-6 text-center", "Login" }

                form {
                    onsubmit: handle_submit,
                    div {
                        class: "mb-4",
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Username"
                        }
                        input {
                            r#type: "text",
                            value: "{username}",
                            oninput: move |e| {
                                username.set(e.value());
                                errors.write().username = None;
                            },
                            placeholder: "Login or e-mail",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500",
                            disabled: is_pending()
                        }
                        if let Some(message) = field_errors.username {
                            p { class: "mt-1 text-xs text-red-600", "{message}" }
                        }
                    }
                    div {
                        class: "mb-6",
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Password"
                        }
                        input {
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e| {
                                password.set(e.value());
                                errors.write().password = None;
                            },
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500",
                            disabled: is_pending()
                        }
                        if let Some(message) = field_errors.password {
                            p { class: "mt-1 text-xs text-red-600", "{message}" }
                        }
                        p {
                            class: "mt-1 text-xs text-gray-500",
                            "First time here? Leave the password empty to choose one."
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "w-full bg-indigo-700 text-white py-2 px-4 rounded-md hover:bg-indigo-800 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: is_pending(),
                        if is_pending() { "Signing in..." } else { "Sign In" }
                    }
                }
            }
        }
    }
}
