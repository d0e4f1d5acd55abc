//! Top navigation bar

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;

#[component]
pub fn Header() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let handle_logout = {
        let auth = auth.clone();
        move |_| {
            let auth = auth.clone();
            spawn(async move {
                auth.logout().await;
                navigator.push(Route::Home {});
            });
        }
    };

    let session = auth.session.read();
    let display_name = session
        .user
        .as_ref()
        .map(|u| u.nickname.clone())
        .unwrap_or_else(|| session.username.clone());

    rsx! {
        nav {
            class: "bg-white border-b border-gray-200 px-6 py-3",
            div {
                class: "flex items-center justify-between",

                div {
                    class: "flex items-center gap-6",
                    Link {
                        to: Route::Home {},
                        class: "text-xl font-bold text-indigo-700",
                        "Techblog"
                    }
                    if auth.is_admin() {
                        NavLink { to: Route::SearchUsers {}, label: "Users" }
                    }
                }

                div {
                    class: "flex items-center gap-4",
                    if session.authenticated {
                        span { class: "text-sm text-gray-600", "{display_name}" }
                        button {
                            class: "text-sm text-gray-600 hover:text-gray-900 px-3 py-1.5 rounded hover:bg-gray-100",
                            onclick: handle_logout,
                            "Logout"
                        }
                    } else {
                        NavLink { to: Route::Login {}, label: "Login" }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavLinkProps {
    to: Route,
    label: &'static str,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let route = use_route::<Route>();
    let is_active = route == props.to;

    rsx! {
        Link {
            to: props.to.clone(),
            class: if is_active {
                "px-3 py-2 rounded-md text-sm font-medium bg-indigo-100 text-indigo-800"
            } else {
                "px-3 py-2 rounded-md text-sm font-medium text-gray-600 hover:bg-gray-100 hover:text-gray-900"
            },
            "{props.label}"
        }
    }
}
