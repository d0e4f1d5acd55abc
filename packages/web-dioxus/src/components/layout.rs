//! Page layouts and role guards

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;
use super::{Header, NotificationToast};

/// Shell around every page: header, content, notification toast.
#[component]
pub fn AppLayout() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gray-50",
            Header {}
            main {
                class: "max-w-5xl mx-auto p-6",
                Outlet::<Route> {}
            }
            NotificationToast {}
        }
    }
}

/// Administrator-only section.
#[component]
pub fn AdminLayout() -> Element {
    let auth = use_auth();

    if !auth.is_authenticated() {
        return rsx! {
            Redirect { to: Route::Login {} }
        };
    }

    if !auth.is_admin() {
        return rsx! {
            Redirect { to: Route::Forbidden {} }
        };
    }

    rsx! {
        Outlet::<Route> {}
    }
}
