//! Error pages

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn Forbidden() -> Element {
    rsx! {
        div {
            class: "text-center py-24",
            h1 { class: "text-2xl font-bold text-gray-900", "403 - You do not have access to this resource" }
            Link { to: Route::Home {}, class: "text-indigo-700 hover:underline mt-4 inline-block", "Back to the home page" }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "text-center py-24",
            h1 { class: "text-2xl font-bold text-gray-900", "404 - Page not found" }
            p { class: "text-gray-500 mt-2", "/{path}" }
            Link { to: Route::Home {}, class: "text-indigo-700 hover:underline mt-4 inline-block", "Back to the home page" }
        }
    }
}
