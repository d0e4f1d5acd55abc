//! Modal yes/no confirmation

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmationDialogProps {
    pub open: bool,
    pub title: String,
    pub on_accept: EventHandler<()>,
    pub on_cancel: EventHandler<()>,
}

#[component]
pub fn ConfirmationDialog(props: ConfirmationDialogProps) -> Element {
    if !props.open {
        return rsx! {};
    }

    let on_accept = props.on_accept;
    let on_cancel = props.on_cancel;

    rsx! {
        div {
            class: "fixed inset-0 bg-black/40 flex items-center justify-center z-50",
            div {
                class: "bg-white rounded-lg shadow-lg p-6 max-w-sm w-full",
                p { class: "text-gray-900 mb-6", "{props.title}" }
                div {
                    class: "flex justify-end gap-2",
                    button {
                        class: "px-4 py-2 bg-stone-100 text-stone-700 rounded hover:bg-stone-200",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "px-4 py-2 bg-red-600 text-white rounded hover:bg-red-700",
                        onclick: move |_| on_accept.call(()),
                        "Delete"
                    }
                }
            }
        }
    }
}
