//! Toast for the client's notification channel

use dioxus::prelude::*;
use techblog_client::{Notification, Notifier, Severity};

use crate::auth::use_auth;

#[cfg(feature = "web")]
const AUTO_HIDE_MS: u32 = 6_000;

/// Renders whatever the notifier currently holds and hides it after a
/// while (web builds) or on click.
#[component]
pub fn NotificationToast() -> Element {
    let auth = use_auth();
    let notifier = auth.client.notifier().clone();
    let mut current = use_signal(|| notifier.current());
    let mut generation = use_signal(|| 0u64);

    use_future({
        let notifier = notifier.clone();
        move || {
            let mut rx = notifier.subscribe();
            let notifier = notifier.clone();
            async move {
                while rx.changed().await.is_ok() {
                    let next = rx.borrow_and_update().clone();
                    let visible = next.visible;
                    current.set(next);
                    generation += 1;

                    if visible {
                        schedule_auto_hide(notifier.clone(), generation);
                    }
                }
            }
        }
    });

    let Notification {
        message,
        severity,
        visible,
    } = current();

    if !visible {
        return rsx! {};
    }

    let class = match severity {
        Severity::Success => "bg-green-50 border-green-200 text-green-800",
        Severity::Error => "bg-red-50 border-red-200 text-red-800",
    };

    rsx! {
        div {
            class: "fixed bottom-6 left-1/2 -translate-x-1/2 px-4 py-3 border rounded-lg shadow-md cursor-pointer z-50 {class}",
            onclick: move |_| notifier.dismiss(),
            "{message}"
        }
    }
}

/// Dismiss after a delay unless a newer notification arrived meanwhile.
#[cfg(feature = "web")]
fn schedule_auto_hide(notifier: Notifier, generation: Signal<u64>) {
    let shown = generation();
    spawn(async move {
        gloo_timers::future::TimeoutFuture::new(AUTO_HIDE_MS).await;
        if generation() == shown {
            notifier.dismiss();
        }
    });
}

#[cfg(not(feature = "web"))]
fn schedule_auto_hide(_notifier: Notifier, _generation: Signal<u64>) {}
