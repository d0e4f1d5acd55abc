//! User details with password reset

use dioxus::prelude::*;
use techblog_client::users::{reset_password, user_details};
use techblog_client::{AccountId, User, UserId};

use crate::auth::use_auth;
use crate::components::LoadingSpinner;
use crate::routes::Route;

#[component]
pub fn UserDetails(user_id: i64, account_id: String) -> Element {
    let auth = use_auth();
    let mut details = use_signal(|| None::<(User, String)>);

    let parsed = AccountId::parse(&account_id).ok();

    use_effect({
        let auth = auth.clone();
        move || {
            let Some(account_id) = parsed else {
                return;
            };
            let auth = auth.clone();
            spawn(async move {
                match user_details(
                    auth.client.identity(),
                    auth.client.api(),
                    UserId::new(user_id),
                    account_id,
                )
                .await
                {
                    Ok(loaded) => details.set(Some(loaded)),
                    Err(e) => auth.client.notifier().error(e.user_message()),
                }
            });
        }
    });

    let Some(account_id) = parsed else {
        return rsx! {
            Redirect { to: Route::NotFound { segments: vec!["manage-users".to_string(), user_id.to_string()] } }
        };
    };

    let handle_reset = {
        let auth = auth.clone();
        move |_| {
            let auth = auth.clone();
            spawn(async move {
                reset_password(auth.client.identity(), auth.client.notifier(), account_id).await;
            });
        }
    };

    let Some((user, username)) = details() else {
        return rsx! { LoadingSpinner {} };
    };

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 flex gap-8",
            dl {
                class: "grid grid-cols-2 gap-x-6 gap-y-3 flex-1",
                dt { class: "text-gray-500", "First name" }
                dd { class: "text-gray-900", "{user.firstname}" }
                dt { class: "text-gray-500", "Surname" }
                dd { class: "text-gray-900", "{user.surname}" }
                dt { class: "text-gray-500", "Username" }
                dd { class: "text-gray-900", "{username}" }
                dt { class: "text-gray-500", "Nickname" }
                dd { class: "text-gray-900", "{user.nickname}" }
                dt { class: "text-gray-500", "E-mail" }
                dd { class: "text-gray-900", "{user.email}" }
                div {
                    class: "col-span-2 pt-4",
                    button {
                        class: "px-4 py-2 bg-sky-100 text-sky-800 rounded hover:bg-sky-200",
                        onclick: handle_reset,
                        "Reset password"
                    }
                }
            }
            if let Some(avatar) = &user.avatar {
                img {
                    class: "w-32 h-32 rounded-full object-cover",
                    alt: "avatar",
                    src: "data:image/jpeg;base64,{avatar}"
                }
            }
        }
    }
}
