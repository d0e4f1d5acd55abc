//! Authentication context provider

use dioxus::prelude::*;
use techblog_client::{
    Credentials, LoginError, LoginOutcome, SessionState, TechblogClient, Viewer,
};

use crate::config::build_client;

/// Client handle plus a reactive mirror of the session.
///
/// The session itself lives behind the client's lock; `session` is a copy
/// taken after every flow that changes it, so components re-render.
#[derive(Clone)]
pub struct AuthContext {
    pub client: TechblogClient,
    pub session: Signal<SessionState>,
}

impl AuthContext {
    pub fn is_authenticated(&self) -> bool {
        self.session.read().authenticated
    }

    pub fn is_admin(&self) -> bool {
        self.viewer().is_admin()
    }

    pub fn viewer(&self) -> Viewer {
        self.session.read().viewer()
    }

    /// Copy the client session into the signal.
    pub async fn sync(&self) {
        let snapshot = self.client.session().snapshot().await;
        let mut session = self.session;
        session.set(snapshot);
    }

    pub async fn login(&self, credentials: Credentials) -> Result<LoginOutcome, LoginError> {
        let result = self.client.auth().login(&credentials).await;
        self.sync().await;
        result
    }

    pub async fn logout(&self) {
        self.client.auth().logout().await;
        self.sync().await;
    }

    pub async fn set_password(&self, password: &str) -> techblog_client::Result<()> {
        self.client.auth().set_password(password).await
    }
}

/// Auth provider component that wraps the app
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let session = use_signal(SessionState::default);
    // Context is provided once, on first render, only if the client built.
    let setup = use_hook(move || match build_client() {
        Ok(client) => {
            provide_context(AuthContext { client, session });
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to build Techblog client");
            Err(format!("{:#}", e))
        }
    });

    match setup {
        Ok(()) => children,
        Err(e) => rsx! {
            div {
                class: "min-h-screen flex items-center justify-center",
                p { class: "text-red-700", "The application could not start: {e}" }
            }
        },
    }
}

/// Hook to access the auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use std::cell::Cell;

    thread_local! {
        static SEEN_ANONYMOUS: Cell<bool> = const { Cell::new(false) };
    }

    #[component]
    fn Consumer() -> Element {
        let auth = use_auth();
        SEEN_ANONYMOUS.with(|seen| seen.set(!auth.is_authenticated()));
        rsx! { "ready" }
    }

    fn Root() -> Element {
        rsx! {
            AuthProvider { Consumer {} }
        }
    }

    #[test]
    fn test_provider_hands_context_to_children() {
        let mut dom = VirtualDom::new(Root);
        dom.rebuild_in_place();

        assert!(SEEN_ANONYMOUS.with(|seen| seen.get()));
    }
}
