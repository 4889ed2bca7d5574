//! The provider component that owns the auth state.

use dioxus::prelude::*;
use log::{info, warn};

use crate::session;
use crate::state::AuthState;

/// Provides `AuthState` to its subtree and runs the startup effects.
///
/// Two independent effects run once at mount, unordered relative to each
/// other:
/// 1. fetch the full user list from the backend purely for diagnostic
///    logging -- failures are caught and logged, never surfaced to state;
/// 2. restore the saved session from local storage. The loading flag is
///    cleared only after this step.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut state = use_context_provider(AuthState::new);

    // Effect 1: diagnostic user-list fetch.
    use_effect(move || {
        spawn(async move {
            match adm_api::get_users().await {
                Ok(users) => info!("backend reports {} admin users", users.len()),
                Err(err) => warn!("could not list admin users: {err}"),
            }
        });
    });

    // Effect 2: session restore.
    use_effect(move || {
        if let Some(user) = session::load() {
            info!("restored saved session");
            state.user.set(Some(user));
        }
        state.loading.set(false);
    });

    rsx! {
        {children}
    }
}
