//! Reactive auth state bundled into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_auth()`.

use adm_model::AdminUser;
use dioxus::prelude::*;
use log::info;

use crate::session;

/// Shared authentication state for the dashboard.
///
/// Cheaply copyable: both fields are Dioxus signals. One instance is
/// created per `AuthProvider` mount and torn down with it; there is no
/// module-level singleton.
#[derive(Clone, Copy)]
pub struct AuthState {
    /// The logged-in user, if any.
    pub(crate) user: Signal<Option<AdminUser>>,
    /// True until the initial session restore completes, and while a login
    /// call is in flight.
    pub(crate) loading: Signal<bool>,
}

impl AuthState {
    /// Fresh state: no user, still loading until session restore runs.
    pub fn new() -> Self {
        Self {
            user: Signal::new(None),
            loading: Signal::new(true),
        }
    }

    /// The current user record, cloned out of the signal.
    pub fn user(&self) -> Option<AdminUser> {
        (self.user)()
    }

    /// Whether a user is currently logged in.
    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    /// Whether the initial restore or a login call is still in flight.
    pub fn is_loading(&self) -> bool {
        (self.loading)()
    }

    /// Check credentials against the backend.
    ///
    /// Resolves `true` on success, after the user has been stored in
    /// memory and in local storage. Resolves `false` on any failure --
    /// bad credentials and transport errors alike are swallowed and
    /// reported only through the boolean (plus a diagnostic log), never
    /// raised. Overlapping calls are not guarded; the last write to the
    /// user signal wins.
    pub async fn login(&mut self, username: &str, password: &str) -> bool {
        self.loading.set(true);
        match adm_api::admin_login(username, password).await {
            Ok(user) => {
                info!("login succeeded for {username}");
                session::store(&user);
                self.user.set(Some(user));
                self.loading.set(false);
                true
            }
            Err(err) => {
                info!("login rejected for {username}: {err}");
                self.loading.set(false);
                false
            }
        }
    }

    /// Log out: clear the in-memory user and the persisted session and
    /// token. No network call.
    pub fn logout(&mut self) {
        self.user.set(None);
        session::clear();
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

/// Reach the auth context from a child component.
///
/// Calling this outside an `AuthProvider` subtree is a wiring mistake, not
/// a runtime condition, and fails immediately.
pub fn use_auth() -> AuthState {
    use_hook(|| {
        try_consume_context::<AuthState>()
            .expect("use_auth must be called from a component nested under AuthProvider")
    })
}
