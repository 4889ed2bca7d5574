//! Authentication context for the admin dashboard.
//!
//! This crate provides:
//! - `session`: the persisted session under the `admin_user` storage key
//! - `AuthState`: reactive auth signals bundled into a single struct
//! - `AuthProvider`: the component that owns the state and runs the two
//!   startup effects (diagnostic user-list fetch, session restore)
//! - `use_auth`: the accessor child components call to reach the context

pub mod session;

mod provider;
mod state;

pub use provider::AuthProvider;
pub use state::{use_auth, AuthState};
