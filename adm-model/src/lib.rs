//! Core data types shared by the admin dashboard crates.
//!
//! This crate is pure data: chart inputs, the opaque admin user record,
//! storage key constants, and the defensive parsing/formatting helpers the
//! UI layers build on. No I/O, no DOM.

pub mod chart;
pub mod user;

pub use chart::{format_value, format_value_compact, parse_chart_data, ChartDatum, ChartKind};
pub use user::AdminUser;

/// Local storage key holding the JSON-serialized logged-in user.
pub const USER_STORAGE_KEY: &str = "admin_user";

/// Local storage key holding the backend access token. Written by the API
/// client on login, removed on logout.
pub const TOKEN_STORAGE_KEY: &str = "admin_token";
