//! HTTP client for the admin backend.
//!
//! Two calls: `get_users` (the startup diagnostic listing) and
//! `admin_login` (the credential check). The backend's login response is a
//! loose contract -- it may wrap the user record in a `user` field or be the
//! record itself -- so the shape is normalized into one canonical
//! `AdminUser` here, immediately after the network call, and nowhere else.
//!
//! When the backend hands back an `access_token`, this client persists it
//! under the `admin_token` storage key. The auth context never writes that
//! key; it only clears it on logout.

use adm_model::{AdminUser, TOKEN_STORAGE_KEY};
use gloo_net::http::Request;
use log::warn;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Backend route listing all admin users.
pub const USERS_URL: &str = "/api/admin/users";
/// Backend route checking credentials.
pub const LOGIN_URL: &str = "/api/admin/login";

/// Failures surfaced by the API client. Callers treat every variant the
/// same way (the operation failed); the split exists for diagnostics.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("backend returned status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(String),
    #[error("login response contained no user record")]
    MissingUser,
}

#[derive(Serialize)]
struct LoginPayload<'a> {
    username: &'a str,
    password: &'a str,
}

/// Fetch the full admin user list.
pub async fn get_users() -> Result<Vec<AdminUser>, ApiError> {
    let response = Request::get(USERS_URL)
        .send()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    response
        .json::<Vec<AdminUser>>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// Check credentials against the backend.
///
/// Resolves to the canonical user record on success. Any backend access
/// token riding along in the response is persisted as a side effect.
pub async fn admin_login(username: &str, password: &str) -> Result<AdminUser, ApiError> {
    let request = Request::post(LOGIN_URL)
        .json(&LoginPayload { username, password })
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    let body = response
        .json::<Value>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))?;

    remember_token(&body);
    extract_user(body).ok_or(ApiError::MissingUser)
}

/// Normalize the wrapped-or-bare login response into one canonical record.
fn extract_user(mut body: Value) -> Option<AdminUser> {
    if let Some(inner) = body.get_mut("user") {
        if !inner.is_null() {
            return AdminUser::from_value(inner.take());
        }
    }
    AdminUser::from_value(body)
}

/// Persist the backend access token, if the response carried one.
fn remember_token(body: &Value) {
    let Some(token) = body.get("access_token").and_then(Value::as_str) else {
        return;
    };
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return;
    };
    if storage.set_item(TOKEN_STORAGE_KEY, token).is_err() {
        warn!("could not persist access token");
    }
}
