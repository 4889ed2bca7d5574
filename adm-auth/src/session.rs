//! Persisted session under the `admin_user` local storage key.
//!
//! The session is a verbatim JSON copy of the user record the backend
//! returned at login. It is read once at application start and accepted at
//! face value -- no expiry, no server-side revalidation. Storage failures
//! never propagate: a browser without storage simply behaves as logged out.

use adm_model::{AdminUser, TOKEN_STORAGE_KEY, USER_STORAGE_KEY};
use log::warn;
use web_sys::Storage;

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Parse a raw storage entry as a user record.
pub fn decode(raw: &str) -> Result<AdminUser, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Read the saved session, if any. A corrupt entry (unparseable, or JSON
/// `null`) is discarded and removed from storage.
pub fn load() -> Option<AdminUser> {
    let storage = storage()?;
    let raw = storage.get_item(USER_STORAGE_KEY).ok().flatten()?;
    match decode(&raw) {
        Ok(user) if !user.as_value().is_null() => Some(user),
        Ok(_) => {
            warn!("saved session was null, discarding");
            let _ = storage.remove_item(USER_STORAGE_KEY);
            None
        }
        Err(err) => {
            warn!("saved session was corrupt, discarding: {err}");
            let _ = storage.remove_item(USER_STORAGE_KEY);
            None
        }
    }
}

/// Persist the session for the next page load.
pub fn store(user: &AdminUser) {
    let Some(storage) = storage() else {
        return;
    };
    match serde_json::to_string(user) {
        Ok(raw) => {
            if storage.set_item(USER_STORAGE_KEY, &raw).is_err() {
                warn!("could not persist session");
            }
        }
        Err(err) => warn!("could not serialize session: {err}"),
    }
}

/// Remove the session and the auxiliary access token.
pub fn clear() {
    let Some(storage) = storage() else {
        return;
    };
    let _ = storage.remove_item(USER_STORAGE_KEY);
    let _ = storage.remove_item(TOKEN_STORAGE_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_round_trips_a_user() {
        let user = AdminUser::from_value(json!({"id": 9, "username": "ana"})).unwrap();
        let raw = serde_json::to_string(&user).unwrap();
        assert_eq!(decode(&raw).unwrap(), user);
    }

    #[test]
    fn decode_rejects_corrupt_entries() {
        assert!(decode("{not json").is_err());
        assert!(decode("").is_err());
    }

    #[test]
    fn decode_accepts_null_but_load_treats_it_as_absent() {
        // `null` parses as a value; the presence check in `load` is what
        // rejects it. Covered here at the decode seam.
        let parsed = decode("null").unwrap();
        assert!(parsed.as_value().is_null());
    }
}
