//! The opaque admin user record.
//!
//! The backend owns the shape of this record; the dashboard only checks
//! presence and persists it verbatim. Keeping it as a transparent JSON
//! value means backend schema changes never break the session round-trip.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user record as returned by the backend. Opaque to this codebase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdminUser(Value);

impl AdminUser {
    /// Wrap a JSON value as a user record. JSON `null` is not a user.
    pub fn from_value(value: Value) -> Option<Self> {
        if value.is_null() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Borrow the underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Best-effort display name for the dashboard header. Falls through
    /// username, name, then email; the record stays opaque otherwise.
    pub fn display_name(&self) -> Option<&str> {
        ["username", "name", "email"]
            .iter()
            .find_map(|key| self.0.get(key).and_then(Value::as_str))
    }
}
