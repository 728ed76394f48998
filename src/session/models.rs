//! Session models

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Signed-in visitor as written into the session cookie by the login flow.
///
/// The record is opaque to the landing page and is handed back to the client
/// untouched. Any JSON parses; whether it counts as a signed-in visitor follows
/// JavaScript truthiness, since that is how the client reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile(Value);

impl UserProfile {
    /// Parse a profile from its JSON text
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// `false` for `null`, `false`, `0` and `""`; everything else signs in
    pub fn is_signed_in(&self) -> bool {
        match &self.0 {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.0
            .get("name")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn to_value(&self) -> Value {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_keeps_unknown_fields() {
        let profile =
            UserProfile::from_json(r#"{"id":"u-1","name":"Aminah","phoneNumber":"+60123"}"#)
                .unwrap();
        assert_eq!(profile.name(), Some("Aminah"));
        assert_eq!(
            profile.to_value(),
            json!({"id": "u-1", "name": "Aminah", "phoneNumber": "+60123"})
        );
    }

    #[test]
    fn test_blank_name_is_none() {
        let profile = UserProfile::from_json(r#"{"id":7,"name":"   "}"#).unwrap();
        assert_eq!(profile.name(), None);
        assert!(profile.is_signed_in());
    }

    #[test]
    fn test_any_json_parses() {
        for raw in ["null", "[1]", "0", "\"alice\"", "false", "{}"] {
            assert!(UserProfile::from_json(raw).is_ok(), "{} should parse", raw);
        }
        assert!(UserProfile::from_json("{oops").is_err());
    }

    #[test]
    fn test_signed_in_follows_truthiness() {
        for raw in ["null", "false", "0", "0.0", "\"\""] {
            let profile = UserProfile::from_json(raw).unwrap();
            assert!(!profile.is_signed_in(), "{} should be signed out", raw);
        }
        for raw in ["{}", "[]", "[1]", "1", "true", "\"alice\""] {
            let profile = UserProfile::from_json(raw).unwrap();
            assert!(profile.is_signed_in(), "{} should be signed in", raw);
        }
    }

    #[test]
    fn test_name_on_non_object() {
        assert_eq!(UserProfile::from_json("[1]").unwrap().name(), None);
        assert_eq!(UserProfile::from_json("null").unwrap().name(), None);
    }
}
