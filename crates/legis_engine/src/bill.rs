//! Data model for legislative-bill records.
//!
//! A `Bill` carries the document metadata plus a `content` payload that is
//! deliberately opaque to the store and the API: only the presentation
//! layer interprets its shape, so it is held as raw JSON and passed
//! through unexamined.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a bill.
///
/// Identifiers are generated at creation time from a UUID v4, giving
/// 128 bits of randomness and a cryptographically negligible collision
/// probability. Once assigned, an identifier never changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BillId(String);

impl BillId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create a BillId from an existing string, e.g. a request path segment.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BillId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A legislative-bill record.
///
/// Serializes to the wire shape
/// `{ id, title, shortTitle, status, content }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    id: BillId,
    title: String,
    short_title: String,
    status: String,
    content: serde_json::Value,
}

impl Bill {
    /// Assemble a bill from a generated identifier and a draft.
    pub fn new(id: BillId, draft: BillDraft) -> Self {
        Self {
            id,
            title: draft.title,
            short_title: draft.short_title,
            status: draft.status,
            content: draft.content,
        }
    }

    /// Returns the bill identifier.
    pub fn id(&self) -> &BillId {
        &self.id
    }

    /// Returns the full title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the short title.
    pub fn short_title(&self) -> &str {
        &self.short_title
    }

    /// Returns the status label. Inert metadata: no transition rules apply.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the opaque content payload.
    pub fn content(&self) -> &serde_json::Value {
        &self.content
    }
}

/// A bill lacking an identifier; input to [`crate::store::BillStore::create`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillDraft {
    pub title: String,
    pub short_title: String,
    #[serde(default = "default_status")]
    pub status: String,
    pub content: serde_json::Value,
}

fn default_status() -> String {
    "proposed".to_string()
}

impl BillDraft {
    /// Create a draft with the default `"proposed"` status.
    pub fn new(
        title: impl Into<String>,
        short_title: impl Into<String>,
        content: serde_json::Value,
    ) -> Self {
        Self {
            title: title.into(),
            short_title: short_title.into(),
            status: default_status(),
            content,
        }
    }

    /// Override the status label.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}

/// Unique identifier for a user, generated like [`BillId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user account record. Part of the schema but reachable only through
/// internal store operations; no HTTP surface exposes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: String,
    password: String,
}

impl User {
    /// Assemble a user from a generated identifier and a draft.
    pub fn new(id: UserId, draft: UserDraft) -> Self {
        Self {
            id,
            username: draft.username,
            password: draft.password,
        }
    }

    /// Returns the user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }
}

/// A user lacking an identifier; input to [`crate::store::BillStore::create_user`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserDraft {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_bill_id_generation_is_distinct() {
        // Collision-freedom property: repeated generation never repeats.
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            let id = BillId::generate();
            assert!(seen.insert(id.as_str().to_string()), "duplicate id generated");
        }
    }

    #[test]
    fn test_bill_id_from_string_round_trip() {
        let id = BillId::from_string("00000000-0000-0000-0000-000000000000");
        assert_eq!(id.as_str(), "00000000-0000-0000-0000-000000000000");
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn test_bill_assembly_from_draft() {
        let draft = BillDraft::new("Act X", "X", json!({"overview": {}}));
        let id = BillId::generate();
        let bill = Bill::new(id.clone(), draft);

        assert_eq!(bill.id(), &id);
        assert_eq!(bill.title(), "Act X");
        assert_eq!(bill.short_title(), "X");
        assert_eq!(bill.status(), "proposed");
        assert_eq!(bill.content(), &json!({"overview": {}}));
    }

    #[test]
    fn test_bill_draft_with_status() {
        let draft = BillDraft::new("Act X", "X", json!({})).with_status("enacted");
        assert_eq!(draft.status, "enacted");
    }

    #[test]
    fn test_bill_serializes_with_camel_case_short_title() {
        let bill = Bill::new(
            BillId::from_string("abc"),
            BillDraft::new("Act X", "X", json!({"sections": []})),
        );
        let value = serde_json::to_value(&bill).unwrap();

        assert_eq!(value["id"], "abc");
        assert_eq!(value["title"], "Act X");
        assert_eq!(value["shortTitle"], "X");
        assert_eq!(value["status"], "proposed");
        assert_eq!(value["content"], json!({"sections": []}));
        // The snake_case field name must not leak onto the wire
        assert!(value.get("short_title").is_none());
    }

    #[test]
    fn test_bill_deserializes_from_wire_shape() {
        let bill: Bill = serde_json::from_str(
            r#"{"id":"abc","title":"Act X","shortTitle":"X","status":"proposed","content":{"k":1}}"#,
        )
        .unwrap();
        assert_eq!(bill.short_title(), "X");
        assert_eq!(bill.content()["k"], 1);
    }

    #[test]
    fn test_content_is_passed_through_unexamined() {
        // Arbitrary nesting survives untouched
        let content = json!({
            "overview": {"purpose": ["a", "b"]},
            "funding": {"allocation": [{"program": "Grants", "amount": 500}]},
            "timeline": [{"month": 6, "milestone": "draft"}],
        });
        let bill = Bill::new(
            BillId::generate(),
            BillDraft::new("Act X", "X", content.clone()),
        );
        assert_eq!(bill.content(), &content);
    }

    #[test]
    fn test_user_assembly_from_draft() {
        let draft = UserDraft {
            username: "clerk".to_string(),
            password: "hunter2".to_string(),
        };
        let id = UserId::generate();
        let user = User::new(id.clone(), draft);

        assert_eq!(user.id(), &id);
        assert_eq!(user.username(), "clerk");
    }
}
