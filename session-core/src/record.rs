use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::role::Role;

/// The API hands out numeric ids on some endpoints and strings on others.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

/// Who is logged in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: Role,
}

/// Token plus profile, exactly as `/auth/login` returned it.
///
/// Persisted flat (`{ "token": .., "username": .., "role": .., .. }`); any
/// field the login reply carried beyond the known ones is kept in `extra`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub token: String,
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionRecord {
    pub fn new(token: impl Into<String>, profile: Profile) -> Self {
        Self {
            token: token.into(),
            profile,
            extra: Map::new(),
        }
    }

    pub fn role(&self) -> Role {
        self.profile.role
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_reply_parses_into_record() {
        let record: SessionRecord = serde_json::from_value(json!({
            "token": "t1",
            "id": 7,
            "username": "admin",
            "email": "admin@formations.fr",
            "role": "admin",
            "firstName": "Alice"
        }))
        .unwrap();

        assert_eq!(record.token, "t1");
        assert_eq!(record.profile.id, Some(UserId::Number(7)));
        assert_eq!(record.profile.username, "admin");
        assert_eq!(record.profile.email.as_deref(), Some("admin@formations.fr"));
        assert_eq!(record.role(), Role::Admin);
        assert_eq!(record.extra.get("firstName"), Some(&json!("Alice")));
    }

    #[test]
    fn minimal_reply_only_needs_token_and_role() {
        let record: SessionRecord =
            serde_json::from_value(json!({ "token": "t1", "role": "ASSISTANT" })).unwrap();
        assert_eq!(record.profile.id, None);
        assert_eq!(record.profile.username, "");
        assert!(record.extra.is_empty());
    }

    #[test]
    fn string_ids_are_kept_as_text() {
        let record: SessionRecord = serde_json::from_value(
            json!({ "token": "t1", "id": "u-42", "role": "FORMATEUR" }),
        )
        .unwrap();
        assert_eq!(record.profile.id, Some(UserId::Text("u-42".into())));
    }

    #[test]
    fn missing_token_or_role_is_an_error() {
        assert!(serde_json::from_value::<SessionRecord>(json!({ "role": "ADMIN" })).is_err());
        assert!(serde_json::from_value::<SessionRecord>(json!({ "token": "t1" })).is_err());
    }
}
