use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/* -------------------------------------------------------------------------- */
/*                               rôles connus                                 */
/* -------------------------------------------------------------------------- */

/// Permission class of a user.
///
/// The API is not consistent about casing ("ADMIN", "admin", "Admin" all show
/// up), so parsing ignores case and serialization always emits the upper-case
/// tag. Nothing past the JSON boundary compares raw strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    Admin,
    Formateur,
    Assistant,
    Participant,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("rôle inconnu : {0:?}")]
pub struct UnknownRole(pub String);

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Formateur, Role::Assistant, Role::Participant];

    pub fn as_tag(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Formateur => "FORMATEUR",
            Role::Assistant => "ASSISTANT",
            Role::Participant => "PARTICIPANT",
        }
    }

    /// View a freshly logged-in user lands on.
    pub fn landing_path(self) -> &'static str {
        match self {
            Role::Admin => "/admin/dashboard",
            Role::Formateur => "/formateur/dashboard",
            Role::Assistant => "/assistant/dashboard",
            Role::Participant => "/",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Administrateur",
            Role::Formateur => "Formateur",
            Role::Assistant => "Assistant",
            Role::Participant => "Participant",
        }
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Role::Admin),
            "FORMATEUR" => Ok(Role::Formateur),
            "ASSISTANT" => Ok(Role::Assistant),
            "PARTICIPANT" => Ok(Role::Participant),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = UnknownRole;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_tag().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}
