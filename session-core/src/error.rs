use serde_json::Value;
use thiserror::Error;

use crate::transport::{HttpReply, TransportError};

/* -------------------------------------------------------------------------- */
/*                        messages affichés à l'utilisateur                    */
/* -------------------------------------------------------------------------- */

pub const NETWORK_ERROR: &str = "Erreur de connexion. Veuillez vérifier votre connexion Internet.";
pub const SERVER_ERROR: &str = "Erreur serveur. Veuillez réessayer plus tard.";
pub const UNAUTHORIZED: &str = "Vous n'êtes pas autorisé à accéder à cette ressource.";
pub const FORBIDDEN: &str = "Accès refusé.";
pub const NOT_FOUND: &str = "La ressource demandée n'a pas été trouvée.";
pub const CONFLICT: &str = "Conflit: cette ressource existe déjà.";
pub const VALIDATION_ERROR: &str = "Veuillez vérifier vos données.";
pub const UNKNOWN_ERROR: &str = "Une erreur inattendue s'est produite.";
pub const INVALID_RESPONSE: &str = "Réponse du serveur invalide.";
pub const STORAGE_ERROR: &str = "Impossible d'enregistrer la session sur ce navigateur.";

/// Failure of the durable key/value slot.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("stockage indisponible : {0}")]
    Unavailable(String),
    #[error("sérialisation de la session impossible : {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Expected failures of session operations. Display gives the user-facing text.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Non-2xx reply, bad credentials included.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("{}", NETWORK_ERROR)]
    Network(#[from] TransportError),
    /// 2xx login reply without a usable token or role.
    #[error("{}", INVALID_RESPONSE)]
    MalformedResponse,
    #[error("{}", STORAGE_ERROR)]
    Storage(#[from] StoreError),
}

impl AuthError {
    pub fn from_reply(reply: &HttpReply) -> Self {
        AuthError::Rejected {
            status: reply.status,
            message: message_for(reply.status, reply.body.as_ref()),
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            AuthError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Validation entries are plain strings or `{ "msg": .., "param": .. }` objects.
fn validation_text(entry: &Value) -> Option<&str> {
    entry
        .as_str()
        .or_else(|| entry.get("msg").and_then(Value::as_str))
}

/// Server `message` wins; otherwise the first validation error on a 400,
/// otherwise a generic text per status.
pub fn message_for(status: u16, body: Option<&Value>) -> String {
    if let Some(msg) = body.and_then(|b| b.get("message")).and_then(Value::as_str) {
        return msg.to_string();
    }

    let fallback = match status {
        400 => {
            let first = body
                .and_then(|b| b.get("errors"))
                .and_then(Value::as_array)
                .and_then(|errors| errors.first())
                .and_then(validation_text);
            if let Some(first) = first {
                return first.to_string();
            }
            VALIDATION_ERROR
        }
        401 => UNAUTHORIZED,
        403 => FORBIDDEN,
        404 => NOT_FOUND,
        409 => CONFLICT,
        500 | 502 | 503 | 504 => SERVER_ERROR,
        _ => UNKNOWN_ERROR,
    };
    fallback.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn server_message_is_preferred() {
        let body = json!({ "message": "Invalid credentials" });
        assert_eq!(message_for(401, Some(&body)), "Invalid credentials");
        assert_eq!(message_for(500, Some(&body)), "Invalid credentials");
    }

    #[test]
    fn first_validation_error_on_bad_request() {
        let body = json!({ "errors": ["Email invalide", "Mot de passe trop court"] });
        assert_eq!(message_for(400, Some(&body)), "Email invalide");
        assert_eq!(message_for(400, None), VALIDATION_ERROR);
    }

    #[test]
    fn validator_objects_give_their_msg() {
        let body = json!({
            "errors": [
                { "msg": "Le nom d'utilisateur est requis", "param": "username" },
                { "msg": "Le mot de passe est requis", "param": "password" }
            ]
        });
        assert_eq!(message_for(400, Some(&body)), "Le nom d'utilisateur est requis");

        let body = json!({ "errors": [{ "param": "username" }] });
        assert_eq!(message_for(400, Some(&body)), VALIDATION_ERROR);
    }

    #[test]
    fn generic_message_per_status() {
        assert_eq!(message_for(401, None), UNAUTHORIZED);
        assert_eq!(message_for(403, Some(&json!({}))), FORBIDDEN);
        assert_eq!(message_for(404, None), NOT_FOUND);
        assert_eq!(message_for(409, None), CONFLICT);
        assert_eq!(message_for(503, None), SERVER_ERROR);
        assert_eq!(message_for(418, None), UNKNOWN_ERROR);
    }

    #[test]
    fn network_failure_has_generic_text() {
        let err = AuthError::from(TransportError("connection refused".into()));
        assert_eq!(err.message(), NETWORK_ERROR);
        assert_eq!(err.status(), None);
    }

    #[test]
    fn rejected_reply_carries_status() {
        let reply = HttpReply {
            status: 403,
            body: None,
        };
        let err = AuthError::from_reply(&reply);
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.message(), FORBIDDEN);
    }
}
