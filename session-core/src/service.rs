use log::info;
use serde_json::{json, Value};

use crate::error::AuthError;
use crate::record::SessionRecord;
use crate::role::Role;
use crate::store::{KeyValueStore, SessionStore};
use crate::transport::AuthTransport;

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const REGISTER_ENDPOINT: &str = "/auth/register";

/// Fields of the public registration form.
#[derive(Clone, Debug, PartialEq)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

impl Registration {
    fn to_json(&self) -> Value {
        json!({
            "username": self.username,
            "email": self.email,
            "password": self.password,
            "firstName": self.first_name,
            "lastName": self.last_name,
            "role": self.role.as_tag(),
        })
    }
}

/* -------------------------------------------------------------------------- */
/*                pont entre /auth/... et le stockage de session              */
/* -------------------------------------------------------------------------- */

/// Only writer of the session store.
pub struct SessionService<S, T> {
    store: SessionStore<S>,
    transport: T,
}

impl<S: KeyValueStore, T: AuthTransport> SessionService<S, T> {
    pub fn new(store: SessionStore<S>, transport: T) -> Self {
        Self { store, transport }
    }

    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Stores the reply as the new session record. On failure the store is untouched.
    pub async fn login(&self, identifier: &str, secret: &str) -> Result<SessionRecord, AuthError> {
        let body = json!({ "username": identifier, "password": secret });
        let reply = self.transport.post_json(LOGIN_ENDPOINT, &body).await?;

        if !reply.is_success() {
            let err = AuthError::from_reply(&reply);
            info!("connexion refusée pour {identifier} (HTTP {})", reply.status);
            return Err(err);
        }

        let record: SessionRecord = reply
            .body
            .and_then(|b| serde_json::from_value(b).ok())
            .filter(|r: &SessionRecord| !r.token.is_empty())
            .ok_or(AuthError::MalformedResponse)?;

        self.store.write(&record)?;
        info!("session ouverte : {} ({})", record.profile.username, record.role());
        Ok(record)
    }

    /// Local only, the API has no server-side session to revoke.
    pub fn logout(&self) {
        self.store.clear();
        info!("session fermée");
    }

    /// Registering does not log the user in.
    pub async fn register(&self, registration: &Registration) -> Result<Value, AuthError> {
        let reply = self
            .transport
            .post_json(REGISTER_ENDPOINT, &registration.to_json())
            .await?;

        if !reply.is_success() {
            info!("inscription refusée pour {} (HTTP {})", registration.username, reply.status);
            return Err(AuthError::from_reply(&reply));
        }

        info!("inscription enregistrée : {} ({})", registration.username, registration.role);
        Ok(reply.body.unwrap_or(Value::Null))
    }

    pub fn current_record(&self) -> Option<SessionRecord> {
        self.store.read()
    }
}
