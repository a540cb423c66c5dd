use std::cell::RefCell;

use serde_json::Value;

use crate::error::AuthError;
use crate::guard::{self, Access, RouteRequirement};
use crate::record::Profile;
use crate::role::Role;
use crate::service::{Registration, SessionService};
use crate::store::KeyValueStore;
use crate::transport::AuthTransport;

/// Who is logged in right now, for the lifetime of the page.
///
/// Seeded once from the store at construction; afterwards only `login`,
/// `logout` and `reload` change it. Concurrent `login` calls are not queued,
/// the caller keeps its trigger disabled while one is pending.
pub struct SessionContext<S, T> {
    service: SessionService<S, T>,
    current: RefCell<Option<Profile>>,
}

impl<S: KeyValueStore, T: AuthTransport> SessionContext<S, T> {
    pub fn new(service: SessionService<S, T>) -> Self {
        let current = service.current_record().map(|record| record.profile);
        Self {
            service,
            current: RefCell::new(current),
        }
    }

    pub fn service(&self) -> &SessionService<S, T> {
        &self.service
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.borrow().is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.current.borrow().as_ref().map(|p| p.role)
    }

    pub fn profile(&self) -> Option<Profile> {
        self.current.borrow().clone()
    }

    pub async fn login(&self, identifier: &str, secret: &str) -> Result<Profile, AuthError> {
        let record = self.service.login(identifier, secret).await?;
        self.current.replace(Some(record.profile.clone()));
        Ok(record.profile)
    }

    pub fn logout(&self) {
        self.service.logout();
        self.current.replace(None);
    }

    pub async fn register(&self, registration: &Registration) -> Result<Value, AuthError> {
        self.service.register(registration).await
    }

    /// Re-reads the store (another tab may have written it). True if the holder changed.
    pub fn reload(&self) -> bool {
        let fresh = self.service.current_record().map(|record| record.profile);
        let changed = *self.current.borrow() != fresh;
        if changed {
            self.current.replace(fresh);
        }
        changed
    }

    pub fn check(&self, requirement: &RouteRequirement) -> Access {
        guard::check(self.current.borrow().as_ref(), requirement)
    }
}
