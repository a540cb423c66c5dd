//! Client-side session and authorization for the training-platform back office.
//!
//! The browser bits (localStorage, fetch, Yew context) live in the `frontend`
//! crate; everything here runs on any target.

pub mod context;
pub mod error;
pub mod guard;
pub mod record;
pub mod role;
pub mod service;
pub mod store;
pub mod transport;

pub use context::SessionContext;
pub use error::{AuthError, StoreError};
pub use guard::{Access, RouteRequirement};
pub use record::{Profile, SessionRecord, UserId};
pub use role::{Role, UnknownRole};
pub use service::{Registration, SessionService};
pub use store::{KeyValueStore, MemoryStore, SessionStore, SESSION_KEY};
pub use transport::{AuthTransport, HttpReply, TransportError};
