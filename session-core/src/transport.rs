use serde_json::Value;
use thiserror::Error;

/// Status and (when it parsed as JSON) body of an HTTP reply.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: Option<Value>,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a reply.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Way to reach the remote authentication endpoint.
///
/// Runs on the UI thread: the futures are not `Send` and nothing here
/// times out or cancels.
#[allow(async_fn_in_trait)]
pub trait AuthTransport {
    async fn post_json(&self, path: &str, body: &Value) -> Result<HttpReply, TransportError>;
}

#[cfg(test)]
pub(crate) mod stub {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    /// Answers with scripted replies, in order, and remembers what was sent.
    #[derive(Default)]
    pub struct StubTransport {
        replies: RefCell<VecDeque<Result<HttpReply, TransportError>>>,
        pub sent: RefCell<Vec<(String, Value)>>,
    }

    impl StubTransport {
        pub fn replying(status: u16, body: Value) -> Self {
            let stub = Self::default();
            stub.push(status, body);
            stub
        }

        pub fn unreachable() -> Self {
            let stub = Self::default();
            stub.replies
                .borrow_mut()
                .push_back(Err(TransportError("connection refused".into())));
            stub
        }

        pub fn push(&self, status: u16, body: Value) {
            self.replies.borrow_mut().push_back(Ok(HttpReply {
                status,
                body: Some(body),
            }));
        }
    }

    impl AuthTransport for StubTransport {
        async fn post_json(&self, path: &str, body: &Value) -> Result<HttpReply, TransportError> {
            self.sent.borrow_mut().push((path.to_string(), body.clone()));
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError("no scripted reply".into())))
        }
    }
}
