use gloo_net::http::{Method, Request, RequestBuilder};
use gloo_net::Error;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use session_core::{AuthTransport, HttpReply, TransportError};

use crate::config;
use crate::utils::session_store;

/* Ajoute "Authorization: Bearer …" si une session est enregistrée */
fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match session_store().authorization() {
        Some(bearer) => builder.header("Authorization", &bearer),
        None => builder,
    }
}

fn request(method: Method, url: &str) -> RequestBuilder {
    match method {
        Method::GET => Request::get(url),
        Method::POST => Request::post(url),
        Method::PUT => Request::put(url),
        Method::PATCH => Request::patch(url),
        Method::DELETE => Request::delete(url),
        _ => Request::get(url),
    }
}

/* gloo-net n'a pas de variant pour un statut HTTP : on encapsule */
fn status_error(status: u16, text: &str) -> Error {
    Error::GlooError(format!("HTTP {status} – {text}"))
}

/* Appel JSON générique, jeton de session joint */
pub async fn fetch_json<T, U>(
    method: Method,
    path: &str,
    body: Option<&T>,
) -> Result<U, Error>
where
    T: Serialize + ?Sized,
    U: DeserializeOwned,
{
    let builder = authorize(request(method, &config::endpoint(path)));

    let resp = if let Some(b) = body {
        builder.json(b)?.send().await?
    } else {
        builder.send().await?
    };

    if !resp.ok() {
        // le serveur rejette les appels sans jeton valide : 401 / 403
        return Err(status_error(resp.status(), &resp.status_text()));
    }

    resp.json().await
}

/* -------------------------------------------------------------------------- */
/*                       transport des appels /auth/...                       */
/* -------------------------------------------------------------------------- */

/// `/auth/login` et `/auth/register` via fetch. Pas de jeton : on n'en a pas encore.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

impl AuthTransport for HttpTransport {
    async fn post_json(&self, path: &str, body: &Value) -> Result<HttpReply, TransportError> {
        let resp = Request::post(&config::endpoint(path))
            .json(body)
            .map_err(|e| TransportError(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = resp.status();
        // corps vide ou non JSON : on garde seulement le statut
        let body = match resp.text().await {
            Ok(text) => serde_json::from_str(&text).ok(),
            Err(_) => None,
        };

        Ok(HttpReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_call_keeps_status_in_error() {
        match status_error(401, "Unauthorized") {
            Error::GlooError(msg) => assert_eq!(msg, "HTTP 401 – Unauthorized"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
