use crate::error::{FetchError, Result};
use reqwest::{blocking::Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Builds the blocking transport.
///
/// `None` leaves requests without a deadline, like a plain `GET` on the default transport.
pub fn http_client(timeout: Option<Duration>) -> reqwest::Result<Client> {
    Client::builder().timeout(timeout).build()
}

/// Issues one `GET` and decodes a `200 OK` body as JSON.
///
/// The response is consumed by value on every branch, so its connection goes back to
/// the pool (or is closed) before this returns.
pub fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T> {
    tracing::debug!(url, "GET");
    let resp = client.get(url).send()?;

    let status = resp.status();
    tracing::debug!(url, status = status.as_u16(), "registry responded");

    if status != StatusCode::OK {
        // best-effort: an unreadable body still reports the status
        let body = resp.text().unwrap_or_default();
        return Err(FetchError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        });
    }

    let bytes = resp.bytes()?;
    Ok(serde_json::from_slice(&bytes)?)
}
