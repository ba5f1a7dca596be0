//! The single fetch operation against the fixed endpoint.

use futures_util::StreamExt;

use crate::error::FetchError;
use crate::net::http::HttpClient;

/// Endpoint the data is fetched from. JSON Placeholder, all posts.
pub const ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

/// Fetch [`ENDPOINT`] once and return the raw body bytes.
///
/// The client is injected so tests can substitute canned responses for the
/// real network. Only a `200 OK` response is accepted; its body is drained
/// to completion and returned untouched — an empty body is a valid result.
/// Nothing is retried here; every failure is surfaced to the caller.
pub async fn fetch_data<C: HttpClient>(client: &C) -> Result<Vec<u8>, FetchError> {
    let response = client
        .get(ENDPOINT)
        .await
        .map_err(|e| FetchError::Transport(Box::new(e)))?;

    // Every return path below drops the body stream, which releases the
    // connection.
    if response.status != 200 {
        return Err(FetchError::UnexpectedStatus(response.status));
    }

    let mut body = response.body;
    let mut data = Vec::new();
    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|e| FetchError::BodyRead(Box::new(e)))?;
        data.extend_from_slice(&chunk);
    }

    Ok(data)
}
