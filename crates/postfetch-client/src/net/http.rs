use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;

/// A boxed stream type for HTTP response bodies.
///
/// The stream yields `Result<Bytes, E>` where E is the error type from the
/// HTTP client.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

/// A received HTTP response, reduced to what the fetcher needs: the status
/// code and the body as a once-consumable byte stream.
///
/// Dropping the stream releases the underlying connection, so every exit
/// path that abandons the response body still cleans up after itself.
pub struct Response<E> {
    /// Numeric HTTP status code (e.g. `200`, `404`).
    pub status: u16,
    /// Raw body bytes, streamed. Consumable exactly once.
    pub body: BoxStream<'static, Result<Bytes, E>>,
}

/// Asynchronous HTTP client abstraction.
///
/// This trait provides the minimal interface needed for the fetch operation.
/// Implementations handle their own redirect following and timeout
/// configuration.
///
/// # Implementations
///
/// - [`ReqwestClient`]: Production implementation using `reqwest`
/// - Mock implementations for testing
pub trait HttpClient: Send + Sync {
    /// Error type for HTTP operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Perform a GET request against `url` and return the response.
    ///
    /// The URL is passed through as-is; no shape validation happens here.
    ///
    /// # Errors
    ///
    /// Returns an error only if the request itself fails (DNS failure,
    /// connection refused, timeout, protocol error). A response with a
    /// non-success status is *not* an error at this layer; the status code
    /// is surfaced on [`Response`] for the caller to judge.
    fn get(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<Response<Self::Error>, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;

    /// Production HTTP client implementation using reqwest.
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        /// Create a new client with reqwest's default configuration.
        pub fn new() -> Self {
            Self {
                client: reqwest::Client::new(),
            }
        }
    }

    impl Default for ReqwestClient {
        fn default() -> Self {
            Self::new()
        }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn get(&self, url: &str) -> Result<Response<Self::Error>, Self::Error> {
            log::debug!("GET {url}");
            let response = self.client.get(url).send().await?;
            let status = response.status().as_u16();

            Ok(Response {
                status,
                body: Box::pin(response.bytes_stream()),
            })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;
