//! Single-endpoint HTTP retrieval with a swappable client.
//!
//! # Architecture
//!
//! - [`net`] - HTTP client abstraction and the production `reqwest` backend
//! - `fetch` - the one retrieval operation against the fixed endpoint
//! - `error` - typed failures surfaced to the caller
//!
//! # Key Features
//!
//! - **Injected I/O**: [`fetch_data`] takes any [`HttpClient`], so tests run
//!   against canned responses with no network involved
//! - **Opaque Bytes**: the response body is returned exactly as received,
//!   never parsed or transformed
//! - **Mechanism-Only**: no policy; retries, if any, belong to the caller

mod error;
mod fetch;
mod net;

pub use error::{BoxError, FetchError};
pub use fetch::{ENDPOINT, fetch_data};
pub use net::http::{BoxStream, HttpClient, Response};

#[cfg(feature = "reqwest")]
pub use net::http::ReqwestClient;
