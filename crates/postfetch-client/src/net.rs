pub mod http;

pub use http::{BoxStream, HttpClient, Response};

#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
