pub mod client;
pub mod request;
pub mod request_builder;
pub mod response;

pub use client::Client;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to build the http client")]
    BuildClientError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Invalid value for header {name}")]
    InvalidHeaderError { name: &'static str },
    #[error("Invalid api url {url}: {reason}")]
    InvalidBaseUrlError { url: String, reason: String },
    #[error("Invalid path segment {segment:?}")]
    InvalidSegmentError { segment: String },
    #[error("Failed to serialize request body")]
    SerializeRequestError {
        #[source]
        cause: serde_json::Error,
    },
    #[error("Failed to send request")]
    SendRequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatusError { status: u16, message: String },
    #[error("Failed to parse response")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
}
