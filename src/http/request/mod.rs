mod create_repository_request;
mod upsert_file_request;

pub use create_repository_request::CreateRepositoryRequest;
pub use upsert_file_request::UpsertFileRequest;

use super::Error;
use reqwest::Url;
use serde::Serialize;
use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        };

        write!(f, "{}", method)
    }
}

#[derive(Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    pub fn new(method: Method, url: Url) -> Self {
        HttpRequest {
            method,
            url,
            body: None,
        }
    }
}

pub trait SerializeRequest {
    fn into_body(self) -> Result<serde_json::Value, Error>
    where
        Self: Serialize + Sized,
    {
        serde_json::to_value(&self).map_err(|cause| Error::SerializeRequestError { cause })
    }
}

impl SerializeRequest for CreateRepositoryRequest {}
impl SerializeRequest for UpsertFileRequest {}
