use crate::http::Error;

use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Deserialize};

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: String,
}

/// A fully read http response. Status interpretation is left to the caller:
/// [`Response::collect`] accepts only 2xx, [`Response::found`] additionally
/// maps an explicit 404 to `None`.
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    text: String,
}

impl Response {
    pub async fn read(response: reqwest::Response) -> Result<Response, Error> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        Ok(Response { status, text })
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn collect(self) -> Result<Response, Error> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(self.into_error())
        }
    }

    pub fn found(self) -> Result<Option<Response>, Error> {
        if self.status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        self.collect().map(Some)
    }

    pub fn json<T>(&self) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str::<T>(&self.text).map_err(|cause| Error::ParseResponseError { cause })
    }

    fn into_error(self) -> Error {
        let message = match serde_json::from_str::<ErrorResponse>(&self.text) {
            Ok(error) => error.message,
            Err(_) => self.text,
        };

        Error::UnexpectedStatusError {
            status: self.status.as_u16(),
            message,
        }
    }
}
