use super::{
    request::HttpRequest,
    request_builder::{Get, InitBuilder, Post, Put, RequestBuilder},
    response::Response,
    Error,
};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION},
    Url,
};

const GITHUB_API_VERSION: &str = "2022-11-28";

/// Thin wrapper over [`reqwest::Client`] that knows the api base url and
/// carries the authentication headers sent with every request.
#[derive(Clone, Debug)]
pub struct Client {
    inner: reqwest::Client,
    base_url: Url,
}

impl Client {
    pub fn new(base_url: &str, token: &str, user_agent: &str) -> Result<Client, Error> {
        let base_url = Url::parse(base_url).map_err(|err| Error::InvalidBaseUrlError {
            url: base_url.to_owned(),
            reason: err.to_string(),
        })?;

        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrlError {
                url: base_url.to_string(),
                reason: "url cannot be a base".to_owned(),
            });
        }

        let inner = reqwest::Client::builder()
            .default_headers(default_headers(token)?)
            .user_agent(user_agent)
            .build()
            .map_err(|cause| Error::BuildClientError { cause })?;

        Ok(Client { inner, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn send(&self, request: HttpRequest) -> Result<Response, Error> {
        log::debug!("{} {}", request.method, request.url);

        let mut builder = self.inner.request(request.method.into(), request.url);

        if let Some(body) = request.body {
            builder = builder.json(&body);
        }

        let response = builder
            .send()
            .await
            .map_err(|cause| Error::SendRequestError { cause })?;

        let response = Response::read(response).await?;
        log::debug!("-> {}", response.status());

        Ok(response)
    }

    pub fn get(&self) -> RequestBuilder<'_, Get> {
        InitBuilder::get(self)
    }

    pub fn post(&self) -> RequestBuilder<'_, Post> {
        InitBuilder::post(self)
    }

    pub fn put(&self) -> RequestBuilder<'_, Put> {
        InitBuilder::put(self)
    }
}

fn default_headers(token: &str) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();

    let mut authorization = HeaderValue::from_str(&format!("token {}", token))
        .map_err(|_| Error::InvalidHeaderError { name: "authorization" })?;
    authorization.set_sensitive(true);

    headers.insert(AUTHORIZATION, authorization);
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/vnd.github+json"),
    );
    headers.insert(
        HeaderName::from_static("x-github-api-version"),
        HeaderValue::from_static(GITHUB_API_VERSION),
    );

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use mockito::Server;

    #[tokio::test]
    async fn should_send_default_headers() -> Result<()> {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/ping")
            .match_header("authorization", "token secret")
            .match_header("accept", "application/vnd.github+json")
            .match_header("x-github-api-version", "2022-11-28")
            .match_header("user-agent", "ghpublish-test")
            .with_body(r#""pong""#)
            .create_async()
            .await;

        let client = Client::new(&server.url(), "secret", "ghpublish-test")?;
        let response = client.get().path(["ping"])?.send().await?;

        mock.assert_async().await;
        assert_eq!(response.json::<String>()?, "pong");

        Ok(())
    }

    #[test]
    fn should_reject_a_malformed_base_url() {
        let result = Client::new("not a url", "secret", "ghpublish");

        assert!(matches!(result, Err(Error::InvalidBaseUrlError { .. })));
    }

    #[test]
    fn should_reject_a_token_with_control_characters() {
        let result = Client::new("https://api.github.com", "bad\ntoken", "ghpublish");

        assert!(matches!(result, Err(Error::InvalidHeaderError { .. })));
    }
}
