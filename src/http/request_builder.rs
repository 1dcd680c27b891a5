use super::{
    client::Client,
    request::{HttpRequest, Method, SerializeRequest},
    response::Response,
    Error,
};
use serde::Serialize;
use std::marker::PhantomData;

pub trait RequestType {
    const METHOD: Method;
}

pub struct Get;
pub struct Post;
pub struct Put;

impl RequestType for Get {
    const METHOD: Method = Method::Get;
}
impl RequestType for Post {
    const METHOD: Method = Method::Post;
}
impl RequestType for Put {
    const METHOD: Method = Method::Put;
}

pub struct InitBuilder {}

impl InitBuilder {
    pub fn get(client: &Client) -> RequestBuilder<'_, Get> {
        RequestBuilder::new(client)
    }

    pub fn post(client: &Client) -> RequestBuilder<'_, Post> {
        RequestBuilder::new(client)
    }

    pub fn put(client: &Client) -> RequestBuilder<'_, Put> {
        RequestBuilder::new(client)
    }
}

/// Builds a request against the client's base url. Path segments are added
/// one at a time and percent-encoded individually, so a `/` inside a segment
/// never introduces a new path component.
pub struct RequestBuilder<'c, T: RequestType> {
    _marker: PhantomData<T>,
    client: &'c Client,
    pub builder: HttpRequest,
}

impl<'c, T> RequestBuilder<'c, T>
where
    T: RequestType,
{
    fn new(client: &'c Client) -> Self {
        RequestBuilder {
            _marker: PhantomData,
            client,
            builder: HttpRequest::new(T::METHOD, client.base_url().clone()),
        }
    }

    pub fn path<I, S>(mut self, segments: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segments = segments
            .into_iter()
            .map(|segment| validate_segment(segment.as_ref()).map(str::to_owned))
            .collect::<Result<Vec<_>, _>>()?;

        let url = self.builder.url.to_string();
        self.builder
            .url
            .path_segments_mut()
            .map_err(|_| Error::InvalidBaseUrlError {
                url,
                reason: "url cannot be a base".to_owned(),
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(self)
    }

    pub async fn send(self) -> Result<Response, Error> {
        self.client.send(self.builder).await
    }
}

impl RequestBuilder<'_, Post> {
    pub fn body<B>(mut self, body: B) -> Result<Self, Error>
    where
        B: SerializeRequest + Serialize,
    {
        self.builder.body = Some(body.into_body()?);
        Ok(self)
    }
}

impl RequestBuilder<'_, Put> {
    pub fn body<B>(mut self, body: B) -> Result<Self, Error>
    where
        B: SerializeRequest + Serialize,
    {
        self.builder.body = Some(body.into_body()?);
        Ok(self)
    }
}

fn validate_segment(segment: &str) -> Result<&str, Error> {
    if segment.is_empty() || segment == "." || segment == ".." {
        return Err(Error::InvalidSegmentError {
            segment: segment.to_owned(),
        });
    }

    Ok(segment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn client(base: &str) -> Client {
        Client::new(base, "token", "ghpublish").unwrap()
    }

    #[test]
    fn should_append_segments_to_the_base_url() -> Result<()> {
        let client = client("https://api.github.com");

        let request = client.get().path(["repos", "octo", "myrepo"])?;

        assert_eq!(
            request.builder.url.as_str(),
            "https://api.github.com/repos/octo/myrepo"
        );
        assert_eq!(request.builder.method, Method::Get);

        Ok(())
    }

    #[test]
    fn should_keep_an_enterprise_base_path() -> Result<()> {
        let client = client("https://ghe.example.com/api/v3/");

        let request = client.put().path(["repos", "octo", "myrepo"])?;

        assert_eq!(
            request.builder.url.as_str(),
            "https://ghe.example.com/api/v3/repos/octo/myrepo"
        );

        Ok(())
    }

    #[test]
    fn should_encode_separators_inside_a_segment() -> Result<()> {
        let client = client("https://api.github.com");

        let request = client.get().path(["repos", "octo/evil", "my repo"])?;

        assert_eq!(
            request.builder.url.as_str(),
            "https://api.github.com/repos/octo%2Fevil/my%20repo"
        );

        Ok(())
    }

    #[test]
    fn should_reject_empty_and_relative_segments() {
        let client = client("https://api.github.com");

        for segment in ["", ".", ".."] {
            let result = client.get().path(["repos", segment]);

            assert!(matches!(
                result,
                Err(Error::InvalidSegmentError { .. })
            ));
        }
    }
}
