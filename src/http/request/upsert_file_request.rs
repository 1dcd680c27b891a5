use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UpsertFileRequest {
    pub message: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

impl UpsertFileRequest {
    pub fn create(message: impl Into<String>, content: impl Into<String>) -> Self {
        UpsertFileRequest {
            message: message.into(),
            content: content.into(),
            sha: None,
        }
    }

    pub fn update(
        message: impl Into<String>,
        content: impl Into<String>,
        sha: impl Into<String>,
    ) -> Self {
        UpsertFileRequest {
            message: message.into(),
            content: content.into(),
            sha: Some(sha.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::request::SerializeRequest;
    use serde_json::json;

    #[test]
    fn should_omit_sha_when_creating() -> anyhow::Result<()> {
        let body = UpsertFileRequest::create("upload file", "aGk=").into_body()?;

        assert_eq!(body, json!({ "message": "upload file", "content": "aGk=" }));

        Ok(())
    }

    #[test]
    fn should_carry_sha_when_updating() -> anyhow::Result<()> {
        let body = UpsertFileRequest::update("upload file", "aGk=", "abc123").into_body()?;

        assert_eq!(
            body,
            json!({ "message": "upload file", "content": "aGk=", "sha": "abc123" })
        );

        Ok(())
    }
}
