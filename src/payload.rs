use anyhow::{Context, Result};
use base64::{prelude::BASE64_STANDARD, Engine};
use std::path::Path;

/// File contents ready for transport, base64 encoded once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    encoded: String,
}

impl Payload {
    pub fn encode(bytes: impl AsRef<[u8]>) -> Self {
        Payload {
            encoded: BASE64_STANDARD.encode(bytes),
        }
    }

    pub async fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Cannot read {}", path.display()))?;

        log::debug!("read {} bytes from {}", bytes.len(), path.display());

        Ok(Payload::encode(bytes))
    }

    pub fn value(&self) -> &str {
        &self.encoded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs::File, io::Write};
    use tempdir::TempDir;

    #[test]
    fn should_encode_with_padding() {
        assert_eq!(Payload::encode(b"hi").value(), "aGk=");
    }

    #[test]
    fn should_encode_an_empty_file_as_empty() {
        assert_eq!(Payload::encode(b"").value(), "");
    }

    #[test]
    fn should_round_trip_binary_content() -> Result<()> {
        let bytes: Vec<u8> = (0..=255u8).rev().chain([0, 0, 0xff]).collect();

        let payload = Payload::encode(&bytes);

        assert_eq!(BASE64_STANDARD.decode(payload.value())?, bytes);

        Ok(())
    }

    #[tokio::test]
    async fn should_read_and_encode_a_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("payload")?;

        let file_path = dir.path().join("hello");
        File::create(&file_path)?.write_all(b"hi")?;

        let payload = Payload::read(&file_path).await?;

        assert_eq!(payload.value(), "aGk=");

        dir.close()?;
        Ok(())
    }

    #[tokio::test]
    async fn should_fail_on_a_missing_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("payload")?;

        let result = Payload::read(dir.path().join("missing")).await;

        assert!(result.is_err());

        dir.close()?;
        Ok(())
    }
}
