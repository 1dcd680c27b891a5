use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path};

const DEFAULT_API_URL: &str = "https://api.github.com";
const DEFAULT_COMMIT_MESSAGE: &str = "upload file";
const DEFAULT_USER_AGENT: &str = "ghpublish";

pub const DEFAULT_CONFIG_FILE_NAME: &str = "ghpublish.yaml";
pub const API_URL_ENV: &str = "GHPUBLISH_API_URL";

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "Settings::default_api_url")]
    pub api_url: String,
    #[serde(default = "Settings::default_commit_message")]
    pub commit_message: String,
    #[serde(default = "Settings::default_user_agent")]
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_url: Settings::default_api_url(),
            commit_message: Settings::default_commit_message(),
            user_agent: Settings::default_user_agent(),
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or from [`DEFAULT_CONFIG_FILE_NAME`] when
    /// no path is given. Only the default file may be missing.
    pub async fn load(path: Option<&Path>) -> Result<Settings> {
        let settings = match path {
            Some(path) => {
                let content = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Cannot read {}", path.display()))?;
                Settings::from_yaml(&content)?
            }
            None => match tokio::fs::read_to_string(DEFAULT_CONFIG_FILE_NAME).await {
                Ok(content) => Settings::from_yaml(&content)?,
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                    log::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE_NAME);
                    Settings::default()
                }
                Err(err) => {
                    return Err(err).with_context(|| {
                        format!("Cannot read {}", DEFAULT_CONFIG_FILE_NAME)
                    })
                }
            },
        };

        Ok(settings.with_api_url_override(std::env::var(API_URL_ENV).ok()))
    }

    pub fn from_yaml(content: &str) -> Result<Settings> {
        if content.trim().is_empty() {
            return Ok(Settings::default());
        }

        let settings = serde_yaml::from_str::<Settings>(content).context("Malformed settings")?;

        Ok(settings)
    }

    pub fn with_api_url_override(mut self, api_url: Option<String>) -> Self {
        if let Some(api_url) = api_url.filter(|url| !url.trim().is_empty()) {
            self.api_url = api_url;
        }

        self
    }

    fn default_api_url() -> String {
        DEFAULT_API_URL.to_owned()
    }

    fn default_commit_message() -> String {
        DEFAULT_COMMIT_MESSAGE.to_owned()
    }

    fn default_user_agent() -> String {
        DEFAULT_USER_AGENT.to_owned()
    }
}

/// Who publishes. The token never shows up in `Debug` output.
pub struct Credentials {
    pub owner: String,
    pub token: String,
}

impl Credentials {
    pub fn new(owner: impl Into<String>, token: impl Into<String>) -> Self {
        Credentials {
            owner: owner.into(),
            token: token.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("owner", &self.owner)
            .field("token", &"***")
            .finish()
    }
}
