use crate::{github::github_client::GithubClient, http::Error, payload::Payload};

/// A single file inside a repository, addressed by its path components.
pub struct FileHandler<'c> {
    client: &'c GithubClient,
    owner: String,
    repo: String,
    path: Vec<String>,
}

impl<'c> FileHandler<'c> {
    pub fn new<'p>(
        client: &'c GithubClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
        path: impl IntoIterator<Item = &'p str>,
    ) -> Self {
        FileHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
            path: path.into_iter().map(str::to_owned).collect(),
        }
    }

    pub async fn revision(&self) -> Result<Option<String>, Error> {
        self.client
            .fetch_file_revision(&self.owner, &self.repo, &self.segments())
            .await
    }

    pub async fn create(&self, payload: &Payload) -> Result<String, Error> {
        self.client
            .create_file(&self.owner, &self.repo, &self.segments(), payload)
            .await
    }

    pub async fn update(&self, payload: &Payload, sha: &str) -> Result<String, Error> {
        self.client
            .update_file(&self.owner, &self.repo, &self.segments(), payload, sha)
            .await
    }

    fn segments(&self) -> Vec<&str> {
        self.path.iter().map(String::as_str).collect()
    }
}
