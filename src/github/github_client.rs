use super::handler::repository_handler::RepositoryHandler;
use crate::{
    config::{Credentials, Settings},
    http::{
        request::{CreateRepositoryRequest, UpsertFileRequest},
        response::{AuthenticatedUserResponse, FileShaResponse, UpsertFileResponse},
        Client, Error,
    },
    payload::Payload,
};

/// One client per invocation. Holds the authenticated http client and the
/// commit message used for every file write.
pub struct GithubClient {
    http: Client,
    commit_message: String,
}

impl GithubClient {
    pub fn new(credentials: &Credentials, settings: &Settings) -> Result<GithubClient, Error> {
        let http = Client::new(
            &settings.api_url,
            &credentials.token,
            &settings.user_agent,
        )?;

        Ok(GithubClient {
            http,
            commit_message: settings.commit_message.to_owned(),
        })
    }

    pub fn repo(&self, owner: impl Into<String>, name: impl Into<String>) -> RepositoryHandler<'_> {
        RepositoryHandler::new(self, owner, name)
    }

    pub(super) async fn repository_exists(&self, owner: &str, repo: &str) -> Result<bool, Error> {
        let response = self
            .http
            .get()
            .path(["repos", owner, repo])?
            .send()
            .await?
            .found()?;

        log::debug!(
            "repository {}/{} {}",
            owner,
            repo,
            if response.is_some() { "exists" } else { "not found" }
        );

        Ok(response.is_some())
    }

    async fn authenticated_login(&self) -> Result<String, Error> {
        let user = self
            .http
            .get()
            .path(["user"])?
            .send()
            .await?
            .collect()?
            .json::<AuthenticatedUserResponse>()?;

        log::debug!("authenticated as {}", user.login);

        Ok(user.login)
    }

    /// Creates a public repository under `owner`: the token's own account
    /// when the logins match (case-insensitively), the organisation
    /// `owner` otherwise.
    pub(super) async fn create_repository(&self, owner: &str, repo: &str) -> Result<(), Error> {
        let login = self.authenticated_login().await?;

        let segments = if login.eq_ignore_ascii_case(owner) {
            vec!["user", "repos"]
        } else {
            vec!["orgs", owner, "repos"]
        };

        log::debug!("creating repository {}/{} via /{}", owner, repo, segments.join("/"));

        self.http
            .post()
            .path(segments)?
            .body(CreateRepositoryRequest::public(repo))?
            .send()
            .await?
            .collect()?;

        Ok(())
    }

    pub(super) async fn fetch_file_revision(
        &self,
        owner: &str,
        repo: &str,
        path: &[&str],
    ) -> Result<Option<String>, Error> {
        let response = self
            .http
            .get()
            .path(contents_path(owner, repo, path))?
            .send()
            .await?
            .found()?;

        match response {
            Some(response) => {
                let file = response.json::<FileShaResponse>()?;
                log::debug!("file {} is at revision {}", file.path, file.sha);
                Ok(Some(file.sha))
            }
            None => {
                log::debug!("file {} not found", path.join("/"));
                Ok(None)
            }
        }
    }

    pub(super) async fn create_file(
        &self,
        owner: &str,
        repo: &str,
        path: &[&str],
        payload: &Payload,
    ) -> Result<String, Error> {
        log::debug!("creating file {}", path.join("/"));

        let request = UpsertFileRequest::create(&self.commit_message, payload.value());

        self.put_contents(owner, repo, path, request).await
    }

    pub(super) async fn update_file(
        &self,
        owner: &str,
        repo: &str,
        path: &[&str],
        payload: &Payload,
        sha: &str,
    ) -> Result<String, Error> {
        log::debug!("updating file {} from revision {}", path.join("/"), sha);

        let request = UpsertFileRequest::update(&self.commit_message, payload.value(), sha);

        self.put_contents(owner, repo, path, request).await
    }

    async fn put_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &[&str],
        request: UpsertFileRequest,
    ) -> Result<String, Error> {
        let response = self
            .http
            .put()
            .path(contents_path(owner, repo, path))?
            .body(request)?
            .send()
            .await?
            .collect()?;

        let upserted = response.json::<UpsertFileResponse>()?;

        log::debug!(
            "wrote {} at blob {}",
            upserted.content.path,
            upserted.content.sha
        );

        Ok(upserted.commit.sha)
    }
}

fn contents_path<'a>(owner: &'a str, repo: &'a str, path: &[&'a str]) -> Vec<&'a str> {
    ["repos", owner, repo, "contents"]
        .into_iter()
        .chain(path.iter().copied())
        .collect()
}
