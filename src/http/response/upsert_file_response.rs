use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpsertFileResponse {
    pub content: Content,
    pub commit: Commit,
}

#[derive(Debug, Deserialize)]
pub struct Content {
    pub path: String,
    pub sha: String,
}

#[derive(Debug, Deserialize)]
pub struct Commit {
    pub sha: String,
}
