use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FileShaResponse {
    pub sha: String,
    pub path: String,
}
