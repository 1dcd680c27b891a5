use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AuthenticatedUserResponse {
    pub login: String,
}
