use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreateRepositoryRequest {
    pub name: String,
    pub private: bool,
}

impl CreateRepositoryRequest {
    /// Repositories are always created public.
    pub fn public(name: impl Into<String>) -> Self {
        CreateRepositoryRequest {
            name: name.into(),
            private: false,
        }
    }
}
