use std::str::FromStr;
use thiserror::Error;

const SEPARATOR: char = '/';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("expected <repository>/<path>, got {0:?}")]
    MissingSeparator(String),
    #[error("repository name is empty in {0:?}")]
    EmptyRepository(String),
    #[error("file path is empty in {0:?}")]
    EmptyPath(String),
    #[error("invalid path component {component:?} in {target:?}")]
    InvalidComponent { component: String, target: String },
}

/// Where the file lands: a repository of the owner and a path inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    repo: String,
    path: String,
}

impl Target {
    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn path_segments(&self) -> impl Iterator<Item = &str> {
        self.path.split(SEPARATOR)
    }
}

impl FromStr for Target {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (repo, path) = value
            .split_once(SEPARATOR)
            .ok_or_else(|| Error::MissingSeparator(value.to_owned()))?;

        if repo.is_empty() {
            return Err(Error::EmptyRepository(value.to_owned()));
        }

        if path.is_empty() {
            return Err(Error::EmptyPath(value.to_owned()));
        }

        for component in std::iter::once(repo).chain(path.split(SEPARATOR)) {
            if component.is_empty() || component == "." || component == ".." {
                return Err(Error::InvalidComponent {
                    component: component.to_owned(),
                    target: value.to_owned(),
                });
            }
        }

        Ok(Target {
            repo: repo.to_owned(),
            path: path.to_owned(),
        })
    }
}
