use crate::github::Error as GitHubError;
use serde_json::Error as SerdeError;
use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a bridge request could not be relayed
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("missing or invalid bearer token")]
    Unauthorized,
    #[error("missing required github configuration")]
    BadConfig,
    #[error("invalid request body")]
    InvalidRequest(#[from] SerdeError),
    #[error("failed to forward request to github")]
    Upstream(#[from] GitHubError),
}
