use crate::{bridge::Error as BridgeError, github::Error as GitHubError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{error::Error as SerdeError, json};
use std::error::Error as StdError;
use tracing::error;

pub(crate) type Result<T> = std::result::Result<T, Error>;

pub enum Error {
    Unauthorized,
    MissingConfig,
    InvalidJson(SerdeError),
    Upstream(GitHubError),
    NotFound,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, detail): (StatusCode, String) = match self {
            Error::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".into()),
            Error::MissingConfig => (StatusCode::BAD_REQUEST, "Missing GH_* envs".into()),
            Error::InvalidJson(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            Error::NotFound => (StatusCode::NOT_FOUND, "Not Found".into()),
            Error::Upstream(e) => {
                error!(error = %e, source = ?e.source(), "failed to forward request to github");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".into(),
                )
            }
        };

        let body = Json(json!({ "detail": detail }));
        (status, body).into_response()
    }
}

impl From<BridgeError> for Error {
    fn from(e: BridgeError) -> Self {
        match e {
            BridgeError::Unauthorized => Error::Unauthorized,
            BridgeError::BadConfig => Error::MissingConfig,
            BridgeError::InvalidRequest(e) => Error::InvalidJson(e),
            BridgeError::Upstream(e) => Error::Upstream(e),
        }
    }
}
