use reqwest::Error as ReqwestError;
use thiserror::Error as ThisError;
use url::ParseError;

pub type Result<T> = std::result::Result<T, Error>;

/// Possible errors that can arise when forwarding to GitHub
#[derive(Debug, ThisError)]
pub enum Error {
    // initialization errors
    #[error("failed to build the http client")]
    Client(#[source] ReqwestError),

    // runtime errors
    #[error("could not build the endpoint URL")]
    InvalidUrl(#[from] ParseError),
    #[error("failed to connect to github")]
    Connect(#[source] ReqwestError),
    #[error("request timed out")]
    Timeout(#[source] ReqwestError),
    #[error("failed to read response body")]
    Body(#[source] ReqwestError),
    #[error("an unknown error occurred while sending the request")]
    Unknown(#[source] ReqwestError),
}

impl From<ReqwestError> for Error {
    fn from(error: ReqwestError) -> Error {
        if error.is_timeout() {
            Error::Timeout(error)
        } else if error.is_connect() {
            Error::Connect(error)
        } else if error.is_body() || error.is_decode() {
            Error::Body(error)
        } else if error.is_builder() {
            Error::Client(error)
        } else {
            Error::Unknown(error)
        }
    }
}
