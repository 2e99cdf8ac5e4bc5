use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, ACCEPT},
    redirect::Policy,
    Client,
};
use serde::Serialize;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

mod error;

pub use error::{Error, Result};

static MEDIA_TYPE: &str = "application/vnd.github+json";
static API_VERSION_HEADER: &str = "x-github-api-version";
static API_VERSION: &str = "2022-11-28";

/// The status code and raw body GitHub responded with
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub status: u16,
    pub body: String,
}

impl Outcome {
    /// Whether GitHub accepted the request
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Somewhere a bridge request can be forwarded to
#[async_trait]
pub trait Forwarder: Send + Sync {
    /// Append a comment to an existing issue
    async fn comment(
        &self,
        repository: &str,
        issue: &str,
        token: &str,
        body: &str,
    ) -> Result<Outcome>;

    /// Trigger a `repository_dispatch` workflow event
    async fn dispatch(
        &self,
        repository: &str,
        token: &str,
        event_type: &str,
        text: &str,
        meta: &Map<String, Value>,
    ) -> Result<Outcome>;
}

/// Forwards requests to the GitHub REST API
pub struct GitHub {
    api: Url,
    client: Client,
}

impl GitHub {
    /// Create a client for the API at the given base URL. The client is shared
    /// between all requests.
    pub fn new(api: Url, timeout: Duration) -> Result<GitHub> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(MEDIA_TYPE));
        headers.insert(
            HeaderName::from_static(API_VERSION_HEADER),
            HeaderValue::from_static(API_VERSION),
        );

        let client = Client::builder()
            .user_agent(format!(
                "{}/{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ))
            .default_headers(headers)
            // Redirects are reported back as-is, never re-sent elsewhere
            .redirect(Policy::none())
            .timeout(timeout)
            .build()
            .map_err(Error::Client)?;

        Ok(GitHub { api, client })
    }

    /// Build the URL for a path relative to the API base
    fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.api.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{}/{}", base, path))?)
    }

    /// Send an authenticated JSON payload, returning whatever GitHub responded with
    #[instrument(skip_all, fields(url = %url))]
    async fn post<B>(&self, url: Url, token: &str, body: &B) -> Result<Outcome>
    where
        B: Serialize + Sync + ?Sized,
    {
        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(%status, "received response from github");

        Ok(Outcome { status, body })
    }
}

#[async_trait]
impl Forwarder for GitHub {
    async fn comment(
        &self,
        repository: &str,
        issue: &str,
        token: &str,
        body: &str,
    ) -> Result<Outcome> {
        let url = self.endpoint(&format!(
            "repos/{repository}/issues/{issue}/comments",
            repository = repository,
            issue = issue
        ))?;

        self.post(url, token, &Comment { body }).await
    }

    async fn dispatch(
        &self,
        repository: &str,
        token: &str,
        event_type: &str,
        text: &str,
        meta: &Map<String, Value>,
    ) -> Result<Outcome> {
        let url = self.endpoint(&format!(
            "repos/{repository}/dispatches",
            repository = repository
        ))?;

        let request = Dispatch {
            event_type,
            client_payload: ClientPayload { text, meta },
        };
        self.post(url, token, &request).await
    }
}

/// The request body for creating an issue comment
#[derive(Serialize)]
struct Comment<'b> {
    body: &'b str,
}

/// The request body for a repository dispatch
#[derive(Serialize)]
struct Dispatch<'e, 'p> {
    event_type: &'e str,
    client_payload: ClientPayload<'p>,
}

#[derive(Serialize)]
struct ClientPayload<'p> {
    text: &'p str,
    meta: &'p Map<String, Value>,
}
