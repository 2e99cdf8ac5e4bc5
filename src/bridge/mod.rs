use crate::{config, github::Forwarder};
use sentry::{Hub, SentryFutureExt};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

mod error;
mod models;
#[cfg(test)]
pub mod testing;
mod validators;

pub use error::{Error, Result};
pub use models::{Mode, Request, Response};

/// Authenticates inbound requests and relays them to GitHub
pub struct Bridge {
    config: config::Bridge,
    forwarder: Arc<dyn Forwarder>,
}

/// A fully resolved forwarding destination
enum Target<'c> {
    Issue {
        repository: &'c str,
        issue: &'c str,
        token: &'c str,
    },
    Dispatch {
        repository: &'c str,
        token: &'c str,
    },
}

impl Bridge {
    pub fn new(config: config::Bridge, forwarder: Arc<dyn Forwarder>) -> Bridge {
        Bridge { config, forwarder }
    }

    /// Authorize, parse and forward a raw request body. The authorization is
    /// checked before the body is looked at and nothing is sent upstream
    /// unless the configuration is complete.
    #[instrument(skip_all)]
    pub async fn handle(&self, authorization: Option<&str>, body: &[u8]) -> Result<Response> {
        validators::bearer(authorization, self.config.token.as_deref())?;

        let request: Request = serde_json::from_slice(body)?;
        self.forward(request).await
    }

    /// Send the request to the destination selected by its mode
    #[instrument(skip_all, fields(mode = %request.mode))]
    async fn forward(&self, request: Request) -> Result<Response> {
        // Tags only apply to events reported while relaying this request
        let hub = Arc::new(Hub::new_from_top(Hub::current()));
        hub.configure_scope(|scope| scope.set_tag("bridge.mode", request.mode.name()));

        self.relay(request).bind_hub(hub).await
    }

    async fn relay(&self, request: Request) -> Result<Response> {
        let mode = request.mode;
        let target = self.resolve(mode).map_err(|e| {
            warn!("github configuration is incomplete");
            e
        })?;

        let outcome = match target {
            Target::Issue {
                repository,
                issue,
                token,
            } => {
                debug!(%repository, %issue, "commenting on issue");
                self.forwarder
                    .comment(repository, issue, token, &request.text)
                    .await?
            }
            Target::Dispatch { repository, token } => {
                let event_type = request.event_type().to_owned();
                debug!(%repository, %event_type, "dispatching event");

                let (text, meta) = request.into_parts();
                self.forwarder
                    .dispatch(repository, token, &event_type, &text, &meta)
                    .await?
            }
        };

        let ok = outcome.is_success();
        info!(status = outcome.status, ok, "forwarded request to github");

        Ok(Response {
            ok,
            status: outcome.status,
            body: if ok { None } else { Some(outcome.body) },
        })
    }

    /// Pick the destination for a mode, requiring the matching configuration
    fn resolve(&self, mode: Mode) -> Result<Target<'_>> {
        let repository = self.config.repository.as_deref();
        let token = self.config.github_token.as_deref();

        match (mode, repository, token, self.config.issue.as_deref()) {
            (Mode::Dispatch, Some(repository), Some(token), _) => {
                Ok(Target::Dispatch { repository, token })
            }
            (Mode::Issue, Some(repository), Some(token), Some(issue)) => Ok(Target::Issue {
                repository,
                issue,
                token,
            }),
            _ => Err(Error::BadConfig),
        }
    }
}
