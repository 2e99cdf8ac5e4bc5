use axum::http::Request;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    trace::{DefaultOnRequest, DefaultOnResponse, MakeSpan, TraceLayer},
};
use tracing::{field::Empty, span, Level, Span};
use uuid::Uuid;

/// Tags every request span with a unique id so its events can be correlated
#[derive(Clone, Copy)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let span = span!(
            Level::INFO,
            "request",
            method = %request.method(),
            uri = %request.uri(),
            version = ?request.version(),
            user_agent = Empty,
            id = %Uuid::new_v4(),
        );

        if let Some(agent) = request
            .headers()
            .get("user-agent")
            .and_then(|h| h.to_str().ok())
        {
            span.record("user_agent", &agent);
        }

        span
    }
}

/// Create a logging middleware layer
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan> {
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}
