use crate::{bridge::Bridge, config::SharedConfig};
use axum::{
    handler::Handler,
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;

mod error;
mod handlers;
mod logging;

use error::{Error, Result};

/// Build all the routes for the service
pub fn routes(config: SharedConfig, bridge: Arc<Bridge>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/version", get(handlers::version))
        .route("/bridge", post(handlers::bridge))
        .fallback(handlers::not_found.into_service())
        .layer(Extension(config))
        .layer(Extension(bridge))
        .layer(logging::layer())
}
