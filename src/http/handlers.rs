use super::{Error, Result};
use crate::{
    bridge::{self, Bridge},
    config::SharedConfig,
};
use axum::{
    body::Bytes,
    http::{header::AUTHORIZATION, HeaderMap},
    Extension, Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

/// Always healthy while the process is serving
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Report the commit the service was built from
pub async fn version(Extension(config): Extension<SharedConfig>) -> Json<Value> {
    Json(json!({ "sha": config.version() }))
}

/// Relay a request to GitHub
pub async fn bridge(
    Extension(bridge): Extension<Arc<Bridge>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<bridge::Response>> {
    // Non-ASCII headers can never match the token
    let authorization = headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok());

    let response = bridge.handle(authorization, &body).await?;
    Ok(Json(response))
}

pub async fn not_found() -> Error {
    Error::NotFound
}
