//! Request handlers, one submodule per resource.
//!
//! Handlers only translate between the wire and the services: extract, call
//! one service operation, map the result. The services are injected as an
//! `Extension<Arc<ConcreteAppServices>>`.

pub(crate) mod addresses;
pub(crate) mod contact_infos;
pub(crate) mod persons;

use axum::Json;
use serde_json::{Value, json};

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up"))
)]
pub(crate) async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
