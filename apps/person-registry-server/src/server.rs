use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware::{Next, from_fn};
use axum::response::{IntoResponse, Response};
use http::{HeaderName, Request, StatusCode};
use person_registry::{ApiError, PersonRegistry};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::{DatabaseConfig, ServerConfig};

const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn connect_db(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections).sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .map_err(|e| anyhow::anyhow!("failed to connect to database: {e}"))?;
    info!("Database connection established");
    Ok(db)
}

/// Module routes wrapped in the HTTP middleware stack.
///
/// Request flow, outermost first: `SetRequestId` -> `PropagateRequestId` ->
/// Trace -> `ErrorMapping` -> Timeout -> `BodyLimit` -> Router. Layers are added
/// innermost first.
pub fn build_router(module: &PersonRegistry, cfg: &ServerConfig) -> Router {
    let mut router = module.register_rest(Router::new());

    router = router.layer(RequestBodyLimitLayer::new(cfg.body_limit_bytes));
    router = router.layer(DefaultBodyLimit::max(cfg.body_limit_bytes));

    router = router.layer(TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        Duration::from_secs(cfg.request_timeout_secs),
    ));

    // Outer to timeout and body limit so their bare responses get the error body
    router = router.layer(from_fn(error_mapping_middleware));

    router = router.layer(
        TraceLayer::new_for_http().make_span_with(|req: &Request<axum::body::Body>| {
            let rid = req
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("n/a");

            tracing::info_span!(
                "http_request",
                method = %req.method(),
                uri = %req.uri().path(),
                version = ?req.version(),
                request_id = %rid,
            )
        }),
    );

    let x_request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));
    router = router.layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid));

    router
}

/// Rewrites the empty or plain-text rejections produced by tower-http layers
/// into the JSON error body the handlers use.
async fn error_mapping_middleware(req: Request<axum::body::Body>, next: Next) -> Response {
    let response = next.run(req).await;
    let message = match response.status() {
        StatusCode::REQUEST_TIMEOUT => "Request timed out",
        StatusCode::PAYLOAD_TOO_LARGE => "Request body is too large",
        _ => return response,
    };
    ApiError::new(response.status(), message).into_response()
}

/// Bind and serve until Ctrl-C.
pub async fn serve(router: Router, bind_addr: &str) -> anyhow::Result<()> {
    let addr: SocketAddr = bind_addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address '{bind_addr}': {e}"))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP server bound on {}", addr);

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
        }
        info!("HTTP server shutting down gracefully");
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
