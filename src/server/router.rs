use crate::server::{handlers, AppState};
use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    routing::post,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub const CONTACT_PATH: &str = "/api/contact";

/// Builds the application router: the contact route plus CORS, request
/// tracing, the body size limit and a 404 fallback.
pub fn create_router(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .route(CONTACT_PATH, post(handlers::submit_contact))
        .fallback(|| async {
            tracing::warn!("⚠️ Unmatched request - 404 Not Found");
            (StatusCode::NOT_FOUND, "404 Not Found")
        })
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(create_cors_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::span!(
                        tracing::Level::DEBUG,
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_request(|request: &axum::http::Request<_>, _span: &tracing::Span| {
                    tracing::debug!("📥 Incoming request: {} {}", request.method(), request.uri());
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &tracing::Span| {
                        tracing::debug!(
                            "📤 Response: status={}, latency={:?}",
                            response.status(),
                            latency
                        );
                    },
                )
                .on_failure(
                    |_error: tower_http::classify::ServerErrorsFailureClass,
                     latency: std::time::Duration,
                     _span: &tracing::Span| {
                        tracing::error!("❌ Request failed, latency={:?}", latency);
                    },
                ),
        )
}

fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
