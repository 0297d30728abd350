//! The HTTP surface: routes plus the middleware every request passes through.
//!
//! `main.rs` and the integration tests both go through [`build_app_router`].

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::map_response_body::MapResponseBodyLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Browsers cache a preflight answer for this long.
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(3600);

/// A configured CORS origin that cannot be sent back in
/// `Access-Control-Allow-Origin`.
#[derive(Debug, thiserror::Error)]
#[error("invalid CORS origin '{origin}': {reason}")]
pub struct InvalidOrigin {
    pub origin: String,
    pub reason: &'static str,
}

/// Assemble the application router.
///
/// Outermost first, a request meets: CORS, request-id assignment, tracing,
/// request-id echo on the response, the request timeout, then panic
/// recovery around the handler.
pub fn build_app_router(
    state: AppState,
    config: &ServerConfig,
) -> Result<Router, InvalidOrigin> {
    let origins = parse_cors_origins(&config.cors_origins)?;
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let middleware = ServiceBuilder::new()
        .layer(cors_layer(origins))
        .layer(MapResponseBodyLayer::new(axum::body::Body::new))
        .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::new(request_id))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(CatchPanicLayer::new());

    Ok(Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(middleware)
        .with_state(state))
}

/// Turn configured origins into header values.
///
/// Credentials are allowed, so the `*` wildcard is refused along with
/// anything that is not a valid header value.
pub fn parse_cors_origins(origins: &[String]) -> Result<Vec<HeaderValue>, InvalidOrigin> {
    origins
        .iter()
        .map(|origin| {
            if origin == "*" {
                return Err(InvalidOrigin {
                    origin: origin.clone(),
                    reason: "wildcard cannot be combined with credentials",
                });
            }
            HeaderValue::from_str(origin).map_err(|_| InvalidOrigin {
                origin: origin.clone(),
                reason: "not a valid header value",
            })
        })
        .collect()
}

fn cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(PREFLIGHT_MAX_AGE)
}
