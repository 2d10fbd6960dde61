use axum::{
    http::Request,
    response::Redirect,
    routing::{delete, get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::database::ActivityRegistry;
use crate::web::routes::{activities, health};

pub fn build_router(registry: ActivityRegistry) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/activities") }))
        .route("/health", get(health::health_handler))
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::activity_signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(activities::activity_unregister_handler),
        )
        // Participant lists change on every signup; never let a client cache them.
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        // Method, path, status and latency only; query strings carry emails.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                })
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CatchPanicLayer::new())
        .with_state(registry)
}
