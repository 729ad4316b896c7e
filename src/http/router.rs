//! Router configuration for the HTTP API.

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/users", get(handlers::users_view))
        .route("/users/{user_id}", get(handlers::avatar_view))
        .route("/mean_time_weekday/{user_id}", get(handlers::mean_time_weekday))
        .route("/presence_weekday/{user_id}", get(handlers::presence_weekday))
        .route("/presence_start_end/{user_id}", get(handlers::presence_start_end))
        .route("/monthly_presence/{user_id}", get(handlers::monthly_presence))
        .route("/charts/{kind}/{user_id}", get(handlers::chart_view));

    Router::new()
        .route("/", get(handlers::mainpage))
        .route("/health", get(handlers::health_check))
        .route("/{page}", get(handlers::page))
        .nest("/api/v1", api_v1)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
