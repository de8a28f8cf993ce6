use std::sync::Arc;

use axum::{
    http::{header, Method},
    Extension, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{handlers::post::posts_handler, AppState};

pub fn create_routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .merge(posts_handler())
        .layer(TraceLayer::new_for_http())
        .layer(configure_cors())
        .layer(Extension(app_state))
}

fn configure_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}
