use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    middleware,
    response::Response,
    routing::{get, post},
};

use crate::{
    application::research::ResearchService,
    presentation::views::{ConsoleContext, IndexTemplate, render_template_response},
};

use super::{
    api,
    middleware::{log_responses, set_request_context},
};

#[derive(Clone)]
pub struct HttpState {
    pub research: Arc<ResearchService>,
}

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/putter-info", post(api::putter_info))
        .route("/_health", get(health))
        .route("/static/{*path}", get(crate::infra::assets::serve_console))
        .with_state(state)
        .layer(middleware::from_fn(log_responses))
        .layer(middleware::from_fn(set_request_context))
}

async fn index() -> Response {
    let view = ConsoleContext::default();
    render_template_response(IndexTemplate { view }, StatusCode::OK)
}

async fn health() -> StatusCode {
    StatusCode::NO_CONTENT
}
