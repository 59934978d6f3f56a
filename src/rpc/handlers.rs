use super::protocol::{IndexRequest, RegisterRequest, SearchRequest};
use crate::router::core::RequestRouter;
use crate::router::types::{IndexAck, Registration, SearchOutcome};
use axum::routing::post;
use axum::{Extension, Json, Router};
use std::sync::Arc;

pub async fn handle_register(
    Extension(router): Extension<Arc<RequestRouter>>,
    Json(req): Json<RegisterRequest>,
) -> Json<Registration> {
    Json(router.handle_register(&req.client_id))
}

pub async fn handle_index(
    Extension(router): Extension<Arc<RequestRouter>>,
    Json(req): Json<IndexRequest>,
) -> Json<IndexAck> {
    Json(router.handle_index(&req.client_id, &req.api_key, req.file_path, req.word_frequencies))
}

pub async fn handle_search(
    Extension(router): Extension<Arc<RequestRouter>>,
    Json(req): Json<SearchRequest>,
) -> Json<SearchOutcome> {
    Json(router.handle_search(&req.client_id, &req.api_key, &req.query_terms))
}

/// Builds the HTTP surface of the synchronous binding over a shared core.
pub fn app(router: Arc<RequestRouter>) -> Router {
    Router::new()
        .route("/register", post(handle_register))
        .route("/index", post(handle_index))
        .route("/search", post(handle_search))
        .layer(Extension(router))
}
