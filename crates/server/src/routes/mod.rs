mod get_query;

pub use get_query::get_query;

use axum::{routing::get, Router};

use crate::error::ServerError;
use crate::state::ServerState;

pub fn create_router(state: ServerState) -> Router {
    Router::new()
        .route("/json", get(get_query))
        .fallback(unmatched_path)
        .with_state(state)
}

/// Every path other than the query endpoint.
async fn unmatched_path() -> ServerError {
    ServerError::NotFound
}
