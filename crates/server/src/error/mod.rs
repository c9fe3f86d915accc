use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use sqlbridge_execution::QueryError;

/// Typed errors for the request pipeline. Each variant knows its status
/// code and plain-text body; database details are logged, never sent.
pub enum ServerError {
    /// The request path is not the query endpoint.
    NotFound,
    /// The `query` parameter is missing or blank.
    MissingQuery,
    /// A database connection could not be opened.
    Database(String),
    /// The query itself was rejected by the database.
    Query(String),
    /// Anything else, carrying its status code explicitly.
    Unhandled(StatusCode),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ServerError::NotFound => (StatusCode::NOT_FOUND, "404".to_string()),
            ServerError::MissingQuery => (StatusCode::BAD_REQUEST, "400".to_string()),
            ServerError::Database(detail) => {
                log::error!("database connection failed: {detail}");
                (StatusCode::INTERNAL_SERVER_ERROR, "500 DB".to_string())
            }
            ServerError::Query(detail) => {
                log::error!("query execution failed: {detail}");
                (StatusCode::INTERNAL_SERVER_ERROR, "500 Query".to_string())
            }
            ServerError::Unhandled(status) => (status, status.as_u16().to_string()),
        };

        (status, body).into_response()
    }
}

impl From<QueryError> for ServerError {
    fn from(error: QueryError) -> Self {
        match error {
            QueryError::Connection(inner) => ServerError::Database(inner.to_string()),
            QueryError::Execution(inner) => ServerError::Query(inner.to_string()),
        }
    }
}
