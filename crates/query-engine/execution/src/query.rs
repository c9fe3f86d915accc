//! Execute caller-supplied SQL against the database.

use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};

use crate::error::QueryError;
use crate::rows;

/// An ordered result set: column names in database ordinal order, rows
/// as JSON objects keyed by those names.
///
/// Keeping the column list explicit means downstream consumers never
/// have to enumerate object keys to learn the shape of a row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Map<String, Value>>,
}

impl ResultSet {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row used for schema inference.
    pub fn first_row(&self) -> Option<&Map<String, Value>> {
        self.rows.first()
    }
}

/// The database collaborator seam. The server is handed one of these at
/// construction so tests can substitute a double.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Run the SQL text unmodified and decode whatever comes back.
    async fn run(&self, sql: &str) -> Result<ResultSet, QueryError>;
}

/// Runs queries on connections acquired from a shared [`PgPool`].
#[derive(Debug, Clone)]
pub struct PoolExecutor {
    pool: PgPool,
}

impl PoolExecutor {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QueryExecutor for PoolExecutor {
    async fn run(&self, sql: &str) -> Result<ResultSet, QueryError> {
        log::debug!("executing query: {sql}");

        let mut connection = self.pool.acquire().await.map_err(QueryError::Connection)?;

        let fetched: Vec<PgRow> = sqlx::query(sql)
            .fetch_all(&mut *connection)
            .await
            .map_err(QueryError::Execution)?;

        Ok(rows::decode_result_set(&fetched))
    }
}

/// Create a connection pool for the given database.
///
/// Connections are established lazily, so a pool is always produced for
/// a well-formed URI; an unreachable database only surfaces when a
/// query tries to acquire a connection.
pub fn create_pool(connection_uri: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy(connection_uri)
}
