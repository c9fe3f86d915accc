//! Test doubles and helpers shared by the server tests.

use std::sync::Arc;

use async_trait::async_trait;
use axum_test_helper::TestClient;
use serde_json::{Map, Value};

use sqlbridge::routes::create_router;
use sqlbridge::state::ServerState;
use sqlbridge_execution::{QueryError, QueryExecutor, ResultSet};

/// What the stubbed database does when the handler runs a query.
pub enum StubOutcome {
    Rows(Vec<Value>),
    ConnectionFailure,
    ExecutionFailure,
}

pub struct StubExecutor(StubOutcome);

#[async_trait]
impl QueryExecutor for StubExecutor {
    async fn run(&self, _sql: &str) -> Result<ResultSet, QueryError> {
        match &self.0 {
            StubOutcome::Rows(rows) => Ok(result_set_of(rows)),
            StubOutcome::ConnectionFailure => {
                Err(QueryError::Connection(sqlx::Error::PoolTimedOut))
            }
            StubOutcome::ExecutionFailure => Err(QueryError::Execution(sqlx::Error::RowNotFound)),
        }
    }
}

fn result_set_of(rows: &[Value]) -> ResultSet {
    let rows: Vec<Map<String, Value>> = rows
        .iter()
        .map(|row| row.as_object().cloned().unwrap())
        .collect();
    let columns = rows
        .first()
        .map_or_else(Vec::new, |row| row.keys().cloned().collect());
    ResultSet { columns, rows }
}

/// A client over the real router, with the database stubbed out.
pub fn client_with(outcome: StubOutcome) -> TestClient {
    let state = ServerState::new(Arc::new(StubExecutor(outcome)));
    TestClient::new(create_router(state))
}
