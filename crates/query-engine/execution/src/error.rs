use thiserror::Error;

/// A query failed before producing a result set.
///
/// The two variants are deliberately distinct: clients are told whether
/// the database could not be reached at all or whether their SQL was
/// rejected.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("unable to open a database connection: {0}")]
    Connection(sqlx::Error),
    #[error("query execution failed: {0}")]
    Execution(sqlx::Error),
}
