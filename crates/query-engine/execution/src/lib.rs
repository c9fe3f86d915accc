pub mod error;
pub mod query;
mod rows;

pub use error::QueryError;
pub use query::{create_pool, PoolExecutor, QueryExecutor, ResultSet};
