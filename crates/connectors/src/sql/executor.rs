use crate::sql::error::DbError;
use async_trait::async_trait;
use model::records::row::RowData;

/// Runs a SQL statement and collects every returned row.
///
/// The pipeline's execution stage talks to this trait so tests can swap in
/// a double without a live database.
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    async fn query_rows(&self, sql: &str) -> Result<Vec<RowData>, DbError>;
}
