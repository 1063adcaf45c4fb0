use crate::sql::{
    error::DbError,
    executor::SqlExecutor,
    postgres::{row, utils::connect_client},
};
use async_trait::async_trait;
use model::records::row::RowData;
use tokio_postgres::Config;

/// PostgreSQL executor.
///
/// Holds connection parameters only; every `query_rows` call opens a fresh
/// connection and drops it when the rows have been collected. There is no
/// pooling and no statement timeout.
#[derive(Clone)]
pub struct PgExecutor {
    config: Config,
}

impl PgExecutor {
    pub fn new(config: Config) -> Self {
        PgExecutor { config }
    }
}

#[async_trait]
impl SqlExecutor for PgExecutor {
    async fn query_rows(&self, sql: &str) -> Result<Vec<RowData>, DbError> {
        let client = connect_client(self.config.clone()).await?;
        let rows = client.query(sql, &[]).await?;
        Ok(rows.iter().map(row::to_row_data).collect())
    }
}
