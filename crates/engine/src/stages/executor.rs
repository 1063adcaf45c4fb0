use crate::{
    error::StageError,
    stage::{Stage, StageResult},
};
use async_trait::async_trait;
use connectors::sql::executor::SqlExecutor;
use model::query::state::QueryState;
use std::sync::Arc;
use tracing::{error, info};

/// Runs the generated SQL and collects every returned row.
pub struct QueryExecutor {
    executor: Arc<dyn SqlExecutor>,
}

impl QueryExecutor {
    pub fn new(executor: Arc<dyn SqlExecutor>) -> Self {
        QueryExecutor { executor }
    }
}

#[async_trait]
impl Stage for QueryExecutor {
    fn name(&self) -> &'static str {
        "query_executor"
    }

    async fn run(&self, mut state: QueryState) -> StageResult {
        let Some(sql) = state.sql.clone() else {
            return StageResult::halt(state, StageError::MissingSql);
        };

        match self.executor.query_rows(&sql).await {
            Ok(rows) => {
                info!(rows = rows.len(), "query executed");
                state.rows = Some(rows);
                StageResult::Continue(state)
            }
            Err(err) => {
                error!(%err, "query execution failed");
                StageResult::halt(state, StageError::QueryExecution(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{StubExecutor, customer_rows};

    #[tokio::test]
    async fn absent_sql_halts_without_touching_the_database() {
        let executor = StubExecutor::returning(vec![]);
        let stage = QueryExecutor::new(executor.clone());

        let state = stage.run(QueryState::new("List all customers")).await.into_state();
        assert_eq!(state.error.as_deref(), Some("No SQL query was generated"));
        assert!(state.rows.is_none());
        assert_eq!(executor.calls(), 0);
    }

    #[tokio::test]
    async fn rows_are_collected_on_success() {
        let executor = StubExecutor::returning(customer_rows());
        let stage = QueryExecutor::new(executor.clone());

        let mut input = QueryState::new("List all customers");
        input.sql = Some("SELECT * FROM customers;".to_string());

        let state = stage.run(input).await.into_state();
        assert_eq!(state.rows.as_ref().map(Vec::len), Some(2));
        assert!(state.error.is_none());
        assert_eq!(executor.calls(), 1);
    }

    #[tokio::test]
    async fn database_failure_records_the_execution_tag() {
        let executor = StubExecutor::failing();
        let stage = QueryExecutor::new(executor);

        let mut input = QueryState::new("List all customers");
        input.sql = Some("SELECT * FROM nonexistent;".to_string());

        let state = stage.run(input).await.into_state();
        assert!(state.rows.is_none());
        let message = state.error.expect("error must be recorded");
        assert!(message.starts_with("Query Execution Error: "));
    }
}
