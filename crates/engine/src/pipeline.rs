use crate::{
    config::PipelineConfig,
    stage::{Stage, StageResult},
    stages::{QueryExecutor, SqlGenerator, Summarizer},
};
use connectors::{
    llm::{ChatClient, OllamaClient},
    sql::{executor::SqlExecutor, postgres::PgExecutor},
};
use model::query::{outcome::QueryOutcome, state::QueryState};
use std::sync::Arc;
use tracing::debug;

/// The fixed linear pipeline: generate SQL, execute it, summarize the rows.
///
/// Stages run strictly in order; the first stage to record an error stops
/// the run and downstream stages are never entered.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Wires the three stages against the configured model endpoint and
    /// database.
    pub fn new(config: &PipelineConfig) -> Self {
        let chat: Arc<dyn ChatClient> = Arc::new(OllamaClient::new(
            &config.llm.base_url,
            &config.llm.model,
            config.llm.temperature,
        ));
        let executor: Arc<dyn SqlExecutor> =
            Arc::new(PgExecutor::new(config.database.to_pg_config()));

        Self::with_stages(vec![
            Box::new(SqlGenerator::new(chat.clone())),
            Box::new(QueryExecutor::new(executor)),
            Box::new(Summarizer::new(chat, config.summary_row_limit)),
        ])
    }

    pub fn with_stages(stages: Vec<Box<dyn Stage>>) -> Self {
        Pipeline { stages }
    }

    /// Runs one question through the pipeline over a fresh state.
    pub async fn run(&self, question: &str) -> QueryOutcome {
        let mut state = QueryState::new(question);

        for stage in &self.stages {
            debug!(stage = stage.name(), "entering stage");
            match stage.run(state).await {
                StageResult::Continue(next) => state = next,
                StageResult::Halted(next) => {
                    state = next;
                    break;
                }
            }
        }

        QueryOutcome::from_state(state)
    }
}

/// One-shot programmatic entry point: builds a pipeline from the config and
/// processes a single question.
pub async fn process_query(config: &PipelineConfig, question: &str) -> QueryOutcome {
    Pipeline::new(config).run(question).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{StubChat, StubExecutor, customer_rows};

    fn pipeline_with(
        chat: Arc<StubChat>,
        executor: Arc<StubExecutor>,
        summarizer_chat: Arc<StubChat>,
    ) -> Pipeline {
        Pipeline::with_stages(vec![
            Box::new(SqlGenerator::new(chat)),
            Box::new(QueryExecutor::new(executor)),
            Box::new(Summarizer::new(summarizer_chat, 50)),
        ])
    }

    #[tokio::test]
    async fn full_run_produces_a_success_outcome() {
        let generator_chat = StubChat::returning("SELECT * FROM customers;");
        let summarizer_chat = StubChat::returning("There are two customers, Alice and Bob.");
        let executor = StubExecutor::returning(customer_rows());

        let pipeline = pipeline_with(generator_chat, executor, summarizer_chat.clone());
        let outcome = pipeline.run("List all customers").await;

        match outcome {
            QueryOutcome::Success {
                query,
                sql,
                result,
                summary,
            } => {
                assert_eq!(query, "List all customers");
                assert_eq!(sql, "SELECT * FROM customers;");
                assert!(result.contains("\"Alice\"") && result.contains("\"Bob\""));
                assert!(!summary.is_empty());
            }
            QueryOutcome::Error { message } => panic!("unexpected error: {message}"),
        }
        assert_eq!(summarizer_chat.calls(), 1);
    }

    #[tokio::test]
    async fn generation_failure_skips_downstream_stages() {
        let generator_chat = StubChat::failing();
        let summarizer_chat = StubChat::returning("never");
        let executor = StubExecutor::returning(customer_rows());

        let pipeline = pipeline_with(generator_chat, executor.clone(), summarizer_chat.clone());
        let outcome = pipeline.run("List all customers").await;

        match outcome {
            QueryOutcome::Error { message } => {
                assert!(message.starts_with("SQL Generation Error: "));
            }
            QueryOutcome::Success { .. } => panic!("expected an error outcome"),
        }
        assert_eq!(executor.calls(), 0);
        assert_eq!(summarizer_chat.calls(), 0);
    }

    #[tokio::test]
    async fn empty_result_set_still_succeeds_with_the_fixed_summary() {
        let generator_chat = StubChat::returning("SELECT * FROM customers WHERE 1 = 0;");
        let summarizer_chat = StubChat::returning("never");
        let executor = StubExecutor::returning(vec![]);

        let pipeline = pipeline_with(generator_chat, executor, summarizer_chat.clone());
        let outcome = pipeline.run("List customers from Atlantis").await;

        match outcome {
            QueryOutcome::Success { result, summary, .. } => {
                assert_eq!(result, "[]");
                assert!(!result.contains('{'));
                assert_eq!(summary, crate::stages::summarizer::NO_RESULTS_SUMMARY);
            }
            QueryOutcome::Error { message } => panic!("unexpected error: {message}"),
        }
        assert_eq!(summarizer_chat.calls(), 0);
    }

    #[tokio::test]
    async fn execution_failure_reports_the_execution_tag() {
        let generator_chat = StubChat::returning("SELECT * FROM nope;");
        let summarizer_chat = StubChat::returning("never");
        let executor = StubExecutor::failing();

        let pipeline = pipeline_with(generator_chat, executor, summarizer_chat.clone());
        let outcome = pipeline.run("List all customers").await;

        match outcome {
            QueryOutcome::Error { message } => {
                assert!(message.starts_with("Query Execution Error: "));
            }
            QueryOutcome::Success { .. } => panic!("expected an error outcome"),
        }
        assert_eq!(summarizer_chat.calls(), 0);
    }
}
