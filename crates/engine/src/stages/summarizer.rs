use crate::{
    error::StageError,
    prompts,
    stage::{Stage, StageResult},
};
use async_trait::async_trait;
use connectors::llm::ChatClient;
use model::{
    query::state::QueryState,
    records::row::{RowData, render_rows},
};
use std::sync::Arc;
use tracing::error;

/// Fixed summary used when the query produced no rows; no model call is
/// made in that case.
pub const NO_RESULTS_SUMMARY: &str = "No results were returned from the query.";

/// Explains the result rows in plain language via a completion call.
pub struct Summarizer {
    client: Arc<dyn ChatClient>,
    row_limit: usize,
}

impl Summarizer {
    pub fn new(client: Arc<dyn ChatClient>, row_limit: usize) -> Self {
        Summarizer { client, row_limit }
    }
}

/// Renders at most `limit` rows, appending an omission marker for the rest.
/// Keeps the summarization prompt bounded for large result sets.
fn render_capped(rows: &[RowData], limit: usize) -> String {
    if rows.len() <= limit {
        return render_rows(rows);
    }
    let omitted = rows.len() - limit;
    format!("{} ... ({omitted} more rows omitted)", render_rows(&rows[..limit]))
}

#[async_trait]
impl Stage for Summarizer {
    fn name(&self) -> &'static str {
        "summarizer"
    }

    async fn run(&self, mut state: QueryState) -> StageResult {
        let rows = state.rows.as_deref().unwrap_or(&[]);
        if rows.is_empty() {
            state.summary = Some(NO_RESULTS_SUMMARY.to_string());
            return StageResult::Continue(state);
        }

        let results = render_capped(rows, self.row_limit);
        let user_prompt = prompts::summarizer_user(&state.query, &results);

        match self.client.complete(prompts::SUMMARIZER_SYSTEM, &user_prompt).await {
            Ok(text) => {
                state.summary = Some(text.trim().to_string());
                StageResult::Continue(state)
            }
            Err(err) => {
                error!(%err, "summarization failed");
                StageResult::halt(state, StageError::Summarization(err))
            }
        }
    }
}
