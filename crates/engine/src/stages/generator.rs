use crate::{
    error::StageError,
    prompts,
    stage::{Stage, StageResult},
};
use async_trait::async_trait;
use connectors::llm::ChatClient;
use model::query::state::QueryState;
use std::sync::Arc;
use tracing::{error, info};

/// Turns the natural-language question into a SQL statement via a
/// completion call.
pub struct SqlGenerator {
    client: Arc<dyn ChatClient>,
    system_prompt: String,
}

impl SqlGenerator {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        SqlGenerator {
            client,
            system_prompt: prompts::sql_generator_system(),
        }
    }
}

/// Strips a surrounding markdown code fence from a completion, if present.
pub(crate) fn strip_sql_fences(raw: &str) -> String {
    let mut sql = raw.trim();
    if let Some(rest) = sql.strip_prefix("```sql") {
        sql = rest;
    } else if let Some(rest) = sql.strip_prefix("```") {
        sql = rest;
    }
    if let Some(rest) = sql.strip_suffix("```") {
        sql = rest;
    }
    sql.trim().to_string()
}

#[async_trait]
impl Stage for SqlGenerator {
    fn name(&self) -> &'static str {
        "sql_generator"
    }

    async fn run(&self, mut state: QueryState) -> StageResult {
        let user_prompt = prompts::sql_generator_user(&state.query);

        match self.client.complete(&self.system_prompt, &user_prompt).await {
            Ok(raw) => {
                let sql = strip_sql_fences(&raw);
                info!(%sql, "generated SQL");
                state.sql = Some(sql);
                StageResult::Continue(state)
            }
            Err(err) => {
                error!(%err, "SQL generation failed");
                StageResult::halt(state, StageError::SqlGeneration(err))
            }
        }
    }
}
