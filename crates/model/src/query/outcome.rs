use crate::{query::state::QueryState, records::row::render_rows};
use serde::{Deserialize, Serialize};

/// Terminal result of one pipeline run, as reported to callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum QueryOutcome {
    Success {
        query: String,
        sql: String,
        result: String,
        summary: String,
    },
    Error {
        message: String,
    },
}

impl QueryOutcome {
    /// Maps a terminal pipeline state to the caller-facing outcome.
    pub fn from_state(state: QueryState) -> Self {
        if let Some(message) = state.error {
            return QueryOutcome::Error { message };
        }

        match (state.sql, state.rows, state.summary) {
            (Some(sql), Some(rows), Some(summary)) => QueryOutcome::Success {
                query: state.query,
                sql,
                result: render_rows(&rows),
                summary,
            },
            // A summarized empty run may have no rows recorded at all.
            (Some(sql), None, Some(summary)) => QueryOutcome::Success {
                query: state.query,
                sql,
                result: render_rows(&[]),
                summary,
            },
            _ => QueryOutcome::Error {
                message: "Pipeline finished without a terminal result".to_string(),
            },
        }
    }
}
