use connectors::{llm::error::LlmError, sql::error::DbError};
use thiserror::Error;

/// Per-stage failures recorded on the pipeline state.
///
/// The display strings are the tags callers see; terminal reporting is
/// binary success/error and the stage identity survives only through the
/// message prefix.
#[derive(Debug, Error)]
pub enum StageError {
    /// The completion call for SQL generation failed.
    #[error("SQL Generation Error: {0}")]
    SqlGeneration(LlmError),

    /// The execution stage was entered without generated SQL.
    #[error("No SQL query was generated")]
    MissingSql,

    /// Connection, syntax, or runtime database failure.
    #[error("Query Execution Error: {0}")]
    QueryExecution(DbError),

    /// The completion call for summarization failed.
    #[error("Summarization Error: {0}")]
    Summarization(LlmError),
}
