use crate::error::StageError;
use async_trait::async_trait;
use model::query::state::QueryState;

/// Result of running one stage over the pipeline state.
#[derive(Debug)]
pub enum StageResult {
    /// The stage did its work; hand the state to the next stage.
    Continue(QueryState),
    /// The stage recorded an error; the runner stops here.
    Halted(QueryState),
}

impl StageResult {
    /// Records the error on the state and halts the pipeline.
    pub fn halt(mut state: QueryState, error: StageError) -> Self {
        state.error = Some(error.to_string());
        StageResult::Halted(state)
    }

    pub fn into_state(self) -> QueryState {
        match self {
            StageResult::Continue(state) | StageResult::Halted(state) => state,
        }
    }
}

/// One transformation step of the linear pipeline.
///
/// Stages own their collaborators (chat client, SQL executor) and are pure
/// over the state: read what upstream produced, write exactly one field or
/// record an error.
#[async_trait]
pub trait Stage: Send + Sync {
    fn name(&self) -> &'static str;

    async fn run(&self, state: QueryState) -> StageResult;
}
