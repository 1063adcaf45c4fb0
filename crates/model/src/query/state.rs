use crate::records::row::RowData;

/// The single record threaded through all pipeline stages.
///
/// `query` is immutable once set. `sql`, `rows` and `summary` are populated
/// strictly in stage order and never cleared. A recorded `error` marks the
/// state as terminal; the runner does not enter further stages.
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    pub query: String,
    pub sql: Option<String>,
    pub rows: Option<Vec<RowData>>,
    pub summary: Option<String>,
    pub error: Option<String>,
}

impl QueryState {
    pub fn new(query: &str) -> Self {
        QueryState {
            query: query.to_string(),
            ..Default::default()
        }
    }

    pub fn is_halted(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_carries_only_the_question() {
        let state = QueryState::new("List all customers");
        assert_eq!(state.query, "List all customers");
        assert!(state.sql.is_none());
        assert!(state.rows.is_none());
        assert!(state.summary.is_none());
        assert!(!state.is_halted());
    }
}
