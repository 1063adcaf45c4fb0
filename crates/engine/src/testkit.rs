//! Shared test doubles for stage and pipeline tests.

use async_trait::async_trait;
use connectors::{
    llm::{chat::ChatClient, error::LlmError},
    sql::{error::DbError, executor::SqlExecutor},
};
use model::{
    core::{
        data_type::DataType,
        value::{FieldValue, Value},
    },
    records::row::RowData,
};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Deterministic chat double; counts invocations.
pub struct StubChat {
    response: Option<String>,
    calls: AtomicUsize,
}

impl StubChat {
    pub fn returning(response: &str) -> Arc<Self> {
        Arc::new(StubChat {
            response: Some(response.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(StubChat {
            response: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatClient for StubChat {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Some(text) => Ok(text.clone()),
            None => Err(LlmError::MalformedResponse("stubbed failure".to_string())),
        }
    }
}

/// SQL executor double; counts invocations.
pub struct StubExecutor {
    rows: Option<Vec<RowData>>,
    calls: AtomicUsize,
}

impl StubExecutor {
    pub fn returning(rows: Vec<RowData>) -> Arc<Self> {
        Arc::new(StubExecutor {
            rows: Some(rows),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(StubExecutor {
            rows: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SqlExecutor for StubExecutor {
    async fn query_rows(&self, _sql: &str) -> Result<Vec<RowData>, DbError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.rows {
            Some(rows) => Ok(rows.clone()),
            None => Err(DbError::Unknown("stubbed failure".to_string())),
        }
    }
}

fn field(name: &str, value: Value, data_type: DataType) -> FieldValue {
    FieldValue {
        name: name.to_string(),
        value: Some(value),
        data_type,
    }
}

/// Two fixture customers: Alice and Bob.
pub fn customer_rows() -> Vec<RowData> {
    vec![
        RowData::new(vec![
            field("customer_id", Value::Int(1), DataType::Int),
            field("name", Value::String("Alice".into()), DataType::VarChar),
        ]),
        RowData::new(vec![
            field("customer_id", Value::Int(2), DataType::Int),
            field("name", Value::String("Bob".into()), DataType::VarChar),
        ]),
    ]
}
