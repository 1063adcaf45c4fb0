use crate::llm::error::LlmError;
use async_trait::async_trait;

/// A text-completion call: system instruction plus one user message in,
/// free-form completion text out.
///
/// Both pipeline stages that talk to the model go through this trait, so
/// tests can substitute a deterministic double and count invocations.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError>;
}
