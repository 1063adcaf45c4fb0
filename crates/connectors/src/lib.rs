pub mod llm;
pub mod sql;
