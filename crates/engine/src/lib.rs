pub mod config;
pub mod error;
pub mod pipeline;
pub mod prompts;
pub mod schema;
pub mod stage;
pub mod stages;

#[cfg(test)]
pub(crate) mod testkit;
