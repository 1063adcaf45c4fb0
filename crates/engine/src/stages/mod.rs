pub mod executor;
pub mod generator;
pub mod summarizer;

pub use executor::QueryExecutor;
pub use generator::SqlGenerator;
pub use summarizer::Summarizer;
