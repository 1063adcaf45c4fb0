pub mod chat;
pub mod error;
pub mod ollama;

pub use chat::ChatClient;
pub use ollama::OllamaClient;
