use serde::Deserialize;
use thiserror::Error;

/// Everything a pipeline run needs, injected at startup. There is no
/// ambient global configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub llm: LlmConfig,

    #[serde(default)]
    pub database: DbConfig,

    /// Maximum number of rows embedded into the summarization prompt.
    /// Rows beyond the cap are replaced by an omission marker.
    #[serde(default = "default_summary_row_limit")]
    pub summary_row_limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature; 0.0 keeps repeated calls as stable as the
    /// model allows.
    #[serde(default)]
    pub temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DbConfig {
    #[serde(default)]
    pub host: String,

    #[serde(default)]
    pub database: String,

    #[serde(default)]
    pub user: String,

    #[serde(default)]
    pub password: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_summary_row_limit() -> usize {
    50
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "llama3.2".to_string()
}

fn default_port() -> u16 {
    5432
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            llm: LlmConfig::default(),
            database: DbConfig::default(),
            summary_row_limit: default_summary_row_limit(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        LlmConfig {
            base_url: default_base_url(),
            model: default_model(),
            temperature: 0.0,
        }
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        DbConfig {
            host: String::new(),
            database: String::new(),
            user: String::new(),
            password: String::new(),
            port: default_port(),
        }
    }
}

impl DbConfig {
    pub fn to_pg_config(&self) -> tokio_postgres::Config {
        let mut config = tokio_postgres::Config::new();
        config
            .host(&self.host)
            .dbname(&self.database)
            .user(&self.user)
            .password(&self.password)
            .port(self.port);
        config
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read the configuration file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse the configuration file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Loads a `PipelineConfig` from a JSON file; absent fields take defaults.
pub async fn load(path: &str) -> Result<PipelineConfig, ConfigError> {
    let source = tokio::fs::read_to_string(path).await?;
    let config = serde_json::from_str(&source)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_takes_all_defaults() {
        let config: PipelineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.llm.base_url, "http://localhost:11434");
        assert_eq!(config.llm.model, "llama3.2");
        assert_eq!(config.llm.temperature, 0.0);
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.summary_row_limit, 50);
    }

    #[test]
    fn fields_override_defaults() {
        let source = r#"{
            "llm": {"model": "mistral", "temperature": 0.2},
            "database": {"host": "db.internal", "database": "shop", "user": "reader", "port": 5433},
            "summary_row_limit": 10
        }"#;
        let config: PipelineConfig = serde_json::from_str(source).unwrap();
        assert_eq!(config.llm.model, "mistral");
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 5433);
        assert_eq!(config.summary_row_limit, 10);
        // untouched fields still default
        assert_eq!(config.llm.base_url, "http://localhost:11434");
        assert_eq!(config.database.password, "");
    }
}
