use crate::error::CliError;
use async_trait::async_trait;
use serde::Deserialize;
use std::str::FromStr;
use tokio_postgres::NoTls;
use tracing::{error, info};

/// What kind of connection to check
#[derive(Debug)]
pub enum ConnectionKind {
    Postgres,
    Model,
}

impl FromStr for ConnectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "db" | "pg" | "postgres" | "postgresql" => Ok(ConnectionKind::Postgres),
            "model" | "llm" | "ollama" => Ok(ConnectionKind::Model),
            other => Err(format!("Unknown connection kind: {other}")),
        }
    }
}

/// Trait for "pinging" an external collaborator
#[async_trait]
pub trait ConnectionPinger {
    /// Attempts to ping; returns Err if unreachable
    async fn ping(&self) -> Result<(), CliError>;
}

/// Postgres pinger
pub struct PostgresConnectionPinger {
    pub config: tokio_postgres::Config,
}

/// Model endpoint pinger
pub struct ModelConnectionPinger {
    pub base_url: String,
}

#[async_trait]
impl ConnectionPinger for PostgresConnectionPinger {
    async fn ping(&self) -> Result<(), CliError> {
        info!("Pinging Postgres at {:?}", self.config.get_hosts());

        let (client, connection) = self.config.connect(NoTls).await.map_err(|e| {
            error!("Postgres connection failed: {}", e);
            CliError::Postgres(e)
        })?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!("Postgres connection error: {}", e);
            }
        });

        let row = client.query_one("SELECT 1", &[]).await.map_err(|e| {
            error!("Postgres ping query failed: {}", e);
            CliError::Postgres(e)
        })?;

        let val: i32 = row.get(0);
        if val != 1 {
            let msg = format!("Postgres ping returned unexpected result: {val}");
            error!("{}", msg);
            return Err(CliError::Unexpected(msg));
        }

        info!("Postgres ping succeeded");
        Ok(())
    }
}

#[derive(Deserialize)]
struct VersionResponse {
    version: String,
}

#[async_trait]
impl ConnectionPinger for ModelConnectionPinger {
    async fn ping(&self) -> Result<(), CliError> {
        let url = format!("{}/api/version", self.base_url.trim_end_matches('/'));
        info!("Pinging model endpoint at '{}'", url);

        let response = reqwest::get(&url).await.map_err(|e| {
            error!("Model endpoint request to '{}' failed: {}", url, e);
            CliError::ModelEndpoint(e)
        })?;
        let response = response.error_for_status().map_err(CliError::ModelEndpoint)?;

        let version: VersionResponse = response.json().await.map_err(CliError::ModelEndpoint)?;
        info!("Model endpoint ping succeeded (version {})", version.version);
        Ok(())
    }
}
