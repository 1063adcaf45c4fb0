use thiserror::Error;

/// All errors coming from the database/query layer.
#[derive(Debug, Error)]
pub enum DbError {
    /// Connection setup failed before the statement could run.
    #[error("Connection error: {0}")]
    Connect(#[from] ConnectorError),

    /// Any driver error while executing the statement or decoding rows.
    #[error("SQL error: {0}")]
    Sql(#[from] tokio_postgres::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Errors happening during connection setup.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// TLS connector construction failed.
    #[error("TLS setup failed: {0}")]
    Tls(#[from] native_tls::Error),

    /// The PostgreSQL handshake failed.
    #[error("PostgreSQL connection failed: {0}")]
    Postgres(#[from] tokio_postgres::Error),
}
