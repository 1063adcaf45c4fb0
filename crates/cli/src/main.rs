use crate::{
    conn::{ConnectionKind, ConnectionPinger, ModelConnectionPinger, PostgresConnectionPinger},
    error::CliError,
};
use clap::Parser;
use commands::Commands;
use engine::{
    config::{self, PipelineConfig},
    pipeline::Pipeline,
};
use std::str::FromStr;
use tracing::Level;

mod commands;
mod conn;
mod error;
mod output;

/// The example questions the `demo` subcommand walks through.
const DEMO_QUESTIONS: [&str; 3] = [
    "How many customers do we have from USA? Give me all names along with count.",
    "List all customers",
    "Which customer has ordered maximum no. of times?",
];

#[derive(Parser)]
#[command(name = "askdb", version = "0.1.0", about = "Natural language to SQL query tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask {
            question,
            config,
            json,
        } => {
            let config = load_config(config.as_deref()).await?;
            let outcome = engine::pipeline::process_query(&config, &question).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                output::print_outcome(&outcome);
            }
        }
        Commands::Demo { config } => {
            let config = load_config(config.as_deref()).await?;
            let pipeline = Pipeline::new(&config);
            for question in DEMO_QUESTIONS {
                output::print_banner(question);
                let outcome = pipeline.run(question).await;
                output::print_outcome(&outcome);
            }
        }
        Commands::TestConn { target, config } => {
            let kind = ConnectionKind::from_str(&target)
                .map_err(|_| CliError::UnknownTarget(target.clone()))?;
            let config = load_config(config.as_deref()).await?;
            match kind {
                ConnectionKind::Postgres => {
                    PostgresConnectionPinger {
                        config: config.database.to_pg_config(),
                    }
                    .ping()
                    .await?;
                }
                ConnectionKind::Model => {
                    ModelConnectionPinger {
                        base_url: config.llm.base_url.clone(),
                    }
                    .ping()
                    .await?;
                }
            }
        }
    }

    Ok(())
}

async fn load_config(path: Option<&str>) -> Result<PipelineConfig, CliError> {
    match path {
        Some(path) => Ok(config::load(path).await?),
        None => Ok(PipelineConfig::default()),
    }
}
