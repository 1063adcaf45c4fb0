use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Answer a single natural-language question against the database
    Ask {
        #[arg(long, help = "The natural language question")]
        question: String,

        #[arg(long, help = "Config file path (JSON); defaults apply if omitted")]
        config: Option<String>,

        #[arg(long, help = "If set, prints the full outcome as JSON")]
        json: bool,
    },
    /// Run the built-in example questions sequentially
    Demo {
        #[arg(long, help = "Config file path (JSON); defaults apply if omitted")]
        config: Option<String>,
    },
    /// Test connectivity to the database or the model endpoint
    TestConn {
        /// Connection target: "db" or "model"
        #[arg(long)]
        target: String,

        #[arg(long, help = "Config file path (JSON); defaults apply if omitted")]
        config: Option<String>,
    },
}
