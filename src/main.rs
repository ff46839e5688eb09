use anyhow::Result;
use clap::{Parser, Subcommand};

/// sgvrecycle - Enquiry form service for SGV Recycle
#[derive(Parser)]
#[command(name = "sgvrecycle")]
#[command(about = "Validates website enquiry forms and emails them to the business", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Load and validate configuration, then print it
    CheckConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = sgvrecycle::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Initialize observability (tracing + logging)
    sgvrecycle::observability::init_observability(
        &config.observability.log_level,
        config.observability.json,
    )?;

    match cli.command {
        Commands::Serve { host, port } => sgvrecycle::cli::serve(config, host, port).await,
        Commands::CheckConfig => sgvrecycle::cli::check_config(&config),
    }
}
