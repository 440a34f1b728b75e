use anyhow::Result;
use clap::{Parser, Subcommand};

/// shiftboard - staff roster viewer/editor
#[derive(Parser)]
#[command(name = "shiftboard")]
#[command(about = "Staff roster with rotating shift patterns", long_about = None)]
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
    /// Run database migrations
    Migrate,
    /// Drop the database if it exists and recreate it with migrations
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = shiftboard::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    shiftboard::observability::init_tracing(&config.observability.log_level)?;

    match cli.command {
        Commands::Serve { host, port } => shiftboard::cli::server::serve(config, host, port).await,
        Commands::Migrate => shiftboard::migrate::migrate(&config).await,
        Commands::Reset => shiftboard::migrate::reset(&config).await,
    }
}
