// sparkify/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs on stderr; stdout is reserved for the report and the status line.
    // Fixed INFO level; RUST_LOG is not read.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::CreateTables => commands::create_tables::execute().await,
        Commands::Etl => commands::etl::execute().await,
        Commands::Test => commands::test::execute().await,
    }
}
