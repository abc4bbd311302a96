// sparkify/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).
// Every command reads ./dwh.yaml and takes no flags.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sparkify")]
#[command(about = "Loads the Sparkify event logs into a star-schema warehouse", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// 🧱 Drops and recreates every staging, dimension and fact table
    CreateTables,

    /// 🚚 Copies raw files into staging, then builds dimensions and songplays
    Etl,

    /// 🧪 Compares staging counts with dimension/fact counts
    Test,
}
