use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quote", version, about = "Wedding photo/video price quotes")]
pub struct Cli {
    /// Configuration file path (defaults to the platform config dir)
    #[arg(short, long, global = true, env = "WEDDING_QUOTE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Replay select/deselect actions from an empty selection and price the result
    Apply {
        /// Pricing year (defaults to the configured year)
        #[arg(short, long)]
        year: Option<u16>,

        /// Actions as `select:<service>` or `deselect:<service>`
        actions: Vec<String>,
    },

    /// Price a list of services as-is, rejecting add-ons without their base service
    Price {
        /// Pricing year (defaults to the configured year)
        #[arg(short, long)]
        year: Option<u16>,

        /// Service names, e.g. `photography wedding-session`
        services: Vec<String>,
    },

    /// Show the price list for a year
    Table {
        /// Pricing year (defaults to the configured year)
        #[arg(short, long)]
        year: Option<u16>,
    },
}
