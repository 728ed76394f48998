//! CLI interface for NakVaksin

pub mod commands;
mod output;

pub use output::*;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "nakvaksin")]
#[command(version)]
#[command(about = "Landing page server for NakVaksin", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new nakvaksin.toml configuration file
    Init,

    /// Start the HTTP server
    Serve {
        /// Host to bind to (defaults to the configured host)
        #[arg(long, env = "NAKVAKSIN_HOST")]
        host: Option<String>,

        /// Port to listen on (defaults to the configured port)
        #[arg(short, long, env = "NAKVAKSIN_PORT")]
        port: Option<u16>,
    },

    /// Render the landing page to stdout
    Render {
        /// Render as if the session cookie carried this JSON profile
        #[arg(long)]
        profile: Option<String>,
    },
}
