//! CLI command definitions for the `reminisce` binary.

pub mod memory;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Store personal memories and recall them as vivid recollections.
#[derive(Parser)]
#[command(name = "reminisce", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config.toml (defaults to $REMINISCE_CONFIG, then ~/.reminisce/config.toml).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server.
    Serve {
        /// Port to listen on (overrides [server] port).
        #[arg(long)]
        port: Option<u16>,

        /// Host to bind to (overrides [server] host).
        #[arg(long)]
        host: Option<String>,
    },

    /// Store a memory.
    Store {
        /// Memory text.
        text: String,

        /// Extra metadata as a JSON object, e.g. '{"tag":"family"}'.
        #[arg(long, value_name = "JSON")]
        metadata: Option<String>,
    },

    /// Recall memories relevant to a question.
    Recall {
        /// Question or topic to recall.
        query: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl Cli {
    /// Default log filter derived from `--quiet` and `-v`.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "info",
            1 => "info,reminisce_core=debug,reminisce_infra=debug,reminisce_api=debug",
            _ => "trace",
        }
    }
}
