//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Wise Men Coffee Co. site server CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Config file name (default: wisemen.toml)
    #[arg(short = 'C', long, default_value = "wisemen.toml")]
    pub config: PathBuf,

    /// Data directory for stored content (overrides `[storage] path`)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Serve the site locally, hosting the content editor
    Serve {
        /// Interface to bind on
        #[arg(short, long)]
        interface: Option<String>,

        /// The port you should provide
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Render the public page to a static index.html
    Build {
        /// Output directory path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Minify the html content
        #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        minify: Option<bool>,
    },

    /// Clear stored content, restoring the default site copy
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_serve(&self) -> bool {
        matches!(self.command, Commands::Serve { .. })
    }
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
    pub const fn is_reset(&self) -> bool {
        matches!(self.command, Commands::Reset { .. })
    }
}
