//! Wise Men Coffee Co. - site server with a built-in content editor.

mod app;
mod build;
mod cli;
mod config;
mod content;
mod editor;
mod logger;
mod render;
mod serve;
mod storage;

use anyhow::Result;
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::AppConfig;
use content::ContentStore;
use serve::serve_site;
use std::io::{self, BufRead, Write};
use storage::FileStorage;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Serve { .. } => serve_site(&config),
        Commands::Build { .. } => build_site(&config),
        Commands::Reset { yes } => reset_content(&config, *yes),
    }
}

/// Load configuration, falling back to defaults when no file exists.
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = if cli.config.exists() {
        AppConfig::from_path(&cli.config)?
    } else {
        AppConfig::default()
    };
    config.update_with_cli(cli);
    Ok(config)
}

/// Clear the saved content document, after confirmation.
fn reset_content(config: &AppConfig, yes: bool) -> Result<()> {
    if !yes {
        print!("Reset all content to defaults? This cannot be undone. [y/N] ");
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            log!("store"; "reset cancelled");
            return Ok(());
        }
    }

    let store = ContentStore::new(Box::new(FileStorage::new(&config.storage.path)));
    store.reset();
    log!("store"; "content restored to defaults");
    Ok(())
}
