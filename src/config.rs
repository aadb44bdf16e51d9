//! Application configuration.
//!
//! Handles loading and parsing the optional `wisemen.toml` file. Every
//! field has a default, so the binary runs without any config at all.

use crate::cli::{Cli, Commands};
use anyhow::Result;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),
}

/// Default values for serde deserialization
pub mod config_defaults {
    pub fn r#true() -> bool {
        true
    }

    pub mod serve {
        pub fn interface() -> String {
            "127.0.0.1".into()
        }
        pub fn port() -> u16 {
            8088
        }
    }

    pub mod storage {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            ".wisemen".into()
        }
    }

    pub mod build {
        use std::path::PathBuf;

        pub fn output() -> PathBuf {
            "public".into()
        }
    }
}

/// `[serve]` section in wisemen.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct ServeConfig {
    /// Interface to bind on
    #[serde(default = "config_defaults::serve::interface")]
    #[educe(Default = config_defaults::serve::interface())]
    pub interface: String,

    /// Port to bind on (auto-retries upward when in use)
    #[serde(default = "config_defaults::serve::port")]
    #[educe(Default = config_defaults::serve::port())]
    pub port: u16,
}

/// `[storage]` section in wisemen.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    /// Data directory for the key-value storage surface
    #[serde(default = "config_defaults::storage::path")]
    #[educe(Default = config_defaults::storage::path())]
    pub path: PathBuf,
}

/// `[build]` section in wisemen.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Output directory for the static page
    #[serde(default = "config_defaults::build::output")]
    #[educe(Default = config_defaults::build::output())]
    pub output: PathBuf,

    /// Minify the html output
    #[serde(default = "config_defaults::r#true")]
    #[educe(Default = true)]
    pub minify: bool,
}

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub serve: ServeConfig,
    pub storage: StorageConfig,
    pub build: BuildConfig,
}

impl AppConfig {
    /// Parse config from a TOML string.
    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse config from a file path.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Apply CLI argument overrides on top of the file values.
    pub fn update_with_cli(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Serve { interface, port } => {
                if let Some(interface) = interface {
                    self.serve.interface = interface.clone();
                }
                if let Some(port) = port {
                    self.serve.port = *port;
                }
            }
            Commands::Build { output, minify } => {
                if let Some(output) = output {
                    self.build.output = output.clone();
                }
                if let Some(minify) = minify {
                    self.build.minify = *minify;
                }
            }
            Commands::Reset { .. } => {}
        }

        if let Some(data) = &cli.data {
            self.storage.path = data.clone();
        }
    }
}
