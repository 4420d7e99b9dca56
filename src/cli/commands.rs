//! CLI command implementations
//!
//! `start` boot order:
//! 1. Configuration load and validation
//! 2. Log level
//! 3. Record store (snapshot file or in-memory)
//! 4. Services and HTTP router
//! 5. Serving loop on a tokio runtime until ctrl-c

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{Logger, Severity};
use crate::service::Services;
use crate::storage::RecordStore;

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub server: HttpServerConfig,

    /// Snapshot file; records live only in memory when absent
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Minimum log severity (default: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: HttpServerConfig::default(),
            data_file: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.server.host.trim().is_empty() {
            return Err(CliError::config_error("host must not be empty"));
        }

        self.severity()?;

        if let Some(path) = &self.data_file {
            if path.as_os_str().is_empty() {
                return Err(CliError::config_error("data_file must not be empty"));
            }
        }

        Ok(())
    }

    pub fn severity(&self) -> CliResult<Severity> {
        Severity::parse(&self.log_level).ok_or_else(|| {
            CliError::config_error(format!(
                "Invalid log_level: '{}'. Expected trace, info, warn, error or fatal.",
                self.log_level
            ))
        })
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Start { config, port } => start(&config, port),
    }
}

/// Writes a default configuration file. Never overwrites.
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::already_initialized(config_path));
    }

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                CliError::config_error(format!("Failed to create directory {:?}: {}", parent, e))
            })?;
        }
    }

    let content = serde_json::to_string_pretty(&Config::default())?;
    fs::write(config_path, content).map_err(|e| {
        CliError::config_error(format!("Failed to write config {:?}: {}", config_path, e))
    })?;

    write_response(json!({"config": config_path.to_string_lossy()}))?;

    Ok(())
}

/// Starts the HTTP server and blocks until shutdown
pub fn start(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let server = boot(config_path, port)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Everything `start` does short of serving
fn boot(config_path: &Path, port: Option<u16>) -> CliResult<HttpServer> {
    let mut config = Config::load(config_path)?;
    if let Some(port) = port {
        config.server.port = port;
    }

    Logger::set_min_severity(config.severity()?);

    let store = match &config.data_file {
        Some(path) => RecordStore::open(path)
            .map_err(|e| CliError::boot_failed(format!("Failed to open record store: {}", e)))?,
        None => RecordStore::in_memory(),
    };

    let services = Arc::new(Services::new(Arc::new(store)));
    Ok(HttpServer::new(services, config.server))
}
