//! CLI command implementations
//!
//! `init` writes a default configuration file and creates the data
//! directory. `start` loads the configuration, opens the record store,
//! and serves HTTP until the process is stopped. Subsystems are built
//! here and injected; nothing holds process-global state.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::http_server::HttpServer;
use crate::observability::{Logger, Severity};
use crate::store::RecordStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parses arguments and dispatches to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatches one command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { config } => init(&config),
        Command::Start { config } => start(&config),
    }
}

/// Writes a default configuration file and creates its data directory.
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::already_initialized(config_path));
    }

    let config = ServiceConfig::default();
    config
        .save(config_path)
        .map_err(|e| CliError::config_error(format!("write {}: {}", config_path.display(), e)))?;

    fs::create_dir_all(&config.data_dir).map_err(|e| {
        CliError::data_dir_error(format!("create {}: {}", config.data_dir, e))
    })?;

    Logger::log(
        Severity::Info,
        "initialized",
        &[
            ("config", config_path.display().to_string().as_str()),
            ("data_dir", config.data_dir.as_str()),
        ],
    );

    Ok(())
}

/// Loads configuration, opens the store, and serves HTTP.
pub fn start(config_path: &Path) -> CliResult<()> {
    let config = ServiceConfig::load(config_path)
        .map_err(|e| CliError::config_error(format!("load {}: {}", config_path.display(), e)))?;

    let store = RecordStore::open(Path::new(&config.data_dir))
        .map_err(|e| CliError::boot_failed(format!("open record store: {}", e)))?;
    let store = Arc::new(store);

    Logger::log(
        Severity::Info,
        "store_opened",
        &[("data_dir", config.data_dir.as_str())],
    );

    let server = HttpServer::new(&config, store);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("create runtime: {}", e)))?;

    runtime
        .block_on(server.start())
        .map_err(|e| CliError::boot_failed(format!("serve: {}", e)))
}
