//! CLI error types
//!
//! All CLI errors are fatal: the process prints them and exits non-zero.

use std::fmt;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// Data directory problem
    DataDirError,
    /// Already initialized
    AlreadyInitialized,
    /// Server failed to boot or crashed
    BootFailed,
}

impl CliErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "SV_CLI_CONFIG_ERROR",
            Self::DataDirError => "SV_CLI_DATA_DIR_ERROR",
            Self::AlreadyInitialized => "SV_CLI_ALREADY_INITIALIZED",
            Self::BootFailed => "SV_CLI_BOOT_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn data_dir_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::DataDirError, msg)
    }

    pub fn already_initialized(path: &std::path::Path) -> Self {
        Self::new(
            CliErrorCode::AlreadyInitialized,
            format!("Configuration already exists at {}", path.display()),
        )
    }

    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_and_message() {
        let err = CliError::config_error("missing file");
        let rendered = err.to_string();
        assert!(rendered.contains("SV_CLI_CONFIG_ERROR"));
        assert!(rendered.contains("missing file"));
    }

    #[test]
    fn test_already_initialized_names_the_path() {
        let err = CliError::already_initialized(std::path::Path::new("/tmp/sv.json"));
        assert!(err.to_string().contains("/tmp/sv.json"));
        assert_eq!(*err.code(), CliErrorCode::AlreadyInitialized);
    }
}
