//! Check command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;

/// Configuration for the check command
///
/// This struct contains all options for detecting and reporting circular
/// imports reachable from an entry-point module.
#[derive(Debug, Clone)]
pub struct CheckImportsConfig {
    /// Entry-point module the traversal starts from
    pub entry: PathBuf,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if cycles are found
    pub error_on_cycles: bool,
    /// Maximum number of cycles to report (None = all)
    pub max_cycles: Option<usize>,
}

impl CheckImportsConfig {
    pub fn builder() -> CheckImportsConfigBuilder {
        CheckImportsConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct CheckImportsConfigBuilder {
    entry: Option<PathBuf>,
    format: Option<OutputFormat>,
    error_on_cycles: Option<bool>,
    max_cycles: Option<Option<usize>>,
}

impl CheckImportsConfigBuilder {
    pub fn new() -> Self {
        Self {
            entry: None,
            format: None,
            error_on_cycles: None,
            max_cycles: None,
        }
    }

    pub fn with_entry(mut self, entry: PathBuf) -> Self {
        self.entry = Some(entry);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = Some(error_on_cycles);
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for CheckImportsConfigBuilder {
    type Config = CheckImportsConfig;

    fn build(self) -> Result<Self::Config, crate::error::RoundaboutError> {
        Ok(CheckImportsConfig {
            entry: self.entry.ok_or_else(|| {
                crate::error::RoundaboutError::ConfigurationError {
                    message: "Missing required field: entry".to_string(),
                }
            })?,
            format: self.format.ok_or_else(|| {
                crate::error::RoundaboutError::ConfigurationError {
                    message: "Missing required field: format".to_string(),
                }
            })?,
            error_on_cycles: self.error_on_cycles.ok_or_else(|| {
                crate::error::RoundaboutError::ConfigurationError {
                    message: "Missing required field: error_on_cycles".to_string(),
                }
            })?,
            max_cycles: self.max_cycles.ok_or_else(|| {
                crate::error::RoundaboutError::ConfigurationError {
                    message: "Missing required field: max_cycles".to_string(),
                }
            })?,
        })
    }
}
