//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

/// Entry-point argument shared by multiple commands
#[derive(Args, Debug, Clone)]
pub struct EntryArgs {
    /// Entry-point module the traversal starts from
    #[arg(value_name = "ENTRY", env = "ROUNDABOUT_ENTRY")]
    pub entry: PathBuf,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "ROUNDABOUT_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Common cycle display arguments
#[derive(Args, Debug, Clone)]
pub struct CycleDisplayArgs {
    /// Maximum number of cycles to display (shows all by default)
    #[arg(long, env = "ROUNDABOUT_MAX_CYCLES")]
    pub max_cycles: Option<usize>,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::RoundaboutError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands)
    -> Result<Self, crate::error::RoundaboutError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::RoundaboutError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_args_hold_path() {
        let args = EntryArgs {
            entry: PathBuf::from("lib/run_tests.js"),
        };

        assert_eq!(args.entry, PathBuf::from("lib/run_tests.js"));
    }

    #[test]
    fn test_cycle_display_args_default_shows_all() {
        let args = CycleDisplayArgs { max_cycles: None };
        assert!(args.max_cycles.is_none());
    }
}
