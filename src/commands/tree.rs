//! Tree command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::TreeConfig;
use crate::error::RoundaboutError;

impl FromCommand for TreeConfig {
    fn from_command(command: Commands) -> Result<Self, RoundaboutError> {
        match command {
            Commands::Tree { entry } => TreeConfig::builder().with_entry(entry.entry).build(),
            _ => Err(RoundaboutError::ConfigurationError {
                message: "Invalid command type for TreeConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(TreeConfig);

/// Execute the tree command for printing the import tree
pub fn execute_tree_command(command: Commands) -> Result<()> {
    let config =
        TreeConfig::from_command(command).wrap_err("Failed to parse tree command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::tree::TreeExecutor;
    TreeExecutor::execute(config)
}
