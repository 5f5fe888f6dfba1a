//! Command implementations for the roundabout CLI
//!
//! This module contains the implementations for each CLI command:
//! - check: Check the reachable import graph for circular dependencies
//! - tree: Print the transitive import tree of the entry point

pub mod check;
pub mod tree;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Check { .. } => check::execute_check_command(command),
        Commands::Tree { .. } => tree::execute_tree_command(command),
    }
}
