use clap::{Parser, Subcommand};

use crate::common::{CycleDisplayArgs, EntryArgs, FormatArgs};

#[derive(Parser)]
#[command(
    name = "roundabout",
    about = "🔄 Detect circular imports among source modules",
    long_about = "roundabout follows the import statements of a source tree, starting from an \
                  entry-point module, and reports every group of modules that import each other \
                  in a circle. Cycle detection is advisory by default and does not affect the \
                  exit code.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check the reachable import graph for circular dependencies
    ///
    /// Reads the entry-point module, follows every relative import it can
    /// reach, and reports the groups of modules that are mutually reachable
    /// through import statements. A clean graph produces no output on stdout.
    #[command(
        long_about = "Build the import graph reachable from ENTRY and report circular imports. \
                      Each module is read once, its single-line relative imports are extracted, \
                      and the resulting directed graph is partitioned into strongly connected \
                      components. Components with two or more members are cycles and are \
                      printed; a clean graph prints nothing."
    )]
    Check {
        #[command(flatten)]
        entry: EntryArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,

        /// Exit with error code if cycles found
        #[arg(long, env = "ROUNDABOUT_ERROR_ON_CYCLES")]
        error_on_cycles: bool,
    },

    /// Print the transitive import tree of the entry point
    ///
    /// Shows every reachable module indented under its importer. A module
    /// that was already expanded earlier in the walk is marked instead of
    /// being expanded again, so cyclic graphs print in finite form.
    #[command(
        long_about = "Walk the import graph reachable from ENTRY in depth-first order and print \
                      one line per import, indented by depth. The first occurrence of a module \
                      is expanded; later occurrences are marked '(seen)' and not descended \
                      into, which keeps the output finite even when imports form cycles."
    )]
    Tree {
        #[command(flatten)]
        entry: EntryArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}
