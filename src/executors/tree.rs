//! Tree command executor

use miette::{IntoDiagnostic, Result, WrapErr};

use crate::config::TreeConfig;
use crate::executors::CommandExecutor;
use crate::extractor::ImportExtractor;
use crate::graph::{ImportGraphBuilder, TreeRenderer};

pub struct TreeExecutor;

impl CommandExecutor for TreeExecutor {
    type Config = TreeConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let extractor = ImportExtractor::new();
        let mut graph_builder = ImportGraphBuilder::new();
        let entry_idx = graph_builder
            .build_from_entry(&config.entry, &extractor, None)
            .wrap_err("Failed to build import graph")?;

        let renderer = TreeRenderer::new();
        let tree = renderer
            .render(graph_builder.graph(), entry_idx)
            .into_diagnostic()
            .wrap_err("Failed to render import tree")?;

        print!("{tree}");

        Ok(())
    }
}
