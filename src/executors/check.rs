//! Check command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::CheckImportsConfig;
use crate::detector::CycleDetector;
use crate::executors::CommandExecutor;
use crate::extractor::ImportExtractor;
use crate::graph::ImportGraphBuilder;
use crate::progress::ProgressReporter;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

pub struct CheckExecutor;

impl CommandExecutor for CheckExecutor {
    type Config = CheckImportsConfig;

    fn execute(config: Self::Config) -> Result<()> {
        // Progress is stderr decoration for interactive terminals only;
        // stdout carries nothing but the report
        let mut progress = if console::Term::stderr().is_term() {
            Some(ProgressReporter::new())
        } else {
            None
        };

        if let Some(p) = progress.as_mut() {
            eprintln!(
                "{} Checking for circular imports...\n",
                style("🔄").cyan()
            );
            p.start_scan();
        }

        let extractor = ImportExtractor::new();
        let mut graph_builder = ImportGraphBuilder::new();
        graph_builder
            .build_from_entry(&config.entry, &extractor, progress.as_ref())
            .wrap_err("Failed to build import graph")?;

        if let Some(p) = progress.as_mut() {
            p.finish_scan(graph_builder.module_count());
            p.start_cycle_detection();
        }

        let mut detector = CycleDetector::new();
        detector.detect_cycles(graph_builder.graph());

        if let Some(p) = progress.as_ref() {
            p.finish_cycle_detection(detector.cycle_count());
        }

        let report_result = match config.format {
            OutputFormat::Human => {
                let generator = HumanReportGenerator::new(config.max_cycles);
                generator.generate_report(&detector)
            }
            OutputFormat::Json => {
                let generator = JsonReportGenerator::new();
                generator.generate_report(&detector)
            }
        };

        match report_result {
            Ok(report) => print!("{report}"),
            Err(e) => {
                return Err(e)
                    .into_diagnostic()
                    .wrap_err("Failed to generate report");
            }
        }

        // Cycle detection is advisory unless the caller opts in
        if config.error_on_cycles && detector.has_cycles() {
            std::process::exit(1);
        }

        Ok(())
    }
}
