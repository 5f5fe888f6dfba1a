//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::detector::CycleDetector;
use crate::error::RoundaboutError;

pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_cycles: Option<usize>) -> Self {
        Self { max_cycles }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, RoundaboutError> {
        let mut output = String::new();

        // A clean graph produces no output at all; callers distinguish
        // "no cycles" from "error" by the exit code, not by printed text
        if !detector.has_cycles() {
            return Ok(output);
        }

        write!(
            output,
            "{} Found {} import {}:\n\n",
            style("❌").red().bold(),
            style(detector.cycle_count()).red().bold(),
            if detector.cycle_count() == 1 {
                "cycle"
            } else {
                "cycles"
            }
        )?;

        let cycles_to_show = match self.max_cycles {
            Some(limit) => detector
                .cycles()
                .iter()
                .take(limit)
                .enumerate()
                .collect::<Vec<_>>(),
            None => detector.cycles().iter().enumerate().collect::<Vec<_>>(),
        };

        let total_cycles = detector.cycle_count();
        let showing_all = self.max_cycles.is_none_or(|limit| limit >= total_cycles);

        for (i, cycle) in cycles_to_show {
            writeln!(output, "{} Cycle #{}", style("🔄").yellow(), i + 1)?;
            writeln!(output, "  {} Modules involved:", style("📦").blue())?;

            for path in cycle.module_paths() {
                writeln!(
                    output,
                    "    {} {}",
                    style("•").dim(),
                    style(path.display()).bold()
                )?;
            }

            writeln!(
                output,
                "\n  {} Imports creating this cycle:",
                style("🔗").cyan()
            )?;

            for edge in cycle.edges() {
                writeln!(
                    output,
                    "    {} {} → {} (line {}: '{}')",
                    style("→").dim(),
                    style(edge.from.display()).yellow(),
                    style(edge.to.display()).yellow(),
                    edge.line,
                    style(&edge.specifier).dim()
                )?;
            }
            writeln!(output)?;
        }

        if !showing_all {
            writeln!(
                output,
                "{} Showing {} of {} cycles. Use --max-cycles to see more.",
                style("ℹ️").blue(),
                style(
                    self.max_cycles
                        .expect("max_cycles must be Some when !showing_all")
                )
                .yellow(),
                style(total_cycles).yellow()
            )?;
        }

        writeln!(
            output,
            "{} To break these cycles, remove at least one import from each cycle.",
            style("💡").yellow()
        )?;
        writeln!(
            output,
            "{} Consider extracting shared code into a module both sides can import.",
            style("💡").yellow()
        )?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use petgraph::graph::DiGraph;

    use super::*;
    use crate::graph::{ImportEdge, ModuleNode};

    fn detector_with_cycle() -> CycleDetector {
        let mut graph = DiGraph::new();
        let a = graph.add_node(ModuleNode::new(PathBuf::from("lib/a.js")));
        let b = graph.add_node(ModuleNode::new(PathBuf::from("lib/b.js")));
        graph.add_edge(
            a,
            b,
            ImportEdge {
                specifier: "./b.js".to_string(),
                line: 1,
            },
        );
        graph.add_edge(
            b,
            a,
            ImportEdge {
                specifier: "./a.js".to_string(),
                line: 2,
            },
        );

        let mut detector = CycleDetector::new();
        detector.detect_cycles(&graph);
        detector
    }

    #[test]
    fn test_no_cycles_means_no_output_at_all() {
        let detector = CycleDetector::new();
        let generator = HumanReportGenerator::new(None);

        let report = generator.generate_report(&detector).unwrap();

        assert_eq!(report, "");
    }

    #[test]
    fn test_report_names_the_cycle_members() {
        let detector = detector_with_cycle();
        let generator = HumanReportGenerator::new(None);

        let report = generator.generate_report(&detector).unwrap();

        assert!(report.contains("lib/a.js"));
        assert!(report.contains("lib/b.js"));
        assert!(report.contains("Cycle #1"));
    }

    #[test]
    fn test_report_names_the_import_lines() {
        let detector = detector_with_cycle();
        let generator = HumanReportGenerator::new(None);

        let report = generator.generate_report(&detector).unwrap();

        assert!(report.contains("line 1"));
        assert!(report.contains("line 2"));
    }

    #[test]
    fn test_max_cycles_truncates_the_report() {
        let mut graph = DiGraph::new();
        let entry = graph.add_node(ModuleNode::new(PathBuf::from("entry.js")));
        let pair = |graph: &mut DiGraph<ModuleNode, ImportEdge>, x: &str, y: &str| {
            let a = graph.add_node(ModuleNode::new(PathBuf::from(x)));
            let b = graph.add_node(ModuleNode::new(PathBuf::from(y)));
            graph.add_edge(
                a,
                b,
                ImportEdge {
                    specifier: format!("./{y}"),
                    line: 1,
                },
            );
            graph.add_edge(
                b,
                a,
                ImportEdge {
                    specifier: format!("./{x}"),
                    line: 1,
                },
            );
            a
        };
        let a = pair(&mut graph, "a.js", "b.js");
        let c = pair(&mut graph, "c.js", "d.js");
        graph.add_edge(
            entry,
            a,
            ImportEdge {
                specifier: "./a.js".to_string(),
                line: 1,
            },
        );
        graph.add_edge(
            entry,
            c,
            ImportEdge {
                specifier: "./c.js".to_string(),
                line: 2,
            },
        );

        let mut detector = CycleDetector::new();
        detector.detect_cycles(&graph);
        assert_eq!(detector.cycle_count(), 2);

        let report = HumanReportGenerator::new(Some(1))
            .generate_report(&detector)
            .unwrap();

        assert!(report.contains("Cycle #1"));
        assert!(!report.contains("Cycle #2"));
        assert!(report.contains("Showing 1 of 2 cycles"));
    }
}
