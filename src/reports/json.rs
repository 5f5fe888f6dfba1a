//! JSON format report generation

use serde::Serialize;

use super::ReportGenerator;
use crate::detector::CycleDetector;
use crate::error::RoundaboutError;

#[derive(Serialize)]
struct JsonReport {
    has_cycles: bool,
    cycle_count: usize,
    cycles: Vec<JsonCycle>,
}

#[derive(Serialize)]
struct JsonCycle {
    modules: Vec<String>,
    imports: Vec<JsonImport>,
}

#[derive(Serialize)]
struct JsonImport {
    from: String,
    to: String,
    specifier: String,
    line: usize,
}

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, RoundaboutError> {
        let mut cycles: Vec<JsonCycle> = detector
            .cycles()
            .iter()
            .map(|cycle| JsonCycle {
                modules: cycle
                    .module_paths()
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect(),
                imports: cycle
                    .edges()
                    .iter()
                    .map(|edge| JsonImport {
                        from: edge.from.display().to_string(),
                        to: edge.to.display().to_string(),
                        specifier: edge.specifier.clone(),
                        line: edge.line,
                    })
                    .collect(),
            })
            .collect();

        // Sort cycles by their first module for consistent ordering;
        // members and imports are already sorted by the detector
        cycles.sort_by(|a, b| a.modules.first().cmp(&b.modules.first()));

        let report = JsonReport {
            has_cycles: detector.has_cycles(),
            cycle_count: detector.cycle_count(),
            cycles,
        };

        serde_json::to_string_pretty(&report).map_err(RoundaboutError::Json)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use petgraph::graph::DiGraph;
    use serde_json::Value;

    use super::*;
    use crate::graph::{ImportEdge, ModuleNode};

    fn detector_with_cycle() -> CycleDetector {
        let mut graph = DiGraph::new();
        let a = graph.add_node(ModuleNode::new(PathBuf::from("a.js")));
        let b = graph.add_node(ModuleNode::new(PathBuf::from("b.js")));
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
                line: 4,
            },
        );

        let mut detector = CycleDetector::new();
        detector.detect_cycles(&graph);
        detector
    }

    #[test]
    fn test_json_report_no_cycles() {
        let detector = CycleDetector::new();
        let generator = JsonReportGenerator::new();

        let report = generator.generate_report(&detector).unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["has_cycles"], false);
        assert_eq!(json["cycle_count"], 0);
        assert_eq!(json["cycles"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_json_report_with_cycles() {
        let detector = detector_with_cycle();
        let generator = JsonReportGenerator::new();

        let report = generator.generate_report(&detector).unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["has_cycles"], true);
        assert_eq!(json["cycle_count"], 1);

        let cycle = &json["cycles"][0];
        let modules = cycle["modules"].as_array().unwrap();
        assert_eq!(modules.len(), 2);
        assert!(modules.contains(&Value::from("a.js")));
        assert!(modules.contains(&Value::from("b.js")));

        let imports = cycle["imports"].as_array().unwrap();
        assert_eq!(imports.len(), 2);
    }

    #[test]
    fn test_json_report_import_structure() {
        let detector = detector_with_cycle();
        let generator = JsonReportGenerator::new();

        let report = generator.generate_report(&detector).unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        let import = &json["cycles"][0]["imports"][0];
        assert_eq!(import["from"], "a.js");
        assert_eq!(import["to"], "b.js");
        assert_eq!(import["specifier"], "./b.js");
        assert_eq!(import["line"], 1);
    }

    #[test]
    fn test_json_report_pretty_formatting() {
        let detector = CycleDetector::new();
        let generator = JsonReportGenerator::new();

        let report = generator.generate_report(&detector).unwrap();

        assert!(report.contains('\n'));
        assert!(report.contains("  "));
    }
}
