use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use miette::{IntoDiagnostic, Result};
use regex::Regex;

use crate::constants::import::LINE_PATTERN;
use crate::error::RoundaboutError;
use crate::utils::path::normalize_path;

static IMPORT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LINE_PATTERN).expect("Import line pattern should be valid"));

/// A single import discovered in a module's source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImport {
    target: PathBuf,
    specifier: String,
    line: usize,
}

impl ResolvedImport {
    /// Normalized path of the imported module
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// The quoted path exactly as written in the source
    pub fn specifier(&self) -> &str {
        &self.specifier
    }

    /// 1-based line number the import appeared on
    pub fn line(&self) -> usize {
        self.line
    }
}

/// Extracts the direct imports of source modules
///
/// A pure function of file content: the same file always yields the same
/// sequence of imports, in order of appearance, duplicates preserved.
pub struct ImportExtractor;

impl Default for ImportExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract the direct imports of the module at `module`.
    ///
    /// Fails with a fatal error if the file cannot be read; an incomplete
    /// graph could hide or fabricate cycles, so there is no partial result.
    pub fn extract_imports(&self, module: &Path) -> Result<Vec<ResolvedImport>> {
        let content = std::fs::read_to_string(module)
            .map_err(|e| RoundaboutError::FileReadError {
                path: module.to_path_buf(),
                source: e,
            })
            .into_diagnostic()?;

        Ok(self.extract_from_source(module, &content))
    }

    /// Scan source text for import lines, resolving each quoted path
    /// against the directory containing `module`.
    pub fn extract_from_source(&self, module: &Path, source: &str) -> Vec<ResolvedImport> {
        let dir = module.parent().unwrap_or_else(|| Path::new(""));

        let mut imports = Vec::new();
        for (line_idx, line) in source.lines().enumerate() {
            if let Some(captures) = IMPORT_LINE.captures(line) {
                let specifier = captures[1].to_string();
                let target = normalize_path(&dir.join(&specifier));
                imports.push(ResolvedImport {
                    target,
                    specifier,
                    line: line_idx + 1,
                });
            }
        }
        imports
    }
}
