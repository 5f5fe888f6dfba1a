//! Configuration constants for roundabout
//!
//! This module contains all configurable constants used throughout the
//! application.

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while scanning modules
    pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";
}

/// Import statement recognition
pub mod import {
    /// Line-anchored pattern for a recognized import statement.
    ///
    /// Only the exact single-line shape `import <anything> '<path>';` is
    /// recognized; double-quoted, multi-line, and dynamic imports are
    /// invisible to the extractor.
    pub const LINE_PATTERN: &str = r"^import .*?'([^']+)';$";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_constants() {
        assert_eq!(progress::TICK_INTERVAL, Duration::from_millis(100));
        assert_eq!(progress::SPINNER_FRAMES.len(), 10);
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "human");
    }

    #[test]
    fn test_import_pattern_compiles() {
        assert!(regex::Regex::new(import::LINE_PATTERN).is_ok());
    }
}
