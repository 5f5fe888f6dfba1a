//! Tree command configuration

use std::path::PathBuf;

/// Configuration for the tree command
#[derive(Debug, Clone)]
pub struct TreeConfig {
    /// Entry-point module the traversal starts from
    pub entry: PathBuf,
}

impl TreeConfig {
    pub fn builder() -> TreeConfigBuilder {
        TreeConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct TreeConfigBuilder {
    entry: Option<PathBuf>,
}

impl TreeConfigBuilder {
    pub fn new() -> Self {
        Self { entry: None }
    }

    pub fn with_entry(mut self, entry: PathBuf) -> Self {
        self.entry = Some(entry);
        self
    }
}

impl crate::common::ConfigBuilder for TreeConfigBuilder {
    type Config = TreeConfig;

    fn build(self) -> Result<Self::Config, crate::error::RoundaboutError> {
        Ok(TreeConfig {
            entry: self.entry.ok_or_else(|| {
                crate::error::RoundaboutError::ConfigurationError {
                    message: "Missing required field: entry".to_string(),
                }
            })?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_builder_requires_entry() {
        assert!(TreeConfig::builder().build().is_err());
    }
}
