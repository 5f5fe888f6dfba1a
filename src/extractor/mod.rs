//! # Import Extraction Module
//!
//! Reads a module's source text and returns the modules it directly
//! imports, resolved against the importing file's directory and lexically
//! normalized.
//!
//! Recognition is deliberately narrow: a single-line statement of the exact
//! shape `import <anything> '<relative-path>';`. Multi-line statements,
//! double quotes, and dynamic imports are invisible. The rest of the
//! pipeline only depends on the extractor's contract, never on how import
//! edges were discovered.

mod extractor_impl;

pub use extractor_impl::*;
