//! Small shared utilities

pub mod path;
