//! CLI command implementations

pub mod brief;
