//! Command implementations for the aptpack CLI

pub mod cache;
pub mod completions;
pub mod supply;
pub mod version;
