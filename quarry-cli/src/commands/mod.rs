//! CLI command implementations.

pub mod alias;
pub mod options;
pub mod url;
pub mod version;
