//! Quarry CLI - Command-line interface for the Quarry ORM.
//!
//! This crate provides the `quarry` tool for inspecting how connection URLs
//! are parsed, how driver options are normalized, and which column aliases
//! the ORM will generate.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
