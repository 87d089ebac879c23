//! Mimirctl library - exposes modules for integration tests

pub mod commands;
pub mod errors;
pub mod output;
pub mod repl;
