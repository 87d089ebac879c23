//! Terminal rendering for everything outside the chat protocol.
//!
//! The chat loop itself writes plain text so transcripts stay stable;
//! colors are reserved for errors and auxiliary commands.

use owo_colors::OwoColorize;
use std::path::Path;

/// One-line error report on stderr, with the full context chain.
pub fn print_error(error: &anyhow::Error) {
    eprintln!("{} {error:#}", "error:".red().bold());
}

/// Knowledge base summary for the `stats` subcommand.
pub fn print_stats(path: &Path, entries: usize) {
    println!("{}", "Knowledge base".bold());
    println!("  {}  {}", "path:".dimmed(), path.display());
    println!("  {}  {}", "entries:".dimmed(), entries);
}
