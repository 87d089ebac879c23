//! Subcommand entry points.
//!
//! Each handler loads the knowledge base, acts, and returns; only `chat`
//! stays resident for the session.

use anyhow::Result;
use std::io;
use std::path::Path;
use tracing::info;

use mimir_common::{KnowledgeBase, MatcherConfig};

use crate::output;
use crate::repl::{ChatSession, UNKNOWN_REPLY};

/// Interactive chat session (the default command).
pub fn chat(kb_path: &Path, matcher: MatcherConfig) -> Result<()> {
    let kb = KnowledgeBase::load(kb_path)?;
    info!(
        "mimirctl v{} ready, {} entries loaded",
        env!("MIMIR_VERSION"),
        kb.questions.len()
    );

    let mut session = ChatSession::new(kb, kb_path.to_path_buf(), matcher);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    session.run(&mut input, &mut stdout)
}

/// One-shot question; prints the answer and exits without teaching.
pub fn ask(kb_path: &Path, matcher: MatcherConfig, question: &str) -> Result<()> {
    let kb = KnowledgeBase::load(kb_path)?;
    let session = ChatSession::new(kb, kb_path.to_path_buf(), matcher);

    match session.respond(question) {
        Some(answer) => println!("Bot: {answer}"),
        None => println!("{UNKNOWN_REPLY}"),
    }
    Ok(())
}

/// Entry count and backing path.
pub fn stats(kb_path: &Path) -> Result<()> {
    let kb = KnowledgeBase::load(kb_path)?;
    output::print_stats(kb_path, kb.questions.len());
    Ok(())
}
