//! The Listening/Teaching interaction loop.
//!
//! Two states. Listening reads a user line, matches it against the stored
//! questions, and prints the stored answer. A miss (only possible with an
//! empty knowledge base under the default zero cutoff) switches to
//! Teaching, which asks for the missing answer and persists it before
//! returning to Listening. "quit" and end-of-input leave the loop.

use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::info;

use mimir_common::{find_best_match, KnowledgeBase, MatcherConfig, QaEntry, StoreError, TextNormalizer};

/// Prompt printed before each user turn.
pub const USER_PROMPT: &str = "You: ";

/// Prompt printed when the bot asks to be taught.
pub const TEACH_PROMPT: &str = "Type the answer or \"skip\" to skip: ";

/// Reply when no stored question matches.
pub const UNKNOWN_REPLY: &str = "Bot: I don't know the answer. Can you teach me?";

/// Confirmation after a new entry is stored.
pub const LEARNED_REPLY: &str = "Bot: Thank you! I learned a new response!";

/// One interactive chat session over a knowledge base.
///
/// Owns the in-memory store for the session lifetime; every learned entry
/// is appended and the whole store rewritten to `kb_path` immediately.
pub struct ChatSession {
    kb: KnowledgeBase,
    kb_path: PathBuf,
    normalizer: TextNormalizer,
    matcher: MatcherConfig,
}

impl ChatSession {
    pub fn new(kb: KnowledgeBase, kb_path: PathBuf, matcher: MatcherConfig) -> Self {
        Self {
            kb,
            kb_path,
            normalizer: TextNormalizer::new(),
            matcher,
        }
    }

    /// Stored answer for `question`, or `None` when nothing matches.
    ///
    /// The fuzzy match yields a normalized question; it is resolved back
    /// to an entry by normalized equality, first entry in store order
    /// winning on duplicates.
    pub fn respond(&self, question: &str) -> Option<String> {
        let candidates = self.kb.question_texts();
        let matched = find_best_match(question, &candidates, &self.normalizer, &self.matcher)?;

        self.kb
            .questions
            .iter()
            .find(|entry| self.normalizer.normalize(&entry.question) == matched)
            .map(|entry| entry.answer.clone())
    }

    /// Append a new entry and rewrite the backing file.
    pub fn learn(&mut self, question: String, answer: String) -> Result<(), StoreError> {
        self.kb.questions.push(QaEntry { question, answer });
        self.kb.save(&self.kb_path)?;
        info!("learned a new response ({} entries)", self.kb.questions.len());
        Ok(())
    }

    /// Drive the session until "quit" or end-of-input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        loop {
            write!(output, "{USER_PROMPT}")?;
            output.flush()?;

            let Some(line) = read_line(input)? else { break };
            if line.eq_ignore_ascii_case("quit") {
                break;
            }

            match self.respond(&line) {
                Some(answer) => writeln!(output, "Bot: {answer}")?,
                None => {
                    writeln!(output, "{UNKNOWN_REPLY}")?;
                    write!(output, "{TEACH_PROMPT}")?;
                    output.flush()?;

                    let Some(answer) = read_line(input)? else { break };
                    if !answer.eq_ignore_ascii_case("skip") {
                        self.learn(line, answer)?;
                        writeln!(output, "{LEARNED_REPLY}")?;
                    }
                }
            }
        }

        Ok(())
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }
}

/// Read one line, trailing newline stripped. `None` at end-of-input.
fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    while buf.ends_with('\n') || buf.ends_with('\r') {
        buf.pop();
    }
    Ok(Some(buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn session_with(entries: Vec<(&str, &str)>) -> (ChatSession, TempDir) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("kb.json");
        let kb = KnowledgeBase {
            questions: entries
                .into_iter()
                .map(|(q, a)| QaEntry {
                    question: q.to_string(),
                    answer: a.to_string(),
                })
                .collect(),
        };
        kb.save(&path).unwrap();
        (ChatSession::new(kb, path, MatcherConfig::default()), temp)
    }

    #[test]
    fn read_line_strips_newline_variants() {
        let mut input = Cursor::new(b"unix\nwindows\r\n".to_vec());
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("unix"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("windows"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn respond_finds_the_stored_answer() {
        let (session, _temp) = session_with(vec![("What is your name?", "I am a bot.")]);
        assert_eq!(
            session.respond("what is your name").as_deref(),
            Some("I am a bot.")
        );
    }

    #[test]
    fn respond_is_none_only_for_an_empty_base() {
        let (session, _temp) = session_with(vec![]);
        assert_eq!(session.respond("hi there"), None);
    }

    #[test]
    fn duplicate_normalized_questions_resolve_to_the_first_entry() {
        let (session, _temp) = session_with(vec![("Name?", "first"), ("name", "second")]);
        assert_eq!(session.respond("name").as_deref(), Some("first"));
    }

    #[test]
    fn learn_appends_and_persists() {
        let (mut session, _temp) = session_with(vec![]);
        session
            .learn("hi there".to_string(), "Hello!".to_string())
            .unwrap();

        assert_eq!(session.knowledge_base().questions.len(), 1);
        assert_eq!(session.respond("hi there").as_deref(), Some("Hello!"));
    }
}
