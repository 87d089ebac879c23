//! Determinism checks for question answering.
//!
//! The same question must produce the same answer on every turn and in
//! every session: scoring is pure, and ties resolve by store order.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use mimir_common::{KnowledgeBase, MatcherConfig, QaEntry};
use mimirctl::repl::ChatSession;

fn kb_file(dir: &Path, entries: &[(&str, &str)]) -> (KnowledgeBase, PathBuf) {
    let kb = KnowledgeBase {
        questions: entries
            .iter()
            .map(|(q, a)| QaEntry {
                question: q.to_string(),
                answer: a.to_string(),
            })
            .collect(),
    };
    let path = dir.join("knowledge_base.json");
    kb.save(&path).unwrap();
    (kb, path)
}

#[test]
fn repeated_questions_get_identical_answers() {
    let temp = TempDir::new().unwrap();
    let (kb, path) = kb_file(
        temp.path(),
        &[
            ("What is your name?", "I am a bot."),
            ("How old are you?", "Old enough."),
        ],
    );

    let mut session = ChatSession::new(kb, path, MatcherConfig::default());
    let script = "what is your name\nwhat is your name\nwhat is your name\nquit\n";
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    session.run(&mut input, &mut output).unwrap();
    let transcript = String::from_utf8(output).unwrap();

    assert_eq!(transcript.matches("Bot: I am a bot.\n").count(), 3);
    assert!(!transcript.contains("Bot: Old enough."));
}

#[test]
fn tie_break_is_stable_across_sessions() {
    let temp = TempDir::new().unwrap();
    // both entries normalize to the same question text
    let (_, path) = kb_file(temp.path(), &[("Name?", "first"), ("name!", "second")]);

    for _ in 0..3 {
        let kb = KnowledgeBase::load(&path).unwrap();
        let session = ChatSession::new(kb, path.clone(), MatcherConfig::default());
        assert_eq!(session.respond("name").as_deref(), Some("first"));
    }
}
