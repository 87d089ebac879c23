//! Persistent question/answer storage.
//!
//! The knowledge base is a single JSON document with one key, `questions`,
//! holding an ordered list of question/answer pairs. It is loaded whole at
//! process start and rewritten whole after every learned entry, so memory
//! and disk stay in sync unless the process dies between append and save.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::StoreError;

/// One stored question/answer pair.
///
/// Both fields are kept exactly as the user typed them; normalization
/// happens at comparison time, never at rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaEntry {
    pub question: String,
    pub answer: String,
}

/// The whole persisted store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    /// Ordered entries; store order breaks ties on duplicate questions.
    pub questions: Vec<QaEntry>,
}

impl KnowledgeBase {
    /// Load the knowledge base from `path`.
    ///
    /// `StoreError::Read` when the file is missing or unreadable,
    /// `StoreError::Parse` when the content is not the expected shape.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let data = fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let kb: Self = serde_json::from_str(&data).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("loaded {} entries from {}", kb.questions.len(), path.display());
        Ok(kb)
    }

    /// Overwrite `path` with the current contents, pretty-printed with
    /// 2-space indentation.
    ///
    /// Not atomic: a crash mid-write can corrupt the file.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(self).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source: source.into(),
        })?;

        fs::write(path, data).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("saved {} entries to {}", self.questions.len(), path.display());
        Ok(())
    }

    /// Stored question texts, in store order.
    pub fn question_texts(&self) -> Vec<&str> {
        self.questions.iter().map(|e| e.question.as_str()).collect()
    }
}
