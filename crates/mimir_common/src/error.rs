//! Error taxonomy for knowledge base storage.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while loading or saving the knowledge base file.
///
/// `Read` and `Write` are the I/O class; `Parse` is the malformed-content
/// class. All three are fatal at the binary edge.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backing file is missing or unreadable.
    #[error("failed to read knowledge base {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Backing file could not be overwritten.
    #[error("failed to write knowledge base {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not a valid knowledge base document.
    #[error("malformed knowledge base {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
