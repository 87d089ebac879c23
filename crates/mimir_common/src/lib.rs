//! Mimir Common - shared pieces of the Mimir Q&A bot
//!
//! Storage, text normalization, fuzzy matching, and configuration
//! consumed by the mimirctl binary.

pub mod config;
pub mod error;
pub mod knowledge_base;
pub mod matcher;
pub mod normalize;

pub use config::BotConfig;
pub use error::StoreError;
pub use knowledge_base::{KnowledgeBase, QaEntry};
pub use matcher::{find_best_match, find_close_matches, similarity_ratio, MatcherConfig};
pub use normalize::TextNormalizer;
