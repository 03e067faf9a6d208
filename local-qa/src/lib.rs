//! Local Q&A lookup that answers common first-aid questions without an LLM call.
//!
//! Public API:
//! - [`normalize`]: accent/punctuation-insensitive text folding used for matching.
//! - [`LocalMatcher`]: first-match-wins keyword scan over [`LOCAL_QA`].
//! - [`LocalQaEntry`]: one static entry (id, keywords, canned answer).

mod entries;
mod matcher;
mod normalize;

pub use entries::{LOCAL_QA, LocalQaEntry};
pub use matcher::LocalMatcher;
pub use normalize::normalize;
