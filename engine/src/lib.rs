//! In-process document search engine.
//!
//! Short text documents are indexed into an in-memory inverted index, scored
//! against free-text queries with a TF-IDF model, and returned as a ranked
//! top-K list. Queries may carry `-`-prefixed exclusion terms; any document
//! containing one is dropped from the results outright. A bounded
//! [`RequestQueue`] on top of the engine tracks how many of the most recent
//! queries came back empty.
//!
//! The engine is single-threaded and synchronous. All mutation goes through
//! [`SearchEngine::add_document`]; callers that need shared access should put
//! the engine behind their own single-writer discipline.

pub mod tokenizer;

mod document;
mod engine;
mod error;
mod index;
mod query;
mod request_queue;
mod stopwords;

pub use document::{DocId, Document, DocumentStatus};
pub use engine::{SearchConfig, SearchEngine};
pub use error::{Error, Result};
pub use request_queue::{RequestQueue, DEFAULT_WINDOW};
pub use stopwords::StopWords;
