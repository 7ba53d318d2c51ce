use crate::document::DocId;
use thiserror::Error;

/// Errors surfaced by the engine.
///
/// Every variant reports caller misuse detected synchronously; nothing here
/// is transient or retryable, and no partial state is committed when one is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A stop word, document word, or query word contains a control
    /// character.
    #[error("word {0:?} contains a control character")]
    InvalidWord(String),
    /// `add_document` was called with an id that is already indexed.
    #[error("document id {0} is already indexed")]
    DuplicateDocumentId(DocId),
    /// Query syntax error: a bare `-` or a term with more than one leading
    /// `-`.
    #[error("malformed query term {0:?}")]
    MalformedQuery(String),
    /// The requested document id is not in the store.
    #[error("document id {0} is not indexed")]
    DocumentNotFound(DocId),
    /// Positional id lookup past the number of inserted documents.
    #[error("position {position} is out of range for {len} documents")]
    PositionOutOfRange { position: usize, len: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
