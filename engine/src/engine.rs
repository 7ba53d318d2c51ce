use crate::document::{DocId, Document, DocumentStatus};
use crate::error::{Error, Result};
use crate::index::Index;
use crate::query::{parse_query, Query};
use crate::stopwords::StopWords;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Relevances closer than this are tied and fall back to rating order, so
/// result ordering stays stable under floating-point noise.
const RELEVANCE_EPSILON: f64 = 1e-6;

/// Engine tuning knobs.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Maximum number of hits returned by a search.
    pub top_k: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { top_k: 5 }
    }
}

/// The search engine facade: owns the stop-word set, the inverted index and
/// the document store. Every public operation of the crate goes through it.
#[derive(Debug)]
pub struct SearchEngine {
    stop_words: StopWords,
    index: Index,
    config: SearchConfig,
}

impl SearchEngine {
    /// Engine with default configuration. `stop_words` is a space-delimited
    /// blob, rejected wholesale if any word carries a control character.
    pub fn new(stop_words: &str) -> Result<Self> {
        Self::with_config(stop_words, SearchConfig::default())
    }

    pub fn with_config(stop_words: &str, config: SearchConfig) -> Result<Self> {
        Ok(Self::from_stop_words(StopWords::from_text(stop_words)?, config))
    }

    /// Engine from a pre-built stop-word set.
    pub fn from_stop_words(stop_words: StopWords, config: SearchConfig) -> Self {
        Self {
            stop_words,
            index: Index::default(),
            config,
        }
    }

    /// Ingest one document. Fails on a duplicate id or an invalid word, in
    /// which case nothing is persisted.
    pub fn add_document(
        &mut self,
        id: DocId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        self.index
            .add_document(&self.stop_words, id, text, status, ratings)?;
        tracing::debug!(id, document_count = self.index.document_count(), "document added");
        Ok(())
    }

    pub fn document_count(&self) -> usize {
        self.index.document_count()
    }

    /// Id of the `position`-th inserted document.
    pub fn document_id_at(&self, position: usize) -> Result<DocId> {
        self.index.document_id_at(position)
    }

    /// Top documents for `raw_query` among those with status
    /// [`DocumentStatus::Actual`].
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_with_status(raw_query, DocumentStatus::Actual)
    }

    /// Top documents for `raw_query` among those with the given status.
    pub fn find_top_documents_with_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.find_top_documents_by(raw_query, |_, document_status, _| document_status == status)
    }

    /// Top documents for `raw_query` among those the predicate admits.
    ///
    /// Hits are ordered by descending relevance, rating breaking near-ties,
    /// and truncated to the configured top-K. A query word absent from the
    /// index contributes nothing; only query parsing can fail.
    pub fn find_top_documents_by<P>(&self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool,
    {
        let query = parse_query(&self.stop_words, raw_query)?;
        let mut matched = self.find_all_documents(&query, predicate);
        matched.sort_by(compare_documents);
        matched.truncate(self.config.top_k);
        tracing::debug!(query = raw_query, hits = matched.len(), "search complete");
        Ok(matched)
    }

    /// Words of `raw_query` found in document `id`, sorted, along with the
    /// document's status. Any matching exclusion term empties the word list;
    /// the status is still returned.
    pub fn match_document(
        &self,
        raw_query: &str,
        id: DocId,
    ) -> Result<(Vec<String>, DocumentStatus)> {
        let query = parse_query(&self.stop_words, raw_query)?;
        let data = self
            .index
            .document_data(id)
            .ok_or(Error::DocumentNotFound(id))?;
        let excluded = query
            .exclude
            .iter()
            .any(|word| self.index.has_posting(word, id));
        let matched = if excluded {
            Vec::new()
        } else {
            query
                .include
                .iter()
                .filter(|word| self.index.has_posting(word, id))
                .cloned()
                .collect()
        };
        Ok((matched, data.status))
    }

    /// Accumulate relevance for every document admitted by the predicate,
    /// then drop any document containing an exclusion word.
    fn find_all_documents<P>(&self, query: &Query, predicate: P) -> Vec<Document>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool,
    {
        let mut relevance: HashMap<DocId, f64> = HashMap::new();
        for word in &query.include {
            let Some(postings) = self.index.postings(word) else {
                continue;
            };
            let idf = self.inverse_document_freq(postings.len());
            for (&id, &tf) in postings {
                let Some(data) = self.index.document_data(id) else {
                    continue;
                };
                if predicate(id, data.status, data.rating) {
                    *relevance.entry(id).or_insert(0.0) += idf * tf;
                }
            }
        }
        for word in &query.exclude {
            let Some(postings) = self.index.postings(word) else {
                continue;
            };
            for &id in postings.keys() {
                relevance.remove(&id);
            }
        }
        relevance
            .into_iter()
            .filter_map(|(id, relevance)| {
                let data = self.index.document_data(id)?;
                Some(Document {
                    id,
                    relevance,
                    rating: data.rating,
                })
            })
            .collect()
    }

    fn inverse_document_freq(&self, containing_documents: usize) -> f64 {
        (self.index.document_count() as f64 / containing_documents as f64).ln()
    }
}

/// Descending relevance; differences below [`RELEVANCE_EPSILON`] are ties
/// broken by descending rating.
fn compare_documents(lhs: &Document, rhs: &Document) -> Ordering {
    if (lhs.relevance - rhs.relevance).abs() < RELEVANCE_EPSILON {
        rhs.rating.cmp(&lhs.rating)
    } else {
        rhs.relevance
            .partial_cmp(&lhs.relevance)
            .unwrap_or(Ordering::Equal)
    }
}
