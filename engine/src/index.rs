use crate::document::{average_rating, DocId, DocumentStatus};
use crate::error::{Error, Result};
use crate::stopwords::StopWords;
use crate::tokenizer::{split_into_words, validate_word};
use std::collections::HashMap;

/// Per-document metadata held by the store.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DocumentData {
    pub rating: i32,
    pub status: DocumentStatus,
}

/// Inverted index plus document store, mutated in lockstep.
///
/// For each word the index keeps one posting per containing document: the
/// word's term frequency there, i.e. occurrences over the document's total
/// word count after stop-word removal. Documents are never updated or
/// removed once added.
#[derive(Debug, Default)]
pub(crate) struct Index {
    word_to_document_freqs: HashMap<String, HashMap<DocId, f64>>,
    documents: HashMap<DocId, DocumentData>,
    insertion_order: Vec<DocId>,
}

impl Index {
    /// Ingest one document. Validation runs before any write, so a rejected
    /// document leaves the index and store untouched.
    pub fn add_document(
        &mut self,
        stop_words: &StopWords,
        id: DocId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        if self.documents.contains_key(&id) {
            return Err(Error::DuplicateDocumentId(id));
        }
        let words = split_into_words_no_stop(stop_words, text)?;
        // A document with no indexable words has no defined term frequency;
        // it is stored but contributes no postings.
        if !words.is_empty() {
            let tf_step = 1.0 / words.len() as f64;
            for word in &words {
                *self
                    .word_to_document_freqs
                    .entry((*word).to_string())
                    .or_default()
                    .entry(id)
                    .or_insert(0.0) += tf_step;
            }
        }
        self.documents.insert(
            id,
            DocumentData {
                rating: average_rating(ratings),
                status,
            },
        );
        self.insertion_order.push(id);
        Ok(())
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Id of the `position`-th inserted document.
    pub fn document_id_at(&self, position: usize) -> Result<DocId> {
        self.insertion_order
            .get(position)
            .copied()
            .ok_or(Error::PositionOutOfRange {
                position,
                len: self.insertion_order.len(),
            })
    }

    pub fn document_data(&self, id: DocId) -> Option<DocumentData> {
        self.documents.get(&id).copied()
    }

    pub fn postings(&self, word: &str) -> Option<&HashMap<DocId, f64>> {
        self.word_to_document_freqs.get(word)
    }

    pub fn has_posting(&self, word: &str, id: DocId) -> bool {
        self.postings(word)
            .map_or(false, |postings| postings.contains_key(&id))
    }
}

/// Tokenize `text`, drop stop words, and validate what remains. The first
/// invalid word fails the whole call.
fn split_into_words_no_stop<'t>(stop_words: &StopWords, text: &'t str) -> Result<Vec<&'t str>> {
    let mut words = Vec::new();
    for word in split_into_words(text) {
        if stop_words.contains(word) {
            continue;
        }
        validate_word(word)?;
        words.push(word);
    }
    Ok(words)
}
