use crate::error::{Error, Result};
use crate::stopwords::StopWords;
use crate::tokenizer::{split_into_words, validate_word};
use std::collections::BTreeSet;

/// A parsed query: words that score documents and words that disqualify
/// them. Ordered sets keep matched-word output deterministic; only
/// membership is observable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Query {
    pub include: BTreeSet<String>,
    pub exclude: BTreeSet<String>,
}

/// Parse `raw_query` into include and exclude sets.
///
/// A leading `-` marks an exclusion term. A bare `-` and a `--`-prefixed
/// term are syntax errors; every word is validated after prefix stripping.
/// Stop words are silently dropped from both sets.
pub(crate) fn parse_query(stop_words: &StopWords, raw_query: &str) -> Result<Query> {
    let mut query = Query::default();
    for token in split_into_words(raw_query) {
        let (word, is_exclusion) = match token.strip_prefix('-') {
            Some(stripped) => (stripped, true),
            None => (token, false),
        };
        if is_exclusion && (word.is_empty() || word.starts_with('-')) {
            return Err(Error::MalformedQuery(token.to_string()));
        }
        validate_word(word)?;
        if stop_words.contains(word) {
            continue;
        }
        if is_exclusion {
            query.exclude.insert(word.to_string());
        } else {
            query.include.insert(word.to_string());
        }
    }
    Ok(query)
}
