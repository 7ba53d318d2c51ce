use serde::{Deserialize, Serialize};
use std::fmt;

pub type DocId = u32;

/// Moderation status assigned when a document is added; immutable afterward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    #[default]
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

/// A scored search hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Document {
    pub id: DocId,
    pub relevance: f64,
    pub rating: i32,
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.id, self.relevance, self.rating
        )
    }
}

/// Arithmetic mean truncated toward zero; 0 when no ratings were given.
pub(crate) fn average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    (sum / ratings.len() as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_rating_truncates_toward_zero() {
        assert_eq!(average_rating(&[8, -3]), 2);
        assert_eq!(average_rating(&[-8, 3]), -2);
        assert_eq!(average_rating(&[7, 2, 7]), 5);
        assert_eq!(average_rating(&[]), 0);
    }

    #[test]
    fn display_renders_hit_fields() {
        let hit = Document {
            id: 3,
            relevance: 0.25,
            rating: 9,
        };
        assert_eq!(
            hit.to_string(),
            "{ document_id = 3, relevance = 0.25, rating = 9 }"
        );
    }
}
