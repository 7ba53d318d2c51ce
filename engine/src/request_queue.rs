use crate::document::{DocId, Document, DocumentStatus};
use crate::engine::SearchEngine;
use crate::error::Result;
use std::collections::VecDeque;

/// Default window size: the number of minutes in a day, so with one request
/// per minute the counter reads as "queries with no results today".
pub const DEFAULT_WINDOW: usize = 1440;

/// Sliding window of recent search outcomes over a borrowed engine.
///
/// Each search routed through the queue records whether it returned any
/// documents; once the window is full the oldest outcome is evicted, FIFO.
/// [`no_result_count`](RequestQueue::no_result_count) is maintained
/// incrementally and always matches the current window contents.
#[derive(Debug)]
pub struct RequestQueue<'a> {
    engine: &'a SearchEngine,
    requests: VecDeque<bool>,
    capacity: usize,
    no_result_count: usize,
}

impl<'a> RequestQueue<'a> {
    pub fn new(engine: &'a SearchEngine) -> Self {
        Self::with_capacity(engine, DEFAULT_WINDOW)
    }

    pub fn with_capacity(engine: &'a SearchEngine, capacity: usize) -> Self {
        Self {
            engine,
            requests: VecDeque::new(),
            capacity,
            no_result_count: 0,
        }
    }

    /// Search among [`DocumentStatus::Actual`] documents and record the
    /// outcome.
    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>> {
        let result = self.engine.find_top_documents(raw_query)?;
        self.record(result.is_empty());
        Ok(result)
    }

    /// Search among documents with the given status and record the outcome.
    pub fn add_find_request_with_status(
        &mut self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        let result = self
            .engine
            .find_top_documents_with_status(raw_query, status)?;
        self.record(result.is_empty());
        Ok(result)
    }

    /// Search among documents the predicate admits and record the outcome.
    pub fn add_find_request_by<P>(&mut self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool,
    {
        let result = self.engine.find_top_documents_by(raw_query, predicate)?;
        self.record(result.is_empty());
        Ok(result)
    }

    /// Record one outcome, evicting the oldest once the window is full.
    pub fn record(&mut self, was_empty: bool) {
        self.requests.push_back(was_empty);
        if was_empty {
            self.no_result_count += 1;
        }
        if self.requests.len() > self.capacity {
            if let Some(evicted) = self.requests.pop_front() {
                if evicted {
                    self.no_result_count -= 1;
                }
            }
        }
    }

    /// Number of windowed requests that returned no documents. O(1).
    pub fn no_result_count(&self) -> usize {
        self.no_result_count
    }

    /// Number of requests currently in the window.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eviction_is_fifo_and_counter_stays_consistent() {
        let engine = SearchEngine::new("").unwrap();
        let mut queue = RequestQueue::with_capacity(&engine, 3);

        queue.record(true);
        assert_eq!((queue.len(), queue.no_result_count()), (1, 1));
        queue.record(true);
        assert_eq!((queue.len(), queue.no_result_count()), (2, 2));
        queue.record(false);
        assert_eq!((queue.len(), queue.no_result_count()), (3, 2));
        // The fourth insert evicts the first `true`.
        queue.record(true);
        assert_eq!((queue.len(), queue.no_result_count()), (3, 2));
        queue.record(false);
        assert_eq!((queue.len(), queue.no_result_count()), (3, 1));
    }

    #[test]
    fn window_never_exceeds_capacity() {
        let engine = SearchEngine::new("").unwrap();
        let mut queue = RequestQueue::with_capacity(&engine, 2);
        for _ in 0..10 {
            queue.record(true);
        }
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.no_result_count(), 2);
    }
}
