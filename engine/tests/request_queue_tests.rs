use engine::{DocumentStatus, Error, RequestQueue, SearchEngine};

fn stocked_engine() -> SearchEngine {
    let mut search_engine = SearchEngine::new("and in on").unwrap();
    search_engine
        .add_document(0, "curly dog and fancy collar", DocumentStatus::Actual, &[2])
        .unwrap();
    search_engine
        .add_document(1, "big dog sparrow", DocumentStatus::Banned, &[5])
        .unwrap();
    search_engine
}

#[test]
fn window_trace_matches_fifo_eviction() {
    let search_engine = stocked_engine();
    let mut queue = RequestQueue::with_capacity(&search_engine, 3);

    assert!(queue.add_find_request("empty first").unwrap().is_empty());
    assert_eq!((queue.len(), queue.no_result_count()), (1, 1));

    assert!(queue.add_find_request("empty second").unwrap().is_empty());
    assert_eq!((queue.len(), queue.no_result_count()), (2, 2));

    assert!(!queue.add_find_request("curly dog").unwrap().is_empty());
    assert_eq!((queue.len(), queue.no_result_count()), (3, 2));

    // The window is full: this evicts the first empty outcome.
    assert!(queue.add_find_request("empty third").unwrap().is_empty());
    assert_eq!((queue.len(), queue.no_result_count()), (3, 2));
}

#[test]
fn no_result_count_drains_as_hits_push_misses_out() {
    let search_engine = stocked_engine();
    let mut queue = RequestQueue::with_capacity(&search_engine, 4);
    for i in 0..4 {
        queue.add_find_request(&format!("miss{i}")).unwrap();
    }
    assert_eq!(queue.no_result_count(), 4);
    for _ in 0..4 {
        queue.add_find_request("dog").unwrap();
    }
    assert_eq!(queue.no_result_count(), 0);
    assert_eq!(queue.len(), 4);
}

#[test]
fn results_pass_through_unchanged() {
    let search_engine = stocked_engine();
    let mut queue = RequestQueue::new(&search_engine);
    let direct = search_engine.find_top_documents("curly dog").unwrap();
    let routed = queue.add_find_request("curly dog").unwrap();
    assert_eq!(routed, direct);
}

#[test]
fn status_and_predicate_requests_are_recorded_too() {
    let search_engine = stocked_engine();
    let mut queue = RequestQueue::with_capacity(&search_engine, 10);

    let banned = queue
        .add_find_request_with_status("dog", DocumentStatus::Banned)
        .unwrap();
    assert_eq!(banned.len(), 1);
    assert_eq!(banned[0].id, 1);

    let none = queue
        .add_find_request_by("dog", |_, _, rating| rating > 100)
        .unwrap();
    assert!(none.is_empty());

    assert_eq!(queue.len(), 2);
    assert_eq!(queue.no_result_count(), 1);
}

#[test]
fn failed_queries_are_not_recorded() {
    let search_engine = stocked_engine();
    let mut queue = RequestQueue::with_capacity(&search_engine, 10);
    let err = queue.add_find_request("dog -").unwrap_err();
    assert_eq!(err, Error::MalformedQuery("-".to_string()));
    assert!(queue.is_empty());
    assert_eq!(queue.no_result_count(), 0);
}
