//! Query edge cases.

use crate::common::{build_loaded, ids, jezero_corpus, make_doc};
use regolith::{InvalidArgumentError, SearchError};

#[test]
fn test_empty_and_blank_queries_return_nothing() {
    let snapshot = build_loaded(jezero_corpus());
    for query in ["", " ", "\t\n", "...", "- ! ?"] {
        assert!(snapshot.search(query, 10).unwrap().is_empty(), "query {:?}", query);
    }
}

#[test]
fn test_zero_max_results_is_invalid_argument() {
    let snapshot = build_loaded(jezero_corpus());
    let err = snapshot.search("jezero", 0).unwrap_err();
    assert!(matches!(
        err,
        SearchError::InvalidArgument(InvalidArgumentError::MaxResults(0))
    ));
    // checked before the query is even looked at
    assert!(snapshot.search("", 0).is_err());
}

#[test]
fn test_unknown_terms_return_nothing() {
    let snapshot = build_loaded(jezero_corpus());
    assert!(snapshot.search("deimos", 10).unwrap().is_empty());
}

#[test]
fn test_case_insensitive() {
    let snapshot = build_loaded(jezero_corpus());
    assert_eq!(
        snapshot.search("JEZERO", 10).unwrap(),
        snapshot.search("jezero", 10).unwrap()
    );
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_diacritics_fold() {
    let snapshot = build_loaded(vec![make_doc("gale", "Galé Crater", "")]);
    assert_eq!(ids(&snapshot.search("gale", 10).unwrap()), vec!["gale"]);
    assert_eq!(ids(&snapshot.search("GALÉ", 10).unwrap()), vec!["gale"]);
}

#[test]
fn test_numbers_are_terms() {
    let snapshot = build_loaded(vec![make_doc("sol", "Sol 1000", "MSL-2012")]);
    assert_eq!(ids(&snapshot.search("1000", 10).unwrap()), vec!["sol"]);
    assert_eq!(ids(&snapshot.search("2012", 10).unwrap()), vec!["sol"]);
}

#[test]
fn test_no_stemming() {
    let snapshot = build_loaded(vec![make_doc("r", "Rovers", "")]);
    assert!(snapshot.search("rover", 10).unwrap().is_empty());
}

#[test]
fn test_large_limit_returns_all_matches() {
    let snapshot = build_loaded(jezero_corpus());
    assert_eq!(snapshot.search("jezero", usize::MAX).unwrap().len(), 2);
}

#[test]
fn test_empty_index_answers_nothing() {
    let snapshot = build_loaded(vec![]);
    assert!(snapshot.search("anything", 10).unwrap().is_empty());
}
