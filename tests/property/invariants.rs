//! Structural properties of freshly built indexes.

use proptest::prelude::*;
use regolith::verify::check_pair;
use regolith::{tokenize, Field, Snapshot};

use crate::strategies::{corpus, query};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Whatever we build passes the same checks a loaded snapshot must.
    #[test]
    fn prop_built_snapshot_is_consistent(docs in corpus()) {
        let snapshot = Snapshot::build(docs).unwrap();
        prop_assert!(check_pair(snapshot.index(), snapshot.store()).is_ok());
    }

    #[test]
    fn prop_tf_matches_token_count(docs in corpus()) {
        let snapshot = Snapshot::build(docs.clone()).unwrap();
        let index = snapshot.index();

        for (ordinal, doc) in docs.iter().enumerate() {
            for field in Field::ALL {
                for token in tokenize(&doc.field_text(field)) {
                    let expected = tokenize(&doc.field_text(field))
                        .iter()
                        .filter(|t| t.term == token.term)
                        .count() as u32;
                    let posting = index
                        .postings(&token.term)
                        .iter()
                        .find(|p| p.doc as usize == ordinal && p.field == field);
                    prop_assert_eq!(posting.map(|p| p.term_freq), Some(expected));
                }
            }
        }
    }

    #[test]
    fn prop_sequential_and_parallel_builds_agree(docs in corpus()) {
        let sequential = Snapshot::build(docs.clone()).unwrap();
        let parallel = Snapshot::build_parallel(docs).unwrap();
        prop_assert_eq!(sequential.to_json().unwrap(), parallel.to_json().unwrap());
    }

    /// Scores are sums of boost × tf, so they are positive and each result
    /// reports at least one matched field.
    #[test]
    fn prop_results_have_matches(docs in corpus(), q in query()) {
        let snapshot = Snapshot::build(docs).unwrap();
        for result in snapshot.search(&q, 20).unwrap() {
            prop_assert!(result.score > 0.0);
            prop_assert!(!result.matches.is_empty());
        }
    }

    /// Ties keep build order.
    #[test]
    fn prop_equal_scores_in_build_order(docs in corpus(), q in query()) {
        let snapshot = Snapshot::build(docs).unwrap();
        let refs = snapshot.index().refs();
        let results = snapshot.search(&q, 50).unwrap();
        for pair in results.windows(2) {
            if pair[0].score == pair[1].score {
                let a = refs.iter().position(|r| *r == pair[0].document.id);
                let b = refs.iter().position(|r| *r == pair[1].document.id);
                prop_assert!(a < b);
            }
        }
    }
}
