//! Snapshot round trips and hostile input.

use proptest::prelude::*;
use regolith::{compression, Snapshot};

use crate::strategies::{corpus, query};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_is_identity(docs in corpus()) {
        let built = Snapshot::build(docs).unwrap();
        let json = built.to_json().unwrap();
        let loaded = Snapshot::from_json(&json).unwrap();
        prop_assert_eq!(&loaded, &built);
        prop_assert_eq!(loaded.to_json().unwrap(), json);
    }

    #[test]
    fn prop_pretty_and_compact_load_the_same(docs in corpus(), q in query()) {
        let built = Snapshot::build(docs).unwrap();
        let compact = Snapshot::from_json(&built.to_json().unwrap()).unwrap();
        let pretty = Snapshot::from_json(&built.to_json_pretty().unwrap()).unwrap();
        prop_assert_eq!(compact.search(&q, 10).unwrap(), pretty.search(&q, 10).unwrap());
    }

    #[test]
    fn prop_truncation_is_rejected(docs in corpus(), frac in 0.0f64..1.0) {
        let json = Snapshot::build(docs).unwrap().to_json().unwrap();
        let cut = ((json.len() as f64) * frac) as usize;
        prop_assert!(Snapshot::from_bytes(&json.as_bytes()[..cut]).is_err());
    }

    #[test]
    fn prop_random_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let _ = Snapshot::from_bytes(&bytes);
        let _ = compression::decompress(&bytes);
    }

    #[test]
    fn prop_compression_round_trip(docs in corpus()) {
        let json = Snapshot::build(docs).unwrap().to_json().unwrap();
        let compressed = compression::compress(json.as_bytes(), 5).unwrap();
        prop_assert_eq!(compression::decompress(&compressed).unwrap(), json.into_bytes());
    }
}
