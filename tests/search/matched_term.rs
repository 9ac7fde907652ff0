//! Match metadata attached to results.

use crate::common::{build_loaded, jezero_corpus, make_doc};
use regolith::{terms_from_matches, Field};

#[test]
fn test_matches_list_contributing_fields_only() {
    let results = build_loaded(jezero_corpus()).search("jezero", 10).unwrap();

    let a = &results[0];
    assert_eq!(a.matches.keys().copied().collect::<Vec<_>>(), vec![Field::Title]);

    let b = &results[1];
    assert_eq!(
        b.matches.keys().copied().collect::<Vec<_>>(),
        vec![Field::Description]
    );
    assert_eq!(b.matches[&Field::Description][0].term, "jezero");
    assert_eq!(b.matches[&Field::Description][0].positions, vec![9]);
}

#[test]
fn test_positions_are_byte_offsets_into_field_text() {
    let doc = make_doc("a", "Ice", "Ice caps. Polar ice, more ice.");
    let results = build_loaded(vec![doc.clone()]).search("ice", 10).unwrap();

    let content = &results[0].matches[&Field::Content][0];
    assert_eq!(content.positions.len(), 3);
    for &pos in &content.positions {
        assert!(doc.content[pos as usize..].to_lowercase().starts_with("ice"));
    }
}

#[test]
fn test_multiple_terms_across_fields() {
    let doc = make_doc("a", "Dust storm", "A global storm hid the dust.")
        .with_tags(["weather", "dust"]);
    let results = build_loaded(vec![doc]).search("dust storm", 10).unwrap();
    let matches = &results[0].matches;

    let title_terms: Vec<&str> = matches[&Field::Title].iter().map(|m| m.term.as_str()).collect();
    assert_eq!(title_terms, vec!["dust", "storm"]);
    assert_eq!(matches[&Field::Tags][0].term, "dust");
    assert_eq!(matches[&Field::Tags][0].positions, vec![8]);

    // 10×(dust) + 10×(storm) + 1×(dust) + 1×(storm) + 2×(dust)
    assert_eq!(results[0].score, 24.0);
    assert_eq!(terms_from_matches(&results[0]), vec!["dust", "storm"]);
}

#[test]
fn test_repeated_query_term_reported_once() {
    let results = build_loaded(jezero_corpus()).search("jezero Jezero", 10).unwrap();
    assert_eq!(results[0].matches[&Field::Title].len(), 1);
    assert_eq!(results[0].score, 10.0);
}
