//! Test utilities shared across unit tests, integration tests and benches.
//!
//! Always compiled but hidden from documentation.

#![doc(hidden)]

use crate::types::{Document, DocumentType};

/// An article with a title and body.
pub fn make_doc(id: &str, title: &str, content: &str) -> Document {
    Document::new(id, title, format!("/blog/{}", id), DocumentType::Article).with_content(content)
}

/// A location with a title and description.
pub fn make_location(id: &str, title: &str, description: &str) -> Document {
    Document::new(id, title, format!("/locations/{}", id), DocumentType::Location)
        .with_description(description)
}

/// The two-document corpus from the search box walkthrough: a crater with
/// "Jezero" in its title and an article with it in the description.
pub fn jezero_corpus() -> Vec<Document> {
    vec![
        make_location("a", "Jezero Crater", "ancient lake delta")
            .with_content("Perseverance landed on the crater floor in 2021."),
        Document::new("b", "Rover mission", "/blog/b", DocumentType::Article)
            .with_description("explores Jezero region")
            .with_content("Sample caching along the delta front."),
    ]
}

/// `n` articles drawn from a small vocabulary, for ranking and load tests.
pub fn make_corpus(n: usize) -> Vec<Document> {
    const WORDS: [&str; 12] = [
        "crater", "dust", "ice", "basalt", "dune", "canyon", "volcano", "rover", "delta",
        "regolith", "oxygen", "habitat",
    ];

    (0..n)
        .map(|i| {
            let title = format!("{} {}", WORDS[i % WORDS.len()], WORDS[(i * 7 + 3) % WORDS.len()]);
            let content: Vec<&str> = (0..20)
                .map(|j| WORDS[(i * 31 + j * 5) % WORDS.len()])
                .collect();
            make_doc(&format!("doc-{}", i), &title, &content.join(" "))
                .with_category(WORDS[i % 3])
                .with_tags([WORDS[(i + 1) % WORDS.len()], WORDS[(i + 2) % WORDS.len()]])
        })
        .collect()
}
