// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the browser search box.
//!
//! The page fetches the snapshot JSON once and hands it to
//! `new SearchClient(json)`. Construction never throws: a snapshot that fails
//! to load leaves the client unavailable, and the page hides search.

use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

use crate::highlight::{extract_excerpt, highlight_terms, DEFAULT_EXCERPT_LENGTH};
use crate::live::LiveIndex;
use crate::search::DEFAULT_MAX_RESULTS;

fn terms_from_js(terms: JsValue) -> Result<Vec<String>, JsValue> {
    if terms.is_undefined() || terms.is_null() {
        return Ok(Vec::new());
    }
    from_value(terms).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    // Plain objects instead of ES Maps, so `result.matches.title` works.
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub struct SearchClient {
    live: LiveIndex,
}

#[wasm_bindgen]
impl SearchClient {
    /// Load a snapshot. Never throws; check `isAvailable()`.
    #[wasm_bindgen(constructor)]
    pub fn new(snapshot_json: &str) -> SearchClient {
        SearchClient {
            live: LiveIndex::from_snapshot(snapshot_json),
        }
    }

    #[wasm_bindgen(js_name = isAvailable)]
    pub fn is_available(&self) -> bool {
        self.live.is_available()
    }

    #[wasm_bindgen(js_name = docCount)]
    pub fn doc_count(&self) -> usize {
        self.live
            .current()
            .map_or(0, |snapshot| snapshot.index().doc_count())
    }

    /// Ranked results as an array of `{ document, score, matches }`.
    ///
    /// Throws when `maxResults` is 0. Defaults to 10.
    pub fn search(&self, query: &str, max_results: Option<usize>) -> Result<JsValue, JsValue> {
        let results = self
            .live
            .search(query, max_results.unwrap_or(DEFAULT_MAX_RESULTS))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        to_js(&results)
    }

    /// Wrap matched words in `<mark>` tags.
    pub fn highlight(&self, text: &str, terms: JsValue) -> Result<String, JsValue> {
        Ok(highlight_terms(text, &terms_from_js(terms)?))
    }

    /// Excerpt around the first match. `maxLength` defaults to 200.
    pub fn excerpt(
        &self,
        content: &str,
        terms: JsValue,
        max_length: Option<usize>,
    ) -> Result<String, JsValue> {
        Ok(extract_excerpt(
            content,
            &terms_from_js(terms)?,
            max_length.unwrap_or(DEFAULT_EXCERPT_LENGTH),
        ))
    }
}
