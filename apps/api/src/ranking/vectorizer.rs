//! Batch TF-IDF feature extraction over normalized skills texts.

use std::collections::{HashMap, HashSet};

/// TF-IDF vectorizer refit from scratch on every ranking call.
///
/// The vocabulary is induced from the exact batch passed to `fit`, with
/// indices assigned in first-encounter order, so feature layout is
/// deterministic for a fixed batch — and deliberately not comparable across
/// batches. Tokens are lowercased before vocabulary lookup.
#[derive(Debug, Default)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Induces the vocabulary and IDF weights from the given documents.
    /// Documents are expected pre-normalized (whitespace-separated tokens).
    pub fn fit(&mut self, documents: &[String]) {
        let n_documents = documents.len();
        let mut vocabulary = HashMap::new();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            // Walk tokens in document order so vocabulary indices are
            // assigned first-encounter and refits stay deterministic.
            let mut seen_in_doc = HashSet::new();
            for token in tokenize(doc) {
                if seen_in_doc.insert(token.clone()) {
                    *document_frequency.entry(token.clone()).or_insert(0) += 1;
                    let next_idx = vocabulary.len();
                    vocabulary.entry(token).or_insert(next_idx);
                }
            }
        }

        // Smoothed IDF: ln((N + 1) / (df + 1)) + 1
        let mut idf = vec![0.0; vocabulary.len()];
        for (token, &idx) in &vocabulary {
            let df = document_frequency[token];
            idf[idx] = ((n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0;
        }

        self.vocabulary = vocabulary;
        self.idf = idf;
    }

    /// Maps a document onto the fitted vocabulary: length-normalized term
    /// frequency times IDF. Out-of-vocabulary tokens contribute nothing.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let tokens: Vec<String> = tokenize(document).collect();
        let mut features = vec![0.0; self.vocabulary.len()];

        for token in &tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                features[idx] += 1.0;
            }
        }

        let doc_length = tokens.len() as f64;
        if doc_length > 0.0 {
            for (idx, value) in features.iter_mut().enumerate() {
                *value = *value / doc_length * self.idf[idx];
            }
        }

        features
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

fn tokenize(document: &str) -> impl Iterator<Item = String> + '_ {
    document.split_whitespace().map(str::to_lowercase)
}
