//! Term-frequency / inverse-document-frequency vector space.
//!
//! Weighting:
//!
//!   idf(t)    = ln((1 + n) / (1 + df(t))) + 1
//!   w(t, d)   = count(t, d) · idf(t)
//!   vector(d) = w(·, d) / ‖w(·, d)‖₂
//!
//! where `n` is the number of corpus documents and `df(t)` the number of
//! documents containing `t`. The vocabulary is fixed when the vectorizer is
//! fitted; terms outside it contribute nothing to later vectors.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::tokenize::tokenize;

/// A sparse, L2-normalized term vector.
///
/// Entries are sorted by term index with no duplicates. A document with no
/// in-vocabulary terms is the empty (zero) vector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    fn from_weights(weights: BTreeMap<usize, f64>) -> Self {
        let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
        if norm == 0.0 {
            return Self::default();
        }
        Self { entries: weights.into_iter().map(|(i, w)| (i, w / norm)).collect() }
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Cosine similarity with `other`.
    ///
    /// Both vectors are unit length, so this is their dot product. Zero when
    /// either vector is zero.
    pub fn cosine(&self, other: &SparseVector) -> f64 {
        if self.is_zero() || other.is_zero() {
            return 0.0;
        }

        let (mut i, mut j, mut dot) = (0, 0, 0.0);
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_w) = self.entries[i];
            let (b_idx, b_w) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    dot += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        dot.clamp(0.0, 1.0)
    }
}

/// A fitted vocabulary with its IDF weights.
#[derive(Debug, Clone, Default)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Fit on `documents` and return the vectorizer together with the vector
    /// of every document, in input order.
    ///
    /// Term indices follow the lexicographic order of the vocabulary, so the
    /// same corpus always yields the same indices.
    pub fn fit_transform<S: AsRef<str>>(documents: &[S]) -> (Self, Vec<SparseVector>) {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d.as_ref())).collect();

        let terms: BTreeSet<&str> = tokenized.iter().flatten().map(String::as_str).collect();
        let vocabulary: HashMap<String, usize> =
            terms.iter().enumerate().map(|(i, t)| (t.to_string(), i)).collect();

        let mut document_frequency = vec![0usize; vocabulary.len()];
        for tokens in &tokenized {
            let distinct: BTreeSet<usize> =
                tokens.iter().filter_map(|t| vocabulary.get(t).copied()).collect();
            for idx in distinct {
                document_frequency[idx] += 1;
            }
        }

        let n = documents.len() as f64;
        let idf = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let vectorizer = Self { vocabulary, idf };
        let vectors = tokenized.iter().map(|tokens| vectorizer.vectorize(tokens)).collect();
        (vectorizer, vectors)
    }

    /// Vectorize `text` against the fitted vocabulary.
    pub fn transform(&self, text: &str) -> SparseVector {
        self.vectorize(&tokenize(text))
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// IDF weight of `term`, if it is in the vocabulary.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&i| self.idf[i])
    }

    fn vectorize(&self, tokens: &[String]) -> SparseVector {
        let mut weights: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                *weights.entry(idx).or_insert(0.0) += self.idf[idx];
            }
        }
        SparseVector::from_weights(weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn smoothed_idf_weights() {
        let (v, _) = TfidfVectorizer::fit_transform(&["fever cough", "fever rash"]);

        assert_eq!(v.vocabulary_len(), 3);
        // Present in every document: ln(3/3) + 1.
        assert!(approx(v.idf("fever").unwrap(), 1.0));
        // Present in one of two documents: ln(3/2) + 1.
        assert!(approx(v.idf("cough").unwrap(), (1.5f64).ln() + 1.0));
        assert!(v.idf("headache").is_none());
    }

    #[test]
    fn document_vectors_are_unit_length() {
        let (_, vectors) = TfidfVectorizer::fit_transform(&["fever fever cough", "rash"]);
        for vector in &vectors {
            let norm: f64 = vector.entries().iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
            assert!(approx(norm, 1.0));
        }
    }

    #[test]
    fn identical_text_has_similarity_one() {
        let (v, vectors) = TfidfVectorizer::fit_transform(&["fever cough", "fever rash"]);
        let query = v.transform("Cough, FEVER");
        assert!(approx(query.cosine(&vectors[0]), 1.0));
    }

    #[test]
    fn unseen_terms_are_dropped() {
        let (v, vectors) = TfidfVectorizer::fit_transform(&["fever cough"]);
        let query = v.transform("sneezing wheezing");
        assert!(query.is_zero());
        assert_eq!(query.cosine(&vectors[0]), 0.0);
    }

    #[test]
    fn disjoint_documents_are_orthogonal() {
        let (_, vectors) = TfidfVectorizer::fit_transform(&["fever cough", "itching rash"]);
        assert_eq!(vectors[0].cosine(&vectors[1]), 0.0);
    }
}
