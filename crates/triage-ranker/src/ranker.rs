//! The corpus-backed `SymptomRanker`.

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::{debug, info};

use triage_contracts::{
    corpus::{normalize_disease_name, SymptomCorpusEntry},
    error::{TriageError, TriageResult},
    prediction::{Prediction, RankOptions},
};
use triage_core::traits::SymptomRanker;

use crate::tfidf::{SparseVector, TfidfVectorizer};

/// Ranks diseases by TF-IDF cosine similarity between a query and every
/// reference symptom description.
///
/// The vector space is built once in [`TfidfRanker::fit`] and never changes.
#[derive(Debug, Clone)]
pub struct TfidfRanker {
    diseases: Vec<String>,
    vectorizer: TfidfVectorizer,
    vectors: Vec<SparseVector>,
}

impl TfidfRanker {
    /// Build the vector space over `entries`.
    ///
    /// An empty corpus is accepted; every ranking over it is empty.
    pub fn fit(entries: &[SymptomCorpusEntry]) -> Self {
        let texts: Vec<&str> = entries.iter().map(|e| e.symptom_text.as_str()).collect();
        let (vectorizer, vectors) = TfidfVectorizer::fit_transform(&texts);

        info!(
            documents = vectors.len(),
            vocabulary = vectorizer.vocabulary_len(),
            "symptom vector space built"
        );

        Self {
            diseases: entries.iter().map(|e| e.disease.clone()).collect(),
            vectorizer,
            vectors,
        }
    }

    pub fn corpus_len(&self) -> usize {
        self.vectors.len()
    }

    /// Similarity of `query` to every corpus entry, in corpus order.
    pub fn similarities(&self, query: &str) -> Vec<f64> {
        let q = self.vectorizer.transform(query);
        self.vectors.iter().map(|v| q.cosine(v)).collect()
    }
}

impl SymptomRanker for TfidfRanker {
    /// Rank every corpus entry against `query`.
    ///
    /// Entries are ordered by descending similarity; equal similarities keep
    /// corpus order. Without `dedup_diseases` a disease with several matching
    /// entries may appear several times. With it, only the best-scoring entry
    /// per normalized disease name is kept.
    fn rank(&self, query: &str, options: RankOptions) -> TriageResult<Vec<Prediction>> {
        if query.trim().is_empty() {
            return Err(TriageError::InvalidInput {
                reason: "cannot rank blank symptom text".to_string(),
            });
        }

        let mut scored: Vec<(usize, f64)> =
            self.similarities(query).into_iter().enumerate().collect();
        // sort_by is stable, so ties stay in corpus order.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let mut seen = HashSet::new();
        let predictions: Vec<Prediction> = scored
            .into_iter()
            .filter(|(idx, _)| {
                !options.dedup_diseases || seen.insert(normalize_disease_name(&self.diseases[*idx]))
            })
            .take(options.top_n)
            .map(|(idx, similarity)| Prediction {
                disease: self.diseases[idx].clone(),
                confidence: to_confidence(similarity),
            })
            .collect();

        debug!(
            returned = predictions.len(),
            top_n = options.top_n,
            dedup = options.dedup_diseases,
            "query ranked"
        );
        Ok(predictions)
    }
}

/// Similarity as a percentage rounded to two decimals, within `[0, 100]`.
fn to_confidence(similarity: f64) -> f64 {
    ((similarity * 100.0 * 100.0).round() / 100.0).clamp(0.0, 100.0)
}
