//! # triage-ranker
//!
//! TF-IDF cosine-similarity ranking of reference diseases.
//!
//! [`TfidfRanker`] implements [`SymptomRanker`](triage_core::traits::SymptomRanker).
//! It is fitted once over the symptom-text corpus; queries are projected into
//! the fitted vector space and compared against every corpus entry.
//!
//! ```rust,ignore
//! use triage_ranker::TfidfRanker;
//!
//! let ranker = TfidfRanker::fit(corpus.symptom_entries());
//! let top = ranker.rank("fever and cough", RankOptions::default())?;
//! ```

pub mod ranker;
pub mod tfidf;
pub mod tokenize;

pub use ranker::TfidfRanker;
pub use tfidf::{SparseVector, TfidfVectorizer};
pub use tokenize::tokenize;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use triage_contracts::{
        corpus::SymptomCorpusEntry,
        error::TriageError,
        prediction::{RankOptions, TriageBand},
    };
    use triage_core::{classify, traits::SymptomRanker};

    use crate::TfidfRanker;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn entry(disease: &str, text: &str) -> SymptomCorpusEntry {
        SymptomCorpusEntry { disease: disease.to_string(), symptom_text: text.to_string() }
    }

    fn sample_corpus() -> Vec<SymptomCorpusEntry> {
        vec![
            entry("Common Cold", "sneezing runny nose sore throat mild cough"),
            entry("Influenza", "high fever body aches chills dry cough fatigue"),
            entry("Influenza", "fever headache cough fatigue muscle pain"),
            entry("Allergy", "sneezing itchy eyes runny nose"),
            entry("Migraine", "throbbing headache nausea sensitivity to light"),
            entry("Dengue", "high fever severe joint pain rash headache behind eyes"),
        ]
    }

    fn assert_ranked(predictions: &[triage_contracts::prediction::Prediction]) {
        for p in predictions {
            assert!((0.0..=100.0).contains(&p.confidence), "out of range: {:?}", p);
        }
        for pair in predictions.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence, "not sorted: {:?}", pair);
        }
    }

    // ── 1. single-row scenario ────────────────────────────────────────────────

    /// One corpus row `flu: "fever cough fatigue"`, query `"fever and cough"`.
    #[test]
    fn test_single_row_flu_scenario() {
        let ranker = TfidfRanker::fit(&[entry("flu", "fever cough fatigue")]);
        let predictions = ranker.rank("fever and cough", RankOptions::default()).unwrap();

        assert_eq!(predictions.len(), 1);
        assert_eq!(predictions[0].disease, "flu");
        assert!(predictions[0].confidence > 0.0);
        // (1,1,0)/√2 · (1,1,1)/√3 = 2/√6
        assert_eq!(predictions[0].confidence, 81.65);
        assert_eq!(classify(predictions[0].confidence), TriageBand::Urgent);
    }

    // ── 2. ordering and bounds ────────────────────────────────────────────────

    #[test]
    fn test_top_n_bounds_and_ordering() {
        let ranker = TfidfRanker::fit(&sample_corpus());

        for top_n in 0..=8 {
            let predictions = ranker.rank("fever cough headache", RankOptions::top(top_n)).unwrap();
            assert_eq!(predictions.len(), top_n.min(6));
            assert_ranked(&predictions);
        }
    }

    #[test]
    fn test_best_match_ranks_first() {
        let ranker = TfidfRanker::fit(&sample_corpus());

        let top = ranker.rank("itchy eyes and sneezing", RankOptions::top(1)).unwrap();
        assert_eq!(top[0].disease, "Allergy");

        let top = ranker.rank("Throbbing headache, nausea", RankOptions::top(1)).unwrap();
        assert_eq!(top[0].disease, "Migraine");
    }

    #[test]
    fn test_exact_document_scores_one_hundred() {
        let ranker = TfidfRanker::fit(&sample_corpus());
        let top = ranker
            .rank("throbbing headache nausea sensitivity to light", RankOptions::top(1))
            .unwrap();
        assert_eq!(top[0].disease, "Migraine");
        assert_eq!(top[0].confidence, 100.0);
    }

    // ── 3. determinism ────────────────────────────────────────────────────────

    #[test]
    fn test_ranking_is_deterministic() {
        let a = TfidfRanker::fit(&sample_corpus());
        let b = TfidfRanker::fit(&sample_corpus());
        let first = a.rank("fever with rash and joint pain", RankOptions::top(4)).unwrap();

        for _ in 0..10 {
            assert_eq!(a.rank("fever with rash and joint pain", RankOptions::top(4)).unwrap(), first);
        }
        assert_eq!(b.rank("fever with rash and joint pain", RankOptions::top(4)).unwrap(), first);
    }

    #[test]
    fn test_ties_keep_corpus_order() {
        let ranker = TfidfRanker::fit(&[
            entry("Alpha", "fever"),
            entry("Beta", "fever"),
            entry("Gamma", "fever"),
        ]);
        let predictions = ranker.rank("fever", RankOptions::top(3)).unwrap();
        let names: Vec<&str> = predictions.iter().map(|p| p.disease.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
    }

    // ── 4. duplicates and dedup ───────────────────────────────────────────────

    /// Without dedup, a disease with two matching rows appears twice.
    #[test]
    fn test_duplicate_diseases_kept_by_default() {
        let ranker = TfidfRanker::fit(&sample_corpus());
        let predictions = ranker.rank("fever cough fatigue", RankOptions::top(2)).unwrap();

        assert_eq!(predictions[0].disease, "Influenza");
        assert_eq!(predictions[1].disease, "Influenza");
    }

    #[test]
    fn test_dedup_keeps_max_confidence_per_disease() {
        let ranker = TfidfRanker::fit(&sample_corpus());
        let plain = ranker.rank("fever cough fatigue", RankOptions::top(6)).unwrap();
        let deduped = ranker
            .rank("fever cough fatigue", RankOptions::top(6).deduplicated())
            .unwrap();

        let names: Vec<&str> = deduped.iter().map(|p| p.disease.as_str()).collect();
        let unique: std::collections::HashSet<&str> = names.iter().copied().collect();
        assert_eq!(names.len(), unique.len(), "dedup must not repeat a disease");
        assert_eq!(deduped.len(), 5);

        let best_flu = plain
            .iter()
            .filter(|p| p.disease == "Influenza")
            .map(|p| p.confidence)
            .fold(0.0, f64::max);
        assert_eq!(deduped[0].disease, "Influenza");
        assert_eq!(deduped[0].confidence, best_flu);
        assert_ranked(&deduped);
    }

    #[test]
    fn test_dedup_uses_normalized_names() {
        let ranker = TfidfRanker::fit(&[entry("Flu", "fever cough"), entry("flu ", "fever")]);
        let predictions = ranker.rank("fever", RankOptions::top(3).deduplicated()).unwrap();
        assert_eq!(predictions.len(), 1);
    }

    // ── 5. degenerate input ───────────────────────────────────────────────────

    #[test]
    fn test_blank_query_is_invalid_input() {
        let ranker = TfidfRanker::fit(&sample_corpus());
        for blank in ["", "   ", "\t\n"] {
            assert!(matches!(
                ranker.rank(blank, RankOptions::default()),
                Err(TriageError::InvalidInput { .. })
            ));
        }
    }

    #[test]
    fn test_no_overlap_yields_zero_confidence() {
        let ranker = TfidfRanker::fit(&sample_corpus());
        let predictions = ranker.rank("xyzzy plugh", RankOptions::default()).unwrap();

        assert_eq!(predictions.len(), 3);
        assert!(predictions.iter().all(|p| p.confidence == 0.0));
        // All tied at zero: corpus order.
        assert_eq!(predictions[0].disease, "Common Cold");
    }

    #[test]
    fn test_empty_corpus_returns_nothing() {
        let ranker = TfidfRanker::fit(&[]);
        assert_eq!(ranker.corpus_len(), 0);
        assert!(ranker.rank("fever", RankOptions::default()).unwrap().is_empty());
    }
}
