//! Trait seams of the assessment pipeline.
//!
//! - `Translator`    — turns non-English text into English (may do network I/O)
//! - `SymptomRanker` — scores text against the reference corpus
//! - `RemedySource`  — answers medication and natural-remedy lookups
//!
//! The service holds one of each as a trait object. All three are built
//! fully before the service exists and are read-only afterwards.

use triage_contracts::{
    error::TriageResult,
    language::Language,
    prediction::{Prediction, RankOptions},
    remedy::MedicationInfo,
};

/// A machine translation backend.
///
/// Implementations must bound their own latency (a client timeout or
/// similar). A failure is reported as `TriageError::Translation`; the
/// normalizer turns any failure into passthrough, so implementations should
/// not retry or swallow errors themselves.
pub trait Translator: Send + Sync {
    /// Translate `text`, written in `source`, into English.
    fn translate(&self, text: &str, source: &Language) -> TriageResult<String>;
}

/// Ranks reference diseases by similarity to a query.
pub trait SymptomRanker: Send + Sync {
    /// Return at most `options.top_n` predictions in non-increasing order of
    /// confidence.
    ///
    /// A blank query is `TriageError::InvalidInput`. Callers are expected to
    /// reject blank text before it gets here.
    fn rank(&self, query: &str, options: RankOptions) -> TriageResult<Vec<Prediction>>;
}

/// Medication and natural-remedy lookup by disease name.
///
/// Both methods are total: when nothing matches they return a fixed default
/// instead of an error.
pub trait RemedySource: Send + Sync {
    fn medication(&self, disease: &str) -> MedicationInfo;

    /// The `;`-delimited remedy list for `disease`.
    fn natural_remedy(&self, disease: &str) -> String;
}
