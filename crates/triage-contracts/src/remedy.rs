//! Remedy lookup results.

use serde::{Deserialize, Serialize};

/// Aggregated medication information for a disease.
///
/// Each field joins the distinct values of every matched record with `"; "`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationInfo {
    pub drug_classes: String,
    pub example_drugs: String,
    pub key_notes: String,
}

/// Which remedy table a caller wants to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemedyKind {
    Natural,
    Medical,
}

/// The answer to a remedy request, shaped by the requested [`RemedyKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RemedyAdvice {
    Natural { disease: String, remedies: Vec<String> },
    Medical { disease: String, medication: MedicationInfo },
}

/// How a disease name was matched against a remedy table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "match", rename_all = "kebab-case")]
pub enum MatchOutcome {
    /// Records whose normalized name equals the query, in table order.
    Exact { indices: Vec<usize> },
    /// Records whose normalized name contains the query, in table order.
    /// Only produced when there is no exact match.
    Substring { indices: Vec<usize> },
    /// Nothing matched; the caller falls back to a fixed default.
    None,
}

impl MatchOutcome {
    /// Matched record indices, empty for `None`.
    pub fn indices(&self) -> &[usize] {
        match self {
            MatchOutcome::Exact { indices } | MatchOutcome::Substring { indices } => indices,
            MatchOutcome::None => &[],
        }
    }

    pub fn is_match(&self) -> bool {
        !self.indices().is_empty()
    }
}
