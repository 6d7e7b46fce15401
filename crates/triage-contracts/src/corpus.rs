//! Reference table record types.
//!
//! These rows are deserialized straight from the CSV reference tables and
//! are never mutated after load. Lookup keys are derived from `disease` with
//! [`normalize_disease_name`]; no normalized value is ever stored in a row.

use serde::{Deserialize, Serialize};

/// One disease / free-text symptom description pair.
///
/// The full set of entries is the corpus the ranker scores queries against.
/// Several entries may share the same disease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomCorpusEntry {
    pub disease: String,
    /// Accepts either a `symptoms` or a `symptom_text` column.
    #[serde(rename = "symptoms", alias = "symptom_text")]
    pub symptom_text: String,
}

/// Medication information for one disease, as stored in the medication table.
///
/// Multiple records per disease are allowed; they are merged at lookup time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationRecord {
    pub disease: String,
    #[serde(default)]
    pub drug_classes: String,
    #[serde(default)]
    pub example_drugs: String,
    #[serde(default)]
    pub key_notes: String,
}

/// Natural remedies for one disease.
///
/// `remedies` holds a `;`-delimited list inside a single string,
/// e.g. `"Ginger tea; Steam inhalation; Rest"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaturalRemedyRecord {
    pub disease: String,
    #[serde(rename = "natural_remedies", default)]
    pub remedies: String,
}

/// Derive the lookup key for a disease name: trimmed and lower-cased.
///
/// `"  Common Cold "` and `"common cold"` produce the same key.
pub fn normalize_disease_name(name: &str) -> String {
    name.trim().to_lowercase()
}
