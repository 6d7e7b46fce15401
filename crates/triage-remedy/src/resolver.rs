//! The table-backed `RemedySource`.

use tracing::{debug, info};

use triage_contracts::{
    corpus::{MedicationRecord, NaturalRemedyRecord},
    remedy::{MatchOutcome, MedicationInfo},
};
use triage_core::{remedy_items, traits::RemedySource};

use crate::index::NormalizedIndex;

pub const FALLBACK_DRUG_CLASSES: &str = "OTC / Supportive Care";
pub const FALLBACK_EXAMPLE_DRUGS: &str = "Paracetamol; Hydration";
pub const FALLBACK_KEY_NOTES: &str = "General supportive measures.";
pub const FALLBACK_NATURAL_REMEDIES: &str = "Hydration; Rest; Balanced diet";

/// Placeholder for an aggregated field with no values across the matches.
const NOT_AVAILABLE: &str = "N/A";

/// Medication returned when no record matches.
pub fn fallback_medication() -> MedicationInfo {
    MedicationInfo {
        drug_classes: FALLBACK_DRUG_CLASSES.to_string(),
        example_drugs: FALLBACK_EXAMPLE_DRUGS.to_string(),
        key_notes: FALLBACK_KEY_NOTES.to_string(),
    }
}

/// Resolves medication and natural-remedy information by disease name.
///
/// Both tables are indexed once on construction. Lookups never fail: when a
/// disease matches nothing the fixed fallbacks above are returned.
#[derive(Debug, Clone)]
pub struct RemedyResolver {
    medications: Vec<MedicationRecord>,
    medication_index: NormalizedIndex,
    natural: Vec<NaturalRemedyRecord>,
    natural_index: NormalizedIndex,
}

impl RemedyResolver {
    pub fn new(medications: Vec<MedicationRecord>, natural: Vec<NaturalRemedyRecord>) -> Self {
        let medication_index =
            NormalizedIndex::build(medications.iter().map(|r| r.disease.as_str()));
        let natural_index = NormalizedIndex::build(natural.iter().map(|r| r.disease.as_str()));

        debug!(
            medication_rows = medication_index.len(),
            natural_rows = natural_index.len(),
            "remedy indices built"
        );

        Self { medications, medication_index, natural, natural_index }
    }

    /// How `disease` matches the medication table.
    pub fn medication_match(&self, disease: &str) -> MatchOutcome {
        self.medication_index.lookup(disease)
    }

    /// How `disease` matches the natural-remedy table.
    pub fn natural_match(&self, disease: &str) -> MatchOutcome {
        self.natural_index.lookup(disease)
    }

    /// Merge every matched medication record.
    ///
    /// Each field is the distinct non-blank values of the matched records,
    /// in first-seen order, joined with `"; "`. A field with no values is
    /// `"N/A"`, except `key_notes`, which is left empty.
    pub fn resolve_medication(&self, disease: &str) -> MedicationInfo {
        let outcome = self.medication_match(disease);
        log_outcome("medications", disease, &outcome);

        let matched: Vec<&MedicationRecord> =
            outcome.indices().iter().map(|&i| &self.medications[i]).collect();
        if matched.is_empty() {
            return fallback_medication();
        }

        let or_na = |joined: String| {
            if joined.is_empty() {
                NOT_AVAILABLE.to_string()
            } else {
                joined
            }
        };

        MedicationInfo {
            drug_classes: or_na(join_distinct(matched.iter().map(|r| r.drug_classes.as_str()))),
            example_drugs: or_na(join_distinct(matched.iter().map(|r| r.example_drugs.as_str()))),
            key_notes: join_distinct(matched.iter().map(|r| r.key_notes.as_str())),
        }
    }

    /// The remedy list of the first matched record. Later matches are ignored.
    pub fn resolve_natural_remedy(&self, disease: &str) -> String {
        let outcome = self.natural_match(disease);
        log_outcome("natural_remedies", disease, &outcome);

        outcome
            .indices()
            .first()
            .map(|&i| self.natural[i].remedies.clone())
            .unwrap_or_else(|| FALLBACK_NATURAL_REMEDIES.to_string())
    }

    /// [`RemedyResolver::resolve_natural_remedy`] split into display items.
    pub fn natural_remedy_items(&self, disease: &str) -> Vec<String> {
        remedy_items(&self.resolve_natural_remedy(disease))
    }
}

impl RemedySource for RemedyResolver {
    fn medication(&self, disease: &str) -> MedicationInfo {
        self.resolve_medication(disease)
    }

    fn natural_remedy(&self, disease: &str) -> String {
        self.resolve_natural_remedy(disease)
    }
}

fn join_distinct<'a>(values: impl Iterator<Item = &'a str>) -> String {
    let mut distinct: Vec<&str> = Vec::new();
    for value in values.map(str::trim).filter(|v| !v.is_empty()) {
        if !distinct.contains(&value) {
            distinct.push(value);
        }
    }
    distinct.join("; ")
}

fn log_outcome(table: &str, disease: &str, outcome: &MatchOutcome) {
    match outcome {
        MatchOutcome::Exact { indices } => {
            debug!(table, disease, rows = indices.len(), "exact remedy match")
        }
        MatchOutcome::Substring { indices } => {
            debug!(table, disease, rows = indices.len(), "substring remedy match")
        }
        MatchOutcome::None => info!(table, disease, "no remedy match; using fallback"),
    }
}
