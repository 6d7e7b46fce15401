//! Loading the four reference tables.
//!
//! Loading is all-or-nothing: a missing file, an unreadable file, a missing
//! column or a malformed row aborts with a fatal error and no partially
//! loaded corpus is ever returned.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use triage_config::DataPaths;
use triage_contracts::{
    corpus::{MedicationRecord, NaturalRemedyRecord, SymptomCorpusEntry},
    error::{TriageError, TriageResult},
};

use crate::{fingerprint::fingerprint_tables, matrix::DiseaseSymptomMatrix};

pub const SYMPTOM_MATRIX_TABLE: &str = "symptom_matrix";
pub const SYMPTOM_TEXT_TABLE: &str = "symptom_text";
pub const MEDICATIONS_TABLE: &str = "medications";
pub const NATURAL_REMEDIES_TABLE: &str = "natural_remedies";

/// Required columns per table. Each inner slice lists accepted alternatives.
const SYMPTOM_TEXT_COLUMNS: &[&[&str]] = &[&["disease"], &["symptoms", "symptom_text"]];
const MEDICATION_COLUMNS: &[&[&str]] =
    &[&["disease"], &["drug_classes"], &["example_drugs"], &["key_notes"]];
const NATURAL_REMEDY_COLUMNS: &[&[&str]] = &[&["disease"], &["natural_remedies"]];

/// Raw bytes of the four tables, before parsing.
#[derive(Debug, Clone, Copy)]
pub struct TableSources<'a> {
    pub symptom_matrix: &'a [u8],
    pub symptom_text: &'a [u8],
    pub medications: &'a [u8],
    pub natural_remedies: &'a [u8],
}

/// The immutable reference data every request is answered from.
///
/// Built once at startup. Nothing hands out mutable access after
/// construction.
#[derive(Debug, Clone)]
pub struct ReferenceCorpus {
    matrix: DiseaseSymptomMatrix,
    symptom_entries: Vec<SymptomCorpusEntry>,
    medications: Vec<MedicationRecord>,
    natural_remedies: Vec<NaturalRemedyRecord>,
    fingerprint: String,
}

impl ReferenceCorpus {
    /// Read all four tables from disk.
    pub fn load(paths: &DataPaths) -> TriageResult<Self> {
        let symptom_matrix = read_table(SYMPTOM_MATRIX_TABLE, &paths.symptom_matrix)?;
        let symptom_text = read_table(SYMPTOM_TEXT_TABLE, &paths.symptom_text)?;
        let medications = read_table(MEDICATIONS_TABLE, &paths.medications)?;
        let natural_remedies = read_table(NATURAL_REMEDIES_TABLE, &paths.natural_remedies)?;

        Self::from_sources(TableSources {
            symptom_matrix: &symptom_matrix,
            symptom_text: &symptom_text,
            medications: &medications,
            natural_remedies: &natural_remedies,
        })
    }

    /// Parse already-read table bytes.
    pub fn from_sources(sources: TableSources<'_>) -> TriageResult<Self> {
        let matrix = parse_matrix(sources.symptom_matrix)?;
        let symptom_entries: Vec<SymptomCorpusEntry> =
            parse_records(SYMPTOM_TEXT_TABLE, sources.symptom_text, SYMPTOM_TEXT_COLUMNS)?;
        let medications: Vec<MedicationRecord> =
            parse_records(MEDICATIONS_TABLE, sources.medications, MEDICATION_COLUMNS)?;
        let natural_remedies: Vec<NaturalRemedyRecord> = parse_records(
            NATURAL_REMEDIES_TABLE,
            sources.natural_remedies,
            NATURAL_REMEDY_COLUMNS,
        )?;

        let fingerprint = fingerprint_tables(&[
            (SYMPTOM_MATRIX_TABLE, sources.symptom_matrix),
            (SYMPTOM_TEXT_TABLE, sources.symptom_text),
            (MEDICATIONS_TABLE, sources.medications),
            (NATURAL_REMEDIES_TABLE, sources.natural_remedies),
        ]);

        if symptom_entries.is_empty() {
            warn!("symptom text table has no rows; every ranking will be empty");
        }

        info!(
            matrix_rows = matrix.len(),
            symptoms = matrix.symptom_names().len(),
            corpus_entries = symptom_entries.len(),
            medications = medications.len(),
            natural_remedies = natural_remedies.len(),
            fingerprint = %fingerprint,
            "reference corpus loaded"
        );

        Ok(Self { matrix, symptom_entries, medications, natural_remedies, fingerprint })
    }

    pub fn matrix(&self) -> &DiseaseSymptomMatrix {
        &self.matrix
    }

    pub fn symptom_entries(&self) -> &[SymptomCorpusEntry] {
        &self.symptom_entries
    }

    pub fn medications(&self) -> &[MedicationRecord] {
        &self.medications
    }

    pub fn natural_remedies(&self) -> &[NaturalRemedyRecord] {
        &self.natural_remedies
    }

    /// SHA-256 hex digest of the raw table bytes.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

fn read_table(table: &str, path: &Path) -> TriageResult<Vec<u8>> {
    debug!(table, path = %path.display(), "reading reference table");
    std::fs::read(path).map_err(|e| TriageError::CorpusLoad {
        table: table.to_string(),
        reason: format!("cannot read '{}': {}", path.display(), e),
    })
}

fn reader(bytes: &[u8]) -> csv::Reader<&[u8]> {
    ReaderBuilder::new().trim(Trim::Headers).from_reader(bytes)
}

fn headers(table: &str, reader: &mut csv::Reader<&[u8]>) -> TriageResult<StringRecord> {
    reader.headers().cloned().map_err(|e| TriageError::CorpusLoad {
        table: table.to_string(),
        reason: format!("cannot read header row: {}", e),
    })
}

fn parse_matrix(bytes: &[u8]) -> TriageResult<DiseaseSymptomMatrix> {
    let mut rdr = reader(bytes);
    let headers = headers(SYMPTOM_MATRIX_TABLE, &mut rdr)?;
    DiseaseSymptomMatrix::from_records(SYMPTOM_MATRIX_TABLE, &headers, rdr.records())
}

/// Check column presence, then deserialize every row into `T`.
fn parse_records<T: DeserializeOwned>(
    table: &str,
    bytes: &[u8],
    required: &[&[&str]],
) -> TriageResult<Vec<T>> {
    let mut rdr = reader(bytes);
    let headers = headers(table, &mut rdr)?;
    let has = |col: &str| headers.iter().any(|h| h == col);

    for alternatives in required {
        if !alternatives.iter().any(|col| has(*col)) {
            return Err(TriageError::MissingColumn {
                table: table.to_string(),
                column: alternatives.join("|"),
            });
        }
    }

    // With several alternatives present only the first listed one is read;
    // the others are renamed out of the way so serde sees a single field.
    let shadowed: Vec<&str> = required
        .iter()
        .flat_map(|alternatives| alternatives.iter().copied().filter(move |col| has(*col)).skip(1))
        .collect();
    if !shadowed.is_empty() {
        debug!(table, shadowed = ?shadowed, "ignoring duplicate alternative columns");
        let renamed: StringRecord = headers
            .iter()
            .map(|h| {
                if shadowed.iter().any(|s| *s == h) {
                    format!("_unused_{h}")
                } else {
                    h.to_string()
                }
            })
            .collect();
        rdr.set_headers(renamed);
    }

    rdr.deserialize()
        .enumerate()
        .map(|(row, record)| {
            record.map_err(|e| TriageError::CorpusLoad {
                table: table.to_string(),
                reason: format!("row {}: {}", row + 1, e),
            })
        })
        .collect()
}
