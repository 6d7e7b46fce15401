//! The disease/symptom flag matrix.
//!
//! The matrix is only used to enumerate symptom names for structured input.
//! It never contributes to scoring.

use csv::StringRecord;

use triage_contracts::{
    corpus::normalize_disease_name,
    error::{TriageError, TriageResult},
};

/// Header names accepted for the disease column, compared case-insensitively.
const DISEASE_COLUMNS: &[&str] = &["disease", "diseases"];

#[derive(Debug, Clone)]
struct MatrixRow {
    disease: String,
    /// Indices into `symptoms` whose flag is set on this row.
    present: Vec<usize>,
}

/// Disease rows crossed with named boolean symptom columns.
#[derive(Debug, Clone, Default)]
pub struct DiseaseSymptomMatrix {
    symptoms: Vec<String>,
    rows: Vec<MatrixRow>,
}

impl DiseaseSymptomMatrix {
    /// Build the matrix from a CSV header and its records.
    ///
    /// The disease column may appear anywhere. Every other column is a
    /// symptom flag. Cells that are not recognisably true count as false.
    pub(crate) fn from_records(
        table: &str,
        headers: &StringRecord,
        records: impl IntoIterator<Item = csv::Result<StringRecord>>,
    ) -> TriageResult<Self> {
        let disease_idx = headers
            .iter()
            .position(|h| DISEASE_COLUMNS.iter().any(|d| h.eq_ignore_ascii_case(d)))
            .ok_or_else(|| TriageError::MissingColumn {
                table: table.to_string(),
                column: "disease".to_string(),
            })?;

        // Column position -> symptom index, skipping the disease column.
        let mut symptoms = Vec::with_capacity(headers.len().saturating_sub(1));
        let mut column_to_symptom = vec![None; headers.len()];
        for (col, name) in headers.iter().enumerate() {
            if col != disease_idx {
                column_to_symptom[col] = Some(symptoms.len());
                symptoms.push(name.to_string());
            }
        }

        let mut rows = Vec::new();
        for record in records {
            let record = record.map_err(|e| TriageError::CorpusLoad {
                table: table.to_string(),
                reason: e.to_string(),
            })?;
            let disease = record.get(disease_idx).unwrap_or_default().to_string();
            let present = record
                .iter()
                .enumerate()
                .filter(|(_, cell)| parse_flag(cell))
                .filter_map(|(col, _)| column_to_symptom.get(col).copied().flatten())
                .collect();
            rows.push(MatrixRow { disease, present });
        }

        Ok(Self { symptoms, rows })
    }

    /// Every selectable symptom name, in column order.
    pub fn symptom_names(&self) -> &[String] {
        &self.symptoms
    }

    /// Number of disease rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Symptoms flagged for `disease` on any of its rows, in column order.
    ///
    /// `disease` is matched by normalized name. An unknown disease yields an
    /// empty list.
    pub fn symptoms_for(&self, disease: &str) -> Vec<&str> {
        let key = normalize_disease_name(disease);
        let mut flagged = vec![false; self.symptoms.len()];
        for row in self.rows.iter().filter(|r| normalize_disease_name(&r.disease) == key) {
            for &idx in &row.present {
                flagged[idx] = true;
            }
        }
        self.symptoms
            .iter()
            .zip(flagged)
            .filter_map(|(name, set)| set.then_some(name.as_str()))
            .collect()
    }
}

/// Compose a free-text query from selected symptom names.
///
/// Names are trimmed, blanks dropped, and the rest joined with `", "`.
pub fn compose_query<S: AsRef<str>>(selected: &[S]) -> String {
    selected
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn parse_flag(cell: &str) -> bool {
    let cell = cell.trim();
    if cell.eq_ignore_ascii_case("true") || cell.eq_ignore_ascii_case("yes") {
        return true;
    }
    // "NaN" and "inf" parse as floats; spreadsheet exports use them for blanks.
    cell.parse::<f64>().map(|v| v.is_finite() && v != 0.0).unwrap_or(false)
}
