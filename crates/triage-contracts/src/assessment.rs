//! Assessment reports and care-facility records.
//!
//! An `AssessmentReport` is produced per request and discarded after it is
//! rendered. The engine keeps no history of past reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{language::Language, prediction::AssessedPrediction};

/// Shown with every assessment. The engine is not a diagnostic tool.
pub const DISCLAIMER: &str = "Informational only - consult a doctor.";

/// Unique identifier for a single assessment, used to correlate log lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub uuid::Uuid);

impl AssessmentId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for AssessmentId {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a presentation layer needs to render one assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub assessment_id: AssessmentId,
    pub assessed_at: DateTime<Utc>,
    pub language: Language,
    /// The text exactly as the caller supplied it.
    pub query_text: String,
    /// The English text actually ranked. Equals `query_text` for English
    /// input and whenever translation degraded to passthrough.
    pub normalized_text: String,
    /// Ordered by descending confidence.
    pub predictions: Vec<AssessedPrediction>,
    /// SHA-256 of the reference tables this report was computed against.
    pub corpus_fingerprint: String,
    pub disclaimer: String,
}

impl AssessmentReport {
    /// The highest-ranked prediction, if the corpus produced any.
    pub fn primary(&self) -> Option<&AssessedPrediction> {
        self.predictions.first()
    }
}

/// A hospital or clinic shown on the nearby-care list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}
