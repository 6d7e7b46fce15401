//! Ranking results and urgency bands.

use serde::{Deserialize, Serialize};

/// Number of predictions returned when the caller does not ask for more.
pub const DEFAULT_TOP_N: usize = 3;

/// One candidate disease for a query.
///
/// `confidence` is cosine similarity expressed as a percentage, rounded to
/// two decimals and always within `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub disease: String,
    pub confidence: f64,
}

/// Caller-controlled knobs for a single ranking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankOptions {
    /// Maximum number of predictions to return.
    pub top_n: usize,

    /// Collapse corpus rows that share a disease into one prediction carrying
    /// the highest confidence. Off by default, so a disease with several
    /// matching symptom templates can appear more than once.
    #[serde(default)]
    pub dedup_diseases: bool,
}

impl RankOptions {
    pub fn top(top_n: usize) -> Self {
        Self { top_n, dedup_diseases: false }
    }

    pub fn deduplicated(mut self) -> Self {
        self.dedup_diseases = true;
        self
    }
}

impl Default for RankOptions {
    fn default() -> Self {
        Self::top(DEFAULT_TOP_N)
    }
}

/// How urgently a user should seek care, derived solely from confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriageBand {
    Urgent,
    SeeDoctor,
    SelfCare,
}

impl TriageBand {
    /// Short advice shown next to a prediction.
    pub fn advice(&self) -> &'static str {
        match self {
            TriageBand::Urgent => "Urgent attention",
            TriageBand::SeeDoctor => "See a doctor soon",
            TriageBand::SelfCare => "Self-care okay",
        }
    }
}

/// A prediction paired with its urgency band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessedPrediction {
    #[serde(flatten)]
    pub prediction: Prediction,
    pub band: TriageBand,
    pub advice: String,
}
