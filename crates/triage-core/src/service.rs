//! The assessment service: the single entry point presentation layers call.
//!
//! Per request the service runs:
//!
//!   reject blank → normalize → rank → classify each prediction
//!
//! and, on a separate call, resolves remedies for whichever disease the
//! caller picked. The service keeps no per-user state between calls; the
//! disease and remedy kind are explicit parameters.

use chrono::Utc;
use tracing::{debug, info};

use triage_contracts::{
    assessment::{AssessmentId, AssessmentReport, DISCLAIMER},
    error::{TriageError, TriageResult},
    language::Language,
    prediction::{AssessedPrediction, RankOptions},
    remedy::{MedicationInfo, RemedyAdvice, RemedyKind},
};

use crate::{
    normalize::normalize,
    traits::{RemedySource, SymptomRanker, Translator},
    triage::classify,
};

/// Wires a translator, a ranker and a remedy source into the assessment
/// pipeline.
///
/// Construct it once at startup from fully built components and share it for
/// the rest of the process.
pub struct TriageService {
    translator: Box<dyn Translator>,
    ranker: Box<dyn SymptomRanker>,
    remedies: Box<dyn RemedySource>,
    corpus_fingerprint: String,
    default_options: RankOptions,
}

impl TriageService {
    pub fn new(
        translator: Box<dyn Translator>,
        ranker: Box<dyn SymptomRanker>,
        remedies: Box<dyn RemedySource>,
        corpus_fingerprint: impl Into<String>,
    ) -> Self {
        Self {
            translator,
            ranker,
            remedies,
            corpus_fingerprint: corpus_fingerprint.into(),
            default_options: RankOptions::default(),
        }
    }

    /// Options used by [`TriageService::assess_default`].
    pub fn with_default_options(mut self, options: RankOptions) -> Self {
        self.default_options = options;
        self
    }

    pub fn default_options(&self) -> RankOptions {
        self.default_options
    }

    /// Assess `query_text` written in `language`.
    ///
    /// # Errors
    ///
    /// `TriageError::InvalidInput` when `query_text` is blank. Translation
    /// failures are not errors; they degrade to ranking the original text.
    pub fn assess(
        &self,
        query_text: &str,
        language: &Language,
        options: RankOptions,
    ) -> TriageResult<AssessmentReport> {
        if query_text.trim().is_empty() {
            return Err(TriageError::InvalidInput {
                reason: "enter or select at least one symptom".to_string(),
            });
        }

        let assessment_id = AssessmentId::new();
        debug!(
            assessment_id = %assessment_id.0,
            language = %language,
            top_n = options.top_n,
            dedup = options.dedup_diseases,
            "assessment starting"
        );

        let normalized_text = normalize(query_text, language, self.translator.as_ref());
        let predictions: Vec<AssessedPrediction> = self
            .ranker
            .rank(&normalized_text, options)?
            .into_iter()
            .map(|prediction| {
                let band = classify(prediction.confidence);
                AssessedPrediction { prediction, band, advice: band.advice().to_string() }
            })
            .collect();

        info!(
            assessment_id = %assessment_id.0,
            predictions = predictions.len(),
            top_disease = predictions.first().map(|p| p.prediction.disease.as_str()).unwrap_or("-"),
            top_confidence = predictions.first().map(|p| p.prediction.confidence).unwrap_or(0.0),
            "assessment complete"
        );

        Ok(AssessmentReport {
            assessment_id,
            assessed_at: Utc::now(),
            language: language.clone(),
            query_text: query_text.to_string(),
            normalized_text,
            predictions,
            corpus_fingerprint: self.corpus_fingerprint.clone(),
            disclaimer: DISCLAIMER.to_string(),
        })
    }

    /// [`TriageService::assess`] with the configured default options.
    pub fn assess_default(
        &self,
        query_text: &str,
        language: &Language,
    ) -> TriageResult<AssessmentReport> {
        self.assess(query_text, language, self.default_options)
    }

    pub fn get_medication(&self, disease: &str) -> MedicationInfo {
        self.remedies.medication(disease)
    }

    pub fn get_natural_remedy(&self, disease: &str) -> String {
        self.remedies.natural_remedy(disease)
    }

    /// Remedy advice of the requested kind for `disease`.
    pub fn remedies(&self, disease: &str, kind: RemedyKind) -> RemedyAdvice {
        match kind {
            RemedyKind::Natural => RemedyAdvice::Natural {
                disease: disease.to_string(),
                remedies: remedy_items(&self.remedies.natural_remedy(disease)),
            },
            RemedyKind::Medical => RemedyAdvice::Medical {
                disease: disease.to_string(),
                medication: self.remedies.medication(disease),
            },
        }
    }
}

/// Split a `;`-delimited remedy list into trimmed, non-empty items.
pub fn remedy_items(list: &str) -> Vec<String> {
    list.split(';')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
