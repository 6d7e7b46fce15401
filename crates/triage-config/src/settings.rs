//! Configuration schema.
//!
//! A `TriageConfig` is deserialized from TOML. Every section is optional and
//! falls back to the defaults below, so an empty document is a valid
//! configuration pointing at the bundled `data/` tables.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use triage_contracts::prediction::{RankOptions, DEFAULT_TOP_N};

/// Reference point used by the hospital locator when none is configured.
pub const DEFAULT_LATITUDE: f64 = 28.6139;
pub const DEFAULT_LONGITUDE: f64 = 77.2090;

/// Default upper bound on a single translation round trip.
pub const DEFAULT_TRANSLATION_TIMEOUT_MS: u64 = 3_000;

/// The top-level structure deserialized from a TOML config file.
///
/// Example:
/// ```toml
/// [data]
/// symptom_text = "data/symptom_to_disease.csv"
///
/// [ranking]
/// top_n = 5
///
/// [translation]
/// enabled = true
/// endpoint = "http://localhost:5000"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TriageConfig {
    pub data: DataPaths,
    pub ranking: RankingSettings,
    pub translation: TranslationSettings,
    pub facilities: FacilitySettings,
}

/// Locations of the four reference tables.
///
/// Relative paths are resolved against the directory of the config file
/// that declared them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataPaths {
    pub symptom_matrix: PathBuf,
    pub symptom_text: PathBuf,
    pub medications: PathBuf,
    pub natural_remedies: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            symptom_matrix: PathBuf::from("data/disease_symptom_matrix.csv"),
            symptom_text: PathBuf::from("data/symptom_to_disease.csv"),
            medications: PathBuf::from("data/disease_to_medications.csv"),
            natural_remedies: PathBuf::from("data/disease_to_natural_remedies.csv"),
        }
    }
}

impl DataPaths {
    /// Rebase every relative path onto `base`. Absolute paths are untouched.
    pub fn resolve_against(&self, base: &Path) -> Self {
        let rebase = |p: &PathBuf| if p.is_absolute() { p.clone() } else { base.join(p) };
        Self {
            symptom_matrix: rebase(&self.symptom_matrix),
            symptom_text: rebase(&self.symptom_text),
            medications: rebase(&self.medications),
            natural_remedies: rebase(&self.natural_remedies),
        }
    }
}

/// Defaults applied to ranking requests that do not override them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankingSettings {
    pub top_n: usize,
    pub dedup_diseases: bool,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self { top_n: DEFAULT_TOP_N, dedup_diseases: false }
    }
}

impl RankingSettings {
    pub fn options(&self) -> RankOptions {
        RankOptions { top_n: self.top_n, dedup_diseases: self.dedup_diseases }
    }
}

/// Machine translation backend settings.
///
/// When `enabled` is false non-English queries are ranked untranslated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TranslationSettings {
    pub enabled: bool,
    /// Base URL of a LibreTranslate-compatible service.
    pub endpoint: String,
    pub timeout_ms: u64,
    pub api_key: Option<String>,
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: "http://localhost:5000".to_string(),
            timeout_ms: DEFAULT_TRANSLATION_TIMEOUT_MS,
            api_key: None,
        }
    }
}

/// Reference point for the nearby-hospital list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FacilitySettings {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for FacilitySettings {
    fn default() -> Self {
        Self { latitude: DEFAULT_LATITUDE, longitude: DEFAULT_LONGITUDE }
    }
}
