//! # triage-config
//!
//! TOML-driven configuration for the symptom triage engine.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use triage_config::TriageConfig;
//!
//! let config = TriageConfig::from_file(Path::new("triage.toml"))?;
//! let options = config.ranking.options();
//! ```
//!
//! Every section is optional. Unknown keys are rejected so that a typo in a
//! key name surfaces at startup instead of silently falling back to a default.

pub mod loader;
pub mod settings;

pub use settings::{
    DataPaths, FacilitySettings, RankingSettings, TranslationSettings, TriageConfig,
};

// ── Tests ─────────────────────────────────────────────────────────────────────
