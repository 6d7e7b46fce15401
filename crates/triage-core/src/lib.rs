//! # triage-core
//!
//! The assessment pipeline for the symptom triage engine.
//!
//! This crate provides:
//! - The three pipeline traits (`Translator`, `SymptomRanker`, `RemedySource`)
//! - The query normalizer with its degrade-to-passthrough policy
//! - The confidence → urgency classifier
//! - The static nearby-hospital list
//! - `TriageService`, which wires the pieces together
//!
//! ## Usage
//!
//! ```rust,ignore
//! use triage_core::{TriageService, traits::{Translator, SymptomRanker, RemedySource}};
//!
//! let service = TriageService::new(translator, ranker, remedies, corpus.fingerprint());
//! let report = service.assess("fever and cough", &Language::En, RankOptions::default())?;
//! ```

pub mod facilities;
pub mod normalize;
pub mod service;
pub mod traits;
pub mod triage;

pub use facilities::nearby_hospitals;
pub use normalize::normalize;
pub use service::{remedy_items, TriageService};
pub use triage::classify;
