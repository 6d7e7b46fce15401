//! # triage-remedy
//!
//! Medication and natural-remedy lookup keyed by disease name.
//!
//! Names are matched in two phases against an index built once from the
//! tables: exact match on the normalized (trimmed, lower-cased) name first,
//! then substring containment only if nothing matched exactly. Substring
//! matching is deliberately loose; `"flu"` also finds `"influenza-like
//! illness"`.
//!
//! When neither phase matches, fixed fallbacks are returned, so a lookup
//! never fails for any disease the ranker can produce.

pub mod index;
pub mod resolver;

pub use index::NormalizedIndex;
pub use resolver::{fallback_medication, RemedyResolver, FALLBACK_NATURAL_REMEDIES};

// ── Tests ─────────────────────────────────────────────────────────────────────
