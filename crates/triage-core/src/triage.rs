//! Confidence to urgency band.

use triage_contracts::prediction::TriageBand;

/// At or above this confidence the band is `Urgent`.
pub const URGENT_THRESHOLD: f64 = 80.0;
/// At or above this (and below `URGENT_THRESHOLD`) the band is `SeeDoctor`.
pub const SEE_DOCTOR_THRESHOLD: f64 = 50.0;

/// Classify a confidence percentage.
///
/// Total over every `f64`: anything that is not at least 50 (including NaN)
/// is `SelfCare`.
pub fn classify(confidence: f64) -> TriageBand {
    if confidence >= URGENT_THRESHOLD {
        TriageBand::Urgent
    } else if confidence >= SEE_DOCTOR_THRESHOLD {
        TriageBand::SeeDoctor
    } else {
        TriageBand::SelfCare
    }
}
