//! # triage-contracts
//!
//! Shared types and error contracts for the symptom triage engine.
//!
//! Every crate in the workspace imports from here. No business logic lives in
//! this crate, only data definitions, the lookup-key helper, and error types.

pub mod assessment;
pub mod corpus;
pub mod error;
pub mod language;
pub mod prediction;
pub mod remedy;
