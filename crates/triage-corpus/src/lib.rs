//! # triage-corpus
//!
//! Loads the four CSV reference tables the triage engine answers from:
//!
//! | table              | required columns                                     |
//! |--------------------|------------------------------------------------------|
//! | `symptom_matrix`   | `disease` (or `diseases`) plus boolean symptom flags |
//! | `symptom_text`     | `disease`, `symptoms` (or `symptom_text`)            |
//! | `medications`      | `disease`, `drug_classes`, `example_drugs`, `key_notes` |
//! | `natural_remedies` | `disease`, `natural_remedies`                        |
//!
//! Tables are loaded once, fingerprinted with SHA-256, and never mutated.
//!
//! ```rust,ignore
//! use triage_corpus::ReferenceCorpus;
//!
//! let corpus = ReferenceCorpus::load(&config.data)?;
//! println!("{} corpus entries", corpus.symptom_entries().len());
//! ```

pub mod fingerprint;
pub mod matrix;
pub mod tables;

pub use fingerprint::fingerprint_tables;
pub use matrix::{compose_query, DiseaseSymptomMatrix};
pub use tables::{ReferenceCorpus, TableSources};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use triage_config::DataPaths;
    use triage_contracts::error::TriageError;

    use crate::{ReferenceCorpus, TableSources};

    // ── Helpers ───────────────────────────────────────────────────────────────

    const MATRIX: &[u8] = b"disease,fever,cough,itching\nflu,1,1,0\nallergy,0,0,1\n";
    const SYMPTOM_TEXT: &[u8] =
        b"disease,symptoms\nflu,fever cough fatigue\nallergy,\"itching, sneezing\"\n";
    const MEDICATIONS: &[u8] = b"disease,drug_classes,example_drugs,key_notes\n\
        flu,Antivirals,Oseltamivir,Start within 48h\n";
    const NATURAL: &[u8] = b"disease,natural_remedies\nflu,Ginger tea; Rest\n";

    fn sources() -> TableSources<'static> {
        TableSources {
            symptom_matrix: MATRIX,
            symptom_text: SYMPTOM_TEXT,
            medications: MEDICATIONS,
            natural_remedies: NATURAL,
        }
    }

    // ── Tests ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_loads_all_tables() {
        let corpus = ReferenceCorpus::from_sources(sources()).unwrap();

        assert_eq!(corpus.matrix().symptom_names(), &["fever", "cough", "itching"]);
        assert_eq!(corpus.symptom_entries().len(), 2);
        assert_eq!(corpus.symptom_entries()[1].symptom_text, "itching, sneezing");
        assert_eq!(corpus.medications()[0].example_drugs, "Oseltamivir");
        assert_eq!(corpus.natural_remedies()[0].remedies, "Ginger tea; Rest");
        assert_eq!(corpus.fingerprint().len(), 64);
    }

    #[test]
    fn test_symptom_text_alias_column() {
        let corpus = ReferenceCorpus::from_sources(TableSources {
            symptom_text: b"symptom_text,disease\nfever cough,flu\n",
            ..sources()
        })
        .unwrap();

        assert_eq!(corpus.symptom_entries()[0].disease, "flu");
        assert_eq!(corpus.symptom_entries()[0].symptom_text, "fever cough");
    }

    #[test]
    fn test_symptoms_column_preferred_when_both_present() {
        let corpus = ReferenceCorpus::from_sources(TableSources {
            symptom_text: b"disease,symptom_text,symptoms\nflu,ignored text,fever cough\n",
            ..sources()
        })
        .unwrap();

        assert_eq!(corpus.symptom_entries().len(), 1);
        assert_eq!(corpus.symptom_entries()[0].symptom_text, "fever cough");
    }

    #[test]
    fn test_padded_headers_are_trimmed() {
        let corpus = ReferenceCorpus::from_sources(TableSources {
            natural_remedies: b" disease , natural_remedies \nflu,Rest\n",
            ..sources()
        })
        .unwrap();

        assert_eq!(corpus.natural_remedies()[0].remedies, "Rest");
    }

    #[test]
    fn test_fingerprint_is_deterministic() {
        let a = ReferenceCorpus::from_sources(sources()).unwrap();
        let b = ReferenceCorpus::from_sources(sources()).unwrap();
        assert_eq!(a.fingerprint(), b.fingerprint());

        let c = ReferenceCorpus::from_sources(TableSources {
            natural_remedies: b"disease,natural_remedies\nflu,Rest\n",
            ..sources()
        })
        .unwrap();
        assert_ne!(a.fingerprint(), c.fingerprint());
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let result = ReferenceCorpus::from_sources(TableSources {
            medications: b"disease,drug_classes,example_drugs\nflu,Antivirals,Oseltamivir\n",
            ..sources()
        });

        match result {
            Err(TriageError::MissingColumn { table, column }) => {
                assert_eq!(table, "medications");
                assert_eq!(column, "key_notes");
            }
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_symptom_column_names_alternatives() {
        let result = ReferenceCorpus::from_sources(TableSources {
            symptom_text: b"disease,text\nflu,fever\n",
            ..sources()
        });

        match result {
            Err(TriageError::MissingColumn { column, .. }) => {
                assert_eq!(column, "symptoms|symptom_text");
            }
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_ragged_row_is_fatal() {
        let result = ReferenceCorpus::from_sources(TableSources {
            natural_remedies: b"disease,natural_remedies\nflu,Rest,extra\n",
            ..sources()
        });

        match result {
            Err(TriageError::CorpusLoad { table, .. }) => assert_eq!(table, "natural_remedies"),
            other => panic!("expected CorpusLoad, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let paths = DataPaths {
            symptom_matrix: PathBuf::from("/nonexistent/matrix.csv"),
            ..DataPaths::default()
        };

        match ReferenceCorpus::load(&paths) {
            Err(TriageError::CorpusLoad { table, reason }) => {
                assert_eq!(table, "symptom_matrix");
                assert!(reason.contains("/nonexistent/matrix.csv"));
            }
            other => panic!("expected CorpusLoad, got {:?}", other),
        }
    }

    #[test]
    fn test_header_only_tables_load_empty() {
        let corpus = ReferenceCorpus::from_sources(TableSources {
            symptom_text: b"disease,symptoms\n",
            ..sources()
        })
        .unwrap();
        assert!(corpus.symptom_entries().is_empty());
    }
}
