//! Query normalization: bring free text into English before ranking.
//!
//! Translation is best effort. Any failure degrades to the original text so
//! a flaky translation backend can lower match quality but never block an
//! assessment.

use tracing::{debug, warn};

use triage_contracts::language::Language;

use crate::traits::Translator;

/// Return `text` in English.
///
/// English input is returned unchanged without touching `translator`. For any
/// other language the translator is called once; an error or a blank reply
/// yields `text` unchanged.
pub fn normalize(text: &str, language: &Language, translator: &dyn Translator) -> String {
    if language.is_english() {
        return text.to_string();
    }

    match translator.translate(text, language) {
        Ok(translated) if !translated.trim().is_empty() => {
            debug!(language = %language, "query translated to english");
            translated
        }
        Ok(_) => {
            warn!(language = %language, "translator returned blank text; using original query");
            text.to_string()
        }
        Err(e) => {
            warn!(language = %language, error = %e, "translation failed; using original query");
            text.to_string()
        }
    }
}
