//! # triage-translate
//!
//! [`Translator`](triage_core::traits::Translator) backends.
//!
//! - [`HttpTranslator`] calls a LibreTranslate-compatible service with a
//!   bounded timeout.
//! - [`PassthroughTranslator`] returns text unchanged; used when translation
//!   is disabled in configuration.
//!
//! Use [`from_settings`] to pick one from `[translation]` config.

pub mod http;

use std::time::Duration;

use tracing::info;

use triage_config::TranslationSettings;
use triage_contracts::{error::TriageResult, language::Language};
use triage_core::traits::Translator;

pub use http::HttpTranslator;

/// A translator that does not translate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughTranslator;

impl Translator for PassthroughTranslator {
    fn translate(&self, text: &str, _source: &Language) -> TriageResult<String> {
        Ok(text.to_string())
    }
}

/// Build the translator described by `settings`.
pub fn from_settings(settings: &TranslationSettings) -> TriageResult<Box<dyn Translator>> {
    if !settings.enabled {
        info!("translation disabled; non-English queries are ranked as written");
        return Ok(Box::new(PassthroughTranslator));
    }

    let translator = HttpTranslator::new(
        &settings.endpoint,
        Duration::from_millis(settings.timeout_ms),
        settings.api_key.clone(),
    )?;
    info!(
        endpoint = %translator.endpoint(),
        timeout_ms = settings.timeout_ms,
        "translation enabled"
    );
    Ok(Box::new(translator))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use triage_config::TranslationSettings;
    use triage_contracts::{error::TriageError, language::Language};
    use triage_core::{normalize, traits::Translator};

    use crate::{from_settings, HttpTranslator, PassthroughTranslator};

    /// Nothing listens on the discard port locally, so connections are
    /// refused quickly.
    const UNREACHABLE: &str = "http://127.0.0.1:9";

    #[test]
    fn test_passthrough_returns_input() {
        let out = PassthroughTranslator.translate("fiebre", &Language::Es).unwrap();
        assert_eq!(out, "fiebre");
    }

    #[test]
    fn test_endpoint_trailing_slash_trimmed() {
        let t = HttpTranslator::new("http://localhost:5000/", Duration::from_millis(100), None)
            .unwrap();
        assert_eq!(t.endpoint(), "http://localhost:5000");
    }

    #[test]
    fn test_unreachable_service_is_translation_error() {
        let t = HttpTranslator::new(UNREACHABLE, Duration::from_millis(300), None).unwrap();
        match t.translate("bukhar", &Language::Hi) {
            Err(TriageError::Translation { .. }) => {}
            other => panic!("expected Translation error, got {:?}", other),
        }
    }

    /// The normalizer must absorb a transport failure and hand back the
    /// original text.
    #[test]
    fn test_unreachable_service_degrades_to_passthrough() {
        let t = HttpTranslator::new(UNREACHABLE, Duration::from_millis(300), None).unwrap();
        assert_eq!(normalize("fièvre et toux", &Language::Fr, &t), "fièvre et toux");
    }

    #[test]
    fn test_from_settings_disabled_is_passthrough() {
        let translator = from_settings(&TranslationSettings::default()).unwrap();
        assert_eq!(translator.translate("tos", &Language::Es).unwrap(), "tos");
    }

    #[test]
    fn test_from_settings_enabled_builds_http_client() {
        let settings = TranslationSettings {
            enabled: true,
            endpoint: UNREACHABLE.to_string(),
            timeout_ms: 300,
            api_key: Some("key".to_string()),
        };
        let translator = from_settings(&settings).unwrap();
        assert!(matches!(
            translator.translate("tos", &Language::Es),
            Err(TriageError::Translation { .. })
        ));
    }
}
