//! LibreTranslate-compatible HTTP translator.
//!
//! Request:  `POST {endpoint}/translate`
//!           `{"q": "...", "source": "hi", "target": "en", "format": "text"}`
//! Response: `{"translatedText": "..."}`
//!
//! Every request is bounded by the client timeout. Errors are reported, not
//! retried; the normalizer decides what to do with them.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use triage_contracts::{
    error::{TriageError, TriageResult},
    language::Language,
};
use triage_core::traits::Translator;

/// Target language of every translation.
const TARGET_LANGUAGE: &str = "en";

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Blocking HTTP client for a LibreTranslate-style service.
pub struct HttpTranslator {
    endpoint: String,
    api_key: Option<String>,
    client: reqwest::blocking::Client,
    timeout: Duration,
}

impl HttpTranslator {
    /// Build a translator for `endpoint` whose requests give up after
    /// `timeout`.
    ///
    /// Returns `TriageError::ConfigError` if the HTTP client cannot be built.
    pub fn new(endpoint: &str, timeout: Duration, api_key: Option<String>) -> TriageResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| TriageError::ConfigError {
                reason: format!("failed to build translation HTTP client: {}", e),
            })?;

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
            client,
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Translator for HttpTranslator {
    fn translate(&self, text: &str, source: &Language) -> TriageResult<String> {
        let url = format!("{}/translate", self.endpoint);
        let body = TranslateRequest {
            q: text,
            source: source.code(),
            target: TARGET_LANGUAGE,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        debug!(url = %url, source = %source, chars = text.chars().count(), "requesting translation");

        let response = self.client.post(&url).json(&body).send().map_err(|e| {
            let reason = if e.is_timeout() {
                format!("request timed out after {}ms", self.timeout.as_millis())
            } else if e.is_connect() {
                format!("cannot reach translation service at {}", self.endpoint)
            } else {
                e.to_string()
            };
            TriageError::Translation { reason }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(TriageError::Translation {
                reason: format!("service returned HTTP {}: {}", status.as_u16(), body.trim()),
            });
        }

        let reply: TranslateResponse = response.json().map_err(|e| TriageError::Translation {
            reason: format!("malformed translation response: {}", e),
        })?;

        Ok(reply.translated_text)
    }
}
