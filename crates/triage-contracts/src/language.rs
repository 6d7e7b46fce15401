//! Source-language codes accepted by the normalizer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TriageError;

/// The language a query was written in.
///
/// Serialized as its lower-case ISO 639-1 code, so `Language::Hi` round-trips
/// as `"hi"` and an unlisted code such as `"de"` becomes `Other("de")`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    #[default]
    En,
    Hi,
    Es,
    Fr,
    Other(String),
}

impl Language {
    /// The lower-case language code.
    pub fn code(&self) -> &str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::Other(code) => code,
        }
    }

    pub fn is_english(&self) -> bool {
        matches!(self, Language::En)
    }
}

impl FromStr for Language {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        match code.as_str() {
            "" => Err(TriageError::InvalidInput {
                reason: "language code must not be empty".to_string(),
            }),
            "en" => Ok(Language::En),
            "hi" => Ok(Language::Hi),
            "es" => Ok(Language::Es),
            "fr" => Ok(Language::Fr),
            _ if code.chars().all(|c| c.is_ascii_alphabetic() || c == '-') => {
                Ok(Language::Other(code))
            }
            _ => Err(TriageError::InvalidInput {
                reason: format!("'{}' is not a language code", s.trim()),
            }),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = TriageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Language> for String {
    fn from(value: Language) -> Self {
        value.code().to_string()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
