//! Display language selection

use serde::{Deserialize, Serialize};

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "pa")]
    Punjabi,
}

impl Language {
    /// Stable two-letter code used in the persisted settings file
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Punjabi => "pa",
        }
    }

    /// Parse a persisted code; unknown codes yield None so callers can
    /// fall back to English
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::English),
            "hi" => Some(Language::Hindi),
            "pa" => Some(Language::Punjabi),
            _ => None,
        }
    }

    /// Name shown in the language picker
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिंदी (Hindi)",
            Language::Punjabi => "ਪੰਜਾਬੀ (Punjabi)",
        }
    }

    /// All selectable languages in picker order
    pub fn all() -> [Language; 3] {
        [Language::English, Language::Hindi, Language::Punjabi]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(Language::from_code("ta"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::English);
    }
}
