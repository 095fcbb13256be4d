//! Analyzer configuration.
//!
//! All keyword tables, language sets and form templates are data, not code:
//! they are loaded once at startup (or taken from the built-in reference
//! tables) and shared read-only by every analyzer. Hot reload, if a caller
//! wants it, is an atomic swap of the whole `Arc<AnalyzerConfig>` - the
//! structures are never mutated in place.

mod tables;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AnalyzerError;
use crate::form::template::FormConfig;

/// Characteristic stop-words for one language, used by the fallback detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopWordList {
    /// Language code this list scores for.
    pub language: String,
    /// Lower-cased characteristic words.
    pub words: Vec<String>,
}

/// Language identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Codes the deployment accepts; `unknown` is always valid on top.
    pub supported: Vec<String>,
    /// Full display names per code.
    #[serde(default)]
    pub names: HashMap<String, String>,
    /// Fallback scoring tables, in precedence order.
    pub stop_words: Vec<StopWordList>,
    /// Groups of mutually interchangeable variant codes.
    #[serde(default)]
    pub variant_groups: Vec<Vec<String>>,
    /// Secondary Malagasy patterns checked when all stop-word scores are zero.
    #[serde(default)]
    pub malagasy_patterns: Vec<String>,
}

impl LanguageConfig {
    /// True for supported codes and the terminal `unknown` value.
    pub fn is_supported(&self, code: &str) -> bool {
        code == "unknown" || self.supported.iter().any(|c| c == code)
    }

    /// Full display name for a code; unknown codes echo the code itself.
    pub fn language_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.names.get(code).map(String::as_str).unwrap_or(code)
    }

    /// Two codes are similar iff they share a variant group.
    pub fn are_similar(&self, a: &str, b: &str) -> bool {
        self.variant_groups
            .iter()
            .any(|group| group.iter().any(|c| c == a) && group.iter().any(|c| c == b))
    }
}

/// Keyword tables for message intent, sentiment and product extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageConfig {
    pub purchase_keywords: Vec<String>,
    pub question_keywords: Vec<String>,
    pub complaint_keywords: Vec<String>,
    pub positive_words: Vec<String>,
    pub negative_words: Vec<String>,
    /// Phrases rejected as generic product names.
    #[serde(default)]
    pub generic_name_stop_words: Vec<String>,
}

/// Complete, immutable analyzer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default = "tables::default_languages")]
    pub languages: LanguageConfig,
    #[serde(default = "tables::default_message")]
    pub message: MessageConfig,
    #[serde(default = "tables::default_forms")]
    pub forms: FormConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            languages: tables::default_languages(),
            message: tables::default_message(),
            forms: tables::default_forms(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a JSON file, filling omitted sections with the
    /// built-in reference tables.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AnalyzerError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        info!(
            languages = config.languages.supported.len(),
            templates = config.forms.templates.len(),
            "analyzer configuration loaded"
        );
        Ok(config)
    }

    /// Reject configurations the analyzers cannot run on.
    pub fn validate(&self) -> Result<(), AnalyzerError> {
        if self.languages.supported.is_empty() {
            return Err(AnalyzerError::Validation(
                "supported language set is empty".to_string(),
            ));
        }
        if self.forms.templates.is_empty() {
            return Err(AnalyzerError::Validation(
                "no form templates configured".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalyzerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.languages.supported, vec!["fr", "en", "mg"]);
        assert_eq!(config.forms.templates.len(), 2);
    }

    #[test]
    fn test_language_helpers() {
        let config = AnalyzerConfig::default();

        assert!(config.languages.is_supported("fr"));
        assert!(config.languages.is_supported("unknown"));
        assert!(!config.languages.is_supported("es"));

        assert_eq!(config.languages.language_name("mg"), "malagasy");
        assert_eq!(config.languages.language_name("xx"), "xx");

        assert!(config.languages.are_similar("fr", "fr-ca"));
        assert!(config.languages.are_similar("pt-br", "pt"));
        assert!(!config.languages.are_similar("fr", "en"));
    }

    #[test]
    fn test_defaults_round_trip_through_json() {
        let config = AnalyzerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AnalyzerConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.languages.supported, config.languages.supported);
        assert_eq!(
            parsed.message.purchase_keywords,
            config.message.purchase_keywords
        );
        assert_eq!(parsed.forms.templates.len(), config.forms.templates.len());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"languages": {{"supported": ["fr"], "stop_words": [{{"language": "fr", "words": ["le", "la"]}}]}}}}"#
        )
        .unwrap();

        let config = AnalyzerConfig::load(file.path()).unwrap();
        assert_eq!(config.languages.supported, vec!["fr"]);
        // Omitted sections come from the reference tables.
        assert!(!config.message.purchase_keywords.is_empty());
        assert_eq!(config.forms.handwriting_threshold, 100.0);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = AnalyzerConfig::load("/nonexistent/analyzer.json");
        assert!(matches!(result, Err(AnalyzerError::Io(_))));
    }

    #[test]
    fn test_empty_language_set_rejected() {
        let mut config = AnalyzerConfig::default();
        config.languages.supported.clear();
        assert!(matches!(
            config.validate(),
            Err(AnalyzerError::Validation(_))
        ));
    }
}
