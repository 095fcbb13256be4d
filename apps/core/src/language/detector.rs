//! Single-language detection with a statistical primary path and a
//! deterministic stop-word fallback.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::statistical::{StatisticalDetector, WhatlangDetector};
use crate::config::AnalyzerConfig;

/// Confidence multiplier applied when an unsupported code is mapped onto a
/// supported one through a variant group.
const VARIANT_MAPPING_PENALTY: f32 = 0.8;

/// Minimum trimmed length before any detector is trusted.
const MIN_TEXT_CHARS: usize = 5;

/// Best-guess language for a piece of text.
///
/// `unknown` with confidence 0.0 is a valid terminal result, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageDetectionResult {
    pub code: String,
    pub confidence: f32,
}

impl LanguageDetectionResult {
    pub(crate) fn unknown() -> Self {
        Self {
            code: "unknown".to_string(),
            confidence: 0.0,
        }
    }
}

/// Language identifier over free-form, possibly noisy text.
pub struct LanguageDetector {
    config: Arc<AnalyzerConfig>,
    statistical: Box<dyn StatisticalDetector>,
}

impl LanguageDetector {
    /// Detector with the default whatlang backend.
    pub fn new(config: Arc<AnalyzerConfig>) -> Self {
        Self::with_statistical(config, Box::new(WhatlangDetector))
    }

    /// Detector with an injected statistical backend (tests, other oracles).
    pub fn with_statistical(
        config: Arc<AnalyzerConfig>,
        statistical: Box<dyn StatisticalDetector>,
    ) -> Self {
        Self {
            config,
            statistical,
        }
    }

    pub(crate) fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Detect the dominant language of a text with a confidence score.
    pub fn detect(&self, text: &str) -> LanguageDetectionResult {
        if text.trim().chars().count() < MIN_TEXT_CHARS {
            return LanguageDetectionResult::unknown();
        }

        let candidates = self.statistical.rank(text);
        let Some(top) = candidates.first() else {
            debug!("statistical detector produced no candidates, using fallback");
            return self.detect_with_fallback(text);
        };

        let mut code = top.code.clone();
        let mut confidence = top.probability.clamp(0.0, 1.0);

        if !self.config.languages.supported.iter().any(|c| *c == code) {
            for supported in &self.config.languages.supported {
                if self.config.languages.are_similar(&code, supported) {
                    code = supported.clone();
                    confidence *= VARIANT_MAPPING_PENALTY;
                    break;
                }
            }
            // No mapping: the raw code and probability still go back to the
            // caller, who decides whether to use them.
        }

        LanguageDetectionResult { code, confidence }
    }

    /// Deterministic detection from stop-word occurrence counts.
    ///
    /// Words are counted at token level over the lower-cased text, each
    /// occurrence counting once. The first configured language keeps score
    /// ties. When every list scores zero, a small set of Malagasy patterns
    /// gets a final substring check before giving up.
    pub fn detect_with_fallback(&self, text: &str) -> LanguageDetectionResult {
        if text.is_empty() {
            return LanguageDetectionResult::unknown();
        }

        let text_lower = text.to_lowercase();
        let tokens: Vec<&str> = text_lower
            .split_whitespace()
            .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric() && c != '\''))
            .collect();
        let total_words = tokens.len().max(1);

        let mut best: Option<(&str, usize)> = None;
        for list in &self.config.languages.stop_words {
            if !self
                .config
                .languages
                .supported
                .iter()
                .any(|c| *c == list.language)
            {
                continue;
            }
            let score: usize = list
                .words
                .iter()
                .map(|word| tokens.iter().filter(|t| **t == word.as_str()).count())
                .sum();
            if score > 0 && best.map_or(true, |(_, s)| score > s) {
                best = Some((list.language.as_str(), score));
            }
        }

        if let Some((language, score)) = best {
            let confidence = (score as f32 / total_words as f32).min(1.0);
            debug!(language, score, "fallback stop-word detection");
            return LanguageDetectionResult {
                code: language.to_string(),
                confidence,
            };
        }

        let mg_score = self
            .config
            .languages
            .malagasy_patterns
            .iter()
            .filter(|pattern| text_lower.contains(pattern.as_str()))
            .count();
        if mg_score > 0 {
            return LanguageDetectionResult {
                code: "mg".to_string(),
                confidence: (mg_score as f32 / total_words as f32).min(1.0),
            };
        }

        LanguageDetectionResult::unknown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::statistical::RankedLanguage;

    /// Oracle that always fails, forcing the fallback branch.
    struct EmptyOracle;

    impl StatisticalDetector for EmptyOracle {
        fn rank(&self, _text: &str) -> Vec<RankedLanguage> {
            Vec::new()
        }
    }

    /// Oracle with a canned answer.
    struct FixedOracle(RankedLanguage);

    impl StatisticalDetector for FixedOracle {
        fn rank(&self, _text: &str) -> Vec<RankedLanguage> {
            vec![self.0.clone()]
        }
    }

    fn fallback_detector() -> LanguageDetector {
        LanguageDetector::with_statistical(
            Arc::new(AnalyzerConfig::default()),
            Box::new(EmptyOracle),
        )
    }

    fn fixed_detector(code: &str, probability: f32) -> LanguageDetector {
        LanguageDetector::with_statistical(
            Arc::new(AnalyzerConfig::default()),
            Box::new(FixedOracle(RankedLanguage {
                code: code.to_string(),
                probability,
            })),
        )
    }

    #[test]
    fn test_short_text_is_unknown() {
        let detector = LanguageDetector::new(Arc::new(AnalyzerConfig::default()));

        for text in ["", "   ", "ab", "a b ", "abcd"] {
            let result = detector.detect(text);
            assert_eq!(result.code, "unknown", "for {text:?}");
            assert_eq!(result.confidence, 0.0);
        }
    }

    #[test]
    fn test_fallback_detects_french() {
        let detector = fallback_detector();
        let result = detector.detect("Bonjour, comment allez-vous aujourd'hui");

        assert_eq!(result.code, "fr");
        assert!(result.confidence > 0.0);
        assert!(result.confidence <= 1.0);
    }

    #[test]
    fn test_fallback_detects_english() {
        let detector = fallback_detector();
        let result = detector.detect("hello, what is the price of this item please");

        assert_eq!(result.code, "en");
        assert!(result.confidence > 0.0);
    }

    #[test]
    fn test_fallback_malagasy_patterns() {
        let detector = fallback_detector();
        // No token matches a stop-word list exactly, but the pattern check
        // catches the "ho anao" phrase inside the text.
        let result = detector.detect("zavatra ho anao ihany");

        assert_eq!(result.code, "mg");
        assert!(result.confidence > 0.0);
    }

    #[test]
    fn test_fallback_gives_up_on_noise() {
        let detector = fallback_detector();
        let result = detector.detect("zzz qqq www xxxyyy");

        assert_eq!(result.code, "unknown");
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_variant_mapping_applies_penalty() {
        let detector = fixed_detector("fr-ca", 0.9);
        let result = detector.detect("du texte assez long pour le seuil");

        assert_eq!(result.code, "fr");
        assert!((result.confidence - 0.72).abs() < 1e-6);
    }

    #[test]
    fn test_unmapped_code_is_returned_raw() {
        let detector = fixed_detector("ja", 0.95);
        let result = detector.detect("some long enough text");

        assert_eq!(result.code, "ja");
        assert_eq!(result.confidence, 0.95);
    }

    #[test]
    fn test_supported_code_passes_through() {
        let detector = fixed_detector("mg", 0.88);
        let result = detector.detect("lava tsara ny andro anio");

        assert_eq!(result.code, "mg");
        assert_eq!(result.confidence, 0.88);
    }

    #[test]
    fn test_detection_is_idempotent() {
        let detector = fallback_detector();
        let text = "Bonjour, je voudrais des informations sur la livraison";

        let first = detector.detect(text);
        let second = detector.detect(text);
        assert_eq!(first, second);
    }
}
