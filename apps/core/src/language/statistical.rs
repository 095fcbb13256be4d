//! Statistical language identification backend.
//!
//! The detector proper only consumes ranked (code, probability) candidates;
//! the trait seam lets tests substitute a stub oracle and keeps the fallback
//! path an ordinary branch on an empty candidate list instead of an error
//! handler.

use serde::{Deserialize, Serialize};

/// One ranked candidate from the statistical backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedLanguage {
    pub code: String,
    pub probability: f32,
}

/// Probability oracle over raw text.
///
/// Implementations return candidates ordered by descending probability and
/// never error: an empty vector means no parseable result, which sends the
/// caller down its deterministic fallback.
pub trait StatisticalDetector: Send + Sync {
    fn rank(&self, text: &str) -> Vec<RankedLanguage>;
}

/// ISO 639-3 to two-letter codes for the languages configuration speaks.
const ISO3_TO_ISO1: &[(&str, &str)] = &[
    ("fra", "fr"),
    ("eng", "en"),
    ("mlg", "mg"),
    ("spa", "es"),
    ("deu", "de"),
    ("por", "pt"),
    ("ita", "it"),
    ("nld", "nl"),
];

/// Default backend built on `whatlang`.
///
/// whatlang reports a single best guess with a reliability score, so the
/// ranking has at most one entry.
#[derive(Debug, Default)]
pub struct WhatlangDetector;

impl WhatlangDetector {
    fn normalize(code: &str) -> String {
        ISO3_TO_ISO1
            .iter()
            .find(|(iso3, _)| *iso3 == code)
            .map(|(_, iso1)| (*iso1).to_string())
            .unwrap_or_else(|| code.to_string())
    }
}

impl StatisticalDetector for WhatlangDetector {
    fn rank(&self, text: &str) -> Vec<RankedLanguage> {
        match whatlang::detect(text) {
            Some(info) => vec![RankedLanguage {
                code: Self::normalize(info.lang().code()),
                probability: info.confidence() as f32,
            }],
            None => Vec::new(),
        }
    }
}
