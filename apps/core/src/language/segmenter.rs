//! Per-segment language distribution for mixed-language documents.
//!
//! The text is cut into paragraphs, long paragraphs into sentences, each
//! segment is identified independently, and confident results are aggregated
//! into one distribution entry per language.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::detector::LanguageDetector;

/// Minimum trimmed length before segmentation is worth attempting.
const MIN_MULTILINGUAL_CHARS: usize = 20;

/// Paragraphs longer than this are re-cut at sentence boundaries.
const MAX_SEGMENT_CHARS: usize = 200;

/// Per-segment detections below this confidence are discarded.
const MIN_SEGMENT_CONFIDENCE: f32 = 0.5;

/// Aggregated share of one language across a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageDistributionEntry {
    pub code: String,
    /// Display name from configuration; falls back to the code.
    pub full_name: String,
    /// Mean confidence over this language's segments.
    pub average_confidence: f32,
    /// Share of the document's characters covered, in [0, 1].
    pub percentage: f32,
    pub segment_count: usize,
}

impl LanguageDetector {
    /// Language distribution of a possibly multilingual text, sorted by
    /// descending character share. Empty for texts too short to segment.
    pub fn detect_multilingual(&self, text: &str) -> Vec<LanguageDistributionEntry> {
        if text.trim().chars().count() < MIN_MULTILINGUAL_CHARS {
            return Vec::new();
        }

        let total_chars = text.chars().count().max(1);
        let segments = segment(text);

        // code -> (confidence sum, percentage sum, segment count)
        let mut accumulated: Vec<(String, f32, f32, usize)> = Vec::new();
        for segment in &segments {
            let result = self.detect(segment);
            if result.confidence <= MIN_SEGMENT_CONFIDENCE || result.code == "unknown" {
                continue;
            }

            let share = segment.chars().count() as f32 / total_chars as f32;
            if let Some(index) = accumulated.iter().position(|(code, ..)| *code == result.code) {
                let (_, conf_sum, share_sum, count) = &mut accumulated[index];
                *conf_sum += result.confidence;
                *share_sum += share;
                *count += 1;
            } else {
                accumulated.push((result.code, result.confidence, share, 1));
            }
        }

        let mut distribution: Vec<LanguageDistributionEntry> = accumulated
            .into_iter()
            .map(|(code, conf_sum, share_sum, count)| {
                let full_name = self.config().languages.language_name(&code).to_string();
                LanguageDistributionEntry {
                    code,
                    full_name,
                    average_confidence: conf_sum / count as f32,
                    percentage: share_sum,
                    segment_count: count,
                }
            })
            .collect();

        distribution.sort_by(|a, b| {
            b.percentage
                .partial_cmp(&a.percentage)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        debug!(
            segments = segments.len(),
            languages = distribution.len(),
            "multilingual distribution computed"
        );
        distribution
    }
}

/// Paragraphs first; paragraphs over the size cap are re-cut at sentence
/// boundaries, folding `!` and `?` into `.` before splitting.
fn segment(text: &str) -> Vec<String> {
    let mut segments = Vec::new();
    for paragraph in text.split("\n\n") {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            continue;
        }
        if paragraph.chars().count() <= MAX_SEGMENT_CHARS {
            segments.push(paragraph.to_string());
            continue;
        }

        let normalized = paragraph.replace(['!', '?'], ".");
        for sentence in normalized.split('.') {
            let sentence = sentence.trim();
            if !sentence.is_empty() {
                segments.push(sentence.to_string());
            }
        }
    }
    segments
}
