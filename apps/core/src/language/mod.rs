//! # Language Module
//!
//! Identifies the language of short commerce messages and OCR'd documents.
//!
//! ## Components
//! - `statistical`: probability oracle seam and the whatlang backend
//! - `detector`: single-language detection with stop-word fallback
//! - `segmenter`: per-segment distribution for mixed-language texts

pub mod detector;
pub mod segmenter;
pub mod statistical;

pub use detector::{LanguageDetectionResult, LanguageDetector};
pub use segmenter::LanguageDistributionEntry;
pub use statistical::{RankedLanguage, StatisticalDetector, WhatlangDetector};
