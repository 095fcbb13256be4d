//! # TextSense Core
//!
//! Text analysis engine for customer-facing commerce channels: identifies
//! the language of incoming messages (French, English, Malagasy by default),
//! extracts intent, sentiment, products and entities from short informal
//! messages, and parses OCR'd form documents into typed fields.
//!
//! ## Modules
//! - `config`: keyword tables, language sets and form templates as data
//! - `language`: statistical + stop-word language identification
//! - `message`: intent, sentiment, product and entity extraction
//! - `form`: form type detection, field parsing, handwriting flag
//! - `pipeline`: one facade over all analyzers sharing one configuration
//!
//! Every analyzer degrades to `unknown`/empty results on bad input instead
//! of erroring; only configuration loading can fail.

pub mod config;
pub mod error;
pub mod form;
pub mod language;
pub mod message;
pub mod pipeline;

pub use config::AnalyzerConfig;
pub use error::AnalyzerError;
pub use form::{FieldType, FormField, FormParser};
pub use language::{LanguageDetectionResult, LanguageDetector, LanguageDistributionEntry};
pub use message::{IntentKind, IntentResult, MessageAnalyzer, Sentiment};
pub use pipeline::AnalysisPipeline;

#[cfg(test)]
mod tests;
