//! Single entry point bundling the three analyzers behind one shared
//! configuration.
//!
//! The pipeline owns nothing mutable: every call is pure over its input, so
//! one instance can be shared freely across worker threads.

use std::path::Path;
use std::sync::Arc;

use crate::config::AnalyzerConfig;
use crate::form::{FormField, FormParser};
use crate::language::{
    LanguageDetectionResult, LanguageDetector, LanguageDistributionEntry, StatisticalDetector,
};
use crate::message::{IntentResult, MessageAnalyzer};

/// All analyzers constructed over one configuration.
pub struct AnalysisPipeline {
    language: LanguageDetector,
    message: MessageAnalyzer,
    form: FormParser,
}

impl AnalysisPipeline {
    pub fn new(config: Arc<AnalyzerConfig>) -> Self {
        Self {
            language: LanguageDetector::new(Arc::clone(&config)),
            message: MessageAnalyzer::new(Arc::clone(&config)),
            form: FormParser::new(config),
        }
    }

    /// Pipeline with an injected statistical language backend.
    pub fn with_statistical_detector(
        config: Arc<AnalyzerConfig>,
        statistical: Box<dyn StatisticalDetector>,
    ) -> Self {
        Self {
            language: LanguageDetector::with_statistical(Arc::clone(&config), statistical),
            message: MessageAnalyzer::new(Arc::clone(&config)),
            form: FormParser::new(config),
        }
    }

    pub fn detect_language(&self, text: &str) -> LanguageDetectionResult {
        self.language.detect(text)
    }

    pub fn detect_multilingual(&self, text: &str) -> Vec<LanguageDistributionEntry> {
        self.language.detect_multilingual(text)
    }

    pub fn analyze_message(&self, text: &str) -> IntentResult {
        self.message.analyze(text)
    }

    pub fn detect_form_type(&self, text: &str, language: &str) -> String {
        self.form.detect_form_type(text, language)
    }

    pub fn parse_form_fields(&self, text: &str, language: &str) -> Vec<FormField> {
        self.form.parse_fields(text, language)
    }

    pub fn detect_handwriting(&self, image: &Path) -> bool {
        self.form.detect_handwriting(image)
    }

    pub fn completeness(&self, fields: &[FormField], form_type: &str) -> f32 {
        self.form.completeness(fields, form_type)
    }
}
