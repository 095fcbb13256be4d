//! Whole-message analysis: intent, sentiment, products and entities.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::entities::{self, EntityKind};
use super::intent::{self, IntentKind, Sentiment};
use super::products::{self, ExtractedProduct};
use crate::config::AnalyzerConfig;

/// Complete analysis of one customer message.
///
/// `extracted_products` and `entities` are always present; an empty message
/// still yields a well-formed result, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentResult {
    pub intent: IntentKind,
    pub confidence: f32,
    pub sentiment: Sentiment,
    pub extracted_products: Vec<ExtractedProduct>,
    pub entities: BTreeMap<EntityKind, Vec<String>>,
}

/// Analyzes short commerce messages against the configured keyword tables.
pub struct MessageAnalyzer {
    config: Arc<AnalyzerConfig>,
}

impl MessageAnalyzer {
    pub fn new(config: Arc<AnalyzerConfig>) -> Self {
        Self { config }
    }

    /// Analyze one message. Pure and stateless per call.
    pub fn analyze(&self, text: &str) -> IntentResult {
        let text_lower = text.to_lowercase();

        let (intent, confidence) = intent::classify_intent(&text_lower, &self.config.message);
        let sentiment = intent::classify_sentiment(&text_lower, &self.config.message);
        let extracted_products = products::extract(text, &self.config.message);
        let entities = entities::extract(text);

        debug!(
            intent = ?intent,
            confidence,
            products = extracted_products.len(),
            "message analyzed"
        );

        IntentResult {
            intent,
            confidence,
            sentiment,
            extracted_products,
            entities,
        }
    }
}
