//! Pipeline Tests
//!
//! End-to-end scenarios through `AnalysisPipeline`: mixed-channel customer
//! traffic flowing through language detection, message analysis and form
//! parsing against the default configuration.

use std::sync::Arc;

use crate::config::AnalyzerConfig;
use crate::form::FieldType;
use crate::language::{RankedLanguage, StatisticalDetector};
use crate::message::{EntityKind, IntentKind, Sentiment};
use crate::pipeline::AnalysisPipeline;

/// Statistical backend that never answers, exercising the fallback path.
struct UnavailableOracle;

impl StatisticalDetector for UnavailableOracle {
    fn rank(&self, _text: &str) -> Vec<RankedLanguage> {
        Vec::new()
    }
}

fn pipeline() -> AnalysisPipeline {
    super::init_test_logging();
    AnalysisPipeline::new(Arc::new(AnalyzerConfig::default()))
}

fn fallback_pipeline() -> AnalysisPipeline {
    super::init_test_logging();
    AnalysisPipeline::with_statistical_detector(
        Arc::new(AnalyzerConfig::default()),
        Box::new(UnavailableOracle),
    )
}

#[test]
fn test_short_text_language_is_unknown() {
    let result = pipeline().detect_language("ab");
    assert_eq!(result.code, "unknown");
    assert_eq!(result.confidence, 0.0);
}

#[test]
fn test_fallback_detection_when_oracle_unavailable() {
    let result = fallback_pipeline().detect_language("Bonjour, comment allez-vous aujourd'hui");

    assert_eq!(result.code, "fr");
    assert!(result.confidence > 0.0);
}

#[test]
fn test_purchase_message_scenario() {
    let result = pipeline().analyze_message("Je voudrais 2 APL-IP15P svp, merci");

    assert_eq!(result.intent, IntentKind::Purchase);
    assert!(result.confidence > 0.0);
    assert_eq!(result.sentiment, Sentiment::Positive);

    let coded: Vec<_> = result
        .extracted_products
        .iter()
        .filter(|p| p.code == "APL-IP15P")
        .collect();
    assert_eq!(coded.len(), 1);
    assert_eq!(coded[0].quantity, 2);
    assert_eq!(coded[0].confidence, 0.9);
}

#[test]
fn test_complaint_with_contact_details() {
    let result = pipeline()
        .analyze_message("Problème avec ma commande, rappelez-moi au 034 12 345 67 ou jean@example.mg");

    assert_eq!(result.intent, IntentKind::Complaint);
    assert_eq!(result.entities[&EntityKind::Phone], vec!["034 12 345 67"]);
    assert_eq!(result.entities[&EntityKind::Email], vec!["jean@example.mg"]);
}

#[test]
fn test_form_workflow() {
    let p = pipeline();
    let text = "FICHE CLIENT\nNom: Jean Dupont\nTéléphone\n0341234567";

    let form_type = p.detect_form_type(text, "fr");
    assert_eq!(form_type, "customer_form");

    let fields = p.parse_form_fields(text, "fr");
    let nom = fields.iter().find(|f| f.label == "nom").unwrap();
    assert_eq!(nom.value, "Jean Dupont");
    assert_eq!(nom.field_type, FieldType::Text);
    assert_eq!(nom.confidence, 0.8);

    let phone = fields.iter().find(|f| f.label == "téléphone").unwrap();
    assert_eq!(phone.value, "0341234567");
    assert_eq!(phone.field_type, FieldType::Phone);
    assert_eq!(phone.confidence, 0.7);

    // Only nom and téléphone out of the template's typed fields are present.
    let completeness = p.completeness(&fields, &form_type);
    assert!(completeness > 0.0 && completeness < 1.0);
}

#[test]
fn test_multilingual_short_text_is_empty() {
    assert!(pipeline().detect_multilingual("court").is_empty());
    assert!(fallback_pipeline().detect_multilingual("dix-neuf chars ab").is_empty());
}

#[test]
fn test_handwriting_on_missing_image_is_false() {
    assert!(!pipeline().detect_handwriting(std::path::Path::new("/nonexistent/page.png")));
}

#[test]
fn test_analyzers_are_idempotent_through_facade() {
    let p = fallback_pipeline();
    let message = "Bonjour, je voudrais commander 3 x SAM-S24 pour livraison";

    assert_eq!(p.detect_language(message), p.detect_language(message));
    assert_eq!(p.analyze_message(message), p.analyze_message(message));
    assert_eq!(
        p.parse_form_fields(message, "fr"),
        p.parse_form_fields(message, "fr")
    );
}
