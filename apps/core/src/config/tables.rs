//! Built-in reference tables.
//!
//! These are the curated French/English/Malagasy word lists, form templates
//! and type mappings the analyzers ship with. Deployments override them by
//! loading a JSON configuration file; tests substitute minimal fixtures.

use std::collections::HashMap;

use crate::form::template::{
    FieldType, FormConfig, FormTemplate, FormTypeIndicator, LabelTypeDefault, LanguageTypeDefaults,
};

use super::{LanguageConfig, MessageConfig, StopWordList};

/// Characteristic function words per supported language, ordered by
/// configuration precedence (first entry wins score ties in the fallback).
const STOP_WORDS_FR: &[&str] = &[
    "le", "la", "les", "un", "une", "des", "du", "de", "et", "est", "vous", "nous", "je",
    "bonjour", "merci", "comment", "pourquoi", "avec", "pour", "dans",
];

const STOP_WORDS_EN: &[&str] = &[
    "the", "a", "an", "is", "are", "and", "of", "you", "i", "we", "hello", "please", "thanks",
    "with", "for", "this",
];

const STOP_WORDS_MG: &[&str] = &[
    "ny", "dia", "ary", "fa", "amin'ny", "misaotra", "azafady", "tsara", "veloma",
];

/// Multi-word Malagasy patterns checked when stop-word scoring finds nothing.
const MALAGASY_PATTERNS: &[&str] = &["ny", "an'ny", "ho anao", "misaotra"];

const PURCHASE_KEYWORDS: &[&str] = &[
    "je veux", "je voudrais", "je souhaite", "commander", "acheter", "prendre", "donnez-moi",
    "je prends", "je commande", "réservation", "livraison", "combien", "prix", "tarif",
    "disponible", "stock", "envoyer", "expédier", "payer", "paiement", "facture",
];

const QUESTION_KEYWORDS: &[&str] = &[
    "comment", "quand", "où", "pourquoi", "quel", "quelle", "quels", "quelles", "est-ce que",
    "comment faire", "comment ça marche",
];

const COMPLAINT_KEYWORDS: &[&str] = &[
    "problème", "erreur", "faux", "incorrect", "mauvais", "pas content", "insatisfait",
    "réclamation", "plainte", "bug", "ne marche pas", "défectueux", "cassé", "abîmé", "retard",
    "perdu",
];

const POSITIVE_WORDS: &[&str] = &[
    "super", "excellent", "génial", "parfait", "merci", "bravo", "félicitations",
];

const NEGATIVE_WORDS: &[&str] = &[
    "nul", "horrible", "déçu", "déception", "pas bien", "mauvais",
];

/// Phrases too generic to be product names in the loose quantity patterns.
const GENERIC_NAME_STOP_WORDS: &[&str] = &["de", "la", "le", "et", "un", "une", "des"];

/// Substrings that make a short line look like a form field label.
const LABEL_INDICATORS: &[&str] = &["nom", "name", "phone", "tel", "email", "adresse", "address"];

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

pub(crate) fn default_languages() -> LanguageConfig {
    LanguageConfig {
        supported: owned(&["fr", "en", "mg"]),
        names: HashMap::from([
            ("fr".to_string(), "français".to_string()),
            ("en".to_string(), "english".to_string()),
            ("mg".to_string(), "malagasy".to_string()),
            ("es".to_string(), "spanish".to_string()),
            ("de".to_string(), "german".to_string()),
        ]),
        stop_words: vec![
            StopWordList {
                language: "fr".to_string(),
                words: owned(STOP_WORDS_FR),
            },
            StopWordList {
                language: "en".to_string(),
                words: owned(STOP_WORDS_EN),
            },
            StopWordList {
                language: "mg".to_string(),
                words: owned(STOP_WORDS_MG),
            },
        ],
        variant_groups: vec![
            owned(&["fr", "fr-ca", "fr-fr"]),
            owned(&["en", "en-us", "en-gb"]),
            owned(&["pt", "pt-br", "pt-pt"]),
        ],
        malagasy_patterns: owned(MALAGASY_PATTERNS),
    }
}

pub(crate) fn default_message() -> MessageConfig {
    MessageConfig {
        purchase_keywords: owned(PURCHASE_KEYWORDS),
        question_keywords: owned(QUESTION_KEYWORDS),
        complaint_keywords: owned(COMPLAINT_KEYWORDS),
        positive_words: owned(POSITIVE_WORDS),
        negative_words: owned(NEGATIVE_WORDS),
        generic_name_stop_words: owned(GENERIC_NAME_STOP_WORDS),
    }
}

fn customer_form() -> FormTemplate {
    FormTemplate {
        name: "customer_form".to_string(),
        labels: HashMap::from([
            (
                "fr".to_string(),
                owned(&["nom", "prénom", "téléphone", "email", "adresse", "ville"]),
            ),
            (
                "en".to_string(),
                owned(&["name", "first name", "phone", "email", "address", "city"]),
            ),
            (
                "mg".to_string(),
                owned(&["anarana", "fanampiny", "finday", "mailaka", "adiresy", "tanàna"]),
            ),
        ]),
        field_types: HashMap::from([
            ("nom".to_string(), FieldType::Text),
            ("name".to_string(), FieldType::Text),
            ("anarana".to_string(), FieldType::Text),
            ("téléphone".to_string(), FieldType::Phone),
            ("phone".to_string(), FieldType::Phone),
            ("finday".to_string(), FieldType::Phone),
            ("email".to_string(), FieldType::Email),
            ("mailaka".to_string(), FieldType::Email),
            ("adresse".to_string(), FieldType::Address),
            ("address".to_string(), FieldType::Address),
            ("adiresy".to_string(), FieldType::Address),
        ]),
    }
}

fn order_form() -> FormTemplate {
    // Labels only: no declared field types, so completeness stays 0.0.
    FormTemplate {
        name: "order_form".to_string(),
        labels: HashMap::from([
            (
                "fr".to_string(),
                owned(&["produit", "quantité", "prix", "total", "livraison", "paiement"]),
            ),
            (
                "en".to_string(),
                owned(&["product", "quantity", "price", "total", "delivery", "payment"]),
            ),
            (
                "mg".to_string(),
                owned(&["vokatra", "isany", "vidiny", "totaly", "fanaterana", "fandoavam-bola"]),
            ),
        ]),
        field_types: HashMap::new(),
    }
}

fn type_defaults(language: &str, pairs: &[(&str, FieldType)]) -> LanguageTypeDefaults {
    LanguageTypeDefaults {
        language: language.to_string(),
        mappings: pairs
            .iter()
            .map(|(label, field_type)| LabelTypeDefault {
                label: (*label).to_string(),
                field_type: *field_type,
            })
            .collect(),
    }
}

pub(crate) fn default_forms() -> FormConfig {
    FormConfig {
        templates: vec![customer_form(), order_form()],
        indicators: vec![
            FormTypeIndicator {
                form_type: "customer_form".to_string(),
                keywords: owned(&["formulaire", "fiche", "client", "information"]),
            },
            FormTypeIndicator {
                form_type: "order_form".to_string(),
                keywords: owned(&["commande", "bon", "order", "purchase"]),
            },
        ],
        default_field_types: vec![
            type_defaults(
                "fr",
                &[
                    ("nom", FieldType::Text),
                    ("prénom", FieldType::Text),
                    ("téléphone", FieldType::Phone),
                    ("tel", FieldType::Phone),
                    ("email", FieldType::Email),
                    ("mail", FieldType::Email),
                    ("adresse", FieldType::Address),
                    ("ville", FieldType::Text),
                    ("code postal", FieldType::Text),
                    ("produit", FieldType::Text),
                    ("quantité", FieldType::Number),
                    ("prix", FieldType::Price),
                    ("total", FieldType::Price),
                ],
            ),
            type_defaults(
                "en",
                &[
                    ("name", FieldType::Text),
                    ("first name", FieldType::Text),
                    ("phone", FieldType::Phone),
                    ("email", FieldType::Email),
                    ("address", FieldType::Address),
                    ("city", FieldType::Text),
                    ("product", FieldType::Text),
                    ("quantity", FieldType::Number),
                    ("price", FieldType::Price),
                    ("total", FieldType::Price),
                ],
            ),
            type_defaults(
                "mg",
                &[
                    ("anarana", FieldType::Text),
                    ("fanampiny", FieldType::Text),
                    ("finday", FieldType::Phone),
                    ("mailaka", FieldType::Email),
                    ("adiresy", FieldType::Address),
                    ("tanàna", FieldType::Text),
                    ("vokatra", FieldType::Text),
                    ("isany", FieldType::Number),
                    ("vidiny", FieldType::Price),
                ],
            ),
        ],
        label_indicators: owned(LABEL_INDICATORS),
        handwriting_threshold: 100.0,
    }
}
