//! Form templates and field typing tables.
//!
//! A template names the labels a known form carries per language and the
//! field type each label maps to. Templates are configuration: loaded once,
//! shared read-only by every parse.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Type inferred for a parsed form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Phone,
    Email,
    Address,
    Number,
    Price,
}

impl Default for FieldType {
    fn default() -> Self {
        FieldType::Text
    }
}

/// A named form template with per-language label lists and label typing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormTemplate {
    pub name: String,
    /// Language code to ordered label list.
    pub labels: HashMap<String, Vec<String>>,
    /// Explicit label typing; also defines the required fields for
    /// completeness scoring. May be empty (completeness is then 0.0).
    #[serde(default)]
    pub field_types: HashMap<String, FieldType>,
}

impl FormTemplate {
    /// Labels for a language; unknown languages yield an empty slice.
    pub fn labels_for(&self, language: &str) -> &[String] {
        self.labels.get(language).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Keywords whose presence indicates a form type, checked before labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormTypeIndicator {
    pub form_type: String,
    pub keywords: Vec<String>,
}

/// One default label-to-type mapping entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelTypeDefault {
    pub label: String,
    pub field_type: FieldType,
}

/// Ordered default type mappings for one language, tried after the explicit
/// template tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageTypeDefaults {
    pub language: String,
    pub mappings: Vec<LabelTypeDefault>,
}

/// Form parsing configuration: templates plus the heuristic tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    pub templates: Vec<FormTemplate>,
    /// Checked in order; first matching indicator decides the form type.
    pub indicators: Vec<FormTypeIndicator>,
    #[serde(default)]
    pub default_field_types: Vec<LanguageTypeDefaults>,
    /// Substrings that make a short line look like a label.
    #[serde(default)]
    pub label_indicators: Vec<String>,
    /// Laplacian-variance threshold for the handwriting flag.
    #[serde(default = "default_handwriting_threshold")]
    pub handwriting_threshold: f64,
}

fn default_handwriting_threshold() -> f64 {
    100.0
}

impl FormConfig {
    /// Look up a template by name.
    pub fn template(&self, name: &str) -> Option<&FormTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Default type mappings for a language, if any.
    pub fn type_defaults_for(&self, language: &str) -> Option<&LanguageTypeDefaults> {
        self.default_field_types
            .iter()
            .find(|d| d.language == language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_serde_names() {
        assert_eq!(serde_json::to_string(&FieldType::Phone).unwrap(), "\"phone\"");
        let parsed: FieldType = serde_json::from_str("\"price\"").unwrap();
        assert_eq!(parsed, FieldType::Price);
    }

    #[test]
    fn test_labels_for_unknown_language_is_empty() {
        let template = FormTemplate {
            name: "t".to_string(),
            labels: HashMap::from([("fr".to_string(), vec!["nom".to_string()])]),
            field_types: HashMap::new(),
        };
        assert_eq!(template.labels_for("fr"), ["nom".to_string()]);
        assert!(template.labels_for("sw").is_empty());
    }
}
