//! Line-oriented form field parsing over OCR output.
//!
//! Two independent strategies run over every non-blank line: a
//! separator-based split and a label-then-value-on-next-line pairing. Both
//! may fire for the same physical line; the caller gets every candidate
//! field with its strategy's fixed confidence.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::handwriting;
use super::template::FieldType;
use crate::config::AnalyzerConfig;

/// Separators scanned in order; the first one producing two non-trivial
/// parts wins the line.
const SEPARATORS: [char; 4] = [':', '=', '-', '>'];

/// One labeled value extracted from a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    /// Lower-cased, trimmed label text.
    pub label: String,
    /// Trimmed value in its original case.
    pub value: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub confidence: f32,
    /// Zero-based line the label was found on.
    pub line_number: usize,
}

/// Parses OCR'd documents into typed form fields.
pub struct FormParser {
    config: Arc<AnalyzerConfig>,
}

impl FormParser {
    pub fn new(config: Arc<AnalyzerConfig>) -> Self {
        Self { config }
    }

    /// Detect the form type from document content.
    ///
    /// Indicator keywords are checked first, in configuration order; then
    /// each template's label list for the given language. `"unknown"` when
    /// nothing matches.
    pub fn detect_form_type(&self, text: &str, language: &str) -> String {
        let text_lower = text.to_lowercase();

        for indicator in &self.config.forms.indicators {
            if indicator
                .keywords
                .iter()
                .any(|k| text_lower.contains(k.as_str()))
            {
                return indicator.form_type.clone();
            }
        }

        for template in &self.config.forms.templates {
            if template
                .labels_for(language)
                .iter()
                .any(|label| text_lower.contains(label.as_str()))
            {
                return template.name.clone();
            }
        }

        "unknown".to_string()
    }

    /// Parse labeled fields out of OCR text, in order of appearance.
    pub fn parse_fields(&self, text: &str, language: &str) -> Vec<FormField> {
        let lines: Vec<&str> = text.split('\n').collect();
        let mut fields = Vec::new();

        for (i, raw) in lines.iter().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            for sep in SEPARATORS {
                let Some(pos) = line.find(sep) else { continue };
                let label = line[..pos].trim();
                let value = line[pos + sep.len_utf8()..].trim();
                if label.is_empty() || value.is_empty() {
                    continue;
                }
                let label = label.to_lowercase();
                let field_type = self.resolve_field_type(&label, language);
                fields.push(FormField {
                    label,
                    value: value.to_string(),
                    field_type,
                    confidence: 0.8,
                    line_number: i,
                });
                break;
            }

            // Label on this line, value on the next. Runs in addition to the
            // separator strategy; both may emit for the same line.
            if i + 1 < lines.len() {
                let current_lower = line.to_lowercase();
                let next = lines[i + 1].trim();
                if self.looks_like_label(&current_lower, language)
                    && !next.is_empty()
                    && !self.looks_like_label(&next.to_lowercase(), language)
                {
                    let field_type = self.resolve_field_type(&current_lower, language);
                    fields.push(FormField {
                        label: current_lower,
                        value: next.to_string(),
                        field_type,
                        confidence: 0.7,
                        line_number: i,
                    });
                }
            }
        }

        debug!(
            fields = fields.len(),
            language, "form field parsing complete"
        );
        fields
    }

    /// Completeness of a parsed document against a template: distinct
    /// required labels present over required labels declared. 0.0 for an
    /// unknown template or one with no declared field types.
    pub fn completeness(&self, fields: &[FormField], form_type: &str) -> f32 {
        let Some(template) = self.config.forms.template(form_type) else {
            return 0.0;
        };
        if template.field_types.is_empty() {
            return 0.0;
        }

        let present = template
            .field_types
            .keys()
            .filter(|required| fields.iter().any(|f| &f.label == *required))
            .count();

        present as f32 / template.field_types.len() as f32
    }

    /// Boolean handwriting flag for a scanned page; load failures are false.
    pub fn detect_handwriting(&self, path: &Path) -> bool {
        handwriting::detect(path, self.config.forms.handwriting_threshold)
    }

    fn looks_like_label(&self, text: &str, language: &str) -> bool {
        for template in &self.config.forms.templates {
            if template
                .labels_for(language)
                .iter()
                .any(|label| text.contains(label.as_str()))
            {
                return true;
            }
        }

        text.chars().count() < 30
            && self
                .config
                .forms
                .label_indicators
                .iter()
                .any(|indicator| text.contains(indicator.as_str()))
    }

    fn resolve_field_type(&self, label: &str, language: &str) -> FieldType {
        // Explicit template typing wins, exact match only.
        for template in &self.config.forms.templates {
            if let Some(field_type) = template.field_types.get(label) {
                return *field_type;
            }
        }

        if let Some(defaults) = self.config.forms.type_defaults_for(language) {
            if let Some(mapping) = defaults.mappings.iter().find(|m| m.label == label) {
                return mapping.field_type;
            }
            // Any word of a multi-word mapping key inside the label.
            for mapping in &defaults.mappings {
                if mapping
                    .label
                    .split_whitespace()
                    .any(|word| label.contains(word))
                {
                    return mapping.field_type;
                }
            }
        }

        FieldType::Text
    }
}
