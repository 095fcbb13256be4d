//! # Form Module
//!
//! Turns line-oriented OCR text into typed (label, value) pairs.
//!
//! ## Components
//! - `template`: form templates, field types and heuristic tables (data)
//! - `parser`: form type detection, line parsing, completeness scoring
//! - `handwriting`: Laplacian-variance handwriting flag over page images

pub mod handwriting;
pub mod parser;
pub mod template;

pub use parser::{FormField, FormParser};
pub use template::{FieldType, FormConfig, FormTemplate};
