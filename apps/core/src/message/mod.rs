//! # Message Module
//!
//! Extracts structure out of short, informal commerce messages: what the
//! customer wants, how they feel about it, and which products, amounts and
//! contact details they mention.
//!
//! ## Components
//! - `intent`: keyword-count intent and sentiment classification
//! - `products`: three-pass product mention extraction
//! - `entities`: regex entity families (price, quantity, code, phone, email)
//! - `analyzer`: facade combining all of the above into one result

pub mod analyzer;
pub mod entities;
pub mod intent;
pub mod products;

pub use analyzer::{IntentResult, MessageAnalyzer};
pub use entities::EntityKind;
pub use intent::{IntentKind, Sentiment};
pub use products::ExtractedProduct;
