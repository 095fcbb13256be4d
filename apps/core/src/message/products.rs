//! Product mention extraction.
//!
//! Three passes, decreasing in confidence: quantity + catalogue code, bare
//! catalogue code, then loose "quantity + generic name" phrasings. The first
//! two work off the catalogue code grammar (2-4 letters, dash, 2-6
//! alphanumerics); the third invents a pseudo-code from the name.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::MessageConfig;

/// One product mention found in a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedProduct {
    pub name: String,
    pub quantity: u32,
    /// Catalogue code, or a pseudo-code derived from a generic name.
    pub code: String,
    /// Reserved for price lookups against the catalogue; extraction itself
    /// never fills it.
    pub price: Option<f64>,
    pub confidence: f32,
}

static QTY_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d+)\s*(?:x\s*)?([A-Z]{2,4}-[A-Z0-9]{2,6})\b")
        .expect("Invalid quantity+code regex")
});

static BARE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b([A-Z]{2,4}-[A-Z0-9]{2,6})\b").expect("Invalid bare code regex")
});

/// Loose quantity phrasings over lower-cased text: "2 chemises" and
/// "chemise x 2".
static GENERIC_QTY_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"\b(\d+)\s+([a-zà-öø-ÿ][a-zà-öø-ÿ\s]*)").expect("Invalid generic regex"),
        Regex::new(r"([a-zà-öø-ÿ][a-zà-öø-ÿ\s]*?)\s*x\s*(\d+)").expect("Invalid generic regex"),
    ]
});

/// Extract product mentions from a message, most confident passes first.
pub fn extract(text: &str, config: &MessageConfig) -> Vec<ExtractedProduct> {
    let mut products = Vec::new();
    let mut seen_codes = HashSet::new();

    for caps in QTY_CODE_RE.captures_iter(text) {
        let Ok(quantity) = caps[1].parse::<u32>() else {
            continue;
        };
        let code = caps[2].to_uppercase();
        seen_codes.insert(code.clone());
        products.push(ExtractedProduct {
            name: code.clone(),
            quantity,
            code,
            price: None,
            confidence: 0.9,
        });
    }

    for caps in BARE_CODE_RE.captures_iter(text) {
        let code = caps[1].to_uppercase();
        if !seen_codes.insert(code.clone()) {
            continue;
        }
        products.push(ExtractedProduct {
            name: code.clone(),
            quantity: 1,
            code,
            price: None,
            confidence: 0.7,
        });
    }

    let text_lower = text.to_lowercase();
    for (pattern_index, pattern) in GENERIC_QTY_RES.iter().enumerate() {
        for caps in pattern.captures_iter(&text_lower) {
            // First pattern is quantity-then-name, second name-then-quantity.
            let (qty_raw, name_raw) = if pattern_index == 0 {
                (&caps[1], &caps[2])
            } else {
                (&caps[2], &caps[1])
            };
            let Ok(quantity) = qty_raw.parse::<u32>() else {
                continue;
            };
            let name = name_raw.split_whitespace().collect::<Vec<_>>().join(" ");
            if name.chars().count() <= 2
                || config.generic_name_stop_words.iter().any(|w| *w == name)
            {
                continue;
            }
            products.push(ExtractedProduct {
                code: pseudo_code(&name),
                name,
                quantity,
                price: None,
                confidence: 0.6,
            });
        }
    }

    products
}

/// Three-letter pseudo-code from a name's letters, padded with `X`.
fn pseudo_code(name: &str) -> String {
    let mut code: String = name
        .chars()
        .filter(|c| c.is_alphabetic())
        .take(3)
        .collect::<String>()
        .to_uppercase();
    while code.chars().count() < 3 {
        code.push('X');
    }
    code
}
