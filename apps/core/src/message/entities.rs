//! Pattern-based entity extraction over raw message text.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Entity families the extractor reports. Declaration order is the report
/// order (`BTreeMap` key order follows `Ord`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Price,
    Quantity,
    ProductCode,
    Phone,
    Email,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Price,
        EntityKind::Quantity,
        EntityKind::ProductCode,
        EntityKind::Phone,
        EntityKind::Email,
    ];
}

static PRICE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b\d+(?:[.,]\d+)?\s*(?:€|euros?\b|mga\b|mg\b|ar\b)")
        .expect("Invalid price regex")
});

static QUANTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+\b").expect("Invalid quantity regex"));

static CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b[A-Z]{2,4}-[A-Z0-9]{2,6}\b").expect("Invalid product code regex")
});

/// Malagasy numbering plan: +261 or 0 prefix, then a known operator or
/// landline prefix.
static PHONE_MG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+261\s?|0)(?:34|32|33|38|20|21)\s?\d{2}\s?\d{3}\s?\d{2}\b")
        .expect("Invalid phone regex")
});

static PHONE_GROUPED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{3}[-.\s]?\d{2}[-.\s]?\d{3}[-.\s]?\d{2}\b")
        .expect("Invalid grouped phone regex")
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("Invalid email regex")
});

/// Extract every entity family from the text.
///
/// All five keys are always present so consumers can index the map without
/// guards; an absent family holds an empty vector.
pub fn extract(text: &str) -> BTreeMap<EntityKind, Vec<String>> {
    let mut entities = BTreeMap::new();
    for kind in EntityKind::ALL {
        entities.insert(kind, Vec::new());
    }

    collect(&mut entities, EntityKind::Price, &PRICE_RE, text);
    collect(&mut entities, EntityKind::Quantity, &QUANTITY_RE, text);
    collect(&mut entities, EntityKind::ProductCode, &CODE_RE, text);
    collect(&mut entities, EntityKind::Phone, &PHONE_MG_RE, text);
    collect(&mut entities, EntityKind::Phone, &PHONE_GROUPED_RE, text);
    collect(&mut entities, EntityKind::Email, &EMAIL_RE, text);

    entities
}

fn collect(
    entities: &mut BTreeMap<EntityKind, Vec<String>>,
    kind: EntityKind,
    pattern: &Regex,
    text: &str,
) {
    if let Some(values) = entities.get_mut(&kind) {
        for m in pattern.find_iter(text) {
            let found = m.as_str().to_string();
            if !values.contains(&found) {
                values.push(found);
            }
        }
    }
}
