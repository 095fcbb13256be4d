//! Keyword-based intent and sentiment classification.

use serde::{Deserialize, Serialize};

use crate::config::MessageConfig;

/// Coarse purpose of a customer message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentKind {
    Purchase,
    Question,
    Complaint,
    Unknown,
}

/// Message tone from fixed word lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Count every occurrence of every keyword as a substring of the text.
fn occurrence_score(text_lower: &str, keywords: &[String]) -> usize {
    keywords
        .iter()
        .map(|keyword| text_lower.matches(keyword.as_str()).count())
        .sum()
}

/// Classify intent over lower-cased text.
///
/// The strictly highest keyword count wins; on a tie the earlier category
/// (purchase, question, complaint) is kept. All-zero counts are `unknown`
/// with confidence 0.0, otherwise confidence is `min(count / 3, 1)`.
pub fn classify_intent(text_lower: &str, config: &MessageConfig) -> (IntentKind, f32) {
    let scored = [
        (IntentKind::Purchase, occurrence_score(text_lower, &config.purchase_keywords)),
        (IntentKind::Question, occurrence_score(text_lower, &config.question_keywords)),
        (IntentKind::Complaint, occurrence_score(text_lower, &config.complaint_keywords)),
    ];

    let mut best = (IntentKind::Unknown, 0usize);
    for (intent, score) in scored {
        if score > best.1 {
            best = (intent, score);
        }
    }

    if best.1 == 0 {
        (IntentKind::Unknown, 0.0)
    } else {
        (best.0, (best.1 as f32 / 3.0).min(1.0))
    }
}

/// Majority vote between the positive and negative word lists; ties are
/// neutral.
pub fn classify_sentiment(text_lower: &str, config: &MessageConfig) -> Sentiment {
    let positive = occurrence_score(text_lower, &config.positive_words);
    let negative = occurrence_score(text_lower, &config.negative_words);

    if positive > negative {
        Sentiment::Positive
    } else if negative > positive {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalyzerConfig;

    fn config() -> MessageConfig {
        AnalyzerConfig::default().message
    }

    #[test]
    fn test_purchase_intent() {
        let (intent, confidence) = classify_intent("je voudrais commander deux articles", &config());

        assert_eq!(intent, IntentKind::Purchase);
        // "je voudrais" and "commander" both count.
        assert!((confidence - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_question_intent() {
        let (intent, confidence) = classify_intent("quand arrive ma livraison", &config());

        // "quand" and "livraison" tie at one each; question is checked after
        // purchase, so purchase keeps the tie.
        assert_eq!(intent, IntentKind::Purchase);
        assert!(confidence > 0.0);

        let (intent, _) = classify_intent("quand et pourquoi faire ceci", &config());
        assert_eq!(intent, IntentKind::Question);
    }

    #[test]
    fn test_complaint_intent() {
        let (intent, _) = classify_intent("gros problème, produit défectueux et cassé", &config());
        assert_eq!(intent, IntentKind::Complaint);
    }

    #[test]
    fn test_no_keywords_is_unknown() {
        let (intent, confidence) = classify_intent("zzz yyy", &config());
        assert_eq!(intent, IntentKind::Unknown);
        assert_eq!(confidence, 0.0);
    }

    #[test]
    fn test_confidence_caps_at_one() {
        let text = "prix prix prix prix prix";
        let (intent, confidence) = classify_intent(text, &config());
        assert_eq!(intent, IntentKind::Purchase);
        assert_eq!(confidence, 1.0);
    }

    #[test]
    fn test_sentiment_majority_and_tie() {
        let cfg = config();
        assert_eq!(classify_sentiment("merci c'est parfait", &cfg), Sentiment::Positive);
        assert_eq!(classify_sentiment("produit nul, très déçu", &cfg), Sentiment::Negative);
        assert_eq!(classify_sentiment("bonjour", &cfg), Sentiment::Neutral);
        // One positive against one negative is a tie.
        assert_eq!(classify_sentiment("super mais nul", &cfg), Sentiment::Neutral);
    }
}
