//! Keyword-membership sentiment over reviewer comments: count positive vs.
//! negative keyword hits in the lowercased text, majority wins, tie or empty
//! text is neutral.

use serde::Serialize;

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "well",
    "nice",
    "done",
    "complete",
    "satisfactory",
    "improved",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "poor",
    "incomplete",
    "issue",
    "problem",
    "delay",
    "unsatisfactory",
    "fail",
    "late",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

pub fn classify(text: &str) -> Sentiment {
    if text.trim().is_empty() {
        return Sentiment::Neutral;
    }
    let lowered = text.to_lowercase();
    let pos = POSITIVE_WORDS.iter().filter(|w| lowered.contains(**w)).count();
    let neg = NEGATIVE_WORDS.iter().filter(|w| lowered.contains(**w)).count();
    match pos.cmp(&neg) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct SentimentSummary {
    pub positive: i64,
    pub negative: i64,
    pub neutral: i64,
}

pub fn summarize<'a>(comments: impl IntoIterator<Item = &'a str>) -> SentimentSummary {
    let mut summary = SentimentSummary::default();
    for comment in comments {
        match classify(comment) {
            Sentiment::Positive => summary.positive += 1,
            Sentiment::Negative => summary.negative += 1,
            Sentiment::Neutral => summary.neutral += 1,
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive() {
        assert_eq!(classify("Great work, well done"), Sentiment::Positive);
    }

    #[test]
    fn test_negative() {
        assert_eq!(classify("Poor effort, still incomplete"), Sentiment::Negative);
    }

    #[test]
    fn test_tie_is_neutral() {
        assert_eq!(classify("good but late"), Sentiment::Neutral);
    }

    #[test]
    fn test_empty_is_neutral() {
        assert_eq!(classify(""), Sentiment::Neutral);
        assert_eq!(classify("   "), Sentiment::Neutral);
    }

    #[test]
    fn test_no_keywords_is_neutral() {
        assert_eq!(classify("please see attached notes"), Sentiment::Neutral);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("EXCELLENT"), Sentiment::Positive);
    }

    #[test]
    fn test_summary_counts() {
        let s = summarize(["well done", "too many problems", "fine", ""]);
        assert_eq!(s.positive, 1);
        assert_eq!(s.negative, 1);
        assert_eq!(s.neutral, 2);
    }
}
