//! Keyword intent classifier.
//!
//! Maps a lowercased query to a [`Category`] with ordered substring rules.
//! The first rule with a matching keyword wins; queries matching nothing fall
//! back to [`Category::Knowledge`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Routing label selecting which agent answers a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    TaskPlanner,
    Knowledge,
    Sentiment,
}

impl Category {
    /// Every category, in the order they are listed to callers.
    pub const ALL: [Category; 3] = [Self::TaskPlanner, Self::Knowledge, Self::Sentiment];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TaskPlanner => "task_planner",
            Self::Knowledge => "knowledge",
            Self::Sentiment => "sentiment",
        }
    }

    /// Comma-separated list of accepted category names.
    pub fn valid_values() -> String {
        Self::ALL
            .iter()
            .map(Category::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// A single classification rule.
#[derive(Debug, Clone)]
pub struct IntentRule {
    pub keywords: &'static [&'static str],
    pub category: Category,
}

impl IntentRule {
    fn matches(&self, query: &str) -> bool {
        self.keywords.iter().any(|k| query.contains(k))
    }
}

/// Ordered keyword rules plus a fallback category.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
    fallback: Category,
}

impl IntentClassifier {
    /// The stock rule set: planning words, then question words, then feelings.
    pub fn default_rules() -> Self {
        Self {
            rules: vec![
                IntentRule {
                    keywords: &["task", "plan", "steps"],
                    category: Category::TaskPlanner,
                },
                IntentRule {
                    keywords: &["what", "who", "when", "where", "why", "how"],
                    category: Category::Knowledge,
                },
                IntentRule {
                    keywords: &["feel", "happy", "sad", "angry"],
                    category: Category::Sentiment,
                },
            ],
            fallback: Category::Knowledge,
        }
    }

    /// Classify an already-normalized query. Never fails.
    pub fn classify(&self, query: &str) -> Category {
        self.rules
            .iter()
            .find(|rule| rule.matches(query))
            .map(|rule| rule.category)
            .unwrap_or(self.fallback)
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::default_rules()
    }
}
