// Copyright 2025 Cowboy AI, LLC.

//! Keyword Rule Sets
//!
//! A [`KeywordRuleSet`] is an ordered cascade of `(keywords, label)` rules with
//! one default label. Evaluation lowercases the text and walks the rules in
//! declaration order; the first rule with ANY keyword occurring as a substring
//! wins and later rules are never consulted. When nothing matches the default
//! label is returned, so evaluation is total.
//!
//! Matching is plain substring containment, not word matching: `"co2"` fires
//! on `"co2-to-concrete"` and `"grid"` fires on `"gridlock"`. Priority between
//! overlapping rules is carried entirely by their order.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::errors::{DomainError, DomainResult};

/// Lowercase text the same way keywords are lowercased
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// One step of a cascade: any keyword hit yields `label`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeywordRule<L> {
    /// Label returned when this rule fires
    pub label: L,
    /// Lowercased keywords, any of which fires the rule
    pub keywords: Vec<String>,
}

impl<L> KeywordRule<L> {
    /// Create a rule; keywords are lowercased
    pub fn new<I, S>(label: L, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            label,
            keywords: keywords
                .into_iter()
                .map(|k| normalize(k.as_ref()))
                .collect(),
        }
    }

    /// First keyword of this rule contained in already-normalized text
    pub fn first_hit(&self, normalized: &str) -> Option<&str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .find(|k| normalized.contains(*k))
    }
}

/// Outcome of evaluating a rule set, with the rule that decided it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMatch<L> {
    /// Resulting label
    pub label: L,
    /// Index of the rule that fired; `None` when the default applied
    pub rule_index: Option<usize>,
    /// Keyword that fired the rule
    pub keyword: Option<String>,
}

impl<L> RuleMatch<L> {
    /// Whether no rule fired and the default label was used
    pub fn is_default(&self) -> bool {
        self.rule_index.is_none()
    }
}

/// Ordered first-match cascade with a default label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RuleSetDef<L>")]
pub struct KeywordRuleSet<L> {
    default: L,
    rules: Vec<KeywordRule<L>>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleSetDef<L> {
    default: L,
    #[serde(default = "Vec::new")]
    rules: Vec<KeywordRule<L>>,
}

impl<L> TryFrom<RuleSetDef<L>> for KeywordRuleSet<L> {
    type Error = DomainError;

    fn try_from(def: RuleSetDef<L>) -> DomainResult<Self> {
        let rules = def
            .rules
            .into_iter()
            .map(|r| KeywordRule::new(r.label, r.keywords))
            .collect();
        let set = Self {
            default: def.default,
            rules,
        };
        set.validate()?;
        Ok(set)
    }
}

impl<L> KeywordRuleSet<L> {
    /// Build a validated rule set. Keywords are lowercased.
    pub fn new(rules: Vec<KeywordRule<L>>, default: L) -> DomainResult<Self> {
        let rules = rules
            .into_iter()
            .map(|r| KeywordRule::new(r.label, r.keywords))
            .collect();
        let set = Self { default, rules };
        set.validate()?;
        Ok(set)
    }

    pub(crate) fn new_unchecked(rules: Vec<KeywordRule<L>>, default: L) -> Self {
        Self { default, rules }
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[KeywordRule<L>] {
        &self.rules
    }

    /// Label returned when no rule fires
    pub fn default_label(&self) -> &L {
        &self.default
    }

    /// A rule with no keywords can never fire, and an empty keyword fires on
    /// every text, so both are rejected.
    fn validate(&self) -> DomainResult<()> {
        for (i, rule) in self.rules.iter().enumerate() {
            if rule.keywords.is_empty() {
                return Err(DomainError::InvalidConfiguration(format!(
                    "rule {i} has no keywords"
                )));
            }
            if rule.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(DomainError::InvalidConfiguration(format!(
                    "rule {i} has a blank keyword"
                )));
            }
        }
        Ok(())
    }
}

impl<L: Clone> KeywordRuleSet<L> {
    /// Label for already-normalized text
    pub fn classify_normalized(&self, normalized: &str) -> L {
        self.explain_normalized(normalized).label
    }

    /// Label for raw text
    pub fn classify(&self, text: &str) -> L {
        self.classify_normalized(&normalize(text))
    }

    /// Like [`classify`](Self::classify), also reporting which rule and keyword fired
    pub fn explain(&self, text: &str) -> RuleMatch<L> {
        self.explain_normalized(&normalize(text))
    }

    /// Like [`classify_normalized`](Self::classify_normalized), with the deciding rule
    pub fn explain_normalized(&self, normalized: &str) -> RuleMatch<L> {
        for (i, rule) in self.rules.iter().enumerate() {
            if let Some(keyword) = rule.first_hit(normalized) {
                trace!(rule = i, keyword, "keyword rule fired");
                return RuleMatch {
                    label: rule.label.clone(),
                    rule_index: Some(i),
                    keyword: Some(keyword.to_string()),
                };
            }
        }
        RuleMatch {
            label: self.default.clone(),
            rule_index: None,
            keyword: None,
        }
    }
}

/// Evaluate `text` against `rule_set`
pub fn classify<L: Clone>(text: &str, rule_set: &KeywordRuleSet<L>) -> L {
    rule_set.classify(text)
}
