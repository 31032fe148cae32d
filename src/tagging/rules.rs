// Tagging rules: a named tag mapped to its trigger substrings.
//
// Rules are fixed at startup and never change during a run. Declaration
// order matters: it is the order tags appear in a record's tag string.
// The built-in set describes physical intensity, indoor/outdoor work,
// social contact and independence of senior job postings.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A single tagging rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub tag: String,
    pub triggers: Vec<String>,
}

impl Rule {
    pub fn new(tag: &str, triggers: &[&str]) -> Self {
        Self {
            tag: tag.to_string(),
            triggers: triggers.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// True when any trigger occurs anywhere in `text` (substring, not token).
    pub fn matches(&self, text: &str) -> bool {
        self.triggers.iter().any(|trigger| text.contains(trigger.as_str()))
    }
}

/// An ordered, immutable set of rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            rules: vec![
                Rule::new(
                    "#저강도_신체활동",
                    &["상담", "안내", "사무", "말벗", "실내 근무", "관람"],
                ),
                Rule::new(
                    "#고강도_신체활동",
                    &["순찰", "배달", "청소", "육체 활동", "미화", "조리", "정리"],
                ),
                Rule::new("#실외근무", &["순찰", "외부 활동", "교통 안내", "환경미화"]),
                Rule::new("#실내근무", &["실내 근무", "사무", "상담", "돌봄", "매장"]),
                Rule::new("#사회활동성", &["상담", "안내", "말벗", "돌봄", "교육"]),
                Rule::new("#독립적업무", &["순찰", "정리", "단순 포장", "보안"]),
            ],
        }
    }
}

impl RuleSet {
    /// Build a rule set, rejecting unusable rules.
    pub fn new(rules: Vec<Rule>) -> Result<Self> {
        if rules.is_empty() {
            anyhow::bail!("Rule set is empty: at least one tagging rule is required");
        }
        for rule in &rules {
            if rule.tag.trim().is_empty() {
                anyhow::bail!("Tagging rule with an empty tag name");
            }
            if rule.triggers.iter().any(|t| t.is_empty()) {
                // An empty trigger is a substring of everything
                anyhow::bail!(
                    "Rule {} has an empty trigger, which would match every record",
                    rule.tag
                );
            }
        }
        Ok(Self { rules })
    }

    /// Load rules from a JSON file: an array of `{ "tag", "triggers" }`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read rule file {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid rule file {}", path.display()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let rules: Vec<Rule> = serde_json::from_str(json)?;
        Self::new(rules)
    }

    /// Use the rule file when one is configured, the built-in rules otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_json_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
