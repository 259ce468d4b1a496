use serde::Deserialize;
use std::fs;

use crate::error::{BumpError, Result};
use crate::inputs::Inputs;

/// One entry in the ordered rule set.
///
/// A rule matches when any keyword is a substring of the signal text, or any
/// label is present in the signal's label set. Rule kinds are open-ended
/// strings because override documents may introduce kinds beyond
/// major/minor/patch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BumpRule {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(default)]
    pub labels: Vec<String>,
}

/// Committing identity, configurable inline or via the override document.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,
}

/// External JSON override document.
///
/// Every field is optional; an absent field means "keep the inline value".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverrideConfig {
    #[serde(default)]
    pub bump_types: Option<Vec<BumpRule>>,

    #[serde(default)]
    pub default_bump_type: Option<String>,

    #[serde(default)]
    pub commit_message: Option<String>,

    #[serde(default)]
    pub author: Option<Author>,
}

/// Loads the override document from a JSON file.
///
/// # Arguments
/// * `path` - Path to the JSON override document
///
/// # Returns
/// * `Ok(OverrideConfig)` - Parsed override document
/// * `Err(BumpError::ConfigLoad)` - If the file is unreadable or not valid JSON
pub fn load_override(path: &str) -> Result<OverrideConfig> {
    let raw = fs::read_to_string(path).map_err(|e| {
        BumpError::config_load(format!("could not read override file '{}': {}", path, e))
    })?;

    serde_json::from_str(&raw).map_err(|e| {
        BumpError::config_load(format!("could not parse override file '{}': {}", path, e))
    })
}

/// The resolved, validated configuration for one invocation.
///
/// Built once at startup and immutable thereafter. Rule order is match
/// priority: first listed, first tried.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    pub rules: Vec<BumpRule>,
    pub default_kind: String,
    pub commit_message: String,
}

impl RuleSet {
    /// Builds the final rule set from inline inputs and an optional override
    /// document.
    ///
    /// Inline inputs seed one rule per built-in kind (major, minor, patch, in
    /// that order). Override rules fully replace any inline rule sharing their
    /// kind and are appended after the retained inline rules. Keyword and
    /// label lists are trimmed and stripped of empty entries; rules left with
    /// neither keywords nor labels are dropped.
    ///
    /// # Returns
    /// * `Ok(RuleSet)` - Validated rule set
    /// * `Err(BumpError::ConfigInvalid)` - If the commit message is empty, or
    ///   if there are no rules and no default bump type
    pub fn build(inputs: &Inputs, override_config: Option<&OverrideConfig>) -> Result<Self> {
        let inline_rules = vec![
            BumpRule {
                kind: "major".to_string(),
                keywords: inputs.keywords_major.clone(),
                labels: Vec::new(),
            },
            BumpRule {
                kind: "minor".to_string(),
                keywords: inputs.keywords_minor.clone(),
                labels: Vec::new(),
            },
            BumpRule {
                kind: "patch".to_string(),
                keywords: inputs.keywords_patch.clone(),
                labels: Vec::new(),
            },
        ];

        let mut rules = inline_rules;
        let mut default_kind = inputs.default_bump_type.clone();
        let mut commit_message = inputs.commit_message.clone();

        if let Some(config) = override_config {
            if let Some(override_rules) = &config.bump_types {
                rules = merge_rules(rules, override_rules.clone());
            }
            if let Some(kind) = non_empty(&config.default_bump_type) {
                default_kind = kind;
            }
            if let Some(message) = non_empty(&config.commit_message) {
                commit_message = message;
            }
        }

        let rules: Vec<BumpRule> = rules
            .into_iter()
            .map(|rule| BumpRule {
                kind: rule.kind,
                keywords: clean_words(rule.keywords),
                labels: clean_words(rule.labels),
            })
            .filter(|rule| !rule.keywords.is_empty() || !rule.labels.is_empty())
            .collect();

        if commit_message.is_empty() {
            return Err(BumpError::config_invalid("Commit message is undefined"));
        }
        if rules.is_empty() && default_kind.is_empty() {
            return Err(BumpError::config_invalid(
                "No bump types found and no default bump type given",
            ));
        }

        Ok(RuleSet {
            rules,
            default_kind,
            commit_message,
        })
    }
}

/// Resolves the committing identity from inline inputs and the override
/// document; the override replaces the inline identity wholesale when present.
pub fn resolve_author(inputs: &Inputs, override_config: Option<&OverrideConfig>) -> Author {
    if let Some(author) = override_config.and_then(|c| c.author.clone()) {
        return author;
    }
    Author {
        name: inputs.author_name.clone(),
        email: inputs.author_email.clone(),
    }
}

/// Merges override rules into the inline rule list.
///
/// Inline rules whose kind exactly matches an override rule's kind are
/// removed; all override rules are then appended in their listed order.
/// Override rules therefore replace same-named inline rules outright rather
/// than merging with them, and always sort after the retained inline rules.
fn merge_rules(inline: Vec<BumpRule>, overrides: Vec<BumpRule>) -> Vec<BumpRule> {
    let mut merged: Vec<BumpRule> = inline
        .into_iter()
        .filter(|rule| !overrides.iter().any(|o| o.kind == rule.kind))
        .collect();
    merged.extend(overrides);
    merged
}

/// Trims each entry and drops empty results, preserving order and duplicates.
fn clean_words(words: Vec<String>) -> Vec<String> {
    words
        .into_iter()
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty())
        .collect()
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|v| !v.is_empty()).map(String::from)
}

/// Substitutes every `{version}` occurrence in a commit message template.
///
/// A template without the placeholder passes through unchanged.
pub fn apply_template(template: &str, version: &str) -> String {
    template.replace("{version}", version)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(kind: &str, keywords: &[&str]) -> BumpRule {
        BumpRule {
            kind: kind.to_string(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            labels: Vec::new(),
        }
    }

    #[test]
    fn test_clean_words_trims_and_drops_empties() {
        let cleaned = clean_words(vec![
            " fix ".to_string(),
            "".to_string(),
            "  ".to_string(),
            "bug".to_string(),
        ]);
        assert_eq!(cleaned, vec!["fix", "bug"]);
    }

    #[test]
    fn test_clean_words_keeps_order_and_duplicates() {
        let cleaned = clean_words(vec![
            "fix".to_string(),
            "bug".to_string(),
            "fix".to_string(),
        ]);
        assert_eq!(cleaned, vec!["fix", "bug", "fix"]);
    }

    #[test]
    fn test_merge_rules_replaces_same_kind() {
        let inline = vec![rule("major", &["MAJOR"]), rule("minor", &["feat"])];
        let overrides = vec![rule("minor", &["amazing"])];

        let merged = merge_rules(inline, overrides);
        assert_eq!(
            merged,
            vec![rule("major", &["MAJOR"]), rule("minor", &["amazing"])]
        );
    }

    #[test]
    fn test_merge_rules_appends_new_kinds_last() {
        let inline = vec![rule("major", &["MAJOR"])];
        let overrides = vec![rule("docs", &["docs"])];

        let merged = merge_rules(inline, overrides);
        assert_eq!(merged[0].kind, "major");
        assert_eq!(merged[1].kind, "docs");
    }

    #[test]
    fn test_merge_rules_kind_match_is_case_sensitive() {
        let inline = vec![rule("major", &["MAJOR"])];
        let overrides = vec![rule("Major", &["BREAKING"])];

        let merged = merge_rules(inline, overrides);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].kind, "major");
        assert_eq!(merged[1].kind, "Major");
    }

    #[test]
    fn test_apply_template() {
        assert_eq!(apply_template("bump {version}", "1.3.0"), "bump 1.3.0");
    }

    #[test]
    fn test_apply_template_multiple_occurrences() {
        assert_eq!(
            apply_template("{version} -> {version}", "2.0.0"),
            "2.0.0 -> 2.0.0"
        );
    }

    #[test]
    fn test_apply_template_without_placeholder() {
        assert_eq!(apply_template("release commit", "1.0.0"), "release commit");
    }

    #[test]
    fn test_override_rule_without_labels_field() {
        let json = r#"{ "type": "major", "keywords": ["BREAKING"] }"#;
        let parsed: BumpRule = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.kind, "major");
        assert!(parsed.labels.is_empty());
    }
}
