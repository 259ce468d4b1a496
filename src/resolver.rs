use crate::rules::RuleSet;

/// The text and labels a rule set is matched against.
///
/// Built from a pull request (title + label set) or from a freeform search
/// string (no labels).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signal {
    pub text: String,
    pub labels: Vec<String>,
}

impl Signal {
    pub fn from_text(text: impl Into<String>) -> Self {
        Signal {
            text: text.into(),
            labels: Vec::new(),
        }
    }
}

/// Outcome of matching a signal against the rule set.
///
/// Records what matched so the caller can report it; the chosen kind is
/// available uniformly through [Resolution::kind].
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A keyword was found as a substring of the signal text.
    Keyword { keyword: String, kind: String },
    /// A label was present in the signal's label set.
    Label { label: String, kind: String },
    /// No rule matched; the configured default applies (possibly empty).
    Default { kind: String },
}

impl Resolution {
    /// The bump kind this resolution selects.
    pub fn kind(&self) -> &str {
        match self {
            Resolution::Keyword { kind, .. } => kind,
            Resolution::Label { kind, .. } => kind,
            Resolution::Default { kind } => kind,
        }
    }
}

/// Matches a signal against the rule set, first match wins.
///
/// Rules are tried in list order. Within a rule, keywords are tested first
/// (case-sensitive substring of the signal text, in keyword order), then
/// labels (exact membership in the signal's label set, in label order); a hit
/// on either ends the walk immediately. When no rule matches, the rule set's
/// default kind is returned — an empty default yields an empty kind, which the
/// caller must handle.
///
/// The result is pure and deterministic given the rule set and signal.
pub fn resolve(rule_set: &RuleSet, signal: &Signal) -> Resolution {
    for rule in &rule_set.rules {
        if let Some(keyword) = rule
            .keywords
            .iter()
            .find(|word| signal.text.contains(word.as_str()))
        {
            return Resolution::Keyword {
                keyword: keyword.clone(),
                kind: rule.kind.clone(),
            };
        }

        if let Some(label) = rule
            .labels
            .iter()
            .find(|label| signal.labels.contains(*label))
        {
            return Resolution::Label {
                label: label.clone(),
                kind: rule.kind.clone(),
            };
        }
    }

    Resolution::Default {
        kind: rule_set.default_kind.clone(),
    }
}
