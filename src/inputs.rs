//! Action input access.
//!
//! Inputs are gathered once at process start into an explicit [Inputs] value;
//! nothing downstream reads the environment directly. The [InputSource] trait
//! abstracts the key-value backing so tests can supply a plain map.

use std::collections::HashMap;
use std::env;

/// Key-value source for action inputs and workflow variables.
pub trait InputSource {
    /// Look up a raw value by its environment key (e.g. `INPUT_COMMIT-MESSAGE`).
    fn get(&self, key: &str) -> Option<String>;
}

/// Production source backed by process environment variables.
pub struct EnvSource;

impl InputSource for EnvSource {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

/// Map-backed source for tests.
pub struct MapSource(pub HashMap<String, String>);

impl InputSource for MapSource {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

/// All configuration inputs consumed by one invocation.
///
/// Missing optional inputs come through as empty strings or `None`, never as
/// errors; validation of the merged result happens in the rule set builder.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    pub keywords_major: Vec<String>,
    pub keywords_minor: Vec<String>,
    pub keywords_patch: Vec<String>,
    pub default_bump_type: String,
    pub commit_message: String,
    /// Optional path to a JSON override document.
    pub configuration: Option<String>,
    pub author_name: String,
    pub author_email: String,
    /// Alternate-mode signal text, used instead of a pull request title.
    pub search_target: Option<String>,
}

impl Inputs {
    /// Gather all inputs from a source.
    pub fn from_source(source: &dyn InputSource) -> Self {
        Inputs {
            keywords_major: input_list(source, "keywords-major"),
            keywords_minor: input_list(source, "keywords-minor"),
            keywords_patch: input_list(source, "keywords-patch"),
            default_bump_type: input_var(source, "default-bump-type"),
            commit_message: input_var(source, "commit-message"),
            configuration: non_empty(input_var(source, "configuration")),
            author_name: input_var(source, "author-name"),
            author_email: input_var(source, "author-email"),
            search_target: non_empty(input_var(source, "search-target")),
        }
    }

    /// Gather all inputs from the process environment.
    pub fn from_env() -> Self {
        Self::from_source(&EnvSource)
    }
}

/// Read a workflow variable (e.g. `github_var(src, "event_path")` reads
/// `GITHUB_EVENT_PATH`).
pub fn github_var(source: &dyn InputSource, key: &str) -> Option<String> {
    source.get(&format!("GITHUB_{}", key.to_uppercase()))
}

fn input_var(source: &dyn InputSource, key: &str) -> String {
    source
        .get(&format!("INPUT_{}", key.to_uppercase()))
        .unwrap_or_default()
}

fn input_list(source: &dyn InputSource, key: &str) -> Vec<String> {
    let raw = input_var(source, key);
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|s| s.to_string()).collect()
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
