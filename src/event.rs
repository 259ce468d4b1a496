use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{BumpError, Result};
use crate::resolver::Signal;

/// Workflow event payload, as delivered in the file named by
/// `GITHUB_EVENT_PATH`. Only the fields the resolver needs are modeled;
/// everything else in the payload is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub pull_request: Option<PullRequest>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub labels: Vec<String>,
}

impl EventPayload {
    /// Reads and parses the event payload file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Extracts the match signal from the payload's pull request.
    ///
    /// # Returns
    /// * `Ok(Signal)` - Title and labels of the associated pull request
    /// * `Err(BumpError::NoAssociatedChange)` - If the event carries no pull request
    pub fn signal(&self) -> Result<Signal> {
        let pull_request = self
            .pull_request
            .as_ref()
            .ok_or(BumpError::NoAssociatedChange)?;

        Ok(Signal {
            text: pull_request.title.clone(),
            labels: pull_request.labels.clone(),
        })
    }
}
