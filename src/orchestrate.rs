//! Main workflow orchestration logic
//!
//! The bump workflow sequencing, decoupled from clap so it can be called
//! programmatically and exercised in tests with a mock repository and a
//! map-backed input source.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{BumpError, Result};
use crate::event::EventPayload;
use crate::git::Repository;
use crate::inputs::{github_var, InputSource, Inputs};
use crate::resolver::Signal;
use crate::rules::{apply_template, Author};

/// Arguments for the bump workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowArgs {
    /// Match against this text instead of the pull request title
    pub search_target: Option<String>,

    /// Explicit manifest path, overriding workspace resolution
    pub manifest: Option<PathBuf>,

    /// Remote to push to
    pub remote: String,

    /// Preview mode - don't write, commit, or push
    pub dry_run: bool,
}

/// Builds the match signal for this invocation.
///
/// An explicit search target wins (CLI flag first, then the `search-target`
/// input); otherwise the workflow event payload is loaded from
/// `GITHUB_EVENT_PATH` and must carry a pull request.
pub fn gather_signal(
    args: &WorkflowArgs,
    inputs: &Inputs,
    source: &dyn InputSource,
) -> Result<Signal> {
    if let Some(target) = args
        .search_target
        .as_deref()
        .or(inputs.search_target.as_deref())
    {
        return Ok(Signal::from_text(target));
    }

    let event_path = github_var(source, "event_path").ok_or_else(|| {
        BumpError::config_load("GITHUB_EVENT_PATH is not set and no search target was given")
    })?;
    let payload = EventPayload::load(&event_path)?;
    payload.signal()
}

/// Resolves the manifest path: explicit argument, then `package.json` under
/// `GITHUB_WORKSPACE`, then `package.json` in the working directory.
pub fn manifest_path(args: &WorkflowArgs, source: &dyn InputSource) -> PathBuf {
    if let Some(path) = &args.manifest {
        return path.clone();
    }
    match github_var(source, "workspace") {
        Some(workspace) => PathBuf::from(workspace).join("package.json"),
        None => PathBuf::from("package.json"),
    }
}

/// Stages the manifest, commits with the substituted message, and pushes.
///
/// The author is configured first when both name and email are set; a partial
/// identity is ignored and the repository's existing configuration applies.
///
/// # Returns
/// * `Ok(String)` - The commit message that was used
pub fn publish(
    repo: &dyn Repository,
    manifest_path: &Path,
    message_template: &str,
    bumped_version: &str,
    author: &Author,
    remote: &str,
) -> Result<String> {
    if !author.name.is_empty() && !author.email.is_empty() {
        repo.set_author(&author.name, &author.email)?;
    }

    repo.stage_path(manifest_path)?;

    let message = apply_template(message_template, bumped_version);
    repo.commit(&message)?;
    repo.push(remote)?;

    Ok(message)
}

/// Emits a workflow output value.
///
/// Appends `name=value` to the file named by `GITHUB_OUTPUT` when set;
/// otherwise prints the same line to stdout.
pub fn emit_output(source: &dyn InputSource, name: &str, value: &str) -> Result<()> {
    match github_var(source, "output") {
        Some(path) => {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            writeln!(file, "{}={}", name, value)?;
        }
        None => println!("{}={}", name, value),
    }
    Ok(())
}
