//! Git operations abstraction layer
//!
//! A trait-based abstraction over the git operations the orchestrator needs:
//! configuring the committing identity, staging the manifest, committing, and
//! pushing. Two implementations are provided:
//!
//! - [repository::Git2Repository]: real implementation using the `git2` crate
//! - [mock::MockRepository]: call-recording implementation for testing
//!
//! Code should depend on the [Repository] trait rather than a concrete
//! implementation.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use std::path::Path;

/// Common git operation trait for abstraction
///
/// All implementors must be `Send + Sync`. Methods return
/// [crate::error::Result<T>]; implementations map underlying failures (like
/// `git2::Error`) to [crate::error::BumpError] variants.
pub trait Repository: Send + Sync {
    /// Set the committing identity in the repository's local configuration.
    fn set_author(&self, name: &str, email: &str) -> Result<()>;

    /// Stage a single file for the next commit.
    ///
    /// # Arguments
    /// * `path` - File path, absolute or relative to the working directory
    fn stage_path(&self, path: &Path) -> Result<()>;

    /// Create a commit of the staged changes on the current branch.
    fn commit(&self, message: &str) -> Result<()>;

    /// Push the current branch to the named remote.
    fn push(&self, remote: &str) -> Result<()>;
}
