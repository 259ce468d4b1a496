use git2::Repository as Git2Repo;
use std::path::Path;

use crate::error::Result;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    fn workdir_relative<'a>(&self, path: &'a Path) -> &'a Path {
        // The index wants paths relative to the working directory.
        match self.repo.workdir() {
            Some(workdir) => path.strip_prefix(workdir).unwrap_or(path),
            None => path,
        }
    }
}

impl super::Repository for Git2Repository {
    fn set_author(&self, name: &str, email: &str) -> Result<()> {
        let mut config = self.repo.config()?;
        config.set_str("user.name", name)?;
        config.set_str("user.email", email)?;

        Ok(())
    }

    fn stage_path(&self, path: &Path) -> Result<()> {
        let mut index = self.repo.index()?;
        index.add_path(self.workdir_relative(path))?;
        index.write()?;

        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        let mut index = self.repo.index()?;
        let tree_oid = index.write_tree()?;
        let tree = self.repo.find_tree(tree_oid)?;

        let signature = self.repo.signature()?;

        let head = self.repo.head()?;
        let parent = head.peel_to_commit()?;

        self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &[&parent],
        )?;

        Ok(())
    }

    fn push(&self, remote: &str) -> Result<()> {
        let head = self.repo.head()?;
        let refspec = head
            .name()
            .map(|name| format!("{}:{}", name, name))
            .unwrap_or_else(|| "HEAD".to_string());

        let mut remote = self.repo.find_remote(remote)?;
        remote.push(&[refspec.as_str()], None)?;

        Ok(())
    }
}

// SAFETY: Git2Repository wraps git2::Repository which is Send.
// git2 is thread-safe for these operations via libgit2's thread-safe design,
// and each invocation of this tool uses the repository from a single thread.
unsafe impl Sync for Git2Repository {}
