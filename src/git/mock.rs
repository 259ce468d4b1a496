use std::path::Path;
use std::sync::Mutex;

use crate::error::Result;
use crate::git::Repository;

/// Call-recording mock repository for testing without actual git operations
#[derive(Default)]
pub struct MockRepository {
    calls: Mutex<Vec<String>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls, in order, formatted as `op(args)`
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Repository for MockRepository {
    fn set_author(&self, name: &str, email: &str) -> Result<()> {
        self.record(format!("set_author({}, {})", name, email));
        Ok(())
    }

    fn stage_path(&self, path: &Path) -> Result<()> {
        self.record(format!("stage_path({})", path.display()));
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.record(format!("commit({})", message));
        Ok(())
    }

    fn push(&self, remote: &str) -> Result<()> {
        self.record(format!("push({})", remote));
        Ok(())
    }
}
