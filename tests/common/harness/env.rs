//! Isolated test environment with temp directory.

use super::AlemCommand;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary database location.
///
/// Creates a temp directory that is automatically cleaned up on drop. The
/// database path sits one level down so tests also exercise parent
/// directory creation on first open.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the database file
    db_path: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("data").join("smartnotes.db");
        Self {
            _temp_dir: temp_dir,
            db_path,
        }
    }

    /// Returns the path to the database file.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Creates a command for this environment with seeding disabled,
    /// for tests that want to start from a truly empty store.
    pub fn cmd(&self) -> AlemCommand {
        AlemCommand::new().db(&self.db_path).no_seed()
    }

    /// Creates a command for this environment with default seeding enabled.
    pub fn cmd_seeded(&self) -> AlemCommand {
        AlemCommand::new().db(&self.db_path)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
