//! Storage location resolution.

use std::path::PathBuf;

/// Application directory name under the platform data directory.
pub(crate) const APP_DIR: &str = "alem";

/// Database file name.
pub(crate) const DB_FILE: &str = "smartnotes.db";

/// Returns the preferred database path.
///
/// Platform-local application data directory (`~/.local/share` or
/// `$XDG_DATA_HOME` on Linux, `Application Support` on macOS,
/// `AppData\Local` on Windows) joined with `alem/smartnotes.db`. When no
/// platform directory is known, resolves relative to the current directory.
pub fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(DB_FILE)
}

/// Returns the in-place fallback path used when the preferred data
/// directory cannot be created: the database file in the current directory.
pub fn fallback_db_path() -> PathBuf {
    PathBuf::from(DB_FILE)
}
