//! Working directory resolution.

use std::path::{Path, PathBuf};

use crate::error::{DiagError, Result};

/// Resolve the process's current directory as an absolute path.
///
/// When `directory` is given the process first changes into it, the way
/// `git -C` does. Fails if the current directory no longer exists or the
/// change is refused.
pub fn resolve_working_dir(directory: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = directory {
        std::env::set_current_dir(dir).map_err(|source| DiagError::ChangeDirectory {
            path: dir.to_path_buf(),
            source,
        })?;
        tracing::debug!("Changed directory to {}", dir.display());
    }

    std::env::current_dir().map_err(|source| DiagError::WorkingDirectory { source })
}
