//! Interpreter search path listing.

use serde::Serialize;

use crate::error::Result;
use crate::python::PythonRuntime;

/// Number of search path entries shown by default.
pub const DEFAULT_SEARCH_PATH_LIMIT: usize = 3;

/// One displayed search path entry with its zero-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchPathEntry {
    pub index: usize,
    pub path: String,
}

/// Leading entries of the interpreter's search path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchPathListing {
    /// How many entries were asked for.
    pub limit: usize,
    /// How many entries the interpreter reported.
    pub total: usize,
    /// The first `min(limit, total)` entries.
    pub entries: Vec<SearchPathEntry>,
}

impl SearchPathListing {
    /// Keep the first `limit` of `paths`, indexed from 0.
    pub fn from_paths(paths: Vec<String>, limit: usize) -> Self {
        let total = paths.len();
        let entries = paths
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(index, path)| SearchPathEntry { index, path })
            .collect();

        Self {
            limit,
            total,
            entries,
        }
    }
}

/// Search path step outcome. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchPathOutcome {
    /// The interpreter answered.
    Listed(SearchPathListing),
    /// The interpreter could not be queried; nothing is listed.
    Unavailable { reason: String },
}

/// Ask the runtime for its search path and keep the first `limit` entries.
pub fn list_search_path(runtime: &dyn PythonRuntime, limit: usize) -> Result<SearchPathListing> {
    let paths = runtime.search_path()?;
    tracing::debug!("Interpreter reported {} search path entries", paths.len());
    Ok(SearchPathListing::from_paths(paths, limit))
}
