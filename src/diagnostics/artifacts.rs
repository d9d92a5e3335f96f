//! Existence probes for expected project files.

use serde::Serialize;
use std::path::Path;

/// Paths a project checkout is expected to contain, in display order.
pub const DEFAULT_ARTIFACTS: &[&str] = &["models/", ".venv/", "build/", "CMakeLists.txt"];

/// Whether one expected path exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactStatus {
    pub path: String,
    pub exists: bool,
}

/// Probe each path relative to `base`, keeping the input order.
///
/// Existence only: type and permissions are not inspected, and anything
/// that cannot be stat'ed counts as absent. A trailing `/` only matches a
/// directory, as the OS resolves it.
pub fn probe_artifacts(base: &Path, paths: &[String]) -> Vec<ArtifactStatus> {
    paths
        .iter()
        .map(|path| ArtifactStatus {
            path: path.clone(),
            exists: base.join(path).exists(),
        })
        .collect()
}
