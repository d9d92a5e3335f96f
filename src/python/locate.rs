//! Python interpreter discovery.
//!
//! A native binary has no interpreter of its own, so the one to query is
//! chosen in order: an explicit path, the active virtual environment, then
//! `PATH`. Lookups walk `PATH` directly rather than shelling out to
//! `which`, whose behavior varies between systems.
//!
//! # Example
//!
//! ```no_run
//! use workdir_diag::python::locate_interpreter;
//!
//! let found = locate_interpreter(None);
//! println!("{} ({:?})", found.path.display(), found.source);
//! ```

use std::path::{Path, PathBuf};

/// Interpreter names tried on `PATH`, in order.
#[cfg(not(windows))]
const PYTHON_NAMES: &[&str] = &["python3", "python"];
#[cfg(windows)]
const PYTHON_NAMES: &[&str] = &["python.exe", "python3.exe"];

/// Where the interpreter path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpreterSource {
    /// `--python` flag or `WORKDIR_DIAG_PYTHON`.
    Explicit,
    /// The active virtual environment (`VIRTUAL_ENV`).
    VirtualEnv,
    /// First match on `PATH`.
    SystemPath,
    /// Nothing found; the bare default name is used and will likely fail to launch.
    Fallback,
}

/// An interpreter chosen for the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedInterpreter {
    /// Path (or bare name, for [`InterpreterSource::Fallback`]).
    pub path: PathBuf,
    /// How it was found.
    pub source: InterpreterSource,
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Path of the interpreter inside a virtual environment root.
pub fn venv_interpreter(venv_root: &Path) -> PathBuf {
    if cfg!(windows) {
        venv_root.join("Scripts").join("python.exe")
    } else {
        venv_root.join("bin").join("python")
    }
}

/// Make a relative path with a directory part absolute against the
/// current directory, so it survives a later `-C`. Bare names stay bare
/// and are looked up on `PATH` at spawn time.
fn anchor_relative(path: &Path) -> PathBuf {
    if path.is_relative() && path.components().count() > 1 {
        std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
    } else {
        path.to_path_buf()
    }
}

/// Locate the interpreter using the real process environment.
pub fn locate_interpreter(explicit: Option<&Path>) -> LocatedInterpreter {
    locate_interpreter_with_env(explicit, |key: &str| std::env::var(key))
}

/// Locate the interpreter with a custom env var lookup function.
///
/// This allows testing without modifying actual environment variables.
pub fn locate_interpreter_with_env<F>(explicit: Option<&Path>, env_fn: F) -> LocatedInterpreter
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    if let Some(path) = explicit {
        return LocatedInterpreter {
            path: anchor_relative(path),
            source: InterpreterSource::Explicit,
        };
    }

    if let Ok(venv) = env_fn("VIRTUAL_ENV") {
        let candidate = venv_interpreter(Path::new(&venv));
        if candidate.is_file() {
            return LocatedInterpreter {
                path: candidate,
                source: InterpreterSource::VirtualEnv,
            };
        }
        tracing::debug!("VIRTUAL_ENV={} has no interpreter, ignoring", venv);
    }

    let path_entries: Vec<PathBuf> = env_fn("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default();

    for name in PYTHON_NAMES {
        if let Some(found) = resolve_tool_path(name, &path_entries) {
            return LocatedInterpreter {
                path: found,
                source: InterpreterSource::SystemPath,
            };
        }
    }

    LocatedInterpreter {
        path: PathBuf::from(PYTHON_NAMES[0]),
        source: InterpreterSource::Fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::VarError;
    use std::fs;
    use tempfile::TempDir;

    /// Create a fake binary at a path (creates parent dirs as needed).
    fn create_fake_binary(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    fn no_env(_: &str) -> Result<String, VarError> {
        Err(VarError::NotPresent)
    }

    #[test]
    fn explicit_path_wins_even_if_missing() {
        let found = locate_interpreter_with_env(Some(Path::new("/opt/py/bin/python")), no_env);
        assert_eq!(found.path, PathBuf::from("/opt/py/bin/python"));
        assert_eq!(found.source, InterpreterSource::Explicit);
    }

    #[test]
    fn explicit_relative_path_is_anchored() {
        let found = locate_interpreter_with_env(Some(Path::new(".venv/bin/python")), no_env);
        assert!(found.path.is_absolute());
        assert!(found.path.ends_with(".venv/bin/python"));
    }

    #[test]
    fn explicit_bare_name_stays_bare() {
        let found = locate_interpreter_with_env(Some(Path::new("python3.12")), no_env);
        assert_eq!(found.path, PathBuf::from("python3.12"));
    }

    #[test]
    fn virtual_env_is_preferred_over_path() {
        let temp = TempDir::new().unwrap();
        let venv = temp.path().join("venv");
        let bin = temp.path().join("bin");
        create_fake_binary(&venv_interpreter(&venv));
        create_fake_binary(&bin.join(PYTHON_NAMES[0]));

        let venv_str = venv.to_string_lossy().to_string();
        let path_str = bin.to_string_lossy().to_string();
        let found = locate_interpreter_with_env(None, |key| match key {
            "VIRTUAL_ENV" => Ok(venv_str.clone()),
            "PATH" => Ok(path_str.clone()),
            _ => Err(VarError::NotPresent),
        });

        assert_eq!(found.path, venv_interpreter(&venv));
        assert_eq!(found.source, InterpreterSource::VirtualEnv);
    }

    #[test]
    fn empty_virtual_env_falls_through_to_path() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        create_fake_binary(&bin.join(PYTHON_NAMES[0]));

        let venv_str = temp.path().join("no-venv").to_string_lossy().to_string();
        let path_str = bin.to_string_lossy().to_string();
        let found = locate_interpreter_with_env(None, |key| match key {
            "VIRTUAL_ENV" => Ok(venv_str.clone()),
            "PATH" => Ok(path_str.clone()),
            _ => Err(VarError::NotPresent),
        });

        assert_eq!(found.path, bin.join(PYTHON_NAMES[0]));
        assert_eq!(found.source, InterpreterSource::SystemPath);
    }

    #[test]
    fn path_prefers_first_name_in_order() {
        let temp = TempDir::new().unwrap();
        let first = temp.path().join("first");
        let second = temp.path().join("second");
        create_fake_binary(&first.join(PYTHON_NAMES[1]));
        create_fake_binary(&second.join(PYTHON_NAMES[0]));

        let joined = std::env::join_paths([&first, &second]).unwrap();
        let path_str = joined.to_string_lossy().to_string();
        let found = locate_interpreter_with_env(None, |key| match key {
            "PATH" => Ok(path_str.clone()),
            _ => Err(VarError::NotPresent),
        });

        assert_eq!(found.path, second.join(PYTHON_NAMES[0]));
    }

    #[test]
    fn nothing_found_falls_back_to_bare_name() {
        let found = locate_interpreter_with_env(None, no_env);
        assert_eq!(found.path, PathBuf::from(PYTHON_NAMES[0]));
        assert_eq!(found.source, InterpreterSource::Fallback);
    }

    #[cfg(unix)]
    #[test]
    fn resolve_tool_path_skips_non_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");
        fs::create_dir_all(&dir_a).unwrap();
        fs::write(dir_a.join("python3"), "not executable").unwrap();
        fs::set_permissions(dir_a.join("python3"), fs::Permissions::from_mode(0o644)).unwrap();
        create_fake_binary(&dir_b.join("python3"));

        let result = resolve_tool_path("python3", &[dir_a, dir_b.clone()]);
        assert_eq!(result, Some(dir_b.join("python3")));
    }

    #[cfg(unix)]
    #[test]
    fn is_executable_returns_false_for_nonexistent_file() {
        assert!(!is_executable(Path::new("/nonexistent/path/to/file")));
    }
}
