//! Contextual hint text for failed or missing checks.
//!
//! Hints suggest the next action for the item shown directly above them.

/// Hint for a missing expected project artifact.
pub fn missing_artifact(path: &str) -> Option<&'static str> {
    match path {
        "models/" => Some("Create it with `mkdir models` or run from the project root."),
        ".venv/" => Some("Create it with `python3 -m venv .venv`."),
        "build/" => Some("Build with `mkdir build && cd build && cmake .. && make`."),
        "CMakeLists.txt" => Some("Run from the project root, or pass `-C <project-dir>`."),
        _ => None,
    }
}

/// Hint after the interpreter could not be started.
pub fn interpreter_unavailable() -> &'static str {
    "Pass `--python <PATH>` or set WORKDIR_DIAG_PYTHON."
}

/// Hint after a module failed to import.
pub fn missing_module(interpreter: &str, module: &str) -> String {
    format!("Install it with `{} -m pip install {}`.", interpreter, module)
}

/// Hint after a fatal working-directory or permission failure.
pub fn after_fatal_failure() -> &'static str {
    "Change into an existing, accessible directory and run again."
}
