//! Queries against an external Python interpreter.
//!
//! The checks that need an interpreter talk to it through [`PythonRuntime`],
//! so tests can substitute a fake. [`ProcessRuntime`] is the real
//! implementation: it runs `<python> -c <script>` and reads stdout.
//!
//! # Modules
//!
//! - [`locate`] - Choosing which interpreter to run
//! - [`fake`] - Canned runtime for tests

pub mod fake;
pub mod locate;

pub use fake::FakeRuntime;
pub use locate::{
    locate_interpreter, locate_interpreter_with_env, InterpreterSource, LocatedInterpreter,
};

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use crate::error::{DiagError, Result};

/// Prints `sys.path` as a JSON array of strings.
///
/// Undecodable bytes in an entry come out as `\xNN` text instead of lone
/// surrogates, which are not valid JSON strings.
const SEARCH_PATH_SCRIPT: &str = "import json, os, sys; \
print(json.dumps([os.fsencode(p).decode('utf-8', 'backslashreplace') for p in sys.path]))";

/// Access to a Python interpreter's module system.
pub trait PythonRuntime {
    /// The interpreter being queried, for display.
    fn interpreter(&self) -> &Path;

    /// The interpreter's full module search path, in order.
    fn search_path(&self) -> Result<Vec<String>>;

    /// Import `module` and return its self-reported `__version__`.
    ///
    /// Fails with [`DiagError::ImportFailed`] when the import raises.
    fn module_version(&self, module: &str) -> Result<String>;
}

/// Runs the interpreter as a child process for every query.
#[derive(Debug, Clone)]
pub struct ProcessRuntime {
    interpreter: PathBuf,
}

impl ProcessRuntime {
    /// Create a runtime for the given interpreter path.
    pub fn new(interpreter: impl Into<PathBuf>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }

    fn run(&self, script: &str) -> Result<Output> {
        tracing::debug!("Running {} -c {:?}", self.interpreter.display(), script);

        let output = Command::new(&self.interpreter)
            .arg("-c")
            .arg(script)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| DiagError::InterpreterUnavailable {
                interpreter: self.interpreter.clone(),
                message: e.to_string(),
            })?;

        tracing::debug!("Interpreter exited with {}", output.status);
        Ok(output)
    }
}

impl PythonRuntime for ProcessRuntime {
    fn interpreter(&self) -> &Path {
        &self.interpreter
    }

    fn search_path(&self) -> Result<Vec<String>> {
        let output = self.run(SEARCH_PATH_SCRIPT)?;
        if !output.status.success() {
            return Err(DiagError::InterpreterOutput {
                interpreter: self.interpreter.clone(),
                message: last_error_line(&output.stderr)
                    .unwrap_or_else(|| format!("exited with {}", output.status)),
            });
        }

        parse_search_path(&output.stdout).map_err(|e| DiagError::InterpreterOutput {
            interpreter: self.interpreter.clone(),
            message: e.to_string(),
        })
    }

    fn module_version(&self, module: &str) -> Result<String> {
        if !is_module_name(module) {
            return Err(DiagError::ImportFailed {
                module: module.to_string(),
                message: format!("invalid module name '{}'", module),
            });
        }

        let script = format!("import {m}; print({m}.__version__)", m = module);
        let output = self.run(&script)?;
        if !output.status.success() {
            let message = last_error_line(&output.stderr)
                .map(|line| exception_message(&line).to_string())
                .unwrap_or_else(|| format!("interpreter exited with {}", output.status));
            return Err(DiagError::ImportFailed {
                module: module.to_string(),
                message,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Parse the JSON array printed by [`SEARCH_PATH_SCRIPT`].
///
/// Tolerates interpreters that print plain `json.dumps(sys.path)`: a lone
/// surrogate escape from an undecodable byte is rendered as `\xNN`, any
/// other lone surrogate as U+FFFD.
pub fn parse_search_path(stdout: &[u8]) -> serde_json::Result<Vec<String>> {
    let text = String::from_utf8_lossy(stdout);
    serde_json::from_str(&replace_lone_surrogates(&text))
}

fn replace_lone_surrogates(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut rest = json;

    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let escape = &rest[pos..];
        match unicode_escape(escape) {
            Some(0xD800..=0xDBFF)
                if matches!(unicode_escape(&escape[6..]), Some(0xDC00..=0xDFFF)) =>
            {
                out.push_str(&escape[..12]);
                rest = &escape[12..];
            }
            Some(unit @ 0xDC80..=0xDCFF) => {
                out.push_str(&format!("\\\\x{:02x}", unit & 0xFF));
                rest = &escape[6..];
            }
            Some(0xD800..=0xDFFF) => {
                out.push_str("\\ufffd");
                rest = &escape[6..];
            }
            _ => {
                let len = escape[1..].chars().next().map_or(1, |c| 1 + c.len_utf8());
                out.push_str(&escape[..len]);
                rest = &escape[len..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Code unit of a `\uXXXX` escape at the start of `s`.
fn unicode_escape(s: &str) -> Option<u32> {
    let hex = s.strip_prefix("\\u")?.get(..4)?;
    u32::from_str_radix(hex, 16).ok()
}

/// Last non-empty line of a child's stderr, which is where a traceback
/// puts the exception.
pub fn last_error_line(stderr: &[u8]) -> Option<String> {
    String::from_utf8_lossy(stderr)
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

/// Strip the exception type from a traceback's final line.
///
/// `ModuleNotFoundError: No module named 'numpy'` becomes
/// `No module named 'numpy'`. Lines without a type prefix are returned as-is.
pub fn exception_message(line: &str) -> &str {
    match line.split_once(": ") {
        Some((head, rest))
            if (head.ends_with("Error") || head.ends_with("Exception"))
                && head
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.') =>
        {
            rest
        }
        _ => line,
    }
}

/// Whether `name` is a dotted Python identifier, safe to splice into `-c`.
pub fn is_module_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|part| {
            let mut chars = part.chars();
            matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_')
                && chars.all(|c| c.is_alphanumeric() || c == '_')
        })
}
