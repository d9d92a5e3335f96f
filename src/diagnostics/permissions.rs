//! Directory permission probe.
//!
//! On unix this asks the kernel through `access(2)`, which accounts for
//! ownership, ACLs and read-only mounts the way a real open would. A denial
//! is an answer (`false`); any other errno means the probe itself failed.

use serde::Serialize;
use std::path::Path;

use crate::error::{DiagError, Result};

/// Read, write and execute access to a directory for this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DirPermissions {
    pub readable: bool,
    pub writable: bool,
    pub executable: bool,
}

impl DirPermissions {
    /// Labeled flags in display order.
    pub fn flags(&self) -> [(&'static str, bool); 3] {
        [
            ("Readable", self.readable),
            ("Writable", self.writable),
            ("Executable", self.executable),
        ]
    }
}

/// Test read, write and execute access to `path`, each independently.
pub fn probe_permissions(path: &Path) -> Result<DirPermissions> {
    Ok(DirPermissions {
        readable: check_access(path, Access::Read)?,
        writable: check_access(path, Access::Write)?,
        executable: check_access(path, Access::Execute)?,
    })
}

#[derive(Debug, Clone, Copy)]
enum Access {
    Read,
    Write,
    Execute,
}

#[cfg(unix)]
fn check_access(path: &Path, access: Access) -> Result<bool> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let probe_error = |source: std::io::Error| DiagError::PermissionProbe {
        path: path.to_path_buf(),
        source,
    };

    let c_path = CString::new(path.as_os_str().as_bytes()).map_err(|e| probe_error(e.into()))?;
    let mode = match access {
        Access::Read => libc::R_OK,
        Access::Write => libc::W_OK,
        Access::Execute => libc::X_OK,
    };

    // SAFETY: c_path is a valid NUL-terminated string that outlives the call.
    if unsafe { libc::access(c_path.as_ptr(), mode) } == 0 {
        return Ok(true);
    }

    let err = std::io::Error::last_os_error();
    match err.raw_os_error() {
        Some(libc::EACCES) | Some(libc::EPERM) | Some(libc::EROFS) | Some(libc::ETXTBSY) => {
            Ok(false)
        }
        _ => Err(probe_error(err)),
    }
}

#[cfg(not(unix))]
fn check_access(path: &Path, access: Access) -> Result<bool> {
    let metadata = std::fs::metadata(path).map_err(|source| DiagError::PermissionProbe {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(match access {
        Access::Read => true,
        Access::Write => !metadata.permissions().readonly(),
        Access::Execute => metadata.is_dir(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn fresh_temp_dir_is_fully_accessible() {
        let temp = TempDir::new().unwrap();
        let perms = probe_permissions(temp.path()).unwrap();
        assert_eq!(
            perms,
            DirPermissions {
                readable: true,
                writable: true,
                executable: true,
            }
        );
    }

    #[test]
    fn missing_path_is_probe_failure() {
        let err = probe_permissions(Path::new("/nonexistent/workdir-diag")).unwrap_err();
        assert!(matches!(err, DiagError::PermissionProbe { .. }));
    }

    #[test]
    fn flags_are_in_display_order() {
        let perms = DirPermissions {
            readable: true,
            writable: false,
            executable: true,
        };
        assert_eq!(
            perms.flags(),
            [("Readable", true), ("Writable", false), ("Executable", true)]
        );
    }

    #[cfg(unix)]
    #[test]
    fn read_only_dir_reports_not_writable() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        // root bypasses write checks
        if unsafe { libc::geteuid() } == 0 {
            return;
        }

        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("locked");
        fs::create_dir(&dir).unwrap();
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o555)).unwrap();

        let perms = probe_permissions(&dir).unwrap();

        fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).unwrap();
        assert!(perms.readable);
        assert!(!perms.writable);
        assert!(perms.executable);
    }
}
