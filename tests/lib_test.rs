//! Library integration tests.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use workdir_diag::diagnostics::{
    probe_artifacts, probe_permissions, render_human, DiagnosticOptions, Diagnostician,
    LibraryStatus, DEFAULT_ARTIFACTS,
};
use workdir_diag::python::FakeRuntime;
use workdir_diag::ui::{MockUI, StatusKind};
use workdir_diag::DiagError;

#[test]
fn error_types_are_public() {
    let err = DiagError::ImportFailed {
        module: "numpy".into(),
        message: "No module named 'numpy'".into(),
    };
    assert!(err.to_string().contains("numpy"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> workdir_diag::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use workdir_diag::cli::Cli;

    let cli = Cli::parse_from(["workdir-diag", "--json"]);
    assert!(cli.json);
}

#[test]
fn fully_provisioned_directory_passes_every_probe() {
    let temp = TempDir::new().unwrap();
    for dir in ["models", ".venv", "build"] {
        fs::create_dir(temp.path().join(dir)).unwrap();
    }
    fs::write(temp.path().join("CMakeLists.txt"), "").unwrap();

    let perms = probe_permissions(temp.path()).unwrap();
    assert!(perms.readable && perms.writable && perms.executable);

    let expected: Vec<String> = DEFAULT_ARTIFACTS.iter().map(|s| s.to_string()).collect();
    let artifacts = probe_artifacts(temp.path(), &expected);
    assert!(artifacts.iter().all(|a| a.exists));
}

#[test]
fn reported_existence_matches_filesystem_for_each_subset() {
    let expected: Vec<String> = DEFAULT_ARTIFACTS.iter().map(|s| s.to_string()).collect();

    for mask in 0u8..16 {
        let temp = TempDir::new().unwrap();
        for (bit, path) in DEFAULT_ARTIFACTS.iter().enumerate() {
            if mask & (1 << bit) == 0 {
                continue;
            }
            let target = temp.path().join(path);
            if path.ends_with('/') {
                fs::create_dir(&target).unwrap();
            } else {
                fs::write(&target, "").unwrap();
            }
        }

        for status in probe_artifacts(temp.path(), &expected) {
            let on_disk = Path::new(&temp.path().join(&status.path)).exists();
            assert_eq!(status.exists, on_disk, "mask {:04b}: {}", mask, status.path);
        }
    }
}

#[test]
fn library_absence_never_flips_result() {
    let options = DiagnosticOptions::default();
    for runtime in [FakeRuntime::new(), FakeRuntime::unavailable()] {
        let report = Diagnostician::new(&runtime, &options).run();
        assert!(!report.numeric_library.as_ref().unwrap().is_available());
        assert!(report.succeeded());
    }
}

#[test]
fn installed_library_version_is_printed_verbatim() {
    let runtime = FakeRuntime::new().with_module("numpy", "1.26.4+local");
    let options = DiagnosticOptions::default();
    let report = Diagnostician::new(&runtime, &options).run();

    assert_eq!(
        report.numeric_library,
        Some(LibraryStatus::Available {
            module: "numpy".to_string(),
            version: "1.26.4+local".to_string(),
        })
    );

    let mut ui = MockUI::new();
    render_human(&mut ui, &report, &options);
    assert!(ui.has_status(StatusKind::Success, "NumPy available: version 1.26.4+local"));
}
