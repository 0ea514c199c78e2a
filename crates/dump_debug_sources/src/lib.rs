// crates/dump_debug_sources/src/lib.rs

use std::env;
use std::path::Path;
use std::process::Command;
use thiserror::Error;

/// Default command used to read the compilation source listing out of an
/// executable's debug info. Override it with the `LLVM_DWARFDUMP`
/// environment variable.
pub const DEFAULT_DWARFDUMP: &str = "llvm-dwarfdump";

/// Errors from invoking the debug-info dump tool.
#[derive(Debug, Error)]
pub enum DumpSourcesError {
    /// The tool could not be spawned at all (not installed, not on PATH).
    #[error("failed to launch '{tool}': {source}")]
    Launch {
        tool: String,
        source: std::io::Error,
    },
    /// The tool ran but exited with a failure status.
    #[error("'{tool}' exited with {status}: {stderr}")]
    Failed {
        tool: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
    /// The tool printed something that is not UTF-8 text.
    #[error("'{tool}' produced non-UTF-8 output")]
    NonUtf8 {
        tool: String,
        source: std::string::FromUtf8Error,
    },
}

/// Runs the debug-info dump tool against `executable` and returns the source
/// paths recorded in its debug info, one per line of the tool's output.
///
/// The tool defaults to `llvm-dwarfdump` and can be overridden via the
/// `LLVM_DWARFDUMP` environment variable.
///
/// # Errors
///
/// Returns a `DumpSourcesError` if the tool cannot be launched, exits with a
/// failure status, or prints non-UTF-8 output. No retry is attempted.
pub fn dump_compiled_sources(executable: &Path) -> Result<Vec<String>, DumpSourcesError> {
    let tool = env::var("LLVM_DWARFDUMP").unwrap_or_else(|_| DEFAULT_DWARFDUMP.to_string());
    dump_compiled_sources_with_tool(&tool, executable)
}

/// Same as `dump_compiled_sources`, but with the dump command given
/// explicitly instead of being read from the environment.
pub fn dump_compiled_sources_with_tool(
    tool: &str,
    executable: &Path,
) -> Result<Vec<String>, DumpSourcesError> {
    let output = Command::new(tool)
        .arg("--show-sources")
        .arg(executable)
        .output()
        .map_err(|err| DumpSourcesError::Launch {
            tool: tool.to_string(),
            source: err,
        })?;

    if !output.status.success() {
        return Err(DumpSourcesError::Failed {
            tool: tool.to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let stdout = String::from_utf8(output.stdout).map_err(|err| DumpSourcesError::NonUtf8 {
        tool: tool.to_string(),
        source: err,
    })?;

    Ok(stdout.lines().map(String::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// On Unix systems, creates a dummy dump tool (a shell script) in the
    /// given temporary directory. The script simply runs the provided body.
    #[cfg(unix)]
    fn create_dummy_tool(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{}", body)).unwrap();
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    #[test]
    #[cfg(unix)]
    fn test_returns_one_line_per_source() {
        let dir = TempDir::new().unwrap();
        let tool = create_dummy_tool(
            &dir,
            "fake-dwarfdump",
            "echo /proj/a.c\necho /proj/b.c",
        );

        let lines =
            dump_compiled_sources_with_tool(tool.to_str().unwrap(), Path::new("/bin/whatever"))
                .expect("dump should succeed");
        assert_eq!(lines, vec!["/proj/a.c".to_string(), "/proj/b.c".to_string()]);
    }

    #[test]
    #[cfg(unix)]
    fn test_empty_output_yields_no_lines() {
        let dir = TempDir::new().unwrap();
        let tool = create_dummy_tool(&dir, "fake-dwarfdump", "true");

        let lines =
            dump_compiled_sources_with_tool(tool.to_str().unwrap(), Path::new("/bin/whatever"))
                .expect("dump should succeed");
        assert!(lines.is_empty());
    }

    #[test]
    fn test_missing_tool_is_a_launch_error() {
        let result = dump_compiled_sources_with_tool(
            "/nonexistent/definitely-not-a-dwarfdump",
            Path::new("/bin/whatever"),
        );
        match result {
            Err(DumpSourcesError::Launch { .. }) => {}
            other => panic!("expected Launch error, got {:?}", other),
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_nonzero_exit_is_a_failed_error() {
        let dir = TempDir::new().unwrap();
        let tool = create_dummy_tool(&dir, "fake-dwarfdump", "echo boom >&2\nexit 3");

        let result =
            dump_compiled_sources_with_tool(tool.to_str().unwrap(), Path::new("/bin/whatever"));
        match result {
            Err(DumpSourcesError::Failed { stderr, .. }) => assert_eq!(stderr, "boom"),
            other => panic!("expected Failed error, got {:?}", other),
        }
    }
}
