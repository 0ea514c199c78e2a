// crates/collect_sidecar_sources/src/lib.rs

use std::collections::BTreeSet;
use std::env;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Filename suffix that links a source file to its sidecar analysis file.
pub const SIDECAR_SUFFIX: &str = ".mlta.ll";

/// A qualifying source path whose sidecar file is absent (check mode only).
#[derive(Debug, Error)]
#[error("{sidecar} not found")]
pub struct MissingSidecarError {
    /// Path of the sidecar file that was expected to exist.
    pub sidecar: String,
}

/// Returns the sidecar file path for a source path.
pub fn sidecar_path(source: &str) -> String {
    format!("{}{}", source, SIDECAR_SUFFIX)
}

/// Resolves `path` to an absolute, lexically normalized path.
///
/// Relative paths are joined onto the current directory; `.` components are
/// dropped and `..` components fold onto their parent. The path is not
/// required to exist and symlinks are not resolved.
///
/// # Errors
///
/// Returns an error only if the current directory cannot be determined.
pub fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}

/// Filters the dump tool's source listing down to the set of source paths
/// that lie under `root_dir`, are not header files, and have an existing
/// sidecar file on disk.
///
/// # Arguments
///
/// * `root_dir` - The absolute root path used as a string prefix filter.
/// * `lines` - Source path lines as printed by the dump tool.
/// * `check` - When true, a qualifying source without a sidecar is an error.
///
/// # Returns
///
/// The deduplicated set of surviving source paths (sidecar suffix not yet
/// appended). With `check` unset, sources lacking a sidecar are silently
/// dropped.
///
/// # Errors
///
/// With `check` set, returns `MissingSidecarError` for the first qualifying
/// source whose sidecar file does not exist. No partial result is returned.
pub fn collect_sidecar_sources(
    root_dir: &str,
    lines: &[String],
    check: bool,
) -> Result<BTreeSet<String>, MissingSidecarError> {
    let mut sources = BTreeSet::new();
    for line in lines {
        if !line.starts_with(root_dir) || line.ends_with(".h") {
            continue;
        }
        let sidecar = sidecar_path(line);
        if Path::new(&sidecar).exists() {
            sources.insert(line.clone());
        } else if check {
            return Err(MissingSidecarError { sidecar });
        }
    }
    Ok(sources)
}
