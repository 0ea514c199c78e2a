// crates/list_mlta_sources/src/lib.rs

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};

use collect_sidecar_sources::{absolutize, collect_sidecar_sources};
use dump_debug_sources::dump_compiled_sources;
use format_sidecar_list::format_sidecar_list;

/// Runtime configuration composed from the CLI, constructed once at startup
/// and passed by value into the pipeline.
#[derive(Clone, Debug)]
pub struct ListConfig {
    /// Path to the executable whose debug info is inspected.
    pub executable_path: String,
    /// Root directory used as a prefix filter; with no root, no source path
    /// can qualify and the output is empty.
    pub root_dir: Option<String>,
    /// Join entries with a backslash continuation instead of plain newlines.
    pub shell_format: bool,
    /// Write the result to this file instead of stdout.
    pub output_file: Option<String>,
    /// Fail if any qualifying source lacks its sidecar file.
    pub check: bool,
}

/// Runs the full pipeline: dump the executable's source listing, filter it
/// down to sources under the root with existing sidecar files, and render
/// the sidecar file names as output text.
///
/// # Errors
///
/// Propagates `DumpSourcesError` from the dump stage and, in check mode,
/// `MissingSidecarError` from the collect stage (both preserved in the
/// error chain for downcasting).
pub fn list_sidecar_files(config: &ListConfig) -> Result<String> {
    let lines = dump_compiled_sources(Path::new(&config.executable_path)).with_context(|| {
        format!(
            "failed to dump debug sources from {}",
            config.executable_path
        )
    })?;

    let sources = match &config.root_dir {
        Some(root_dir) => {
            let root_dir = absolutize(Path::new(root_dir))
                .context("failed to resolve the root directory")?
                .to_string_lossy()
                .into_owned();
            collect_sidecar_sources(&root_dir, &lines, config.check)?
        }
        None => BTreeSet::new(),
    };

    Ok(format_sidecar_list(&sources, config.shell_format))
}
