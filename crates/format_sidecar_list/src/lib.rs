// crates/format_sidecar_list/src/lib.rs

use std::collections::BTreeSet;

use collect_sidecar_sources::sidecar_path;

/// Suffix appended after each entry in shell format; the final occurrence is
/// stripped so the last line carries no continuation.
const SHELL_CONTINUATION: &str = " \\ \n";

/// Renders the collected source paths as a list of sidecar file names.
///
/// In newline format every entry, including the last, is followed by `\n`.
/// In shell format entries are joined with a backslash continuation and the
/// last entry ends the output directly. An empty set renders as the empty
/// string in both formats.
pub fn format_sidecar_list(sources: &BTreeSet<String>, shell_format: bool) -> String {
    let mut output = String::new();
    for source in sources {
        output.push_str(&sidecar_path(source));
        if shell_format {
            output.push_str(SHELL_CONTINUATION);
        } else {
            output.push('\n');
        }
    }
    if shell_format {
        output.truncate(output.len().saturating_sub(SHELL_CONTINUATION.len()));
    }
    output
}
