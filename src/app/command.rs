use crate::app::models::{ListState, RunRequest, RuntimeConfig};
use std::path::Path;
use thiserror::Error;

/// Preconditions the execution form refuses to build without.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("include list is empty; nothing to pack")]
    EmptyInclude,
    #[error("no workspace root available")]
    NoWorkspace,
}

/// Builds the execution form: `--include a,b` always, `--ignore c,d` only
/// when the ignore list is non-empty. Lists are joined in canonical sorted
/// order. An empty include list is refused rather than handed to the tool
/// as a vacuous invocation.
pub fn build_run(
    state: &ListState,
    config: &RuntimeConfig,
    root: Option<&Path>,
) -> Result<RunRequest, BuildError> {
    let canonical = state.canonicalized();

    if canonical.include.is_empty() {
        return Err(BuildError::EmptyInclude);
    }
    let root = root.ok_or(BuildError::NoWorkspace)?;

    let mut args = vec!["--include".to_string(), canonical.include.join(",")];
    if !canonical.ignore.is_empty() {
        args.push("--ignore".to_string());
        args.push(canonical.ignore.join(","));
    }

    Ok(RunRequest {
        executable: config.executable.clone(),
        args,
        working_dir: root.to_path_buf(),
    })
}

/// A copy-pasteable command line. `vacuous` marks a result that omits
/// `--include`, which the packing tool would treat as packing nothing
/// meaningful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedCommand {
    pub command_line: String,
    pub vacuous: bool,
}

/// Builds the export form. Unlike the execution form it never refuses:
/// each flag is independently dropped when its list is empty, down to a
/// bare executable name when both are.
pub fn export_command(state: &ListState, config: &RuntimeConfig) -> ExportedCommand {
    let canonical = state.canonicalized();

    let mut parts = vec![config.executable.clone()];
    if !canonical.include.is_empty() {
        parts.push(format!("--include \"{}\"", canonical.include.join(",")));
    }
    if !canonical.ignore.is_empty() {
        parts.push(format!("--ignore \"{}\"", canonical.ignore.join(",")));
    }

    ExportedCommand {
        command_line: parts.join(" "),
        vacuous: canonical.include.is_empty(),
    }
}
