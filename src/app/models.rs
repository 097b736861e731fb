use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// Represents the final configuration after merging the config file and CLI args.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub executable: String,
}

/// Which of the two persisted lists an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Include,
    Ignore,
}

impl ListKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ListKind::Include => "include",
            ListKind::Ignore => "ignore",
        }
    }
}

/// The persisted include/ignore lists for one workspace.
///
/// Entries are workspace-relative paths with `/` separators. A path may
/// appear in both lists; the packing tool decides which side wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState {
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl ListState {
    pub fn list(&self, kind: ListKind) -> &[String] {
        match kind {
            ListKind::Include => &self.include,
            ListKind::Ignore => &self.ignore,
        }
    }

    pub fn list_mut(&mut self, kind: ListKind) -> &mut Vec<String> {
        match kind {
            ListKind::Include => &mut self.include,
            ListKind::Ignore => &mut self.ignore,
        }
    }

    /// Returns the same membership with each list deduplicated and sorted
    /// in ascending lexical order.
    pub fn canonicalized(&self) -> ListState {
        fn uniq_sorted(items: &[String]) -> Vec<String> {
            items
                .iter()
                .cloned()
                .collect::<BTreeSet<String>>()
                .into_iter()
                .collect()
        }

        ListState {
            include: uniq_sorted(&self.include),
            ignore: uniq_sorted(&self.ignore),
        }
    }
}

/// Outcome of a batch add: how many entries were new members and how many
/// were skipped because they could not be mapped into the workspace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddReport {
    pub added: usize,
    pub skipped: usize,
}

/// Description of a process launch handed to the host. The core never
/// executes it and has no opinion on the process afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub executable: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

/// Stable identity for one workspace root, usable as a file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkspaceId(String);

impl WorkspaceId {
    pub fn from_root(root: &Path) -> Self {
        let mut hasher = DefaultHasher::new();
        root.hash(&mut hasher);
        let digest = hasher.finish();

        let stem = root
            .file_name()
            .map(|name| {
                name.to_string_lossy()
                    .chars()
                    .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
                    .collect::<String>()
            })
            .unwrap_or_else(|| "root".to_string());

        WorkspaceId(format!("{}-{:016x}", stem, digest))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
